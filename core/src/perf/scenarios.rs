use crate::{records, sequence, series};
use anyhow::{Context, Result};

/// What a single scenario run reports back to the caller.
pub struct KernelRunOutcome {
    pub output_bytes: u64,
    pub lines: u64,
}

#[derive(Clone)]
pub struct PreparedKernelScenario {
    spec: &'static KernelScenario,
}

impl PreparedKernelScenario {
    pub fn key(&self) -> &'static str {
        self.spec.key
    }

    pub fn title(&self) -> &'static str {
        self.spec.title
    }

    pub fn bench_case_name(&self) -> String {
        format!("{}_kernel", self.spec.key)
    }

    /// Renders the scenario's workload into an in-memory sink and checks
    /// the expected-output contract before reporting the outcome.
    pub fn run(&self) -> Result<KernelRunOutcome> {
        let mut sink = Vec::new();
        match self.spec.workload {
            Workload::Sequence { repeats, terms } => {
                sink.extend_from_slice(sequence::render(repeats, terms).as_bytes());
            }
            Workload::Records { size } => {
                let mut roster = records::build_roster(size);
                records::transform(&mut roster);
                records::write_roster(&roster, &mut sink).context("render roster scenario")?;
            }
            Workload::Series { terms } => {
                sink.extend_from_slice(series::render_result(series::approximate(terms)).as_bytes());
                sink.push(b'\n');
            }
        }
        let outcome = KernelRunOutcome {
            output_bytes: sink.len() as u64,
            lines: sink.iter().filter(|&&byte| byte == b'\n').count() as u64,
        };
        self.spec.expected.verify(&sink, &outcome)?;
        Ok(outcome)
    }
}

#[derive(Clone)]
struct KernelScenario {
    key: &'static str,
    title: &'static str,
    workload: Workload,
    expected: Expected,
}

#[derive(Clone, Copy)]
enum Workload {
    Sequence { repeats: u32, terms: u32 },
    Records { size: u32 },
    Series { terms: u32 },
}

impl Workload {
    fn is_empty(&self) -> bool {
        match self {
            Workload::Sequence { repeats, terms } => *repeats == 0 || *terms == 0,
            Workload::Records { size } => *size == 0,
            Workload::Series { terms } => *terms == 0,
        }
    }
}

#[derive(Clone, Copy)]
enum Expected {
    Lines(u64),
    FinalFloat { value: f64, tolerance: f64 },
}

impl Expected {
    fn verify(&self, output: &[u8], outcome: &KernelRunOutcome) -> Result<()> {
        match self {
            Expected::Lines(want) => {
                if outcome.lines == *want {
                    Ok(())
                } else {
                    Err(anyhow::anyhow!(
                        "expected {} output lines but observed {}",
                        want,
                        outcome.lines
                    ))
                }
            }
            Expected::FinalFloat { value, tolerance } => {
                let text = std::str::from_utf8(output).context("scenario output was not UTF-8")?;
                let observed: f64 = text.trim_end().parse().context("scenario output was not a decimal")?;
                if (observed - value).abs() <= *tolerance {
                    Ok(())
                } else {
                    Err(anyhow::anyhow!(
                        "expected {} within {} but observed {}",
                        value,
                        tolerance,
                        observed
                    ))
                }
            }
        }
    }
}

// Scenario workloads are sized so one Criterion iteration stays sub-second;
// the kernels' fixed CLI workloads live on the kernel modules themselves.
static KERNEL_SCENARIOS: &[KernelScenario] = &[
    KernelScenario {
        key: "sequence_small",
        title: "Recursive sequence, 100 regenerations",
        workload: Workload::Sequence {
            repeats: 100,
            terms: sequence::TERMS,
        },
        expected: Expected::Lines(100 * sequence::TERMS as u64),
    },
    KernelScenario {
        key: "roster_full",
        title: "Roster build, transform and serialize",
        workload: Workload::Records {
            size: records::ROSTER_SIZE,
        },
        expected: Expected::Lines(records::ROSTER_SIZE as u64),
    },
    KernelScenario {
        key: "series_short",
        title: "Alternating series, one million terms",
        workload: Workload::Series { terms: 1_000_000 },
        expected: Expected::FinalFloat {
            value: std::f64::consts::PI,
            tolerance: 1e-5,
        },
    },
];

pub fn prepare_kernel_scenarios() -> Result<Vec<PreparedKernelScenario>> {
    let mut seen = Vec::with_capacity(KERNEL_SCENARIOS.len());
    KERNEL_SCENARIOS
        .iter()
        .map(|spec| {
            if spec.workload.is_empty() {
                anyhow::bail!("scenario '{}' has an empty workload", spec.key);
            }
            if seen.contains(&spec.key) {
                anyhow::bail!("scenario key '{}' is duplicated", spec.key);
            }
            seen.push(spec.key);
            Ok(PreparedKernelScenario { spec })
        })
        .collect()
}
