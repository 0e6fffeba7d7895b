use std::io::{self, Write};
use std::sync::Once;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kbench_core::{records, sequence, series};


static TRACE_INIT: Once = Once::new();
const DEFAULT_TRACE_FILTER: &str = "kbench_core=debug,kbench_cli=info";

const KERNEL_NAMES: [&str; 3] = ["sequence", "records", "series"];

#[derive(Debug, Parser)]
#[command(
    name = "kbench",
    author,
    version,
    about = "Fixed-workload CPU kernels for cross-runtime benchmarking",
    long_about = None
)]
struct CliArgs {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Regenerate the recursive sequence 1000 times and print every term.
    Sequence,
    /// Build, transform and print the 10,000-record roster.
    Records,
    /// Accumulate the 50,000,000-term alternating series and print the result.
    Series,
    /// Run every kernel in declaration order.
    All,
    /// List kernel names, one per line.
    List,
}

fn env_toggle_enabled(raw: &str) -> bool {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return false;
    }
    !(trimmed.eq_ignore_ascii_case("0") || trimmed.eq_ignore_ascii_case("false") || trimmed.eq_ignore_ascii_case("off"))
}

fn filter_expr_from(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("1") || trimmed.eq_ignore_ascii_case("true") || trimmed.eq_ignore_ascii_case("on") {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// Tracing stays off unless KBENCH_TRACE asks for it, so stdout carries
// nothing but kernel output by default. Diagnostics go to stderr.
fn maybe_init_trace() {
    let raw = match std::env::var("KBENCH_TRACE") {
        Ok(value) => value,
        Err(_) => return,
    };

    if !env_toggle_enabled(&raw) {
        return;
    }

    TRACE_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        use tracing_subscriber::fmt;

        let filter_expr = filter_expr_from(&raw).or_else(|| std::env::var("RUST_LOG").ok());

        let builder = fmt().with_writer(std::io::stderr);
        let builder = match filter_expr.and_then(|expr| EnvFilter::try_new(expr).ok()) {
            Some(filter) => builder.with_env_filter(filter),
            None => builder.with_env_filter(DEFAULT_TRACE_FILTER),
        };

        let _ = builder.try_init();
    });
}

fn main() -> Result<()> {
    maybe_init_trace();

    let CliArgs { command } = CliArgs::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match command {
        Commands::Sequence => sequence::run(&mut out)?,
        Commands::Records => records::run(&mut out)?,
        Commands::Series => series::run(&mut out)?,
        Commands::All => {
            sequence::run(&mut out)?;
            records::run(&mut out)?;
            series::run(&mut out)?;
        }
        Commands::List => {
            for name in KERNEL_NAMES {
                writeln!(out, "{name}").context("write kernel name")?;
            }
        }
    }
    out.flush().context("flush stdout")
}
