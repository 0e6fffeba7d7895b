//! Recursive sequence kernel: regenerates a short linear recurrence many
//! times over, accumulating every term into one buffer that is flushed to
//! the sink exactly once at the end.

use std::io::Write;

use anyhow::{Context, Result};

/// Terms emitted per regeneration. The recursion is one frame per term.
pub const TERMS: u32 = 40;

/// How many times the full sequence is regenerated per run.
pub const REPEATS: u32 = 1000;

/// Appends `terms` sequence values to `out`, one per line, starting from
/// the seed pair `(a, b)`.
///
/// Each call emits `a` and recurses with the shifted pair `(b, a + b)`.
/// Terms are kept in `u64`, which holds every value through the 93rd term;
/// the 40-term workload peaks at 63,245,986.
pub fn push_terms(out: &mut String, terms: u32, a: u64, b: u64) {
    let mut digits = itoa::Buffer::new();
    out.push_str(digits.format(a));
    out.push('\n');
    if terms > 1 {
        push_terms(out, terms - 1, b, a + b);
    }
}

/// Renders the full workload: `repeats` independent regenerations of the
/// first `terms` values, all accumulated into a single buffer.
pub fn render(repeats: u32, terms: u32) -> String {
    // terms up to 40 are at most 8 digits plus the newline
    let mut out = String::with_capacity(repeats as usize * terms as usize * 9);
    for _ in 0..repeats {
        push_terms(&mut out, terms, 0, 1);
    }
    out
}

/// Runs the kernel at its fixed workload and writes the buffer out once.
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    let rendered = render(REPEATS, TERMS);
    tracing::debug!(bytes = rendered.len(), "sequence buffer rendered");
    out.write_all(rendered.as_bytes()).context("write sequence output")
}
