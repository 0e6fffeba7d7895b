//! Alternating series kernel: a long sequential floating-point summation
//! that converges on pi, printed once as a single line.

use std::io::Write;

use anyhow::{Context, Result};

/// Series terms accumulated per run.
pub const TERMS: u32 = 50_000_000;

/// Significant digits carried by the printed result. Seventeen uniquely
/// identifies any double, so the line also round-trips.
pub const SIGNIFICANT_DIGITS: i32 = 17;

/// Sums the first `terms` elements of `1 - 1/3 + 1/5 - 1/7 + ...` in plain
/// sequential order.
///
/// The sign is computed through integer exponentiation instead of flipping
/// a variable; that cost is part of the measured workload. See
/// `kernel_micro_bench` for the parity-sign comparison.
pub fn partial_sum(terms: u32) -> f64 {
    let mut sum = 0.0;
    for i in 0..terms {
        sum += f64::from((-1_i32).pow(i)) / f64::from(2 * i + 1);
    }
    sum
}

/// Scales the partial sum to the series limit, which converges on pi at a
/// rate of roughly one digit per decade of terms.
pub fn approximate(terms: u32) -> f64 {
    partial_sum(terms) * 4.0
}

/// Formats `value` in decimal notation with [`SIGNIFICANT_DIGITS`]
/// significant digits.
pub fn render_result(value: f64) -> String {
    let magnitude = if value == 0.0 {
        0
    } else {
        value.abs().log10().floor() as i32
    };
    let decimals = (SIGNIFICANT_DIGITS - 1 - magnitude).max(0) as usize;
    format!("{value:.decimals$}")
}

/// Runs the kernel at its fixed workload and prints the scaled sum as one
/// decimal line with [`SIGNIFICANT_DIGITS`] significant digits.
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    let value = approximate(TERMS);
    tracing::debug!(value, "series accumulated");
    writeln!(out, "{}", render_result(value)).context("write series output")
}
