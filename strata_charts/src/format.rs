// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Number formatting for tick labels and tooltips.

extern crate alloc;

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Formats a tick value with thousands separators and as many decimals as the tick `step`
/// needs (a step of `0.25` gives two decimals, `10` gives none).
pub fn format_tick_with_step(value: f64, step: f64) -> String {
    let precision = step_precision(step);
    // Avoid printing "-0".
    let value = if value == 0.0 { 0.0 } else { value };
    group_thousands(&format!("{value:.precision$}"))
}

/// Formats a count the way it reads in plain text: integers without a fraction, other values
/// with the shortest exact representation.
pub fn format_count(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}")
}

fn step_precision(step: f64) -> usize {
    let step = if step < 0.0 { -step } else { step };
    if !step.is_finite() || step == 0.0 {
        return 0;
    }
    let exponent = step.log10().floor();
    if exponent >= 0.0 {
        return 0;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "exponent is a negative integer-valued float, capped at 20"
    )]
    {
        (-exponent).min(20.0) as usize
    }
}

fn group_thousands(s: &str) -> String {
    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s),
    };
    let (int, frac) = match rest.find('.') {
        Some(i) => rest.split_at(i),
        None => (rest, ""),
    };
    let mut out = String::with_capacity(s.len() + int.len() / 3);
    out.push_str(sign);
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push_str(frac);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_use_step_precision_and_separators() {
        assert_eq!(format_tick_with_step(0.0, 10.0), "0");
        assert_eq!(format_tick_with_step(12_500.0, 2_500.0), "12,500");
        assert_eq!(format_tick_with_step(1_000_000.0, 500_000.0), "1,000,000");
        assert_eq!(format_tick_with_step(0.3, 0.1), "0.3");
        assert_eq!(format_tick_with_step(0.25, 0.05), "0.25");
        assert_eq!(format_tick_with_step(-1_500.0, 500.0), "-1,500");
        assert_eq!(format_tick_with_step(-0.0, 1.0), "0");
    }

    #[test]
    fn counts_print_like_plain_numbers() {
        assert_eq!(format_count(100.0), "100");
        assert_eq!(format_count(40.5), "40.5");
        assert_eq!(format_count(-2.0), "-2");
        assert_eq!(format_count(-0.0), "0");
    }
}
