//! Display-side number formatting.
//!
//! Two representations exist: the canonical engine text for a computed value
//! ([`format_value`]) and the expression-line rendering with thousands
//! separators ([`format_operand`]). The value line of the display always
//! shows the engine text verbatim so in-progress typing (`"0."`, `"1.20"`)
//! survives untouched.

/// Magnitude at which the expression line gains thousands separators.
const GROUPING_THRESHOLD: f64 = 1000.0;

/// Maximum fractional digits shown once separators apply.
const MAX_FRACTION_DIGITS: usize = 8;

/// Converts a computed value into the engine's canonical text.
///
/// Integral values print without a fraction; fractional values trim trailing
/// zeros. The output always parses back to the same `f64`.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        let text = format!("{value:.10}");
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Formats an operand for the pending-expression line.
///
/// Magnitudes of 1000 and above gain locale-style `,` separators with at
/// most eight fractional digits; smaller magnitudes pass through unchanged
/// to preserve in-progress decimal typing. Text that does not parse is
/// returned as-is.
#[must_use]
pub fn format_operand(text: &str) -> String {
    let Ok(value) = text.parse::<f64>() else {
        return text.to_string();
    };
    if value.is_finite() && value.abs() >= GROUPING_THRESHOLD {
        group_thousands(value)
    } else {
        text.to_string()
    }
}

fn group_thousands(value: f64) -> String {
    let rounded = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));

    let mut grouped = String::with_capacity(rounded.len() + int_part.len() / 3 + 1);
    if value < 0.0 {
        grouped.push('-');
    }
    let digits = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let frac = frac_part.trim_end_matches('0');
    if !frac.is_empty() {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}
