//! Display formatting helpers.
//!
//! Pure functions shared by the REST layer and the egui front end for
//! rendering amounts and durations, plus the separator-tolerant parser the
//! validation service builds on.

/// Timestamp format used for completion times, e.g. "2026-03-02 04:00".
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Format a number with thousands separators and a fixed number of
/// decimal places: `format_amount(1234567.8, 1)` is `"1,234,567.8"`.
pub fn format_amount(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "0".to_string();
    }

    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::new();
    if value.is_sign_negative() && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.push('-');
    }
    for (index, digit) in int_part.chars().enumerate() {
        if index > 0 && (int_part.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if let Some(frac_part) = frac_part {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Parse user input that may carry thousands separators or stray characters.
///
/// Everything except digits, the decimal point, and a sign is stripped
/// before parsing. Returns `None` when nothing numeric remains.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

/// Abbreviate large amounts for compact display: 1.50K, 2.25M, 1.10B.
pub fn abbreviate_amount(value: f64) -> String {
    if value >= 1_000_000_000.0 {
        format!("{}B", format_amount(value / 1_000_000_000.0, 2))
    } else if value >= 1_000_000.0 {
        format!("{}M", format_amount(value / 1_000_000.0, 2))
    } else if value >= 1_000.0 {
        format!("{}K", format_amount(value / 1_000.0, 1))
    } else {
        format_amount(value, 0)
    }
}

/// Render a duration breakdown as human text, skipping zero components.
pub fn format_duration(days: i64, hours: i64, minutes: i64) -> String {
    let mut parts = Vec::new();
    if days > 0 {
        parts.push(plural(days, "day"));
    }
    if hours > 0 {
        parts.push(plural(hours, "hour"));
    }
    if minutes > 0 {
        parts.push(plural(minutes, "minute"));
    }
    if parts.is_empty() {
        return "less than a minute".to_string();
    }
    parts.join(" ")
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", count, unit)
    }
}
