//! Display formatting for currency and percent values.
//!
//! Percent values travel through the system in two scales: computed
//! ratios are fractions (0.052) while the parser's
//! `total_adjustment_percent` is already a percent (5.2). Every percent
//! formatter therefore takes an explicit `multiply_by_100` flag; there is
//! no default to inherit the wrong scale from.

/// Renders a dollar amount as USD with two fraction digits and thousands
/// separators, e.g. `1234567.8` -> `"$1,234,567.80"`.
pub fn format_currency(value: f64) -> String {
    let negative = value < 0.0;
    // Work in whole cents so the fraction rounds instead of truncating
    let cents = (value.abs() * 100.0).round() as u64;
    let dollars = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::new();
    for (i, c) in dollars.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    if negative {
        format!("-${}.{:02}", grouped, fraction)
    } else {
        format!("${}.{:02}", grouped, fraction)
    }
}

/// Renders a percent value with two fraction digits and a trailing `%`.
/// Pass `multiply_by_100 = true` for fractional ratios and `false` for
/// values persisted pre-scaled.
pub fn format_percent(value: f64, multiply_by_100: bool) -> String {
    let pct = if multiply_by_100 { value * 100.0 } else { value };
    format!("{:.2}%", pct)
}

/// Like [`format_percent`] but renders the `None` sentinel as `"N/A"`
/// (undefined percent change when the divisor was zero).
pub fn format_percent_or_na(value: Option<f64>, multiply_by_100: bool) -> String {
    match value {
        Some(v) => format_percent(v, multiply_by_100),
        None => "N/A".to_string(),
    }
}

/// Percent with an explicit sign for increases, used in tooltip lines
/// where the direction of the adjustment is the point.
pub fn format_signed_percent(value: f64, multiply_by_100: bool) -> String {
    let pct = if multiply_by_100 { value * 100.0 } else { value };
    if pct > 0.0 {
        format!("+{:.2}%", pct)
    } else {
        format!("{:.2}%", pct)
    }
}
