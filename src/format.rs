/// Compact amount formatting, as the host shows resource counts.
///
/// Below 1000 the plain integer is printed. Larger magnitudes get a `k`, `m`
/// or `b` suffix, with one decimal except between 10k and 1m.
pub fn format_amount(number: i64) -> String {
    let number = number.max(i64::MIN + 1);
    let mag = number.abs();
    let sign = if number < 0 { "-" } else { "" };

    if mag >= 1_000_000_000 {
        format!("{}{:.1}b", sign, mag as f64 / 1_000_000_000.0)
    } else if mag >= 1_000_000 {
        format!("{}{:.1}m", sign, mag as f64 / 1_000_000.0)
    } else if mag >= 10_000 {
        format!("{}k", number / 1000)
    } else if mag >= 1000 {
        format!("{}{:.1}k", sign, mag as f64 / 1000.0)
    } else {
        number.to_string()
    }
}

/// Signed per-second rate, e.g. `+25/s` or `-1.2k/s`.
pub fn format_rate(per_second: f32) -> String {
    let sign = if per_second >= 0.0 { "+" } else { "" };
    format!("{}{}/s", sign, format_amount(per_second as i64))
}
