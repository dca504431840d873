/// `0.618` -> `"61.8%"` with one decimal.
pub fn format_percent(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    format!("{:.*}%", decimals, value * 100.0)
}

pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    format!("{:.*}", decimals, value)
}

/// Whole-cycle bracket around a fractional cycles-needed estimate, e.g.
/// 4.7 -> (4, 5). Integral values give the same number twice.
pub fn cycles_needed_range(value: f64) -> (u32, u32) {
    if !value.is_finite() || value <= 0.0 {
        return (0, 0);
    }
    // Saturating casts
    (value.floor() as u32, value.ceil() as u32)
}
