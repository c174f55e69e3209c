/// Insert thousands separators into a run of digits
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Format a currency value rounded to whole units (e.g. `-$1,250,000`)
pub fn format_currency(value: f64) -> String {
    let units = value.abs().round() as i64;
    let sign = if value < 0.0 && units != 0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(&units.to_string()))
}

/// Fit `text` into `width` columns, truncating with an ellipsis
pub fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{kept}…")
}
