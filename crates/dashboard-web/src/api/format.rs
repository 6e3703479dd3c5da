//! pt-BR number formatting for table cells

/// Insert `.` every three digits from the right
fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, '.');
        }
        result.insert(0, c);
    }
    result
}

/// Format an amount in reais, e.g. `R$ 1.234,56`
pub fn format_brl(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}R$ {},{:02}", sign, group_thousands(&(cents / 100).to_string()), cents % 100)
}

/// Format a whole count with thousands separators
pub fn format_count(count: u64) -> String {
    group_thousands(&count.to_string())
}

/// Format percentage with a decimal comma
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{:.prec$}%", value, prec = decimals).replace('.', ",")
}
