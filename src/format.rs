//! Display Formatting

/// Salary as shown in the table: currency symbol, Indian digit grouping
/// (12,34,567) and at most three fraction digits with trailing zeros dropped.
pub fn format_salary(symbol: &str, salary: f64) -> String {
    format!("{} {}", symbol, group_indian(salary))
}

fn group_indian(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let rounded = format!("{:.3}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::new();
    let len = digits.len();
    for (i, d) in digits.iter().enumerate() {
        let remaining = len - i;
        if i > 0 && (remaining == 3 || (remaining > 3 && (remaining - 3) % 2 == 0)) {
            grouped.push(',');
        }
        grouped.push(*d);
    }

    let sign = if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac_part)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indian_grouping() {
        assert_eq!(group_indian(0.0), "0");
        assert_eq!(group_indian(999.0), "999");
        assert_eq!(group_indian(1000.0), "1,000");
        assert_eq!(group_indian(50000.0), "50,000");
        assert_eq!(group_indian(123456.0), "1,23,456");
        assert_eq!(group_indian(1234567.0), "12,34,567");
        assert_eq!(group_indian(123456789.0), "12,34,56,789");
    }

    #[test]
    fn test_fraction_digits() {
        assert_eq!(group_indian(1500.5), "1,500.5");
        assert_eq!(group_indian(1.23456), "1.235");
        assert_eq!(group_indian(-2500.0), "-2,500");
    }

    #[test]
    fn test_with_symbol() {
        assert_eq!(format_salary("₹", 70000.0), "₹ 70,000");
    }
}
