//! Number formatting for cards and tables. The analytics engine returns raw
//! numbers; everything display-ready is produced here.

/// Thousands separated with a space, fixed decimals
pub fn format_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = format!("{:.prec$}", value, prec = decimals as usize);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (formatted.as_str(), None),
    };

    // Insert a space every 3 digits from the end of the integer part
    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && c != '-' {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(dec) => format!("{}.{}", grouped, dec),
        None => grouped,
    }
}

/// Monetary value: currency marker, thousands separator, 2 decimals
pub fn format_money(value: f64) -> String {
    format!("R$ {}", format_with_decimals(value, 2))
}

/// Integer count with thousands separator
pub fn format_int(value: u64) -> String {
    format_with_decimals(value as f64, 0)
}

/// Goal percentage, one decimal
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "R$ 1 234.56");
        assert_eq!(format_money(1234567.89), "R$ 1 234 567.89");
        assert_eq!(format_money(0.0), "R$ 0.00");
        assert_eq!(format_money(-1234.56), "R$ -1 234.56");
    }

    #[test]
    fn test_format_with_decimals() {
        assert_eq!(format_with_decimals(1234.567, 0), "1 235");
        assert_eq!(format_with_decimals(1234.567, 1), "1 234.6");
        assert_eq!(format_with_decimals(1234.567, 2), "1 234.57");
        assert_eq!(format_with_decimals(999.0, 2), "999.00");
    }

    #[test]
    fn test_format_int() {
        assert_eq!(format_int(1_234_567), "1 234 567");
        assert_eq!(format_int(0), "0");
        assert_eq!(format_int(999), "999");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(30.0), "30.0%");
        assert_eq!(format_percent(120.25), "120.2%");
        assert_eq!(format_percent(0.0), "0.0%");
    }
}
