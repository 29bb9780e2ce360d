//! Number formatting for cards and entry rows

/// Formats a number with `,` thousands separators and the given number of decimals.
///
/// ```
/// use frontend::shared::number_format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer_part, decimal_part) = match unsigned.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match decimal_part {
        Some(d) => format!("{sign}{grouped}.{d}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Amount with the shop currency label, e.g. `PKR 1,100.00`.
pub fn format_money(value: f64, currency: &str) -> String {
    let amount = format_number_with_decimals(value, 2);
    if currency.is_empty() {
        amount
    } else {
        format!("{currency} {amount}")
    }
}

/// Plain two-decimal value for `<input type="number">` fields.
pub fn format_price(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
        assert_eq!(format_number_with_decimals(1234567.0, 0), "1,234,567");
        assert_eq!(format_number_with_decimals(999.0, 2), "999.00");
        assert_eq!(format_number_with_decimals(0.0, 2), "0.00");
    }

    #[test]
    fn test_negative_numbers() {
        assert_eq!(format_number_with_decimals(-1234.5, 2), "-1,234.50");
        assert_eq!(format_number_with_decimals(-100.0, 0), "-100");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1100.0, "PKR"), "PKR 1,100.00");
        assert_eq!(format_money(12.5, ""), "12.50");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1000.0), "1000.00");
        assert_eq!(format_price(12.345), "12.35");
    }
}
