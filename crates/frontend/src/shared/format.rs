//! Форматирование чисел для карточек инвентаря

/// Форматирует число с разделителем тысяч (запятая) и указанным
/// количеством знаков после точки
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        2 => format!("{:.2}", value),
        3 => format!("{:.3}", value),
        _ => format!("{:.2}", value),
    };

    let parts: Vec<&str> = formatted.split('.').collect();
    let integer_part = parts[0];
    let decimal_part = parts.get(1);

    // Запятая каждые 3 цифры с конца целой части
    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push(',');
        }
        result.push(*c);
    }

    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Денежное значение в песо: `PHP 2,290.20`
pub fn format_php(value: f64) -> String {
    format!("PHP {}", format_number_with_decimals(value, 2))
}

/// Вес с тремя знаками: `1.500 kg`
pub fn format_kg(value: f64) -> String {
    format!("{:.3} kg", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_php() {
        assert_eq!(format_php(2290.2), "PHP 2,290.20");
        assert_eq!(format_php(3300.0), "PHP 3,300.00");
        assert_eq!(format_php(0.0), "PHP 0.00");
        assert_eq!(format_php(1234567.89), "PHP 1,234,567.89");
    }

    #[test]
    fn test_format_kg() {
        assert_eq!(format_kg(1.5), "1.500 kg");
        assert_eq!(format_kg(0.0), "0.000 kg");
        assert_eq!(format_kg(12.3456), "12.346 kg");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
        assert_eq!(format_number_with_decimals(1234.567, 3), "1,234.567");
        assert_eq!(format_number_with_decimals(-1234.5, 2), "-1,234.50");
    }
}
