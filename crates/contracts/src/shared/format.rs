//! Форматирование сумм, количеств и дат для таблиц и карточек (en-US)

use chrono::{DateTime, Utc};

/// Вставляет запятые между триадами целой части
fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Денежная сумма в долларах США
///
/// # Примеры
/// ```
/// use contracts::shared::format::format_currency;
/// assert_eq!(format_currency(1299.99), "$1,299.99");
/// ```
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = group_thousands(&(cents / 100).to_string());
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, whole, cents % 100)
}

/// Целое количество с разделителями тысяч
pub fn format_quantity(value: i64) -> String {
    let grouped = group_thousands(&value.unsigned_abs().to_string());
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// "May 10, 2023"
pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format("%b %-d, %Y").to_string()
}

/// "5/10/2023"
pub fn format_short_date(dt: &DateTime<Utc>) -> String {
    dt.format("%-m/%-d/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(19.99), "$19.99");
        assert_eq!(format_currency(1299.99), "$1,299.99");
        assert_eq!(format_currency(1234567.5), "$1,234,567.50");
        assert_eq!(format_currency(-5.0), "-$5.00");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(0), "0");
        assert_eq!(format_quantity(625), "625");
        assert_eq!(format_quantity(1234), "1,234");
        assert_eq!(format_quantity(-1234567), "-1,234,567");
    }

    #[test]
    fn test_format_dates() {
        let dt = ts("2023-05-10T14:30:00Z");
        assert_eq!(format_date(&dt), "May 10, 2023");
        assert_eq!(format_short_date(&dt), "5/10/2023");
    }
}
