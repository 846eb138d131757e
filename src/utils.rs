//! Вспомогательные парсеры чисел, дат и текстовых полей.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::ReportError;
use crate::types::Money;

/// Нормализует числовую строку, удаляя пробелы, знак плюса итд.
fn normalize_number(input: &str) -> String {
    input
        .chars()
        .filter(|ch| !matches!(*ch, ' ' | '\u{a0}' | '\u{202f}' | '+'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Возвращает обрезанное значение обязательного поля.
pub fn require<'a>(value: &'a str, field: &'static str) -> Result<&'a str, ReportError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ReportError::MissingInput { field });
    }
    Ok(trimmed)
}

/// Разбирает денежное значение или курс.
pub fn parse_money(value: &str, column: &'static str) -> Result<Money, ReportError> {
    let normalized = normalize_number(value);
    if normalized.is_empty() {
        return Err(ReportError::MissingInput { field: column });
    }
    Decimal::from_str(&normalized).map_err(|_| ReportError::Number {
        value: value.trim().to_string(),
        column,
    })
}

/// Разбирает неотрицательное количество бумаг.
pub fn parse_units(value: &str, column: &'static str) -> Result<u32, ReportError> {
    let normalized = normalize_number(value);
    if normalized.is_empty() {
        return Err(ReportError::MissingInput { field: column });
    }
    normalized.parse().map_err(|_| ReportError::Number {
        value: value.trim().to_string(),
        column,
    })
}

/// Разбирает дату в заданном формате.
pub fn parse_date(value: &str, format: &str) -> Result<NaiveDate, ReportError> {
    NaiveDate::parse_from_str(value.trim(), format).map_err(|_| ReportError::Date {
        value: value.trim().to_string(),
        format: format.to_string(),
    })
}
