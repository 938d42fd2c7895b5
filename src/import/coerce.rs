//! Coercion of raw cells into a column's semantic type

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::config::ImportConfig;
use crate::error::{MappingError, MappingResult};
use crate::schema::{ColumnDefinition, SemanticType};
use crate::value::Value;

/// Timestamp layouts produced by the legacy source, tried after RFC 3339
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
];

/// Coerce `value` into the semantic type of `column`
///
/// # Rules
///
/// - Null is kept for nullable columns and for text (the field setter
///   decides); any other non-nullable column rejects it
/// - Values already of the column's type pass through, as do characters
///   into text and integers into decimals
/// - Single-character text and timestamp text are always accepted for
///   character and timestamp columns; loosely-typed sources have no other
///   way to spell them
/// - With `lenient_coercion`, further textual spellings are parsed (`"42"`,
///   `"0.075"`, `"true"`/`"Y"`/`1`)
pub fn coerce(
    value: Value,
    column: &ColumnDefinition,
    config: &ImportConfig,
) -> MappingResult<Value> {
    let expected = column.semantic_type;

    if value.is_null() {
        if column.nullable || expected == SemanticType::Text {
            return Ok(Value::Null);
        }
        return Err(value.mismatch(&column.name, expected));
    }

    let found = value.kind_name();
    let lenient = config.lenient_coercion;

    let coerced = match (expected, value) {
        (SemanticType::Text, Value::Text(s)) => Some(Value::Text(s)),
        (SemanticType::Text, Value::Character(c)) => Some(Value::Text(c.to_string())),
        (SemanticType::Text, Value::Integer(n)) if lenient => Some(Value::Text(n.to_string())),
        (SemanticType::Text, Value::Decimal(d)) if lenient => Some(Value::Text(d.to_string())),

        (SemanticType::Integer, Value::Integer(n)) => Some(Value::Integer(n)),
        (SemanticType::Integer, Value::Decimal(d)) if lenient && d.fract().is_zero() => {
            d.to_i64().map(Value::Integer)
        }
        (SemanticType::Integer, Value::Text(s)) if lenient => {
            s.trim().parse::<i64>().ok().map(Value::Integer)
        }

        (SemanticType::Decimal, Value::Decimal(d)) => Some(Value::Decimal(d)),
        (SemanticType::Decimal, Value::Integer(n)) => Some(Value::Decimal(Decimal::from(n))),
        (SemanticType::Decimal, Value::Text(s)) if lenient => {
            Decimal::from_str(s.trim()).ok().map(Value::Decimal)
        }

        (SemanticType::Boolean, Value::Boolean(b)) => Some(Value::Boolean(b)),
        (SemanticType::Boolean, Value::Integer(0)) if lenient => Some(Value::Boolean(false)),
        (SemanticType::Boolean, Value::Integer(1)) if lenient => Some(Value::Boolean(true)),
        (SemanticType::Boolean, Value::Text(s)) if lenient => parse_bool(&s).map(Value::Boolean),

        (SemanticType::Character, Value::Character(c)) => Some(Value::Character(c)),
        (SemanticType::Character, Value::Text(s)) => {
            single_char(&s).map(Value::Character)
        }

        (SemanticType::Timestamp, Value::Timestamp(ts)) => Some(Value::Timestamp(ts)),
        (SemanticType::Timestamp, Value::Text(s)) => {
            let text = s.trim();
            if text.is_empty() && column.nullable {
                Some(Value::Null)
            } else {
                parse_timestamp(text, &config.timestamp_formats).map(Value::Timestamp)
            }
        }

        _ => None,
    };

    coerced.ok_or_else(|| MappingError::TypeCoercion {
        column: column.name.clone(),
        expected,
        found: found.to_string(),
    })
}

fn parse_bool(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" | "1" => Some(true),
        "false" | "f" | "no" | "n" | "0" => Some(false),
        _ => None,
    }
}

/// Single character, tolerating padding around a non-blank one
fn single_char(text: &str) -> Option<char> {
    let exactly_one = |s: &str| {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    };
    exactly_one(text).or_else(|| exactly_one(text.trim()))
}

fn parse_timestamp(text: &str, extra_formats: &[String]) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_utc());
    }

    TIMESTAMP_FORMATS
        .iter()
        .copied()
        .chain(extra_formats.iter().map(String::as_str))
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(semantic_type: SemanticType, nullable: bool) -> ColumnDefinition {
        ColumnDefinition {
            name: "col".to_string(),
            field: "col".to_string(),
            semantic_type,
            nullable,
            max_length: None,
            primary_key: false,
            references: None,
        }
    }

    fn lenient(value: Value, semantic_type: SemanticType) -> MappingResult<Value> {
        coerce(value, &column(semantic_type, false), &ImportConfig::default())
    }

    #[test]
    fn test_null_on_non_nullable_decimal_is_type_error() {
        let err = lenient(Value::Null, SemanticType::Decimal).unwrap_err();
        assert_eq!(
            err,
            MappingError::TypeCoercion {
                column: "col".to_string(),
                expected: SemanticType::Decimal,
                found: "null".to_string(),
            }
        );
        assert!(lenient(Value::Null, SemanticType::Integer).is_err());
    }

    #[test]
    fn test_null_passes_for_text_and_nullable() {
        assert_eq!(lenient(Value::Null, SemanticType::Text).unwrap(), Value::Null);
        let nullable = column(SemanticType::Decimal, true);
        assert_eq!(
            coerce(Value::Null, &nullable, &ImportConfig::default()).unwrap(),
            Value::Null
        );
    }

    #[test]
    fn test_lenient_text_spellings() {
        assert_eq!(
            lenient(Value::from(" 42 "), SemanticType::Integer).unwrap(),
            Value::Integer(42)
        );
        assert_eq!(
            lenient(Value::from("0.075"), SemanticType::Decimal).unwrap(),
            Value::Decimal(Decimal::from_str("0.075").unwrap())
        );
        assert_eq!(
            lenient(Value::from("Y"), SemanticType::Boolean).unwrap(),
            Value::Boolean(true)
        );
        assert_eq!(
            lenient(Value::Integer(0), SemanticType::Boolean).unwrap(),
            Value::Boolean(false)
        );
        assert_eq!(
            lenient(Value::from("$"), SemanticType::Character).unwrap(),
            Value::Character('$')
        );
        assert_eq!(
            lenient(Value::from(" "), SemanticType::Character).unwrap(),
            Value::Character(' ')
        );
    }

    #[test]
    fn test_integral_decimal_to_integer() {
        let two = Decimal::from_str("2.00").unwrap();
        assert_eq!(
            lenient(Value::Decimal(two), SemanticType::Integer).unwrap(),
            Value::Integer(2)
        );
        let half = Decimal::from_str("2.5").unwrap();
        assert!(lenient(Value::Decimal(half), SemanticType::Integer).is_err());
    }

    #[test]
    fn test_strict_rejects_text_spellings() {
        let config = ImportConfig::strict();
        let int_column = column(SemanticType::Integer, false);
        assert!(coerce(Value::from("42"), &int_column, &config).is_err());

        let dec_column = column(SemanticType::Decimal, false);
        assert_eq!(
            coerce(Value::Integer(3), &dec_column, &config).unwrap(),
            Value::Decimal(Decimal::from(3))
        );
    }

    #[test]
    fn test_strict_accepts_character_and_timestamp_text() {
        let config = ImportConfig::strict();
        let char_column = column(SemanticType::Character, false);
        assert_eq!(
            coerce(Value::from("$"), &char_column, &config).unwrap(),
            Value::Character('$')
        );
        assert!(coerce(Value::from("$$"), &char_column, &config).is_err());

        let ts_column = column(SemanticType::Timestamp, true);
        assert!(matches!(
            coerce(Value::from("2024-03-01 12:30:00"), &ts_column, &config).unwrap(),
            Value::Timestamp(_)
        ));
        assert!(coerce(Value::from("Y"), &column(SemanticType::Boolean, false), &config).is_err());
    }

    #[test]
    fn test_timestamps() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();

        for text in [
            "2024-03-01 12:30:00",
            "2024-03-01T12:30:00",
            "2024-03-01T12:30:00Z",
            "2024-03-01T14:30:00+02:00",
        ] {
            assert_eq!(
                lenient(Value::from(text), SemanticType::Timestamp).unwrap(),
                Value::Timestamp(expected),
                "{}",
                text
            );
        }

        let nullable = column(SemanticType::Timestamp, true);
        assert_eq!(
            coerce(Value::from(""), &nullable, &ImportConfig::default()).unwrap(),
            Value::Null
        );
    }

    #[test]
    fn test_custom_timestamp_format() {
        let config = ImportConfig::new().with_timestamp_format("%d/%m/%Y %H:%M");
        let ts = column(SemanticType::Timestamp, true);
        let value = coerce(Value::from("01/03/2024 12:30"), &ts, &config).unwrap();
        assert!(matches!(value, Value::Timestamp(_)));
    }

    #[test]
    fn test_mismatch_reports_found_kind() {
        let err = lenient(Value::Boolean(true), SemanticType::Timestamp).unwrap_err();
        assert!(matches!(
            err,
            MappingError::TypeCoercion { ref found, .. } if found == "boolean"
        ));
    }
}
