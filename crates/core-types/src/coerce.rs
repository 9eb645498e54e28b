//! Turning raw backend fields into numbers and dates.
//!
//! Amounts follow JavaScript `Number(x)` rules, since that is how the mobile and
//! web clients that write these rows read them back. Anything that would have
//! become `NaN` or an invalid date collapses to zero or `None` instead.

use crate::error::CoreError;
use crate::value::RawValue;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Coerces an amount field to a decimal. Missing, empty, non-numeric and
/// non-finite values all become `0`.
pub fn parse_amount(raw: Option<&RawValue>) -> Decimal {
    match raw {
        None => Decimal::ZERO,
        Some(RawValue::Decimal(d)) => *d,
        Some(RawValue::Float(x)) => decimal_from_float("amount", *x).unwrap_or(Decimal::ZERO),
        Some(RawValue::Bool(b)) => Decimal::from(*b as u8),
        Some(RawValue::Text(s)) => amount_from_text(s).unwrap_or(Decimal::ZERO),
    }
}

/// Coerces a quantity field to a whole number of units, truncating toward zero.
/// Counts beyond the `i64` range clamp to its bounds.
pub fn parse_quantity(raw: Option<&RawValue>) -> i64 {
    let units = parse_amount(raw).trunc();
    units.to_i64().unwrap_or(if units.is_sign_negative() { i64::MIN } else { i64::MAX })
}

/// Parses the text form of an amount.
///
/// Whitespace around the number is ignored and an empty string is zero. Plain
/// decimals, scientific notation and `0x`/`0o`/`0b` integers are accepted.
/// Finite numbers outside the `Decimal` range clamp to `Decimal::MAX` or
/// `Decimal::MIN`.
pub fn amount_from_text(text: &str) -> Result<Decimal, CoreError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let invalid = || CoreError::InvalidInput("amount".to_string(), text.to_string());

    // `Decimal::from_str` tolerates digit separators; a number typed by a user does not.
    if trimmed.contains('_') {
        return Err(invalid());
    }

    if let Ok(value) = Decimal::from_str(trimmed) {
        return Ok(value);
    }

    if let Some(value) = radix_literal(trimmed) {
        return Ok(Decimal::from(value));
    }

    let float: f64 = trimmed.parse().map_err(|_| invalid())?;
    decimal_from_float("amount", float)
}

fn radix_literal(text: &str) -> Option<i64> {
    let prefix = text.get(..2)?.to_ascii_lowercase();
    let radix = match prefix.as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    i64::from_str_radix(&text[2..], radix).ok()
}

fn decimal_from_float(field: &str, value: f64) -> Result<Decimal, CoreError> {
    if !value.is_finite() {
        return Err(CoreError::NotFinite(field.to_string()));
    }
    match Decimal::from_f64(value) {
        Some(decimal) => Ok(decimal),
        None => {
            let clamped = if value.is_sign_negative() { Decimal::MIN } else { Decimal::MAX };
            tracing::warn!(field, value, "Amount is outside the decimal range; clamping.");
            Ok(clamped)
        }
    }
}

/// Resolves a sale's `date` field to a calendar date in the account's offset.
///
/// A bare `YYYY-MM-DD` is already a calendar date and is never shifted. Zoned
/// timestamps are moved into `offset`; naive date-times are taken as local.
/// Numbers are epoch milliseconds. Returns `None` for anything absent or
/// unparseable, which callers label as unknown.
pub fn parse_sale_date(raw: Option<&RawValue>, offset: FixedOffset) -> Option<NaiveDate> {
    match raw? {
        RawValue::Text(text) => date_from_text(text.trim(), offset),
        RawValue::Decimal(d) => date_from_millis(d.trunc().to_i64()?, offset),
        RawValue::Float(x) if x.is_finite() => date_from_millis(x.trunc() as i64, offset),
        RawValue::Float(_) | RawValue::Bool(_) => None,
    }
}

fn date_from_text(text: &str, offset: FixedOffset) -> Option<NaiveDate> {
    if text.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(zoned) = DateTime::parse_from_rfc3339(text) {
        return Some(zoned.with_timezone(&offset).date_naive());
    }

    // Postgres renders `timestamptz` as `2024-01-01 10:00:00+00`.
    if let Ok(zoned) = DateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f%#z") {
        return Some(zoned.with_timezone(&offset).date_naive());
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .map(|local| local.date())
}

fn date_from_millis(millis: i64, offset: FixedOffset) -> Option<NaiveDate> {
    // A zero timestamp is falsy and was never rendered as a date.
    if millis == 0 {
        return None;
    }
    DateTime::from_timestamp_millis(millis).map(|utc| utc.with_timezone(&offset).date_naive())
}
