use rust_decimal::Decimal;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A scalar field exactly as the backend delivered it.
///
/// Rows written by different client versions disagree about types: an amount
/// can arrive as `10`, `10.5`, `"10.50"` or, occasionally, `"abc"`. Keeping the
/// raw value lets us decide how to coerce it in one place (see [`crate::coerce`])
/// instead of failing to deserialize the whole record.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// An exact number, either an integer from JSON or a `NUMERIC` column.
    Decimal(Decimal),
    /// A JSON number with a fractional part or exponent.
    Float(f64),
    Text(String),
    Bool(bool),
}

impl From<Decimal> for RawValue {
    fn from(value: Decimal) -> Self {
        RawValue::Decimal(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Decimal(Decimal::from(value))
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Float(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Decimal(d) => write!(f, "{}", d),
            RawValue::Float(x) => write!(f, "{}", x),
            RawValue::Text(s) => f.write_str(s),
            RawValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl Serialize for RawValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Decimals go out as strings, the same as `rust_decimal`'s own impl.
            RawValue::Decimal(d) => serializer.serialize_str(&d.to_string()),
            RawValue::Float(x) => serializer.serialize_f64(*x),
            RawValue::Text(s) => serializer.serialize_str(s),
            RawValue::Bool(b) => serializer.serialize_bool(*b),
        }
    }
}

struct RawValueVisitor;

impl<'de> Visitor<'de> for RawValueVisitor {
    type Value = RawValue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a number, string or boolean")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<RawValue, E> {
        Ok(RawValue::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<RawValue, E> {
        Ok(RawValue::Decimal(Decimal::from(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<RawValue, E> {
        Ok(RawValue::Decimal(Decimal::from(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<RawValue, E> {
        Ok(RawValue::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<RawValue, E> {
        Ok(RawValue::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<RawValue, E> {
        Ok(RawValue::Text(v))
    }
}

impl<'de> Deserialize<'de> for RawValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RawValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn deserializes_every_json_scalar() {
        let values: Vec<Option<RawValue>> =
            serde_json::from_str(r#"[10, -3, 2.5, "abc", true, null]"#).unwrap();

        assert_eq!(
            values,
            vec![
                Some(RawValue::Decimal(dec!(10))),
                Some(RawValue::Decimal(dec!(-3))),
                Some(RawValue::Float(2.5)),
                Some(RawValue::Text("abc".to_string())),
                Some(RawValue::Bool(true)),
                None,
            ]
        );
    }

    #[test]
    fn rejects_nested_structures() {
        let result: Result<RawValue, _> = serde_json::from_str(r#"{"amount": 1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn decimal_serializes_as_string() {
        let json = serde_json::to_string(&RawValue::from(dec!(12.50))).unwrap();
        assert_eq!(json, r#""12.50""#);
    }
}
