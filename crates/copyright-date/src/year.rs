//! Loosely typed year input.
//!
//! Start years arrive from block attributes and template data where the
//! runtime type is not guaranteed. [`YearValue`] keeps that type visible so
//! validation can reject numeric strings and other non-numbers.

use serde_json::Value;

/// A year candidate whose runtime type has not been checked yet.
///
/// # Example
///
/// ```
/// use copyright_date::YearValue;
///
/// assert_eq!(YearValue::from(2020), YearValue::Integer(2020));
/// assert_eq!(YearValue::from("2020"), YearValue::Text("2020".to_owned()));
/// assert_eq!(YearValue::from(None::<i32>), YearValue::Missing);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum YearValue {
    /// A whole number.
    Integer(i64),
    /// A floating-point number, which may or may not be integral.
    Float(f64),
    /// A string, including strings that spell a number.
    Text(String),
    /// A boolean flag.
    Boolean(bool),
    /// No value was supplied.
    Missing,
    /// A structured value such as an array or object.
    Other,
}

impl YearValue {
    /// Returns a short name for the runtime kind of the value.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "string",
            Self::Boolean(_) => "boolean",
            Self::Missing => "missing",
            Self::Other => "structured value",
        }
    }
}

impl From<i64> for YearValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for YearValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for YearValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u16> for YearValue {
    fn from(value: u16) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for YearValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for YearValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for YearValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for YearValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T> From<Option<T>> for YearValue
where
    T: Into<Self>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

impl From<&Value> for YearValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Self::Missing,
            Value::Bool(flag) => Self::Boolean(*flag),
            Value::Number(number) => number.as_i64().map_or_else(
                || number.as_f64().map_or(Self::Other, Self::Float),
                Self::Integer,
            ),
            Value::String(text) => Self::Text(text.clone()),
            Value::Array(_) | Value::Object(_) => Self::Other,
        }
    }
}

impl From<Value> for YearValue {
    fn from(value: Value) -> Self {
        Self::from(&value)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case(json!(2020), YearValue::Integer(2020))]
    #[case(json!(2020.5), YearValue::Float(2020.5))]
    #[case(json!(2020.0), YearValue::Float(2020.0))]
    #[case(json!("2020"), YearValue::Text("2020".to_owned()))]
    #[case(json!(null), YearValue::Missing)]
    #[case(json!(true), YearValue::Boolean(true))]
    #[case(json!([2020]), YearValue::Other)]
    #[case(json!({"year": 2020}), YearValue::Other)]
    fn converts_json_values(#[case] value: Value, #[case] expected: YearValue) {
        assert_eq!(YearValue::from(&value), expected);
    }

    #[test]
    fn present_option_uses_inner_conversion() {
        assert_eq!(YearValue::from(Some(1999_u16)), YearValue::Integer(1999));
    }

    #[rstest]
    #[case(YearValue::Integer(1), "integer")]
    #[case(YearValue::Text(String::new()), "string")]
    #[case(YearValue::Missing, "missing")]
    fn reports_kind(#[case] value: YearValue, #[case] expected: &str) {
        assert_eq!(value.kind(), expected);
    }
}
