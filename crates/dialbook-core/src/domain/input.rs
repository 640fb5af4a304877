use crate::error::ValidationError;
use serde_json::Value;

/// A raw phone number as it arrives from a record source, before any
/// normalization. Only text and integers can be validated.
#[derive(Debug, Clone, PartialEq)]
pub enum PhoneInput {
    Text(String),
    Integer(i128),
    Float(f64),
    Bool(bool),
    Null,
    List,
    Map,
}

impl PhoneInput {
    pub fn kind_name(&self) -> &'static str {
        match self {
            PhoneInput::Text(_) => "string",
            PhoneInput::Integer(_) => "integer",
            PhoneInput::Float(_) => "float",
            PhoneInput::Bool(_) => "bool",
            PhoneInput::Null => "null",
            PhoneInput::List => "list",
            PhoneInput::Map => "map",
        }
    }

    pub fn to_text(&self) -> Result<String, ValidationError> {
        match self {
            PhoneInput::Text(value) => Ok(value.clone()),
            PhoneInput::Integer(value) => Ok(value.to_string()),
            other => Err(ValidationError::InvalidType {
                found: other.kind_name(),
            }),
        }
    }
}

impl From<&str> for PhoneInput {
    fn from(value: &str) -> Self {
        PhoneInput::Text(value.to_string())
    }
}

impl From<String> for PhoneInput {
    fn from(value: String) -> Self {
        PhoneInput::Text(value)
    }
}

impl From<&String> for PhoneInput {
    fn from(value: &String) -> Self {
        PhoneInput::Text(value.clone())
    }
}

macro_rules! integer_input {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for PhoneInput {
                fn from(value: $ty) -> Self {
                    PhoneInput::Integer(i128::from(value))
                }
            }
        )*
    };
}

integer_input!(i8, i16, i32, i64, u8, u16, u32, u64);

impl From<f64> for PhoneInput {
    fn from(value: f64) -> Self {
        PhoneInput::Float(value)
    }
}

impl From<bool> for PhoneInput {
    fn from(value: bool) -> Self {
        PhoneInput::Bool(value)
    }
}

impl From<Value> for PhoneInput {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => PhoneInput::Text(text),
            Value::Number(number) => {
                if let Some(value) = number.as_i64() {
                    PhoneInput::Integer(i128::from(value))
                } else if let Some(value) = number.as_u64() {
                    PhoneInput::Integer(i128::from(value))
                } else {
                    PhoneInput::Float(number.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::Bool(value) => PhoneInput::Bool(value),
            Value::Null => PhoneInput::Null,
            Value::Array(_) => PhoneInput::List,
            Value::Object(_) => PhoneInput::Map,
        }
    }
}
