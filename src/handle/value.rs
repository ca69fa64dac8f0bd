//! In-memory values held by a data handle and the literal types they coerce to.

use std::borrow::Cow;
use std::fmt;

use crate::error::{InoutError, Result};

/// Value stored by the `Value` representation of a handle.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    /// Raw payload, e.g. decoded base64 or binary complex data.
    Bytes(Vec<u8>),
}

impl Value {
    /// Byte form written to files and streams.
    pub fn to_bytes(&self) -> Cow<'_, [u8]> {
        match self {
            Value::String(s) => Cow::Borrowed(s.as_bytes()),
            Value::Bytes(b) => Cow::Borrowed(b.as_slice()),
            other => Cow::Owned(other.to_string().into_bytes()),
        }
    }

    /// Text form, lossy for non-UTF-8 bytes.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Value::String(s) => Cow::Borrowed(s.as_str()),
            Value::Bytes(b) => String::from_utf8_lossy(b),
            other => Cow::Owned(other.to_string()),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Bytes(b) => f.write_str(&String::from_utf8_lossy(b)),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(b)
    }
}

/// Primitive type a literal value is declared as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralType {
    String,
    Integer,
    Float,
    Boolean,
}

impl LiteralType {
    /// All recognized literal types.
    pub const ALL: [LiteralType; 4] = [
        LiteralType::Float,
        LiteralType::Boolean,
        LiteralType::Integer,
        LiteralType::String,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LiteralType::String => "string",
            LiteralType::Integer => "integer",
            LiteralType::Float => "float",
            LiteralType::Boolean => "boolean",
        }
    }

    /// Case-insensitive lookup by type name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(name))
    }

    /// Coerce literal text to this type.
    ///
    /// Boolean coercion never fails: only a case-insensitive `"true"` yields
    /// `true`, every other input yields `false`.
    pub fn convert(self, text: &str) -> Result<Value> {
        match self {
            LiteralType::String => Ok(Value::String(text.to_string())),
            LiteralType::Integer => text
                .trim()
                .parse::<i64>()
                .map(Value::Integer)
                .map_err(|e| InoutError::conversion(self.name(), text, e)),
            LiteralType::Float => text
                .trim()
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|e| InoutError::conversion(self.name(), text, e)),
            LiteralType::Boolean => Ok(Value::Boolean(text.eq_ignore_ascii_case("true"))),
        }
    }
}

impl fmt::Display for LiteralType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
