//! Typed cell values after normalization.

use celestial_core::numeric::{to_double, to_integer, to_long};
use serde::Serialize;
use std::fmt;

/// How a survey spells its source identifier. A survey never mixes the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    Text,
    Numeric,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum SourceId {
    Text(String),
    Numeric(i64),
}

impl SourceId {
    pub fn parse(kind: IdKind, cell: &str) -> Self {
        match kind {
            IdKind::Text => Self::Text(cell.trim().to_string()),
            IdKind::Numeric => Self::Numeric(to_long(cell)),
        }
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Numeric(n) => write!(f, "{}", n),
        }
    }
}

/// Storage type of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Double,
    Long,
    Integer,
    Text,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Double(f64),
    Long(i64),
    Integer(i32),
    Text(String),
}

impl Value {
    pub fn parse(kind: ValueKind, cell: &str) -> Self {
        match kind {
            ValueKind::Double => Self::Double(to_double(cell)),
            ValueKind::Long => Self::Long(to_long(cell)),
            ValueKind::Integer => Self::Integer(to_integer(cell)),
            ValueKind::Text => Self::Text(cell.trim().to_string()),
        }
    }

    /// Numeric view of the value. Text yields the sentinel.
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Double(v) => *v,
            Self::Long(v) => *v as f64,
            Self::Integer(v) => f64::from(*v),
            Self::Text(_) => 0.0,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Double(v) => write!(f, "{}", v),
            Self::Long(v) => write!(f, "{}", v),
            Self::Integer(v) => write!(f, "{}", v),
            Self::Text(s) => f.write_str(s),
        }
    }
}
