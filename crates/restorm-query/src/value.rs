//! Scalar operand values for filter predicates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar value usable as a predicate operand.
///
/// The wire convention carries every value as a string, so the only thing a
/// [`Value`] needs beyond construction is its [`fmt::Display`] rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
	String(String),
	Integer(i64),
	Float(f64),
	Boolean(bool),
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Value::String(s) => f.write_str(s),
			Value::Integer(i) => write!(f, "{}", i),
			Value::Float(x) => write!(f, "{}", x),
			Value::Boolean(b) => write!(f, "{}", b),
		}
	}
}

// From implementations for Value
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

impl From<i32> for Value {
	fn from(i: i32) -> Self {
		Value::Integer(i as i64)
	}
}

impl From<u32> for Value {
	fn from(i: u32) -> Self {
		Value::Integer(i as i64)
	}
}

impl From<f64> for Value {
	fn from(x: f64) -> Self {
		Value::Float(x)
	}
}

impl From<bool> for Value {
	fn from(b: bool) -> Self {
		Value::Boolean(b)
	}
}
