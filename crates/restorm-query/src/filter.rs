//! Filter expression model: predicates and AND-groups.

use crate::error::QueryError;
use crate::value::Value;
use serde::{Deserialize, Serialize};

/// Comparison operators available when authoring predicates.
///
/// Not every operator has a wire mapping: `IsNull` and `IsNotNull` can be
/// authored, but the remote filter convention cannot express them, so the
/// translation engine omits them from the wire payload without raising.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterOperator {
	Eq,
	Ne,
	Lt,
	Lte,
	Gt,
	Gte,
	In,
	Between,
	Like,
	/// Is null check (no wire mapping)
	IsNull,
	/// Is not null check (no wire mapping)
	IsNotNull,
}

/// Operand attached to a predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operand {
	Scalar(Value),
	List(Vec<Value>),
	Range(Value, Value),
	None,
}

impl Operand {
	fn describe(&self) -> &'static str {
		match self {
			Operand::Scalar(_) => "a scalar",
			Operand::List(_) => "a list",
			Operand::Range(_, _) => "a range",
			Operand::None => "no operand",
		}
	}
}

/// A single filter condition: column, operator, operand.
///
/// The column may be a dotted path (`products.price`); only the final
/// segment reaches the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Predicate {
	pub column: String,
	pub operator: FilterOperator,
	pub operand: Operand,
}

impl Predicate {
	/// Create a predicate, validating operator/operand arity.
	///
	/// `In` requires a list operand, `Between` requires a two-value range,
	/// `IsNull`/`IsNotNull` take no operand, and every other operator
	/// requires a scalar. Violations fail here, at authoring time, not when
	/// the query is translated.
	///
	/// # Examples
	///
	/// ```
	/// use restorm_query::{FilterOperator, Operand, Predicate, QueryError, Value};
	///
	/// let ok = Predicate::new("status", FilterOperator::Eq, Operand::Scalar(Value::from("active")));
	/// assert!(ok.is_ok());
	///
	/// let err = Predicate::new("id", FilterOperator::In, Operand::Scalar(Value::from(1)));
	/// assert!(matches!(err, Err(QueryError::MalformedPredicate { .. })));
	/// ```
	pub fn new(
		column: impl Into<String>,
		operator: FilterOperator,
		operand: Operand,
	) -> Result<Self, QueryError> {
		let column = column.into();
		let (valid, expected) = match operator {
			FilterOperator::In => (matches!(operand, Operand::List(_)), "a list"),
			FilterOperator::Between => (matches!(operand, Operand::Range(_, _)), "a range"),
			FilterOperator::IsNull | FilterOperator::IsNotNull => {
				(matches!(operand, Operand::None), "no operand")
			}
			_ => (matches!(operand, Operand::Scalar(_)), "a scalar"),
		};
		if !valid {
			return Err(QueryError::MalformedPredicate {
				column,
				reason: format!(
					"{:?} requires {}, got {}",
					operator,
					expected,
					operand.describe()
				),
			});
		}
		Ok(Self {
			column,
			operator,
			operand,
		})
	}

	/// Equality predicate.
	pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
		Self::scalar(column, FilterOperator::Eq, value)
	}

	/// Negated equality predicate.
	pub fn ne(column: impl Into<String>, value: impl Into<Value>) -> Self {
		Self::scalar(column, FilterOperator::Ne, value)
	}

	pub fn lt(column: impl Into<String>, value: impl Into<Value>) -> Self {
		Self::scalar(column, FilterOperator::Lt, value)
	}

	pub fn lte(column: impl Into<String>, value: impl Into<Value>) -> Self {
		Self::scalar(column, FilterOperator::Lte, value)
	}

	pub fn gt(column: impl Into<String>, value: impl Into<Value>) -> Self {
		Self::scalar(column, FilterOperator::Gt, value)
	}

	pub fn gte(column: impl Into<String>, value: impl Into<Value>) -> Self {
		Self::scalar(column, FilterOperator::Gte, value)
	}

	/// Set-membership predicate.
	pub fn is_in<V: Into<Value>>(
		column: impl Into<String>,
		values: impl IntoIterator<Item = V>,
	) -> Self {
		Self {
			column: column.into(),
			operator: FilterOperator::In,
			operand: Operand::List(values.into_iter().map(Into::into).collect()),
		}
	}

	/// Inclusive range predicate.
	pub fn between(
		column: impl Into<String>,
		low: impl Into<Value>,
		high: impl Into<Value>,
	) -> Self {
		Self {
			column: column.into(),
			operator: FilterOperator::Between,
			operand: Operand::Range(low.into(), high.into()),
		}
	}

	/// Pattern-match predicate. `%` wildcards are accepted here but stripped
	/// at translation time; the remote convention has no wildcard syntax.
	pub fn like(column: impl Into<String>, pattern: impl Into<Value>) -> Self {
		Self::scalar(column, FilterOperator::Like, pattern)
	}

	pub fn is_null(column: impl Into<String>) -> Self {
		Self {
			column: column.into(),
			operator: FilterOperator::IsNull,
			operand: Operand::None,
		}
	}

	pub fn is_not_null(column: impl Into<String>) -> Self {
		Self {
			column: column.into(),
			operator: FilterOperator::IsNotNull,
			operand: Operand::None,
		}
	}

	fn scalar(column: impl Into<String>, operator: FilterOperator, value: impl Into<Value>) -> Self {
		Self {
			column: column.into(),
			operator,
			operand: Operand::Scalar(value.into()),
		}
	}
}

/// Composite filter condition.
///
/// The remote filter namespace is flat, so only AND-composition is
/// representable on the wire; groups exist for authoring ergonomics and are
/// flattened at translation time regardless of nesting depth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterCondition {
	/// A single filter expression
	Single(Predicate),
	/// All conditions must match (AND logic)
	And(Vec<FilterCondition>),
}

impl FilterCondition {
	/// Create a single filter condition
	pub fn single(predicate: Predicate) -> Self {
		Self::Single(predicate)
	}

	/// Create an AND group from multiple conditions
	pub fn and(conditions: Vec<FilterCondition>) -> Self {
		Self::And(conditions)
	}

	/// Create an AND group from multiple predicates
	pub fn and_predicates(predicates: Vec<Predicate>) -> Self {
		Self::And(predicates.into_iter().map(FilterCondition::Single).collect())
	}

	/// Check if this condition is empty (no actual predicates)
	pub fn is_empty(&self) -> bool {
		match self {
			FilterCondition::Single(_) => false,
			FilterCondition::And(conditions) => {
				conditions.is_empty() || conditions.iter().all(|c| c.is_empty())
			}
		}
	}
}

impl From<Predicate> for FilterCondition {
	fn from(predicate: Predicate) -> Self {
		FilterCondition::Single(predicate)
	}
}
