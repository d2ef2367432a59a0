//! Translation of a query descriptor into wire parameters.

use crate::descriptor::{QueryDescriptor, TranslationStrategy};
use crate::error::QueryError;
use crate::filter::{FilterCondition, FilterOperator, Operand, Predicate};
use crate::types::SortOrder;
use indexmap::IndexMap;

/// Flat string-keyed query-string payload sent to the remote endpoint.
///
/// Insertion order is preserved so the produced query string is
/// deterministic for a given descriptor.
pub type WireParams = IndexMap<String, String>;

/// Translate a descriptor into wire parameters.
///
/// With [`TranslationStrategy::Default`] the output carries `page` and
/// `per_page`, one `filter[column]` entry per mappable predicate, and
/// `include`/`sort` entries when registered. A custom resolver bypasses
/// that composition entirely and its result is used verbatim.
pub fn translate(descriptor: &QueryDescriptor) -> Result<WireParams, QueryError> {
	match descriptor.strategy() {
		TranslationStrategy::Custom(resolver) => from_resolver(resolver(descriptor)),
		TranslationStrategy::Default => Ok(compose(descriptor)),
	}
}

fn compose(descriptor: &QueryDescriptor) -> WireParams {
	let mut params = WireParams::new();
	let pagination = descriptor.pagination();
	params.insert("page".to_string(), pagination.page.to_string());
	params.insert("per_page".to_string(), pagination.per_page.to_string());

	for condition in descriptor.filters() {
		flatten_into(&mut params, condition);
	}

	if !descriptor.includes().is_empty() {
		params.insert("include".to_string(), descriptor.includes().join(","));
	}

	if !descriptor.sorts().is_empty() {
		let sort = descriptor
			.sorts()
			.iter()
			.map(|key| match key.order {
				SortOrder::Asc => key.column.clone(),
				SortOrder::Desc => format!("-{}", key.column),
			})
			.collect::<Vec<_>>()
			.join(",");
		params.insert("sort".to_string(), sort);
	}

	params
}

/// Depth-first walk; nested groups collapse into the flat filter namespace.
///
/// Colliding wire keys overwrite: the last predicate written for a column
/// wins. That is a property of the flat namespace, carried over faithfully.
fn flatten_into(params: &mut WireParams, condition: &FilterCondition) {
	match condition {
		FilterCondition::Single(predicate) => {
			if let Some((key, value)) = wire_entry(predicate) {
				params.insert(key, value);
			}
		}
		FilterCondition::And(children) => {
			for child in children {
				flatten_into(params, child);
			}
		}
	}
}

/// Operator mapping table. Operators the wire convention cannot express
/// produce no entry at all.
fn wire_entry(predicate: &Predicate) -> Option<(String, String)> {
	let value = match (predicate.operator, &predicate.operand) {
		(FilterOperator::Eq, Operand::Scalar(v)) => v.to_string(),
		(FilterOperator::Ne, Operand::Scalar(v)) => format!("!{}", v),
		(FilterOperator::Lt, Operand::Scalar(v)) => format!("<{}", v),
		(FilterOperator::Lte, Operand::Scalar(v)) => format!("<={}", v),
		(FilterOperator::Gt, Operand::Scalar(v)) => format!(">{}", v),
		(FilterOperator::Gte, Operand::Scalar(v)) => format!(">={}", v),
		(FilterOperator::In, Operand::List(values)) => values
			.iter()
			.map(ToString::to_string)
			.collect::<Vec<_>>()
			.join(","),
		(FilterOperator::Between, Operand::Range(low, high)) => format!("{},{}", low, high),
		// The remote convention has no wildcard syntax; stripping is the
		// documented, if lossy, compatibility behavior.
		(FilterOperator::Like, Operand::Scalar(v)) => v.to_string().replace('%', ""),
		_ => return None,
	};
	Some((format!("filter[{}]", leaf_column(&predicate.column)), value))
}

/// Only the final segment of a dotted column path reaches the wire.
fn leaf_column(column: &str) -> &str {
	column.rsplit('.').next().unwrap_or(column)
}

/// Validate and convert a custom resolver's result.
///
/// Accepted shapes: a JSON object with scalar members, or an array of
/// `[key, value]` pairs with string keys and scalar values.
fn from_resolver(value: serde_json::Value) -> Result<WireParams, QueryError> {
	match value {
		serde_json::Value::Object(map) => {
			let mut params = WireParams::new();
			for (key, member) in map {
				let rendered = scalar_to_string(&member).ok_or(QueryError::InvalidResolverResult)?;
				params.insert(key, rendered);
			}
			Ok(params)
		}
		serde_json::Value::Array(entries) => {
			let mut params = WireParams::new();
			for entry in entries {
				let pair = entry
					.as_array()
					.filter(|pair| pair.len() == 2)
					.ok_or(QueryError::InvalidResolverResult)?;
				let key = pair[0].as_str().ok_or(QueryError::InvalidResolverResult)?;
				let rendered =
					scalar_to_string(&pair[1]).ok_or(QueryError::InvalidResolverResult)?;
				params.insert(key.to_string(), rendered);
			}
			Ok(params)
		}
		_ => Err(QueryError::InvalidResolverResult),
	}
}

fn scalar_to_string(value: &serde_json::Value) -> Option<String> {
	match value {
		serde_json::Value::String(s) => Some(s.clone()),
		serde_json::Value::Number(n) => Some(n.to_string()),
		serde_json::Value::Bool(b) => Some(b.to_string()),
		_ => None,
	}
}
