//! Error path tests: authoring-time arity checks and resolver contract

use restorm_query::prelude::*;
use restorm_query::translate;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case(FilterOperator::In, Operand::Scalar(Value::from(1)))]
#[case(FilterOperator::In, Operand::Range(Value::from(1), Value::from(2)))]
#[case(FilterOperator::Between, Operand::Scalar(Value::from(5)))]
#[case(FilterOperator::Between, Operand::List(vec![Value::from(5), Value::from(10)]))]
#[case(FilterOperator::Eq, Operand::List(vec![Value::from(1)]))]
#[case(FilterOperator::Lt, Operand::None)]
#[case(FilterOperator::IsNull, Operand::Scalar(Value::from(1)))]
fn wrong_arity_fails_at_authoring_time(
	#[case] operator: FilterOperator,
	#[case] operand: Operand,
) {
	let result = Predicate::new("column", operator, operand);
	assert!(matches!(
		result,
		Err(QueryError::MalformedPredicate { .. })
	));
}

#[test]
fn malformed_predicate_reports_the_column() {
	let result = Predicate::new("id", FilterOperator::In, Operand::Scalar(Value::from(1)));
	match result {
		Err(QueryError::MalformedPredicate { column, reason }) => {
			assert_eq!(column, "id");
			assert!(reason.contains("list"));
		}
		other => panic!("expected MalformedPredicate, got {:?}", other),
	}
}

#[test]
fn resolver_mapping_is_used_verbatim() {
	let descriptor = QueryDescriptor::new()
		.filter(Predicate::eq("status", "active"))
		.include("author")
		.with_resolver(|_| json!({"q": "custom", "limit": 5}));

	let params = translate(&descriptor).unwrap();

	// Default composition is bypassed entirely.
	assert_eq!(params.len(), 2);
	assert_eq!(params["q"], "custom");
	assert_eq!(params["limit"], "5");
	assert!(!params.contains_key("page"));
	assert!(!params.contains_key("filter[status]"));
	assert!(!params.contains_key("include"));
}

#[test]
fn resolver_pair_sequence_is_accepted() {
	let descriptor =
		QueryDescriptor::new().with_resolver(|_| json!([["q", "custom"], ["page", 2]]));

	let params = translate(&descriptor).unwrap();

	assert_eq!(params["q"], "custom");
	assert_eq!(params["page"], "2");
}

#[test]
fn resolver_sees_the_descriptor() {
	let descriptor = QueryDescriptor::new()
		.set_pagination(9, 3)
		.with_resolver(|d| json!({"page": d.pagination().page.to_string()}));

	let params = translate(&descriptor).unwrap();

	assert_eq!(params["page"], "9");
}

#[rstest]
#[case(json!("just a string"))]
#[case(json!(42))]
#[case(json!(null))]
#[case(json!([["key", "value", "extra"]]))]
#[case(json!([{"key": "value"}]))]
#[case(json!({"nested": {"not": "scalar"}}))]
fn resolver_contract_violations_fail(#[case] resolved: serde_json::Value) {
	let descriptor = QueryDescriptor::new().with_resolver(move |_| resolved.clone());

	let result = translate(&descriptor);

	assert!(matches!(result, Err(QueryError::InvalidResolverResult)));
}
