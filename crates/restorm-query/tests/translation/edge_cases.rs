//! Edge case tests for default translation

use restorm_query::prelude::*;
use restorm_query::translate;

#[test]
fn like_wildcards_are_stripped() {
	let descriptor = QueryDescriptor::new().filter(Predicate::like("name", "%foo%"));

	let params = translate(&descriptor).unwrap();

	assert_eq!(params["filter[name]"], "foo");
}

#[test]
fn like_with_interior_wildcard_is_collapsed() {
	let descriptor = QueryDescriptor::new().filter(Predicate::like("name", "fo%o"));

	let params = translate(&descriptor).unwrap();

	assert_eq!(params["filter[name]"], "foo");
}

#[test]
fn duplicate_columns_last_write_wins() {
	let descriptor = QueryDescriptor::new()
		.filter(Predicate::eq("status", "active"))
		.filter(Predicate::eq("status", "archived"));

	let params = translate(&descriptor).unwrap();

	assert_eq!(params["filter[status]"], "archived");
	assert_eq!(params.keys().filter(|k| k.starts_with("filter[")).count(), 1);
}

#[test]
fn nested_groups_flatten_to_implicit_and() {
	let group = FilterCondition::and(vec![
		FilterCondition::single(Predicate::eq("status", "active")),
		FilterCondition::and(vec![
			FilterCondition::single(Predicate::gte("age", 18)),
			FilterCondition::and(vec![FilterCondition::single(Predicate::lt("age", 65))]),
		]),
	]);
	let descriptor = QueryDescriptor::new().filter_group(group);

	let params = translate(&descriptor).unwrap();

	assert_eq!(params["filter[status]"], "active");
	// Inner predicates on the same column collide in the flat namespace;
	// the deeper (later-walked) one wins.
	assert_eq!(params["filter[age]"], "<65");
}

#[test]
fn deeply_nested_groups_flatten() {
	let mut condition = FilterCondition::single(Predicate::eq("leaf", "value"));
	for _ in 0..64 {
		condition = FilterCondition::and(vec![condition]);
	}
	let descriptor = QueryDescriptor::new().filter_group(condition);

	let params = translate(&descriptor).unwrap();

	assert_eq!(params["filter[leaf]"], "value");
}

#[test]
fn unmapped_operators_are_silently_dropped() {
	let descriptor = QueryDescriptor::new()
		.filter(Predicate::is_null("deleted_at"))
		.filter(Predicate::eq("status", "active"));

	let params = translate(&descriptor).unwrap();

	assert!(!params.contains_key("filter[deleted_at]"));
	assert_eq!(params["filter[status]"], "active");
}

#[test]
fn empty_groups_contribute_nothing() {
	let descriptor = QueryDescriptor::new().filter_group(FilterCondition::and(vec![]));

	let params = translate(&descriptor).unwrap();

	assert_eq!(params.len(), 2);
}

#[test]
fn duplicate_includes_register_once() {
	let descriptor = QueryDescriptor::new()
		.include("author")
		.include("comments")
		.include("author");

	let params = translate(&descriptor).unwrap();

	assert_eq!(params["include"], "author,comments");
}

#[test]
fn all_records_mode_overrides_pagination() {
	let descriptor = QueryDescriptor::new().set_pagination(4, 25).set_all_records();

	let params = translate(&descriptor).unwrap();

	assert_eq!(params["page"], "1");
	assert_eq!(params["per_page"], "1000");
}
