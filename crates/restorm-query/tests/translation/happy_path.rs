//! Happy path tests for default translation

use restorm_query::prelude::*;
use restorm_query::translate;
use rstest::rstest;

#[test]
fn empty_descriptor_yields_only_pagination() {
	let params = translate(&QueryDescriptor::new()).unwrap();

	assert_eq!(params.len(), 2);
	assert_eq!(params["page"], "1");
	assert_eq!(params["per_page"], "15");
}

#[test]
fn eq_predicates_map_one_to_one() {
	let descriptor = QueryDescriptor::new()
		.filter(Predicate::eq("status", "active"))
		.filter(Predicate::eq("role", "admin"));

	let params = translate(&descriptor).unwrap();

	assert_eq!(params["filter[status]"], "active");
	assert_eq!(params["filter[role]"], "admin");
}

#[test]
fn between_on_dotted_column() {
	let descriptor = QueryDescriptor::new().filter(Predicate::between("products.price", 5, 10));

	let params = translate(&descriptor).unwrap();

	assert_eq!(params["filter[price]"], "5,10");
	assert!(!params.contains_key("filter[products.price]"));
}

#[test]
fn sort_keys_compose_in_registration_order() {
	let descriptor = QueryDescriptor::new()
		.order_by("name", SortOrder::Asc)
		.order_by("age", SortOrder::Desc);

	let params = translate(&descriptor).unwrap();

	assert_eq!(params["sort"], "name,-age");
}

#[test]
fn includes_compose_in_registration_order() {
	let descriptor = QueryDescriptor::new().include("author").include("comments");

	let params = translate(&descriptor).unwrap();

	assert_eq!(params["include"], "author,comments");
}

#[test]
fn pagination_is_always_first() {
	let descriptor = QueryDescriptor::new()
		.filter(Predicate::eq("status", "active"))
		.set_pagination(3, 20);

	let params = translate(&descriptor).unwrap();
	let keys: Vec<&str> = params.keys().map(String::as_str).collect();

	assert_eq!(&keys[..2], ["page", "per_page"]);
	assert_eq!(params["page"], "3");
	assert_eq!(params["per_page"], "20");
}

#[rstest]
#[case(Predicate::lt("age", 30), "<30")]
#[case(Predicate::lte("age", 30), "<=30")]
#[case(Predicate::gt("age", 30), ">30")]
#[case(Predicate::gte("age", 30), ">=30")]
#[case(Predicate::ne("age", 30), "!30")]
fn comparison_operators_prefix_the_literal_symbol(
	#[case] predicate: Predicate,
	#[case] expected: &str,
) {
	let params = translate(&QueryDescriptor::new().filter(predicate)).unwrap();
	assert_eq!(params["filter[age]"], expected);
}

#[test]
fn in_predicate_joins_elements_with_commas() {
	let descriptor = QueryDescriptor::new().filter(Predicate::is_in("id", vec![1, 2, 3]));

	let params = translate(&descriptor).unwrap();

	assert_eq!(params["filter[id]"], "1,2,3");
}
