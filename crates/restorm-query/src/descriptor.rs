//! Query descriptor: the aggregate a single logical query owns.

use crate::filter::{FilterCondition, Predicate};
use crate::types::{Pagination, SortKey, SortOrder};
use std::fmt;
use std::sync::Arc;

/// Callback used by [`TranslationStrategy::Custom`].
///
/// The returned JSON must be an object (a mapping) or an array of
/// `[key, value]` pairs; anything else fails translation with
/// [`QueryError::InvalidResolverResult`](crate::QueryError::InvalidResolverResult).
pub type Resolver = Arc<dyn Fn(&QueryDescriptor) -> serde_json::Value + Send + Sync>;

/// How a descriptor is turned into wire parameters.
///
/// Selected at descriptor construction; the translation engine dispatches
/// on the variant instead of probing a nullable callback.
#[derive(Clone, Default)]
pub enum TranslationStrategy {
	/// Compose page/per_page, `filter[...]`, `include` and `sort` entries
	/// from the descriptor.
	#[default]
	Default,
	/// Bypass composition entirely and use the callback's result verbatim.
	Custom(Resolver),
}

impl fmt::Debug for TranslationStrategy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			TranslationStrategy::Default => f.write_str("Default"),
			TranslationStrategy::Custom(_) => f.write_str("Custom(..)"),
		}
	}
}

/// Aggregated query intent: filter tree, sort keys, includes, pagination
/// and the translation strategy.
///
/// Created fresh per logical query and mutated only through the builder
/// methods below; no I/O happens here.
///
/// # Examples
///
/// ```
/// use restorm_query::{Predicate, QueryDescriptor, SortOrder, translate};
///
/// let descriptor = QueryDescriptor::new()
/// 	.filter(Predicate::eq("status", "active"))
/// 	.order_by("name", SortOrder::Asc)
/// 	.include("author");
///
/// let params = translate(&descriptor).unwrap();
/// assert_eq!(params["filter[status]"], "active");
/// assert_eq!(params["sort"], "name");
/// assert_eq!(params["include"], "author");
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryDescriptor {
	/// Children of the implicit root AND-group.
	filters: Vec<FilterCondition>,
	sorts: Vec<SortKey>,
	includes: Vec<String>,
	pagination: Pagination,
	strategy: TranslationStrategy,
}

impl QueryDescriptor {
	pub fn new() -> Self {
		Self::default()
	}

	/// Add a single predicate to the root group.
	pub fn filter(mut self, predicate: Predicate) -> Self {
		self.filters.push(FilterCondition::Single(predicate));
		self
	}

	/// Add a (possibly nested) condition group to the root group.
	pub fn filter_group(mut self, condition: FilterCondition) -> Self {
		self.filters.push(condition);
		self
	}

	/// Append a sort key; registration order is wire order.
	pub fn order_by(mut self, column: impl Into<String>, order: SortOrder) -> Self {
		self.sorts.push(SortKey::new(column, order));
		self
	}

	/// Register a relation for inclusion. Duplicates are ignored; the first
	/// registration fixes the wire position.
	pub fn include(mut self, relation: impl Into<String>) -> Self {
		let relation = relation.into();
		if !self.includes.contains(&relation) {
			self.includes.push(relation);
		}
		self
	}

	pub fn set_pagination(mut self, page: u64, per_page: u64) -> Self {
		self.pagination = Pagination::new(page, per_page);
		self
	}

	/// Force all-records mode, overriding any prior pagination.
	pub fn set_all_records(mut self) -> Self {
		self.pagination = Pagination::all_records();
		self
	}

	/// Replace default translation with a custom resolver.
	pub fn with_resolver<F>(mut self, resolver: F) -> Self
	where
		F: Fn(&QueryDescriptor) -> serde_json::Value + Send + Sync + 'static,
	{
		self.strategy = TranslationStrategy::Custom(Arc::new(resolver));
		self
	}

	pub fn filters(&self) -> &[FilterCondition] {
		&self.filters
	}

	pub fn sorts(&self) -> &[SortKey] {
		&self.sorts
	}

	pub fn includes(&self) -> &[String] {
		&self.includes
	}

	pub fn pagination(&self) -> Pagination {
		self.pagination
	}

	pub fn strategy(&self) -> &TranslationStrategy {
		&self.strategy
	}
}
