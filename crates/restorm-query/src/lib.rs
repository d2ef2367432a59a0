//! # restorm-query
//!
//! Filter expression model, query descriptor and wire translation engine
//! for querying remote REST resources with ORM-style intent.
//!
//! A caller authors a [`QueryDescriptor`] through builder calls — predicates
//! (with optional AND-group nesting), sort keys, related-resource includes
//! and pagination — and [`translate`] turns it into the flat, bracketed
//! query-string convention the remote side understands:
//!
//! - `filter[column]=value` per predicate, with operator prefixes
//!   (`!`, `<`, `<=`, `>`, `>=`) and comma-joined lists/ranges
//! - `sort=name,-age` (leading `-` for descending)
//! - `include=author,comments`
//! - `page` / `per_page`
//!
//! No I/O happens in this crate; execution lives in `restorm-client`.
//!
//! ## Quick Start
//!
//! ```
//! use restorm_query::{Predicate, QueryDescriptor, SortOrder, translate};
//!
//! let descriptor = QueryDescriptor::new()
//! 	.filter(Predicate::eq("status", "active"))
//! 	.filter(Predicate::between("products.price", 5, 10))
//! 	.order_by("name", SortOrder::Asc)
//! 	.order_by("age", SortOrder::Desc)
//! 	.include("author")
//! 	.set_pagination(2, 50);
//!
//! let params = translate(&descriptor).unwrap();
//! assert_eq!(params["page"], "2");
//! assert_eq!(params["per_page"], "50");
//! assert_eq!(params["filter[status]"], "active");
//! assert_eq!(params["filter[price]"], "5,10");
//! assert_eq!(params["sort"], "name,-age");
//! assert_eq!(params["include"], "author");
//! ```
//!
//! ## Translation caveats
//!
//! The wire namespace is flat: nested groups flatten to implicit AND, and a
//! later predicate on an already-used column overwrites the earlier one.
//! Operators the convention cannot express (`IsNull`, `IsNotNull`) are
//! silently omitted. Both behaviors are part of the convention's contract.

pub mod descriptor;
pub mod error;
pub mod filter;
pub mod translate;
pub mod types;
pub mod value;

pub use descriptor::{QueryDescriptor, Resolver, TranslationStrategy};
pub use error::QueryError;
pub use filter::{FilterCondition, FilterOperator, Operand, Predicate};
pub use translate::{WireParams, translate};
pub use types::{ALL_RECORDS_PER_PAGE, DEFAULT_PER_PAGE, Pagination, SortKey, SortOrder};
pub use value::Value;

pub mod prelude {
	pub use crate::descriptor::{QueryDescriptor, TranslationStrategy};
	pub use crate::error::QueryError;
	pub use crate::filter::{FilterCondition, FilterOperator, Operand, Predicate};
	pub use crate::translate::{WireParams, translate};
	pub use crate::types::{Pagination, SortKey, SortOrder};
	pub use crate::value::Value;
}
