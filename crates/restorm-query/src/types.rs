//! Sort keys, include registration and pagination parameters.

use serde::{Deserialize, Serialize};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
	Asc,
	Desc,
}

/// A single sort key. The order of appearance in the descriptor determines
/// the wire order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
	pub column: String,
	pub order: SortOrder,
}

impl SortKey {
	pub fn new(column: impl Into<String>, order: SortOrder) -> Self {
		Self {
			column: column.into(),
			order,
		}
	}
}

/// Server-side default page size when a query does not ask for one.
pub const DEFAULT_PER_PAGE: u64 = 15;

/// Page size used by all-records mode: a single oversized page instead of
/// true pagination.
pub const ALL_RECORDS_PER_PAGE: u64 = 1000;

/// Page-number pagination parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
	pub page: u64,
	pub per_page: u64,
}

impl Pagination {
	pub fn new(page: u64, per_page: u64) -> Self {
		Self { page, per_page }
	}

	/// The "fetch everything in one page" convention: page 1, 1000 records.
	pub fn all_records() -> Self {
		Self {
			page: 1,
			per_page: ALL_RECORDS_PER_PAGE,
		}
	}
}

impl Default for Pagination {
	fn default() -> Self {
		Self {
			page: 1,
			per_page: DEFAULT_PER_PAGE,
		}
	}
}
