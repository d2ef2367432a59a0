//! # restorm
//!
//! ORM-style structured queries for models whose data lives behind a remote
//! REST API rather than a local database.
//!
//! restorm translates in-memory query intent — equality/comparison/range
//! filters with nested AND-groups, sort order, related-resource inclusion
//! and pagination — into the bracketed `filter[column]` query-string
//! convention, performs the request, and hydrates the JSON response back
//! into typed model instances.
//!
//! The work is split across two crates:
//!
//! - [`restorm_query`] — the pure side: filter expression model, query
//!   descriptor and the deterministic wire translation engine.
//! - [`restorm_client`] — the effectful side: endpoint configuration, HTTP
//!   transport seam, lazy at-most-once fetch execution and model hydration.
//!
//! ## Quick Start
//!
//! ```no_run
//! use restorm::prelude::*;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! struct User {
//! 	id: Option<i64>,
//! 	name: String,
//! 	status: String,
//! }
//!
//! impl Model for User {
//! 	type PrimaryKey = i64;
//!
//! 	fn resource_name() -> &'static str {
//! 		"users"
//! 	}
//!
//! 	fn primary_key(&self) -> Option<Self::PrimaryKey> {
//! 		self.id
//! 	}
//! }
//!
//! # async fn example() -> Result<(), ClientError> {
//! let manager: Manager<User> = Manager::new(ClientConfig::new("https://api.example.com/api"))?;
//!
//! // GET /api/users?page=1&per_page=1000&filter[status]=active&sort=name
//! let active = manager
//! 	.query()
//! 	.filter(Predicate::eq("status", "active"))
//! 	.order_by("name", SortOrder::Asc)
//! 	.get_all()
//! 	.await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error policy
//!
//! Read operations propagate failures. Mutations report the failure to the
//! injected [`ErrorReporter`](restorm_client::ErrorReporter) and then
//! return it — callers branch on `Err` as "failed, already logged".

pub use restorm_client;
pub use restorm_query;

pub use restorm_client::{
	ClientConfig, ClientError, ErrorReporter, HttpResponse, HttpTransport, Manager, Model, Page,
	RemoteQuery, ReqwestTransport, TracingReporter,
};
pub use restorm_query::{
	FilterCondition, FilterOperator, Operand, Pagination, Predicate, QueryDescriptor, QueryError,
	SortKey, SortOrder, TranslationStrategy, Value, WireParams, translate,
};

pub mod prelude {
	pub use restorm_client::prelude::*;
	pub use restorm_query::prelude::*;
}
