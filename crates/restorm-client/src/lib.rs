//! # restorm-client
//!
//! Execution adapter running `restorm-query` descriptors against a remote
//! REST API.
//!
//! A [`Manager`] is the per-model entry point: it owns the endpoint
//! configuration, the HTTP transport and the error reporter, hands out
//! [`RemoteQuery`] instances for reads and issues mutations directly.
//!
//! ## Fetch semantics
//!
//! Each [`RemoteQuery`] performs at most one GET in its lifetime: the first
//! data-requiring operation (`count`, `paginate`, `get_all`) translates the
//! descriptor, fetches, and pins the response; subsequent reads are served
//! from the held response.
//!
//! ## Error policy
//!
//! Reads propagate every failure ([`ClientError`]) to the caller. Mutations
//! (`create`, `update`, `save`, `delete`) report the failure to the
//! injected [`ErrorReporter`] and then return it; callers branch on `Err`
//! as "operation failed, already logged" instead of re-raising.

pub mod config;
pub mod error;
pub mod manager;
pub mod model;
pub mod page;
pub mod query;
pub mod report;
pub mod transport;

pub use config::ClientConfig;
pub use error::ClientError;
pub use manager::Manager;
pub use model::Model;
pub use page::Page;
pub use query::RemoteQuery;
pub use report::{ErrorReporter, TracingReporter};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};

pub mod prelude {
	pub use crate::config::ClientConfig;
	pub use crate::error::ClientError;
	pub use crate::manager::Manager;
	pub use crate::model::Model;
	pub use crate::page::Page;
	pub use crate::query::RemoteQuery;
	pub use crate::report::{ErrorReporter, TracingReporter};
	pub use crate::transport::{HttpResponse, HttpTransport, ReqwestTransport};
}
