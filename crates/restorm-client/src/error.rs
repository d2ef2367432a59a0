//! Error types for remote query execution.

use restorm_query::QueryError;
use thiserror::Error;

/// Errors surfaced by the execution adapter.
///
/// Read operations propagate these to the caller. Mutations hand the
/// failure to the injected [`ErrorReporter`](crate::report::ErrorReporter)
/// first and then return it; callers treat that `Err` as "operation failed,
/// already logged" and branch instead of re-reporting.
#[derive(Debug, Error)]
pub enum ClientError {
	/// Non-2xx response from the remote endpoint
	#[error("remote request failed with status {status}: {body}")]
	RemoteRequestFailed { status: u16, body: String },

	/// Transport-level failure
	#[error("network error: {0}")]
	Network(#[from] reqwest::Error),

	/// Response envelope is missing a required field
	#[error("malformed response: missing or invalid `{0}` field")]
	MalformedResponse(&'static str),

	/// Mutation attempted on an instance without a primary key
	#[error("model has no primary key; it was never persisted")]
	MissingPrimaryKey,

	/// Model (de)serialization failure
	#[error("serialization error: {0}")]
	Serialization(#[from] serde_json::Error),

	/// A model that does not serialize to a flat record object
	#[error("model did not serialize to a flat record object")]
	InvalidAttributes,

	/// Query authoring or translation failure
	#[error(transparent)]
	Query(#[from] QueryError),
}
