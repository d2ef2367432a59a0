//! Error reporting collaborator for mutation failures.

use crate::error::ClientError;

/// Receives mutation failures before they are returned to the caller.
///
/// Injected at adapter construction. Read operations never touch the
/// reporter; they propagate their errors instead.
pub trait ErrorReporter: Send + Sync {
	fn report(&self, error: &ClientError);
}

/// Default reporter: structured log via `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
	fn report(&self, error: &ClientError) {
		tracing::error!(error = %error, "remote mutation failed");
	}
}
