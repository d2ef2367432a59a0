//! Client configuration.

use std::time::Duration;

/// Remote endpoint configuration, injected into the execution adapter at
/// construction. There is no ambient or global client state.
///
/// # Examples
///
/// ```
/// use restorm_client::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new("https://api.example.com/api")
/// 	.with_timeout(Duration::from_secs(10));
/// assert_eq!(config.url_for("users"), "https://api.example.com/api/users");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
	/// Base URL of the remote API
	pub endpoint: String,

	/// Request timeout applied when the default transport is built
	pub timeout: Duration,
}

impl ClientConfig {
	pub fn new(endpoint: impl Into<String>) -> Self {
		Self {
			endpoint: endpoint.into(),
			timeout: Duration::from_secs(30),
		}
	}

	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;
		self
	}

	/// Compose a URL under the endpoint, tolerating trailing slashes.
	pub fn url_for(&self, path: &str) -> String {
		format!(
			"{}/{}",
			self.endpoint.trim_end_matches('/'),
			path.trim_start_matches('/')
		)
	}
}
