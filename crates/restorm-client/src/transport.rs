//! HTTP transport collaborator boundary.
//!
//! The execution adapter depends on a minimal request surface; connection
//! handling, TLS, retries and timeouts belong to implementations. The
//! default implementation is backed by [`reqwest`].

use crate::config::ClientConfig;
use crate::error::ClientError;
use async_trait::async_trait;
use restorm_query::WireParams;
use serde_json::Value;

/// Response surface the adapter consumes: status plus parsed JSON body.
#[derive(Debug, Clone)]
pub struct HttpResponse {
	pub status: u16,
	pub body: Value,
}

impl HttpResponse {
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	/// Map a non-2xx response to [`ClientError::RemoteRequestFailed`],
	/// keeping status and body for diagnostics.
	pub fn throw_on_error(self) -> Result<Self, ClientError> {
		if self.is_success() {
			Ok(self)
		} else {
			Err(ClientError::RemoteRequestFailed {
				status: self.status,
				body: self.body.to_string(),
			})
		}
	}
}

/// Minimal HTTP client surface the execution adapter depends on.
#[async_trait]
pub trait HttpTransport: Send + Sync {
	async fn get(&self, url: &str, params: &WireParams) -> Result<HttpResponse, ClientError>;
	async fn post(&self, url: &str, body: &Value) -> Result<HttpResponse, ClientError>;
	async fn put(&self, url: &str, body: &Value) -> Result<HttpResponse, ClientError>;
	async fn delete(&self, url: &str) -> Result<HttpResponse, ClientError>;
}

/// Default transport backed by a shared [`reqwest::Client`].
pub struct ReqwestTransport {
	client: reqwest::Client,
}

impl ReqwestTransport {
	pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
		let client = reqwest::Client::builder().timeout(config.timeout).build()?;
		Ok(Self { client })
	}

	async fn into_response(response: reqwest::Response) -> Result<HttpResponse, ClientError> {
		let status = response.status().as_u16();
		let text = response.text().await?;
		// Non-JSON bodies (empty DELETE responses, HTML error pages) are
		// preserved as-is for diagnostics.
		let body = if text.is_empty() {
			Value::Null
		} else {
			match serde_json::from_str(&text) {
				Ok(parsed) => parsed,
				Err(_) => Value::String(text),
			}
		};
		Ok(HttpResponse { status, body })
	}
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
	async fn get(&self, url: &str, params: &WireParams) -> Result<HttpResponse, ClientError> {
		let response = self.client.get(url).query(params).send().await?;
		Self::into_response(response).await
	}

	async fn post(&self, url: &str, body: &Value) -> Result<HttpResponse, ClientError> {
		let response = self.client.post(url).json(body).send().await?;
		Self::into_response(response).await
	}

	async fn put(&self, url: &str, body: &Value) -> Result<HttpResponse, ClientError> {
		let response = self.client.put(url).json(body).send().await?;
		Self::into_response(response).await
	}

	async fn delete(&self, url: &str) -> Result<HttpResponse, ClientError> {
		let response = self.client.delete(url).send().await?;
		Self::into_response(response).await
	}
}
