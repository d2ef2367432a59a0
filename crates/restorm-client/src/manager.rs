//! Per-model entry point and mutation operations.

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::model::Model;
use crate::query::RemoteQuery;
use crate::report::{ErrorReporter, TracingReporter};
use crate::transport::{HttpTransport, ReqwestTransport};
use restorm_query::Predicate;
use serde_json::{Map, Value};
use std::marker::PhantomData;
use std::sync::Arc;

/// Model manager: builds queries and issues mutations for one resource.
///
/// Reads obtained through [`query`](Manager::query) propagate errors to the
/// caller. Mutations follow a report-then-return policy instead: the
/// failure is handed to the injected [`ErrorReporter`] and surfaced as
/// `Err`, which callers treat as "operation failed, already logged" —
/// branch on it, do not re-report.
pub struct Manager<M: Model> {
	config: ClientConfig,
	transport: Arc<dyn HttpTransport>,
	reporter: Arc<dyn ErrorReporter>,
	_marker: PhantomData<M>,
}

impl<M: Model> Manager<M> {
	/// Create a manager with the default reqwest transport and tracing
	/// reporter.
	pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
		let transport = Arc::new(ReqwestTransport::new(&config)?);
		Ok(Self::with_parts(config, transport, Arc::new(TracingReporter)))
	}

	/// Create a manager from explicit collaborators.
	pub fn with_parts(
		config: ClientConfig,
		transport: Arc<dyn HttpTransport>,
		reporter: Arc<dyn ErrorReporter>,
	) -> Self {
		Self {
			config,
			transport,
			reporter,
			_marker: PhantomData,
		}
	}

	/// Swap the error reporter.
	pub fn with_reporter(mut self, reporter: Arc<dyn ErrorReporter>) -> Self {
		self.reporter = reporter;
		self
	}

	/// Fresh query against this resource, sharing the manager's transport.
	pub fn query(&self) -> RemoteQuery<M> {
		RemoteQuery::with_transport(self.config.clone(), Arc::clone(&self.transport))
	}

	/// Single record by primary key, or `None` when the server returns an
	/// empty page.
	pub async fn find(&self, pk: M::PrimaryKey) -> Result<Option<M>, ClientError> {
		let mut query = self.query().filter(Predicate::eq("id", pk.to_string()));
		Ok(query.get_all().await?.into_iter().next())
	}

	/// POST the model's attributes, hydrating the created record.
	pub async fn create(&self, model: &M) -> Result<M, ClientError> {
		let outcome = self.try_create(model).await;
		self.reported(outcome)
	}

	/// PUT an explicit attribute map against the model's record.
	pub async fn update(&self, model: &M, attributes: Map<String, Value>) -> Result<M, ClientError> {
		let outcome = self.try_update(model, attributes).await;
		self.reported(outcome)
	}

	/// PUT the model's full current attribute set.
	pub async fn save(&self, model: &M) -> Result<M, ClientError> {
		let outcome = self.try_save(model).await;
		self.reported(outcome)
	}

	/// DELETE the model's record; any 2xx counts as success. Independent of
	/// any query's fetch state.
	pub async fn delete(&self, model: &M) -> Result<bool, ClientError> {
		let outcome = self.try_delete(model).await;
		self.reported(outcome)
	}

	async fn try_create(&self, model: &M) -> Result<M, ClientError> {
		let attributes = Value::Object(model.attributes_to_array()?);
		let url = self.config.url_for(M::resource_name());
		let response = self
			.transport
			.post(&url, &attributes)
			.await?
			.throw_on_error()?;
		Self::hydrate_single(response.body)
	}

	async fn try_update(&self, model: &M, attributes: Map<String, Value>) -> Result<M, ClientError> {
		let url = self.record_url(model)?;
		let body = Value::Object(attributes);
		let response = self.transport.put(&url, &body).await?.throw_on_error()?;
		Self::hydrate_single(response.body)
	}

	async fn try_save(&self, model: &M) -> Result<M, ClientError> {
		let attributes = model.attributes_to_array()?;
		self.try_update(model, attributes).await
	}

	async fn try_delete(&self, model: &M) -> Result<bool, ClientError> {
		let url = self.record_url(model)?;
		self.transport.delete(&url).await?.throw_on_error()?;
		Ok(true)
	}

	fn record_url(&self, model: &M) -> Result<String, ClientError> {
		let pk = model.primary_key().ok_or(ClientError::MissingPrimaryKey)?;
		Ok(format!(
			"{}/{}",
			self.config.url_for(M::resource_name()),
			pk
		))
	}

	fn hydrate_single(record: Value) -> Result<M, ClientError> {
		M::hydrate(vec![record])?
			.into_iter()
			.next()
			.ok_or(ClientError::MalformedResponse("record"))
	}

	fn reported<T>(&self, outcome: Result<T, ClientError>) -> Result<T, ClientError> {
		if let Err(error) = &outcome {
			self.reporter.report(error);
		}
		outcome
	}
}
