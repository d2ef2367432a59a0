//! Remote query execution: lazy, at-most-once fetch per query instance.

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::model::Model;
use crate::page::Page;
use crate::transport::{HttpTransport, ReqwestTransport};
use restorm_query::{FilterCondition, Predicate, QueryDescriptor, SortOrder, translate};
use serde_json::Value;
use std::marker::PhantomData;
use std::sync::Arc;

/// Fetch guard: transitions unfetched -> fetched exactly once, irreversibly.
#[derive(Debug, Default)]
struct FetchState {
	fetched: bool,
	response: Option<Value>,
}

/// A single logical query against a remote resource.
///
/// The first data-requiring operation translates the descriptor, issues one
/// GET and stores the response; subsequent reads on the same instance are
/// served from the held response without another request.
///
/// Instances are not meant to be shared across tasks: data-requiring
/// operations take `&mut self`, so concurrent use of one instance is
/// rejected at compile time rather than synchronized internally.
///
/// # Examples
///
/// ```no_run
/// use restorm_client::{ClientConfig, Manager, Model};
/// use restorm_query::{Predicate, SortOrder};
/// # use serde::{Deserialize, Serialize};
/// # #[derive(Debug, Clone, Serialize, Deserialize)]
/// # struct User { id: Option<i64>, name: String }
/// # impl Model for User {
/// # 	type PrimaryKey = i64;
/// # 	fn resource_name() -> &'static str { "users" }
/// # 	fn primary_key(&self) -> Option<Self::PrimaryKey> { self.id }
/// # }
///
/// # async fn example() -> Result<(), restorm_client::ClientError> {
/// let manager: Manager<User> = Manager::new(ClientConfig::new("https://api.example.com/api"))?;
/// let users = manager
/// 	.query()
/// 	.filter(Predicate::eq("status", "active"))
/// 	.order_by("name", SortOrder::Asc)
/// 	.include("roles")
/// 	.get_all()
/// 	.await?;
/// # Ok(())
/// # }
/// ```
pub struct RemoteQuery<M: Model> {
	descriptor: QueryDescriptor,
	config: ClientConfig,
	transport: Arc<dyn HttpTransport>,
	state: FetchState,
	_marker: PhantomData<M>,
}

impl<M: Model> RemoteQuery<M> {
	/// Create a standalone query with its own default transport.
	pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
		let transport = Arc::new(ReqwestTransport::new(&config)?);
		Ok(Self::with_transport(config, transport))
	}

	/// Create a query sharing an existing transport (the manager path).
	pub fn with_transport(config: ClientConfig, transport: Arc<dyn HttpTransport>) -> Self {
		Self {
			descriptor: QueryDescriptor::new(),
			config,
			transport,
			state: FetchState::default(),
			_marker: PhantomData,
		}
	}

	pub fn filter(mut self, predicate: Predicate) -> Self {
		self.descriptor = self.descriptor.filter(predicate);
		self
	}

	pub fn filter_group(mut self, condition: FilterCondition) -> Self {
		self.descriptor = self.descriptor.filter_group(condition);
		self
	}

	pub fn order_by(mut self, column: impl Into<String>, order: SortOrder) -> Self {
		self.descriptor = self.descriptor.order_by(column, order);
		self
	}

	pub fn include(mut self, relation: impl Into<String>) -> Self {
		self.descriptor = self.descriptor.include(relation);
		self
	}

	pub fn paginate_by(mut self, page: u64, per_page: u64) -> Self {
		self.descriptor = self.descriptor.set_pagination(page, per_page);
		self
	}

	/// Replace default translation with a custom resolver.
	pub fn with_resolver<F>(mut self, resolver: F) -> Self
	where
		F: Fn(&QueryDescriptor) -> Value + Send + Sync + 'static,
	{
		self.descriptor = self.descriptor.with_resolver(resolver);
		self
	}

	pub fn descriptor(&self) -> &QueryDescriptor {
		&self.descriptor
	}

	/// Translate and issue the GET once; later calls are no-ops.
	///
	/// Translation failures (including resolver contract violations)
	/// surface before any request is made.
	pub async fn fetch_if_needed(&mut self) -> Result<(), ClientError> {
		if self.state.fetched {
			return Ok(());
		}
		let params = translate(&self.descriptor)?;
		let url = self.config.url_for(M::resource_name());
		let response = self.transport.get(&url, &params).await?.throw_on_error()?;
		self.state.response = Some(response.body);
		self.state.fetched = true;
		Ok(())
	}

	/// Number of records in the fetched page.
	///
	/// Counts the records the server returned for the current pagination
	/// window; there is no dedicated server-side count request, so the
	/// result reflects the page size unless all-records mode was requested.
	pub async fn count(&mut self) -> Result<usize, ClientError> {
		self.fetch_if_needed().await?;
		Ok(M::hydrate(self.data()?)?.len())
	}

	/// Fetch one page, assembling results and envelope totals.
	///
	/// Absent arguments fall back to the descriptor's stored pagination.
	/// The envelope must carry `data`, `total` and `per_page`; a missing
	/// field is a malformed response.
	pub async fn paginate(
		&mut self,
		per_page: Option<u64>,
		page: Option<u64>,
	) -> Result<Page<M>, ClientError> {
		let stored = self.descriptor.pagination();
		let page_number = page.unwrap_or(stored.page);
		let per_page = per_page.unwrap_or(stored.per_page);
		self.descriptor = std::mem::take(&mut self.descriptor).set_pagination(page_number, per_page);

		self.fetch_if_needed().await?;

		Ok(Page {
			results: M::hydrate(self.data()?)?,
			total: self.envelope_u64("total")?,
			per_page: self.envelope_u64("per_page")?,
			page: page_number,
		})
	}

	/// Fetch every record as one oversized page.
	///
	/// Forces all-records mode (page 1, 1000 per page) regardless of prior
	/// pagination state. Idempotent: a second call on the same instance
	/// performs no further request.
	pub async fn get_all(&mut self) -> Result<Vec<M>, ClientError> {
		self.descriptor = std::mem::take(&mut self.descriptor).set_all_records();
		self.fetch_if_needed().await?;
		M::hydrate(self.data()?)
	}

	fn data(&self) -> Result<Vec<Value>, ClientError> {
		self.state
			.response
			.as_ref()
			.and_then(|response| response.get("data"))
			.and_then(Value::as_array)
			.cloned()
			.ok_or(ClientError::MalformedResponse("data"))
	}

	fn envelope_u64(&self, field: &'static str) -> Result<u64, ClientError> {
		self.state
			.response
			.as_ref()
			.and_then(|response| response.get(field))
			.and_then(Value::as_u64)
			.ok_or(ClientError::MalformedResponse(field))
	}
}
