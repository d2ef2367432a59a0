//! Model boundary: hydration to and from flat record objects.

use crate::error::ClientError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fmt::Display;

/// A typed record backed by a remote REST resource.
///
/// Any type that serializes to and deserializes from a flat JSON record
/// satisfies the contract; hydration goes through serde rather than a
/// bespoke mapping layer, mirroring how the records travel on the wire.
///
/// # Examples
///
/// ```
/// use restorm_client::Model;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// struct User {
/// 	id: Option<i64>,
/// 	name: String,
/// }
///
/// impl Model for User {
/// 	type PrimaryKey = i64;
///
/// 	fn resource_name() -> &'static str {
/// 		"users"
/// 	}
///
/// 	fn primary_key(&self) -> Option<Self::PrimaryKey> {
/// 		self.id
/// 	}
/// }
/// ```
pub trait Model: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
	/// Primary key type, rendered into mutation URL paths.
	type PrimaryKey: Display + Clone + Send + Sync;

	/// Collection path under the configured endpoint (e.g. "users").
	fn resource_name() -> &'static str;

	/// Primary key of this instance, if it was ever persisted.
	fn primary_key(&self) -> Option<Self::PrimaryKey>;

	/// Hydrate raw records into model instances.
	fn hydrate(records: Vec<Value>) -> Result<Vec<Self>, ClientError> {
		records
			.into_iter()
			.map(|record| serde_json::from_value(record).map_err(ClientError::from))
			.collect()
	}

	/// Serialize the full current attribute set into a flat record object.
	fn attributes_to_array(&self) -> Result<Map<String, Value>, ClientError> {
		match serde_json::to_value(self)? {
			Value::Object(map) => Ok(map),
			_ => Err(ClientError::InvalidAttributes),
		}
	}
}
