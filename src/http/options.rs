//! Mergeable request options for identifier-form requests.

// std
use std::time::Duration;
// self
use crate::_prelude::*;

/// Optional request settings layered over transport defaults.
///
/// Values are treated as immutable: [`merge`](Self::merge) returns a new set instead of editing
/// either side. A field left undefined (`None`, or a header name that is absent) falls back to
/// the earlier layer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestOptions {
	/// HTTP method; transports default to `GET`.
	pub method: Option<Method>,
	/// Headers merged per name.
	pub headers: HeaderMap,
	/// Query pairs appended to the resolved URL; a later layer replaces the whole list.
	pub query: Option<Vec<(String, String)>>,
	/// Raw request body.
	pub body: Option<Vec<u8>>,
	/// Per-request timeout forwarded to the transport.
	pub timeout: Option<Duration>,
}
impl RequestOptions {
	/// Creates an empty option set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the HTTP method.
	pub fn with_method(mut self, method: Method) -> Self {
		self.method = Some(method);

		self
	}

	/// Sets a header, replacing earlier values for the same name.
	pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
		self.headers.insert(name, value);

		self
	}

	/// Appends a query pair.
	pub fn with_query_pair(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.query.get_or_insert_with(Vec::new).push((key.into(), value.into()));

		self
	}

	/// Sets a raw body.
	pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
		self.body = Some(body.into());

		self
	}

	/// Serializes `value` as the JSON body, adding `content-type: application/json` unless a
	/// content type is already present.
	pub fn with_json<T>(mut self, value: &T) -> Result<Self, serde_json::Error>
	where
		T: ?Sized + Serialize,
	{
		self.body = Some(serde_json::to_vec(value)?);

		if !self.headers.contains_key(CONTENT_TYPE) {
			self.headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
		}

		Ok(self)
	}

	/// Sets the per-request timeout.
	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = Some(timeout);

		self
	}

	/// Returns `self` overlaid with the defined fields of `other`.
	///
	/// Every header name present in `other` replaces all values for that name; other names are
	/// kept. Passing `None` yields a copy of `self`.
	pub fn merge(&self, other: Option<&RequestOptions>) -> RequestOptions {
		let mut merged = self.clone();
		let Some(other) = other else {
			return merged;
		};

		if let Some(method) = &other.method {
			merged.method = Some(method.clone());
		}

		for name in other.headers.keys() {
			merged.headers.remove(name);

			for value in other.headers.get_all(name) {
				merged.headers.append(name.clone(), value.clone());
			}
		}

		if let Some(query) = &other.query {
			merged.query = Some(query.clone());
		}
		if let Some(body) = &other.body {
			merged.body = Some(body.clone());
		}
		if let Some(timeout) = other.timeout {
			merged.timeout = Some(timeout);
		}

		merged
	}
}
