//! The two request shapes a transport accepts.

// self
use crate::{_prelude::*, http::RequestOptions};

/// Fully-formed request carrying its own header map.
pub type HttpRequest = ::http::Request<Vec<u8>>;

/// One logical request handed to a transport.
#[derive(Debug)]
pub enum RequestDescriptor {
	/// Target identifier (absolute URL or path) plus optional options.
	Target {
		/// URL or path understood by the transport.
		target: String,
		/// Caller-supplied options; `None` means transport defaults.
		options: Option<RequestOptions>,
	},
	/// Prepared request whose headers are edited in place.
	Prepared(HttpRequest),
}
impl RequestDescriptor {
	/// Builds an identifier-form descriptor without options.
	pub fn target(target: impl Into<String>) -> Self {
		Self::Target { target: target.into(), options: None }
	}

	/// Builds an identifier-form descriptor with options.
	pub fn target_with(target: impl Into<String>, options: RequestOptions) -> Self {
		Self::Target { target: target.into(), options: Some(options) }
	}

	/// Wraps a prepared request.
	pub fn prepared(request: HttpRequest) -> Self {
		Self::Prepared(request)
	}

	/// Returns the shape label used by observability hooks.
	pub fn shape(&self) -> RequestShape {
		match self {
			Self::Target { .. } => RequestShape::Target,
			Self::Prepared(_) => RequestShape::Prepared,
		}
	}

	/// Rejects descriptors no transport could act on.
	pub fn validate(&self) -> Result<(), String> {
		match self {
			Self::Target { target, .. } if target.trim().is_empty() =>
				Err("target identifier is empty".into()),
			_ => Ok(()),
		}
	}
}
impl From<&str> for RequestDescriptor {
	fn from(target: &str) -> Self {
		Self::target(target)
	}
}
impl From<String> for RequestDescriptor {
	fn from(target: String) -> Self {
		Self::target(target)
	}
}
impl From<(&str, RequestOptions)> for RequestDescriptor {
	fn from((target, options): (&str, RequestOptions)) -> Self {
		Self::target_with(target, options)
	}
}
impl From<(String, RequestOptions)> for RequestDescriptor {
	fn from((target, options): (String, RequestOptions)) -> Self {
		Self::target_with(target, options)
	}
}
impl From<HttpRequest> for RequestDescriptor {
	fn from(request: HttpRequest) -> Self {
		Self::Prepared(request)
	}
}

/// Shape of a [`RequestDescriptor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestShape {
	/// Identifier plus options.
	Target,
	/// Prepared request object.
	Prepared,
}
impl RequestShape {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RequestShape::Target => "target",
			RequestShape::Prepared => "prepared",
		}
	}
}
impl Display for RequestShape {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn validate_rejects_blank_targets_only() {
		assert!(RequestDescriptor::target("  ").validate().is_err());
		assert!(RequestDescriptor::target("/api/items").validate().is_ok());

		let request = ::http::Request::builder()
			.uri("https://example.com/")
			.body(Vec::new())
			.expect("Prepared request should build.");

		assert!(RequestDescriptor::from(request).validate().is_ok());
	}

	#[test]
	fn shapes_follow_variants() {
		let descriptor = RequestDescriptor::from(("/api/items", RequestOptions::new()));

		assert_eq!(descriptor.shape(), RequestShape::Target);
		assert_eq!(descriptor.shape().to_string(), "target");
		assert_eq!(RequestShape::Prepared.as_str(), "prepared");
	}
}
