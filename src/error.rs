//! Dispatcher-level error types shared across providers, transports, and the dispatcher.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error for the crate's bundled providers and transports.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Token provider failure.
	#[error(transparent)]
	Token(#[from] TokenError),
	/// Transport failure (URL resolution, DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Request could not be dispatched as described.
	#[error("Request is malformed: {reason}.")]
	MalformedRequest {
		/// Human-readable description of the problem.
		reason: String,
	},
	/// Token cannot be encoded as an HTTP header value.
	#[error("Bearer token cannot be encoded as a header value.")]
	InvalidToken(#[source] InvalidHeaderValue),
}
impl From<DispatchError<TokenError, TransportError>> for Error {
	fn from(e: DispatchError<TokenError, TransportError>) -> Self {
		match e {
			DispatchError::TokenFetch(e) => e.into(),
			DispatchError::Transport(e) => e.into(),
			DispatchError::MalformedRequest { reason } => Self::MalformedRequest { reason },
			DispatchError::InvalidToken(e) => Self::InvalidToken(e),
		}
	}
}

/// Failure raised by an authenticated dispatch.
///
/// Provider and transport failures are carried verbatim: `Display` and `source` forward to the
/// wrapped error, and [`into_token_fetch`](Self::into_token_fetch) /
/// [`into_transport`](Self::into_transport) hand the original value back.
#[derive(Debug, ThisError)]
pub enum DispatchError<P, T>
where
	P: 'static + StdError,
	T: 'static + StdError,
{
	/// Token provider failed; no request was sent.
	#[error(transparent)]
	TokenFetch(P),
	/// Underlying transport failed after delegation.
	#[error(transparent)]
	Transport(T),
	/// Descriptor was rejected before any token was requested.
	#[error("Request is malformed: {reason}.")]
	MalformedRequest {
		/// Human-readable description of the problem.
		reason: String,
	},
	/// Token contains bytes that are not allowed in a header value; no request was sent.
	#[error("Bearer token cannot be encoded as a header value.")]
	InvalidToken(#[source] InvalidHeaderValue),
}
impl<P, T> DispatchError<P, T>
where
	P: 'static + StdError,
	T: 'static + StdError,
{
	/// Returns `true` when this dispatcher failed before invoking its transport.
	///
	/// Only this layer is inspected. When dispatchers are stacked, an inner dispatcher's
	/// pre-dispatch failure reaches the outer one as [`Transport`](Self::Transport) and reports
	/// `false` here; unwrap it with [`into_transport`](Self::into_transport) to inspect the inner
	/// layer.
	pub fn is_pre_dispatch(&self) -> bool {
		!matches!(self, Self::Transport(_))
	}

	/// Returns the provider error when the token fetch failed.
	pub fn into_token_fetch(self) -> Option<P> {
		match self {
			Self::TokenFetch(e) => Some(e),
			_ => None,
		}
	}

	/// Returns the transport error when delegation failed.
	pub fn into_transport(self) -> Option<T> {
		match self {
			Self::Transport(e) => Some(e),
			_ => None,
		}
	}
}

/// Configuration and validation failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Authorization header name is not a valid HTTP header name.
	#[error("Authorization header name is invalid.")]
	InvalidHeaderName(#[from] ::http::header::InvalidHeaderName),
	/// Authorization scheme is empty or contains whitespace.
	#[error("Authorization scheme `{scheme}` is invalid.")]
	InvalidScheme {
		/// Rejected scheme label.
		scheme: String,
	},
	/// Base URL cannot be parsed or cannot serve as a base.
	#[error("Base URL `{url}` is invalid.")]
	InvalidBaseUrl {
		/// Rejected URL string.
		url: String,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Failures raised by the bundled token providers.
#[derive(Debug, ThisError)]
pub enum TokenError {
	/// Provider holds no token.
	#[error("No bearer token is currently available.")]
	Unavailable,
	/// Identity backend failed to produce a token.
	#[error("Token provider failed.")]
	Provider {
		/// Backend-specific failure.
		#[source]
		source: BoxError,
	},
}
impl TokenError {
	/// Wraps an identity backend failure.
	pub fn provider(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Provider { source: Box::new(src) }
	}
}

/// Transport-level failures (URL resolution, network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Target identifier cannot be resolved into an absolute URL.
	#[error("Target `{target}` cannot be resolved into a URL.")]
	InvalidTarget {
		/// Identifier supplied by the caller.
		target: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Resolved URL cannot be represented as a request URI.
	#[error("Resolved URL is not a valid request URI.")]
	InvalidUri(#[from] ::http::uri::InvalidUri),
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while sending the request.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while sending the request.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn dispatch_error_forwards_display_and_source() {
		let err: DispatchError<TokenError, TransportError> =
			DispatchError::TokenFetch(TokenError::Unavailable);

		assert_eq!(err.to_string(), TokenError::Unavailable.to_string());
		assert!(err.is_pre_dispatch());
		assert!(matches!(err.into_token_fetch(), Some(TokenError::Unavailable)));

		let err: DispatchError<TokenError, TransportError> =
			DispatchError::Transport(TransportError::Io(std::io::Error::other("reset")));

		assert!(!err.is_pre_dispatch());
		assert_eq!(err.to_string(), "I/O error occurred while sending the request.");
		assert!(matches!(err.into_transport(), Some(TransportError::Io(_))));
	}

	#[test]
	fn dispatch_error_flattens_into_crate_error() {
		let err: Error = DispatchError::<TokenError, TransportError>::MalformedRequest {
			reason: "target is empty".into(),
		}
		.into();

		assert!(matches!(err, Error::MalformedRequest { ref reason } if reason == "target is empty"));

		let err: Error =
			DispatchError::<TokenError, TransportError>::TokenFetch(TokenError::Unavailable).into();

		assert!(matches!(err, Error::Token(TokenError::Unavailable)));
	}
}
