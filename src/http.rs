//! Transport primitives the dispatcher decorates.
//!
//! The module exposes [`HttpTransport`] alongside the [`RequestDescriptor`] and
//! [`RequestOptions`] values it consumes, so downstream crates can plug in any HTTP stack. The
//! reqwest-backed [`ReqwestTransport`] ships behind the default `reqwest` feature.

pub mod descriptor;
pub mod options;
#[cfg(feature = "reqwest")] pub mod reqwest_transport;

pub use descriptor::*;
pub use options::*;
#[cfg(feature = "reqwest")] pub use reqwest_transport::*;

// self
use crate::_prelude::*;

/// Boxed future returned by [`HttpTransport::send`].
pub type TransportFuture<'a, Response, Error> =
	Pin<Box<dyn Future<Output = Result<Response, Error>> + 'a + Send>>;

/// Abstraction over HTTP stacks capable of sending either request shape.
///
/// Implementations must be `Send + Sync + 'static` so they can be shared behind `Arc` by any
/// number of dispatchers, and the futures they return must be `Send` so callers can spawn them
/// on multi-threaded executors. The returned future should not perform I/O until first polled.
pub trait HttpTransport
where
	Self: 'static + Send + Sync,
{
	/// Response value handed back to callers untouched.
	type Response: 'static + Send;
	/// Concrete error emitted by the transport.
	type Error: 'static + Send + Sync + StdError;

	/// Sends one request, either by target identifier plus options or as a prepared request.
	fn send(&self, request: RequestDescriptor) -> TransportFuture<'_, Self::Response, Self::Error>;
}
impl<T> HttpTransport for Arc<T>
where
	T: ?Sized + HttpTransport,
{
	type Error = T::Error;
	type Response = T::Response;

	fn send(&self, request: RequestDescriptor) -> TransportFuture<'_, Self::Response, Self::Error> {
		(**self).send(request)
	}
}
