//! Transport decorator that attaches a freshly fetched bearer token to every request.

// self
use crate::{
	_prelude::*,
	auth::{BearerToken, TokenProvider},
	error::{ConfigError, DispatchError},
	http::{HttpTransport, RequestDescriptor, RequestOptions, TransportFuture},
	obs::{self, DispatchOutcome, DispatchSpan},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestTransport;

#[cfg(feature = "reqwest")]
/// Dispatcher specialized for the crate's default reqwest transport.
pub type ReqwestDispatcher<P> = AuthenticatingDispatcher<ReqwestTransport, P>;

/// Error type produced by [`AuthenticatingDispatcher::dispatch`].
pub type DispatcherError<T, P> =
	DispatchError<<P as TokenProvider>::Error, <T as HttpTransport>::Error>;

/// Header name and scheme used to present the token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthHeader {
	name: HeaderName,
	scheme: String,
}
impl AuthHeader {
	/// Builds a header description, validating the name and scheme.
	pub fn new(name: &str, scheme: impl Into<String>) -> Result<Self, ConfigError> {
		let name = HeaderName::try_from(name)?;
		let scheme = scheme.into();

		if scheme.is_empty() || scheme.chars().any(|c| c.is_whitespace() || c.is_control()) {
			return Err(ConfigError::InvalidScheme { scheme });
		}

		Ok(Self { name, scheme })
	}

	/// Header name the token is written to.
	pub fn name(&self) -> &HeaderName {
		&self.name
	}

	/// Scheme prefixed to the token.
	pub fn scheme(&self) -> &str {
		&self.scheme
	}

	/// Encodes `"<scheme> <token>"` as a sensitive header value.
	pub fn value_for(&self, token: &BearerToken) -> Result<HeaderValue, InvalidHeaderValue> {
		let mut value = HeaderValue::try_from(format!("{} {}", self.scheme, token.expose()))?;

		value.set_sensitive(true);

		Ok(value)
	}
}
impl Default for AuthHeader {
	fn default() -> Self {
		Self { name: AUTHORIZATION, scheme: "Bearer".into() }
	}
}

/// Wraps a transport so every request carries a token from `token_provider`.
///
/// Each dispatch fetches one token, writes it into the request, and delegates exactly once.
/// Nothing is cached: concurrent dispatches share only the `Arc`-held collaborators. When the
/// token fetch fails the transport is never called. The dispatcher is itself an
/// [`HttpTransport`], so it can be stacked or passed anywhere a plain transport is expected.
pub struct AuthenticatingDispatcher<T, P>
where
	T: ?Sized + HttpTransport,
	P: ?Sized + TokenProvider,
{
	/// Transport every request is delegated to.
	pub transport: Arc<T>,
	/// Provider consulted once per dispatch.
	pub token_provider: Arc<P>,
	/// Header name and scheme used to present the token.
	pub auth_header: AuthHeader,
}
impl<T, P> AuthenticatingDispatcher<T, P>
where
	T: ?Sized + HttpTransport,
	P: ?Sized + TokenProvider,
{
	/// Creates a dispatcher over the caller-provided transport + provider pair.
	pub fn new(transport: impl Into<Arc<T>>, token_provider: impl Into<Arc<P>>) -> Self {
		Self {
			transport: transport.into(),
			token_provider: token_provider.into(),
			auth_header: AuthHeader::default(),
		}
	}

	/// Overrides the header name and scheme.
	pub fn with_auth_header(mut self, auth_header: AuthHeader) -> Self {
		self.auth_header = auth_header;

		self
	}

	/// Sends `request` with a freshly fetched token attached.
	///
	/// The returned future is lazy. Dropping it before the token resolves guarantees the
	/// transport is never called; dropping it later defers to the transport future.
	pub fn dispatch(
		&self,
		request: impl Into<RequestDescriptor>,
	) -> TransportFuture<'static, T::Response, DispatcherError<T, P>> {
		let request = request.into();
		let shape = request.shape();
		let span = DispatchSpan::new(shape, "dispatch");
		let transport = Arc::clone(&self.transport);
		let token_provider = Arc::clone(&self.token_provider);
		let auth_header = self.auth_header.clone();

		Box::pin(span.instrument(async move {
			obs::record_dispatch_outcome(shape, DispatchOutcome::Attempt);

			let result =
				authorize_and_send(&*transport, &*token_provider, &auth_header, request).await;
			let outcome =
				if result.is_ok() { DispatchOutcome::Success } else { DispatchOutcome::Failure };

			obs::record_dispatch_outcome(shape, outcome);

			result
		}))
	}
}
impl<T, P> Clone for AuthenticatingDispatcher<T, P>
where
	T: ?Sized + HttpTransport,
	P: ?Sized + TokenProvider,
{
	fn clone(&self) -> Self {
		Self {
			transport: Arc::clone(&self.transport),
			token_provider: Arc::clone(&self.token_provider),
			auth_header: self.auth_header.clone(),
		}
	}
}
impl<T, P> Debug for AuthenticatingDispatcher<T, P>
where
	T: ?Sized + HttpTransport,
	P: ?Sized + TokenProvider,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AuthenticatingDispatcher").field("auth_header", &self.auth_header).finish()
	}
}
impl<T, P> HttpTransport for AuthenticatingDispatcher<T, P>
where
	T: ?Sized + HttpTransport,
	P: ?Sized + TokenProvider,
{
	type Error = DispatcherError<T, P>;
	type Response = T::Response;

	fn send(&self, request: RequestDescriptor) -> TransportFuture<'_, Self::Response, Self::Error> {
		self.dispatch(request)
	}
}

async fn authorize_and_send<T, P>(
	transport: &T,
	token_provider: &P,
	auth_header: &AuthHeader,
	mut request: RequestDescriptor,
) -> Result<T::Response, DispatcherError<T, P>>
where
	T: ?Sized + HttpTransport,
	P: ?Sized + TokenProvider,
{
	request.validate().map_err(|reason| DispatchError::MalformedRequest { reason })?;

	let token = token_provider.get_token().await.map_err(DispatchError::TokenFetch)?;
	let value = auth_header.value_for(&token).map_err(DispatchError::InvalidToken)?;

	match &mut request {
		RequestDescriptor::Target { options, .. } => {
			let auth_options =
				RequestOptions::default().with_header(auth_header.name().clone(), value);

			*options = Some(
				RequestOptions::default().merge(options.as_ref()).merge(Some(&auth_options)),
			);
		},
		RequestDescriptor::Prepared(prepared) => {
			prepared.headers_mut().insert(auth_header.name().clone(), value);
		},
	}

	transport.send(request).await.map_err(DispatchError::Transport)
}
