//! Token provider contract plus the two bundled adapters.
//!
//! Refresh and expiry policy belong to whatever sits behind a provider; the dispatcher only asks
//! for "the current token" once per request.

// self
use crate::{_prelude::*, auth::BearerToken, error::TokenError};

/// Boxed future returned by [`TokenProvider::get_token`].
pub type TokenFuture<'a, Error> =
	Pin<Box<dyn Future<Output = Result<BearerToken, Error>> + 'a + Send>>;

/// Source of bearer tokens consulted before every dispatch.
///
/// Implementations typically front an identity SDK that refreshes its session on demand. The
/// returned future must not block other in-flight requests while it waits.
pub trait TokenProvider
where
	Self: 'static + Send + Sync,
{
	/// Failure surfaced verbatim to dispatch callers.
	type Error: 'static + Send + Sync + StdError;

	/// Returns a token that is valid right now.
	fn get_token(&self) -> TokenFuture<'_, Self::Error>;
}
impl<P> TokenProvider for Arc<P>
where
	P: ?Sized + TokenProvider,
{
	type Error = P::Error;

	fn get_token(&self) -> TokenFuture<'_, Self::Error> {
		(**self).get_token()
	}
}

/// Provider holding a single token that callers may rotate or clear at any time.
#[derive(Debug, Default)]
pub struct StaticTokenProvider(RwLock<Option<BearerToken>>);
impl StaticTokenProvider {
	/// Creates a provider that serves `token` until rotated.
	pub fn new(token: impl Into<BearerToken>) -> Self {
		Self(RwLock::new(Some(token.into())))
	}

	/// Creates a provider with no token; fetches fail with [`TokenError::Unavailable`].
	pub fn empty() -> Self {
		Self::default()
	}

	/// Replaces the served token, returning the previous one.
	pub fn rotate(&self, token: impl Into<BearerToken>) -> Option<BearerToken> {
		self.0.write().replace(token.into())
	}

	/// Removes the served token, returning it.
	pub fn clear(&self) -> Option<BearerToken> {
		self.0.write().take()
	}

	/// Returns a copy of the token currently served.
	pub fn current(&self) -> Option<BearerToken> {
		self.0.read().clone()
	}
}
impl TokenProvider for StaticTokenProvider {
	type Error = TokenError;

	fn get_token(&self) -> TokenFuture<'_, Self::Error> {
		let token = self.current();

		Box::pin(async move { token.ok_or(TokenError::Unavailable) })
	}
}

/// Provider backed by an async closure, e.g. an identity SDK's "refresh if needed, then return"
/// call.
pub struct FnTokenProvider<F>(F);
impl<F> Debug for FnTokenProvider<F> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("FnTokenProvider(..)")
	}
}
impl<F, Fut, E> TokenProvider for FnTokenProvider<F>
where
	F: 'static + Send + Sync + Fn() -> Fut,
	Fut: 'static + Send + Future<Output = Result<BearerToken, E>>,
	E: 'static + Send + Sync + StdError,
{
	type Error = E;

	fn get_token(&self) -> TokenFuture<'_, Self::Error> {
		Box::pin((self.0)())
	}
}

/// Wraps an async closure as a [`TokenProvider`].
pub fn from_fn<F, Fut, E>(f: F) -> FnTokenProvider<F>
where
	F: 'static + Send + Sync + Fn() -> Fut,
	Fut: 'static + Send + Future<Output = Result<BearerToken, E>>,
	E: 'static + Send + Sync + StdError,
{
	FnTokenProvider(f)
}

#[cfg(test)]
mod tests {
	// std
	use std::sync::atomic::{AtomicUsize, Ordering};
	// self
	use super::*;

	#[tokio::test]
	async fn static_provider_serves_rotates_and_clears() {
		let provider = StaticTokenProvider::new("first");
		let token = provider.get_token().await.expect("Static provider should serve its token.");

		assert_eq!(token.expose(), "first");
		assert_eq!(provider.rotate("second").map(|t| t.expose().to_owned()), Some("first".into()));

		let token = provider.get_token().await.expect("Rotated token should be served.");

		assert_eq!(token.expose(), "second");

		provider.clear();

		let err = provider.get_token().await.expect_err("Cleared provider should fail.");

		assert!(matches!(err, TokenError::Unavailable));
	}

	#[tokio::test]
	async fn fn_provider_calls_closure_per_fetch() {
		let calls = Arc::new(AtomicUsize::new(0));
		let counter = Arc::clone(&calls);
		let provider = from_fn(move || {
			let n = counter.fetch_add(1, Ordering::SeqCst);

			async move { Ok::<_, TokenError>(BearerToken::new(format!("token-{n}"))) }
		});

		assert_eq!(provider.get_token().await.expect("First fetch").expose(), "token-0");
		assert_eq!(provider.get_token().await.expect("Second fetch").expose(), "token-1");
		assert_eq!(calls.load(Ordering::SeqCst), 2);
	}

	#[tokio::test]
	async fn arc_provider_delegates() {
		let provider: Arc<dyn TokenProvider<Error = TokenError>> =
			Arc::new(StaticTokenProvider::new("shared"));
		let token = provider.get_token().await.expect("Arc provider should delegate.");

		assert_eq!(token.expose(), "shared");
	}
}
