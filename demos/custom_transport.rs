//! Demonstrates wrapping a custom, non-reqwest transport with the bearer dispatcher.
//!
//! 1. Implement [`HttpTransport`] for the transport; it sees both request shapes.
//! 2. Provide tokens through [`auth::from_fn`], standing in for an identity SDK.
//! 3. Wrap both in [`AuthenticatingDispatcher`] and dispatch by target or prepared request.
//! 4. Observe that transport failures come back untouched inside [`DispatchError::Transport`].

// std
use std::{
	error::Error as StdError,
	fmt::{Display, Formatter, Result as FmtResult},
	sync::{
		Arc,
		atomic::{AtomicUsize, Ordering},
	},
};
// crates.io
use color_eyre::Result;
// self
use bearer_dispatch::{
	auth::{self, BearerToken},
	dispatcher::AuthenticatingDispatcher,
	error::{DispatchError, TokenError},
	http::{HttpTransport, RequestDescriptor, RequestOptions, TransportFuture},
	http_types::{Method, Request, header::AUTHORIZATION},
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let sessions = Arc::new(AtomicUsize::new(0));
	let counter = Arc::clone(&sessions);
	let provider = auth::from_fn(move || {
		let session = counter.fetch_add(1, Ordering::SeqCst);

		async move { Ok::<_, TokenError>(BearerToken::new(format!("session-{session}"))) }
	});
	let dispatcher: AuthenticatingDispatcher<EchoTransport, _> =
		AuthenticatingDispatcher::new(EchoTransport::default(), provider);
	let echoed = dispatcher
		.dispatch(("/api/items", RequestOptions::new().with_method(Method::GET)))
		.await?;

	println!("Identifier-form request reached the transport as: {echoed}.");

	let request = Request::builder().uri("https://api.example.com/items/1").body(Vec::new())?;
	let echoed = dispatcher.dispatch(request).await?;

	println!("Prepared request reached the transport as: {echoed}.");

	let offline: AuthenticatingDispatcher<EchoTransport, _> = AuthenticatingDispatcher::new(
		EchoTransport::offline("api.example.com"),
		auth::from_fn(|| async { Ok::<_, TokenError>(BearerToken::new("unused")) }),
	);

	match offline.dispatch("/api/items").await {
		Ok(echoed) => println!("Offline transport unexpectedly answered: {echoed}."),
		Err(DispatchError::Transport(e)) => println!("Transport error surfaced verbatim: {e}."),
		Err(e) => println!("Dispatch failed before reaching the transport: {e}."),
	}

	println!("Tokens issued: {}.", sessions.load(Ordering::SeqCst));

	Ok(())
}

#[derive(Clone, Debug)]
enum EchoTransportError {
	Unreachable { host: &'static str },
}
impl Display for EchoTransportError {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			Self::Unreachable { host } => write!(f, "Host {host} is unreachable"),
		}
	}
}
impl StdError for EchoTransportError {}

#[derive(Default)]
struct EchoTransport {
	unreachable: Option<&'static str>,
}
impl EchoTransport {
	fn offline(host: &'static str) -> Self {
		Self { unreachable: Some(host) }
	}
}
impl HttpTransport for EchoTransport {
	type Error = EchoTransportError;
	type Response = String;

	fn send(&self, request: RequestDescriptor) -> TransportFuture<'_, Self::Response, Self::Error> {
		Box::pin(async move {
			if let Some(host) = self.unreachable {
				return Err(EchoTransportError::Unreachable { host });
			}

			let echoed = match request {
				RequestDescriptor::Target { target, options } => {
					let options = options.unwrap_or_default();
					let authorization = options
						.headers
						.get(AUTHORIZATION)
						.and_then(|value| value.to_str().ok())
						.unwrap_or("<none>");

					format!(
						"{} {target} ({authorization})",
						options.method.unwrap_or(Method::GET)
					)
				},
				RequestDescriptor::Prepared(request) => {
					let authorization = request
						.headers()
						.get(AUTHORIZATION)
						.and_then(|value| value.to_str().ok())
						.unwrap_or("<none>");

					format!("{} {} ({authorization})", request.method(), request.uri())
				},
			};

			Ok(echoed)
		})
	}
}
