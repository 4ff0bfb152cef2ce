//! Sends one authenticated GET through the reqwest transport.
//!
//! Usage: `cargo run --example reqwest_dispatch -- <base-url> <path> <token>`; defaults target
//! `https://httpbin.org/bearer`, which echoes the presented token.

// std
use std::{env, sync::Arc};
// crates.io
use color_eyre::Result;
// self
use bearer_dispatch::{
	auth::StaticTokenProvider,
	dispatcher::{AuthenticatingDispatcher, ReqwestDispatcher},
	http::{ReqwestTransport, RequestOptions},
	http_types::{HeaderValue, Method, header::ACCEPT},
	url::Url,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let mut args = env::args().skip(1);
	let base_url = args.next().unwrap_or_else(|| "https://httpbin.org/".into());
	let path = args.next().unwrap_or_else(|| "bearer".into());
	let token = args.next().unwrap_or_else(|| "demo-token".into());
	let provider = Arc::new(StaticTokenProvider::new(token));
	let transport = ReqwestTransport::default()
		.with_base_url(Url::parse(&base_url)?)?
		.with_default_options(
			RequestOptions::new().with_header(ACCEPT, HeaderValue::from_static("application/json")),
		);
	let dispatcher: ReqwestDispatcher<StaticTokenProvider> =
		AuthenticatingDispatcher::new(transport, Arc::clone(&provider));
	let response =
		dispatcher.dispatch((path.as_str(), RequestOptions::new().with_method(Method::GET))).await?;
	let status = response.status();
	let body = response.text().await?;

	println!("{status}: {body}");

	Ok(())
}
