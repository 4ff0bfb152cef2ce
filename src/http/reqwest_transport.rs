//! reqwest-backed [`HttpTransport`].

// std
use std::ops::Deref;
// self
use crate::{
	_prelude::*,
	error::{ConfigError, TransportError},
	http::{HttpRequest, HttpTransport, RequestDescriptor, RequestOptions, TransportFuture},
};

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// Identifier-form requests resolve against the optional base URL and inherit the transport's
/// default options beneath the caller's. Prepared requests are sent as built, except that a
/// relative URI is resolved against the base URL.
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
	client: ReqwestClient,
	base_url: Option<Url>,
	default_options: RequestOptions,
}
impl ReqwestTransport {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self { client, ..Default::default() }
	}

	/// Resolves relative targets against `base_url`.
	pub fn with_base_url(mut self, base_url: Url) -> Result<Self, ConfigError> {
		if base_url.cannot_be_a_base() {
			return Err(ConfigError::InvalidBaseUrl { url: base_url.into() });
		}

		self.base_url = Some(base_url);

		Ok(self)
	}

	/// Layers `options` beneath every identifier-form request.
	pub fn with_default_options(mut self, options: RequestOptions) -> Self {
		self.default_options = options;

		self
	}

	/// Returns the configured base URL.
	pub fn base_url(&self) -> Option<&Url> {
		self.base_url.as_ref()
	}

	fn resolve(&self, target: &str) -> Result<Url, TransportError> {
		let resolved = match &self.base_url {
			Some(base) => base.join(target),
			None => Url::parse(target),
		};

		resolved.map_err(|source| TransportError::InvalidTarget { target: target.into(), source })
	}

	fn build_target(
		&self,
		target: &str,
		options: Option<&RequestOptions>,
	) -> Result<reqwest::Request, TransportError> {
		let options = self.default_options.merge(options);
		let mut url = self.resolve(target)?;

		if let Some(query) = options.query.as_ref().filter(|query| !query.is_empty()) {
			url.query_pairs_mut().extend_pairs(query);
		}

		let mut request =
			reqwest::Request::new(options.method.clone().unwrap_or(Method::GET), url);

		*request.headers_mut() = options.headers;
		*request.timeout_mut() = options.timeout;

		if let Some(body) = options.body {
			*request.body_mut() = Some(body.into());
		}

		Ok(request)
	}

	fn build_prepared(&self, mut request: HttpRequest) -> Result<reqwest::Request, TransportError> {
		if request.uri().scheme().is_none() {
			let relative = request.uri().to_string();
			let url = match &self.base_url {
				Some(base) => base.join(&relative),
				None => Err(url::ParseError::RelativeUrlWithoutBase),
			}
			.map_err(|source| TransportError::InvalidTarget { target: relative.clone(), source })?;

			*request.uri_mut() = url.as_str().parse()?;
		}

		Ok(reqwest::Request::try_from(request)?)
	}
}
impl AsRef<ReqwestClient> for ReqwestTransport {
	fn as_ref(&self) -> &ReqwestClient {
		&self.client
	}
}
impl Deref for ReqwestTransport {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.client
	}
}
impl HttpTransport for ReqwestTransport {
	type Error = TransportError;
	type Response = reqwest::Response;

	fn send(&self, request: RequestDescriptor) -> TransportFuture<'_, Self::Response, Self::Error> {
		Box::pin(async move {
			let request = match request {
				RequestDescriptor::Target { target, options } =>
					self.build_target(&target, options.as_ref())?,
				RequestDescriptor::Prepared(request) => self.build_prepared(request)?,
			};

			Ok(self.client.execute(request).await?)
		})
	}
}
