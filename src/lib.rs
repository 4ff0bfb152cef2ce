//! Bearer-token request dispatcher: wrap any HTTP transport so every outbound request carries a
//! token fetched fresh from a pluggable provider.
//!
//! The crate is a composition layer. [`http::HttpTransport`] sends requests, [`auth::TokenProvider`]
//! hands out tokens, and [`dispatcher::AuthenticatingDispatcher`] sits between them, attaching
//! `Authorization: Bearer <token>` before delegating. Transport and provider errors reach callers
//! untouched through [`error::DispatchError`].

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod dispatcher;
pub mod error;
pub mod http;
pub mod obs;

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	pub use ::http::{
		HeaderMap, Method,
		header::{AUTHORIZATION, CONTENT_TYPE, HeaderName, HeaderValue, InvalidHeaderValue},
	};
	pub use parking_lot::RwLock;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::Result;
}

pub use ::http as http_types;
#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};
