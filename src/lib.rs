//! Emarsys marketing API client—WSSE-authenticated blocking and concurrent transports
//! sharing one request-construction and reply-classification path, plus thin
//! resource wrappers for contacts, contact fields, and contact lists.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod obs;
pub mod request;
pub mod response;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		auth::Credentials,
		http::{AsyncConnection, SyncConnection},
	};

	/// Username shared by every test fixture.
	pub const TEST_USERNAME: &str = "test_username";
	/// Secret shared by every test fixture.
	pub const TEST_SECRET: &str = "test_secret";

	/// Builds the credentials fixture used across unit and integration tests.
	pub fn test_credentials() -> Credentials {
		Credentials::new(TEST_USERNAME, TEST_SECRET)
	}

	/// Builds an [`AsyncConnection`] aimed at a mock server's base URL.
	pub fn test_async_connection(base_uri: &str) -> AsyncConnection {
		AsyncConnection::new(test_credentials())
			.expect("Failed to build reqwest client for tests.")
			.with_base_uri(base_uri)
			.expect("Failed to parse mock base URI for tests.")
	}

	/// Builds a [`SyncConnection`] aimed at a mock server's base URL.
	pub fn test_sync_connection(base_uri: &str) -> SyncConnection {
		SyncConnection::new(test_credentials())
			.expect("Failed to build blocking reqwest client for tests.")
			.with_base_uri(base_uri)
			.expect("Failed to parse mock base URI for tests.")
	}
}

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{
		Client as ReqwestClient, Error as ReqwestError, blocking::Client as BlockingReqwestClient,
	};
	pub use serde::{Deserialize, Serialize};
	pub use serde_json::{Map, Value as Json};
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {httpmock as _, tokio as _};
