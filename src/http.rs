//! Transport capability traits and the reqwest-backed connection pair.
//!
//! [`Transport`] and [`BlockingTransport`] define the single `call` operation
//! every resource wrapper depends on; anything exposing it with these
//! semantics is a valid transport. [`AsyncConnection`] suspends only at the
//! network I/O boundary while [`SyncConnection`] occupies the calling thread
//! for the full round trip. Both share one construction and classification
//! path, so the two execution modes are interchangeable from a wrapper's
//! point of view—same request in, same outcome shape out.

// crates.io
#[cfg(feature = "reqwest")] use reqwest::Method as ReqwestMethod;
// self
use crate::{_prelude::*, request::ApiRequest, response::ApiResponse};
#[cfg(feature = "reqwest")]
use crate::{
	auth::Credentials,
	error::{ConfigError, TransportError},
	obs::{self, CallOutcome, CallSpan, TransportMode},
	request::{self, Method, PreparedRequest, Settings},
	response,
};

/// Production endpoint used when no base URI is supplied.
pub const EMARSYS_URI: &str = "https://api.emarsys.net/";

/// Boxed future returned by [`Transport::call`].
pub type CallFuture<'a> = Pin<Box<dyn Future<Output = Result<ApiResponse>> + 'a + Send>>;

/// Capability interface for the concurrent execution mode.
///
/// Consumers depend on this trait rather than a concrete client type; the
/// wrappers in [`endpoints`](crate::endpoints) are generic over it, so an
/// invalid connection cannot be constructed in the first place.
pub trait Transport
where
	Self: 'static + Send + Sync,
{
	/// Executes one request and resolves to its classified outcome.
	///
	/// The caller suspends only while the network I/O is in flight. Concurrent
	/// invocations against one transport are independently completable; one
	/// call's failure must not affect another in flight.
	fn call(&self, request: ApiRequest) -> CallFuture<'_>;
}

/// Capability interface for the blocking execution mode.
pub trait BlockingTransport
where
	Self: 'static + Send + Sync,
{
	/// Executes one request, blocking the calling thread until the remote
	/// service responds or the underlying network call fails.
	fn call(&self, request: ApiRequest) -> Result<ApiResponse>;
}

#[cfg(feature = "reqwest")]
impl From<Method> for ReqwestMethod {
	fn from(method: Method) -> Self {
		match method {
			Method::Delete => ReqwestMethod::DELETE,
			Method::Get => ReqwestMethod::GET,
			Method::Post => ReqwestMethod::POST,
			Method::Put => ReqwestMethod::PUT,
		}
	}
}

/// Concurrent connection backed by a pooled [`ReqwestClient`].
///
/// Cloning is cheap and clones share the underlying pool. The connection is
/// stateless with respect to requests: credentials and base URI are fixed at
/// construction and no request-specific data is retained between calls.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug)]
pub struct AsyncConnection {
	client: ReqwestClient,
	settings: Arc<Settings>,
}
#[cfg(feature = "reqwest")]
impl AsyncConnection {
	/// Creates a connection against the production endpoint.
	pub fn new(credentials: Credentials) -> Result<Self, ConfigError> {
		let client = ReqwestClient::builder().build()?;

		Self::with_client(client, credentials)
	}

	/// Wraps an existing reqwest client, e.g. one with custom TLS settings.
	pub fn with_client(client: ReqwestClient, credentials: Credentials) -> Result<Self, ConfigError> {
		Ok(Self { client, settings: Arc::new(Settings::new(EMARSYS_URI, credentials)?) })
	}

	/// Replaces the base URI, keeping the credentials and client.
	pub fn with_base_uri(mut self, base_uri: impl AsRef<str>) -> Result<Self, ConfigError> {
		self.settings =
			Arc::new(Settings::new(base_uri, self.settings.credentials.clone())?);

		Ok(self)
	}
}
#[cfg(feature = "reqwest")]
impl Transport for AsyncConnection {
	fn call(&self, request: ApiRequest) -> CallFuture<'_> {
		Box::pin(async move {
			const MODE: TransportMode = TransportMode::Concurrent;

			let span = CallSpan::new(MODE, request.method(), request.path());

			obs::record_call_outcome(MODE, CallOutcome::Attempt);

			let result =
				span.instrument(dispatch(&self.client, &self.settings, &request)).await;

			match &result {
				Ok(_) => obs::record_call_outcome(MODE, CallOutcome::Success),
				Err(_) => obs::record_call_outcome(MODE, CallOutcome::Failure),
			}

			result
		})
	}
}

/// Blocking connection backed by reqwest's synchronous client.
///
/// Safe to share across threads; each call is independent. Must not be used
/// from within an async runtime—pick [`AsyncConnection`] there instead.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug)]
pub struct SyncConnection {
	client: BlockingReqwestClient,
	settings: Arc<Settings>,
}
#[cfg(feature = "reqwest")]
impl SyncConnection {
	/// Creates a connection against the production endpoint.
	pub fn new(credentials: Credentials) -> Result<Self, ConfigError> {
		let client = BlockingReqwestClient::builder().build()?;

		Self::with_client(client, credentials)
	}

	/// Wraps an existing blocking reqwest client.
	pub fn with_client(
		client: BlockingReqwestClient,
		credentials: Credentials,
	) -> Result<Self, ConfigError> {
		Ok(Self { client, settings: Arc::new(Settings::new(EMARSYS_URI, credentials)?) })
	}

	/// Replaces the base URI, keeping the credentials and client.
	pub fn with_base_uri(mut self, base_uri: impl AsRef<str>) -> Result<Self, ConfigError> {
		self.settings =
			Arc::new(Settings::new(base_uri, self.settings.credentials.clone())?);

		Ok(self)
	}
}
#[cfg(feature = "reqwest")]
impl BlockingTransport for SyncConnection {
	fn call(&self, request: ApiRequest) -> Result<ApiResponse> {
		const MODE: TransportMode = TransportMode::Blocking;

		let span = CallSpan::new(MODE, request.method(), request.path());
		let _guard = span.entered();

		obs::record_call_outcome(MODE, CallOutcome::Attempt);

		let result = dispatch_blocking(&self.client, &self.settings, &request);

		match &result {
			Ok(_) => obs::record_call_outcome(MODE, CallOutcome::Success),
			Err(_) => obs::record_call_outcome(MODE, CallOutcome::Failure),
		}

		result
	}
}

#[cfg(feature = "reqwest")]
async fn dispatch(
	client: &ReqwestClient,
	settings: &Settings,
	request: &ApiRequest,
) -> Result<ApiResponse> {
	let PreparedRequest { method, url, headers, body } = request::prepare(settings, request)?;
	let mut builder = client.request(method.into(), url.clone());

	for (name, value) in &headers {
		builder = builder.header(name.as_str(), value.as_str());
	}

	let reply = builder.body(body).send().await.map_err(TransportError::from)?;
	let status = reply.status().as_u16();
	let bytes = reply.bytes().await.map_err(TransportError::from)?;

	response::classify(status, &url, &bytes)
}

#[cfg(feature = "reqwest")]
fn dispatch_blocking(
	client: &BlockingReqwestClient,
	settings: &Settings,
	request: &ApiRequest,
) -> Result<ApiResponse> {
	let PreparedRequest { method, url, headers, body } = request::prepare(settings, request)?;
	let mut builder = client.request(method.into(), url.clone());

	for (name, value) in &headers {
		builder = builder.header(name.as_str(), value.as_str());
	}

	let reply = builder.body(body).send().map_err(TransportError::from)?;
	let status = reply.status().as_u16();
	let bytes = reply.bytes().map_err(TransportError::from)?;

	response::classify(status, &url, &bytes)
}
