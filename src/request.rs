//! Request model and the single construction path shared by both transports.

// self
use crate::{
	_prelude::*,
	auth::{self, Credentials},
	error::ConfigError,
};

/// HTTP methods accepted by the remote service.
///
/// The typed enum makes invalid methods unrepresentable past the string
/// boundary; parsing anything else fails with [`ConfigError::InvalidMethod`]
/// before any request object exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
	/// `DELETE`.
	Delete,
	/// `GET`.
	Get,
	/// `POST`.
	Post,
	/// `PUT`.
	Put,
}
impl Method {
	/// Returns the canonical wire spelling.
	pub const fn as_str(self) -> &'static str {
		match self {
			Method::Delete => "DELETE",
			Method::Get => "GET",
			Method::Post => "POST",
			Method::Put => "PUT",
		}
	}
}
impl Display for Method {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for Method {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"DELETE" => Ok(Method::Delete),
			"GET" => Ok(Method::Get),
			"POST" => Ok(Method::Post),
			"PUT" => Ok(Method::Put),
			_ => Err(ConfigError::InvalidMethod { method: s.to_owned() }),
		}
	}
}
impl TryFrom<&str> for Method {
	type Error = ConfigError;

	fn try_from(value: &str) -> Result<Self, Self::Error> {
		value.parse()
	}
}

/// Description of one call against the remote service.
///
/// `path` is resolved against the connection's base URI at dispatch time.
/// Headers, body, and query parameters are optional; an absent body is sent as
/// an empty JSON object.
#[derive(Clone, Debug)]
pub struct ApiRequest {
	pub(crate) method: Method,
	pub(crate) path: String,
	pub(crate) headers: BTreeMap<String, String>,
	pub(crate) body: Option<Json>,
	pub(crate) query: BTreeMap<String, String>,
}
impl ApiRequest {
	/// Creates a request for `method` on `path`.
	pub fn new(method: Method, path: impl Into<String>) -> Self {
		Self {
			method,
			path: path.into(),
			headers: BTreeMap::new(),
			body: None,
			query: BTreeMap::new(),
		}
	}

	/// Adds or replaces a caller-supplied header.
	///
	/// Caller headers take precedence over the defaults on name collision.
	pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.insert(name.into(), value.into());

		self
	}

	/// Sets the structured request body.
	pub fn with_body(mut self, body: Json) -> Self {
		self.body = Some(body);

		self
	}

	/// Adds or replaces a query parameter.
	pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.query.insert(name.into(), value.into());

		self
	}

	/// Returns the request method.
	pub const fn method(&self) -> Method {
		self.method
	}

	/// Returns the endpoint path.
	pub fn path(&self) -> &str {
		&self.path
	}
}

/// Immutable per-connection configuration shared by both transports.
#[derive(Clone, Debug)]
pub(crate) struct Settings {
	pub base_uri: Url,
	pub credentials: Credentials,
}
impl Settings {
	pub fn new(base_uri: impl AsRef<str>, credentials: Credentials) -> Result<Self, ConfigError> {
		let base_uri = Url::parse(base_uri.as_ref())
			.map_err(|source| ConfigError::InvalidBaseUri { source })?;

		Ok(Self { base_uri, credentials })
	}
}

/// Fully constructed request, ready for dispatch by either transport.
#[derive(Clone, Debug)]
pub(crate) struct PreparedRequest {
	pub method: Method,
	pub url: Url,
	pub headers: Vec<(String, String)>,
	pub body: Vec<u8>,
}

/// Builds the complete outgoing request: URL resolution, authentication header
/// merge, body serialization, query attachment. Both transports share this
/// path, so construction semantics cannot drift between the execution modes.
pub(crate) fn prepare(
	settings: &Settings,
	request: &ApiRequest,
) -> Result<PreparedRequest, ConfigError> {
	// RFC 3986 relative-reference resolution; a leading slash in `path` must
	// not drop the base URI's scheme or host.
	let mut url =
		settings.base_uri.join(&request.path).map_err(|source| ConfigError::InvalidPath { source })?;

	if !request.query.is_empty() {
		let mut pairs = url.query_pairs_mut();

		for (name, value) in &request.query {
			pairs.append_pair(name, value);
		}

		drop(pairs);
	}

	let headers = auth::wsse::build_headers(&settings.credentials, &request.headers);
	let body = match &request.body {
		Some(body) =>
			serde_json::to_vec(body).map_err(|source| ConfigError::BodySerialize { source })?,
		// The remote service expects a JSON body even on bodiless calls.
		None => b"{}".to_vec(),
	};

	Ok(PreparedRequest { method: request.method, url, headers, body })
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;
	use crate::auth::WSSE_HEADER;

	fn settings() -> Settings {
		Settings::new("https://api.emarsys.net/", Credentials::new("test_username", "test_secret"))
			.expect("Base URI fixture should parse successfully.")
	}

	#[test]
	fn method_parsing_rejects_unknown_and_lowercase_spellings() {
		assert_eq!("GET".parse::<Method>().ok(), Some(Method::Get));
		assert!(matches!(
			"PATCH".parse::<Method>(),
			Err(ConfigError::InvalidMethod { method }) if method == "PATCH"
		));
		assert!("get".parse::<Method>().is_err());
	}

	#[test]
	fn path_resolution_keeps_scheme_and_host() {
		let request = ApiRequest::new(Method::Get, "api/v2/contact/");
		let prepared = prepare(&settings(), &request)
			.expect("Relative path should resolve against the base URI.");

		assert_eq!(prepared.url.as_str(), "https://api.emarsys.net/api/v2/contact/");

		let request = ApiRequest::new(Method::Get, "/api/v2/contact/");
		let prepared = prepare(&settings(), &request)
			.expect("Leading-slash path should resolve against the base URI.");

		assert_eq!(prepared.url.as_str(), "https://api.emarsys.net/api/v2/contact/");
	}

	#[test]
	fn query_parameters_attach_to_the_resolved_url() {
		let request = ApiRequest::new(Method::Get, "api/v2/contact/query/")
			.with_query("return", "1")
			.with_query("limit", "100");
		let prepared =
			prepare(&settings(), &request).expect("Query parameters should attach cleanly.");

		assert_eq!(prepared.url.query(), Some("limit=100&return=1"));
	}

	#[test]
	fn absent_body_serializes_as_empty_object() {
		let request = ApiRequest::new(Method::Post, "api/v2/contact/");
		let prepared = prepare(&settings(), &request).expect("Bodiless request should prepare.");

		assert_eq!(prepared.body, b"{}");
	}

	#[test]
	fn body_serializes_and_wsse_header_is_present() {
		let request = ApiRequest::new(Method::Post, "api/v2/contact/")
			.with_body(json!({ "3": "squirrel@squirrelmail.com" }));
		let prepared = prepare(&settings(), &request).expect("Request body should serialize.");

		assert_eq!(prepared.body, br#"{"3":"squirrel@squirrelmail.com"}"#);
		assert!(prepared.headers.iter().any(|(name, _)| name == WSSE_HEADER));
	}

	#[test]
	fn every_preparation_derives_a_fresh_token() {
		let request = ApiRequest::new(Method::Get, "api/v2/settings");
		let first = prepare(&settings(), &request).expect("First preparation should succeed.");
		let second = prepare(&settings(), &request).expect("Second preparation should succeed.");
		let wsse = |prepared: &PreparedRequest| {
			prepared
				.headers
				.iter()
				.find(|(name, _)| name == WSSE_HEADER)
				.map(|(_, value)| value.clone())
				.expect("Prepared request should carry an X-WSSE header.")
		};

		assert_ne!(wsse(&first), wsse(&second));
	}
}
