//! Client-level error types shared across the transports and resource wrappers.

// self
use crate::{_prelude::*, response::ApiResponse};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem; detected before any network activity.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, unrecognizable reply).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// The remote service answered and rejected the call.
	#[error(transparent)]
	Api(Box<ApiError>),
}
impl From<ApiError> for Error {
	fn from(e: ApiError) -> Self {
		Self::Api(Box::new(e))
	}
}

/// Configuration and validation failures raised before dispatch.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Method outside the remote service's allowed set.
	#[error("`{method}` is not one of the allowed HTTP methods (GET, POST, PUT, DELETE).")]
	InvalidMethod {
		/// The rejected method string.
		method: String,
	},
	/// Base URI did not parse as an absolute URL.
	#[error("Base URI is invalid.")]
	InvalidBaseUri {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Endpoint path could not be resolved against the base URI.
	#[error("Endpoint path cannot be resolved against the base URI.")]
	InvalidPath {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Request body could not be serialized to JSON.
	#[error("Request body cannot be serialized.")]
	BodySerialize {
		/// Underlying serialization failure.
		#[source]
		source: serde_json::Error,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO, undecodable replies).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the remote service.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the remote service.")]
	Io(#[from] std::io::Error),
	/// Reply body was not the expected envelope (malformed JSON or missing `replyCode`).
	#[error("Remote service returned an unrecognizable reply (HTTP {status}).")]
	UnrecognizedReply {
		/// Structured parsing failure pointing at the offending JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status carried by the unrecognizable reply.
		status: u16,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Application-level rejection decoded from the reply body.
///
/// Raised when the remote service answered but signaled failure—either a non-2xx
/// HTTP status or a decoded `replyCode != 0`. The full decoded reply and the
/// resolved request URL are carried so callers can diagnose which field or
/// payload was rejected.
#[derive(Debug, ThisError)]
#[error("Remote service rejected the call to `{url}` with reply code {} ({}) under HTTP {status}.", reply.reply_code, reply.reply_text)]
pub struct ApiError {
	/// HTTP status returned alongside the rejection.
	pub status: u16,
	/// Fully resolved request URL, including query parameters.
	pub url: Url,
	/// Decoded reply envelope carried for caller inspection.
	pub reply: ApiResponse,
}
