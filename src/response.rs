//! Reply envelope decoding and the shared success/failure classification.

// self
use crate::{
	_prelude::*,
	error::{ApiError, TransportError},
};

/// Decoded reply envelope returned by every endpoint of the remote service.
///
/// `replyCode == 0` denotes success at the application level; any other value
/// is a failure even when the HTTP status was 2xx.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ApiResponse {
	/// Operation-specific payload.
	#[serde(default)]
	pub data: Json,
	/// Application-level status code; zero means success.
	#[serde(rename = "replyCode")]
	pub reply_code: i64,
	/// Human-readable companion to the reply code.
	#[serde(rename = "replyText", default)]
	pub reply_text: String,
}

/// Classifies one completed exchange.
///
/// Success requires both a 2xx transport status and `replyCode == 0`; any
/// other combination fails with [`ApiError`] carrying the decoded reply.
/// Bodies that do not decode into the envelope—including ones lacking
/// `replyCode`, as produced by proxies and load balancers on network-level
/// failures—are [`TransportError`]s, never panics. Pure function of its
/// inputs: identical `(status, replyCode)` pairs always classify identically.
pub(crate) fn classify(status: u16, url: &Url, body: &[u8]) -> Result<ApiResponse> {
	let de = &mut serde_json::Deserializer::from_slice(body);
	let reply: ApiResponse = serde_path_to_error::deserialize(de)
		.map_err(|source| TransportError::UnrecognizedReply { source, status })?;

	if (200..300).contains(&status) && reply.reply_code == 0 {
		Ok(reply)
	} else {
		Err(ApiError { status, url: url.clone(), reply }.into())
	}
}
