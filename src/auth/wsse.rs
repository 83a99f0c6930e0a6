//! One-time WSSE username-token derivation and header assembly.
//!
//! The remote service authenticates each request with a single `X-WSSE` header
//! whose digest proves knowledge of the shared secret without transmitting it.
//! The service treats a nonce/timestamp pair as a replay window, so a token
//! must be derived freshly for every outgoing request and discarded afterwards.

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
use rand::Rng;
use sha1::{Digest, Sha1};
// self
use crate::{_prelude::*, auth::Credentials};

/// Header name carrying the username token.
pub const WSSE_HEADER: &str = "X-WSSE";

const CONTENT_TYPE_HEADER: &str = "Content-Type";
const CONTENT_TYPE_JSON: &str = "application/json";

/// One-time authentication material derived from the connection credentials.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WsseToken {
	/// Random 128-bit value encoded as 32 lowercase hex characters.
	pub nonce: String,
	/// UTC creation timestamp, second precision, fixed `+00:00` offset.
	pub created: String,
	/// Base64 of the hex-encoded SHA-1 over `nonce ++ created ++ secret`.
	pub digest: String,
}
impl WsseToken {
	/// Derives a fresh token from `credentials` and the current UTC time.
	///
	/// Every call produces a distinct nonce/timestamp pair; nothing is cached.
	/// Safe to invoke from concurrent callers without coordination.
	pub fn generate(credentials: &Credentials) -> Self {
		let nonce = hex::encode(rand::rng().random::<[u8; 16]>());
		let created = format_created(OffsetDateTime::now_utc());

		Self::from_parts(nonce, created, credentials)
	}

	// Deterministic core of `generate`, split out so the digest is testable
	// against fixed nonce/timestamp inputs.
	pub(crate) fn from_parts(nonce: String, created: String, credentials: &Credentials) -> Self {
		let material = format!("{nonce}{created}{}", credentials.secret.expose());
		let digest = STANDARD.encode(hex::encode(Sha1::digest(material)));

		Self { nonce, created, digest }
	}

	/// Renders the full `X-WSSE` header value.
	///
	/// The field names `Username`, `PasswordDigest`, `Nonce`, and `Created` are
	/// fixed by the remote service's contract and must not be renamed.
	pub fn header_value(&self, username: &str) -> String {
		format!(
			"UsernameToken Username=\"{username}\",PasswordDigest=\"{}\",Nonce=\"{}\",Created=\"{}\"",
			self.digest, self.nonce, self.created,
		)
	}
}

/// Assembles the outgoing header list for one request: a freshly derived
/// `X-WSSE` header plus the default JSON content type, merged with
/// caller-supplied headers. Callers win on case-insensitive name collisions.
pub(crate) fn build_headers(
	credentials: &Credentials,
	caller: &BTreeMap<String, String>,
) -> Vec<(String, String)> {
	let token = WsseToken::generate(credentials);
	let mut headers = vec![
		(WSSE_HEADER.to_owned(), token.header_value(&credentials.username)),
		(CONTENT_TYPE_HEADER.to_owned(), CONTENT_TYPE_JSON.to_owned()),
	];

	for (name, value) in caller {
		headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
		headers.push((name.clone(), value.clone()));
	}

	headers
}

// Second precision with a literal `+00:00` offset; 25 characters exactly.
fn format_created(moment: OffsetDateTime) -> String {
	format!(
		"{:04}-{:02}-{:02}T{:02}:{:02}:{:02}+00:00",
		moment.year(),
		u8::from(moment.month()),
		moment.day(),
		moment.hour(),
		moment.minute(),
		moment.second(),
	)
}
