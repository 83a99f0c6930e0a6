// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use emarsys_client::{
	auth::Credentials,
	error::{ConfigError, Error, TransportError},
	http::{BlockingTransport, SyncConnection},
	request::{ApiRequest, Method},
};

const USERNAME: &str = "test_username";
const SECRET: &str = "test_secret";

fn connection(server: &MockServer) -> SyncConnection {
	SyncConnection::new(Credentials::new(USERNAME, SECRET))
		.expect("Blocking reqwest client should build for tests.")
		.with_base_uri(server.base_url())
		.expect("Mock base URI should parse successfully.")
}

#[test]
fn call_blocks_until_the_decoded_reply_arrives() {
	let server = MockServer::start();
	let mock = server.mock(|when, then| {
		when.method(POST)
			.path("/api/v2/contact/")
			.header("content-type", "application/json")
			.header_exists("x-wsse")
			.json_body(json!({ "3": "a@example.com" }));
		then.status(200)
			.header("content-type", "application/json")
			.body(r#"{"data":{"id":123},"replyCode":0,"replyText":"OK"}"#);
	});
	let connection = connection(&server);
	let reply = connection
		.call(
			ApiRequest::new(Method::Post, "api/v2/contact/")
				.with_body(json!({ "3": "a@example.com" })),
		)
		.expect("2xx with replyCode 0 should classify as success.");

	assert_eq!(reply.data, json!({ "id": 123 }));
	assert_eq!(reply.reply_code, 0);

	mock.assert();
}

#[test]
fn classification_matches_the_concurrent_transport() {
	let server = MockServer::start();
	let _duplicate_mock = server.mock(|when, then| {
		when.method(POST).path("/api/v2/contact/");
		then.status(200)
			.header("content-type", "application/json")
			.body(r#"{"data":{},"replyCode":1003,"replyText":"Duplicate contact"}"#);
	});
	let _opaque_mock = server.mock(|when, then| {
		when.method(GET).path("/api/v2/settings");
		then.status(502).header("content-type", "text/html").body("<html>Bad Gateway</html>");
	});
	let connection = connection(&server);
	let duplicate = connection
		.call(
			ApiRequest::new(Method::Post, "api/v2/contact/")
				.with_body(json!({ "3": "a@example.com" })),
		)
		.expect_err("replyCode 1003 should classify as failure.");
	let opaque = connection
		.call(ApiRequest::new(Method::Get, "api/v2/settings"))
		.expect_err("An undecodable reply should classify as failure.");

	assert!(matches!(duplicate, Error::Api(api) if api.status == 200 && api.reply.reply_code == 1003));
	assert!(matches!(
		opaque,
		Error::Transport(TransportError::UnrecognizedReply { status: 502, .. })
	));
}

#[test]
fn malformed_base_uri_is_rejected_at_construction() {
	let err = SyncConnection::new(Credentials::new(USERNAME, SECRET))
		.expect("Blocking reqwest client should build for tests.")
		.with_base_uri("not a uri")
		.expect_err("A relative base URI should be rejected.");

	assert!(matches!(err, ConfigError::InvalidBaseUri { .. }));
}

#[test]
fn network_failure_surfaces_as_transport_error() {
	// Reserved port with no listener; the connection is refused immediately.
	let connection = SyncConnection::new(Credentials::new(USERNAME, SECRET))
		.expect("Blocking reqwest client should build for tests.")
		.with_base_uri("http://127.0.0.1:9/")
		.expect("Base URI fixture should parse successfully.");
	let err = connection
		.call(ApiRequest::new(Method::Get, "api/v2/settings"))
		.expect_err("A refused connection should classify as failure.");

	assert!(matches!(err, Error::Transport(TransportError::Network { .. })));
}
