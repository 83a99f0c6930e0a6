// crates.io
use httpmock::prelude::*;
use serde_json::{Map, Value, json};
// self
use emarsys_client::{
	auth::Credentials,
	endpoints::{Emarsys, blocking},
	http::{AsyncConnection, SyncConnection},
};

const USERNAME: &str = "test_username";
const SECRET: &str = "test_secret";

fn client(server: &MockServer) -> Emarsys<AsyncConnection> {
	let connection = AsyncConnection::new(Credentials::new(USERNAME, SECRET))
		.expect("Reqwest client should build for tests.")
		.with_base_uri(server.base_url())
		.expect("Mock base URI should parse successfully.");

	Emarsys::new(connection)
}

fn blocking_client(server: &MockServer) -> blocking::Emarsys<SyncConnection> {
	let connection = SyncConnection::new(Credentials::new(USERNAME, SECRET))
		.expect("Blocking reqwest client should build for tests.")
		.with_base_uri(server.base_url())
		.expect("Mock base URI should parse successfully.");

	blocking::Emarsys::new(connection)
}

fn squirrel() -> Map<String, Value> {
	let mut fields = Map::new();

	fields.insert("3".into(), "squirrel@squirrelmail.com".into());

	fields
}

#[tokio::test]
async fn contact_create_marshals_identifiers_into_the_payload() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v2/contact/").json_body(
				json!({ "3": "squirrel@squirrelmail.com", "key_id": "3", "source_id": "42" }),
			);
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"data":{"id":123456789},"replyCode":0,"replyText":"OK"}"#);
		})
		.await;
	let client = client(&server);
	let reply = client
		.contacts()
		.create(squirrel(), Some("3"), Some("42"))
		.await
		.expect("Contact creation should succeed against the stub.");

	assert_eq!(reply.data, json!({ "id": 123456789_u64 }));

	mock.assert_async().await;
}

#[tokio::test]
async fn contact_update_with_upsert_adds_the_query_flag() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(PUT)
				.path("/api/v2/contact/")
				.query_param("create_if_not_exists", "1")
				.json_body(json!({ "3": "squirrel@squirrelmail.com", "key_id": "3" }));
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"data":{"id":123456789},"replyCode":0,"replyText":"OK"}"#);
		})
		.await;
	let client = client(&server);

	client
		.contacts()
		.update(squirrel(), Some("3"), None, true)
		.await
		.expect("Upserting update should succeed against the stub.");

	mock.assert_async().await;
}

#[tokio::test]
async fn contact_query_serializes_the_filter_tuple_as_a_parameter() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/api/v2/contact/query/")
				.query_param("return", "1")
				.query_param("2", "Trump")
				.query_param("limit", "100");
			then.status(200).header("content-type", "application/json").body(
				r#"{"data":{"errors":[],"result":[{"1":"Donald","id":"589058827"}]},"replyCode":0,"replyText":"OK"}"#,
			);
		})
		.await;
	let client = client(&server);
	let reply = client
		.contacts()
		.query(1, Some((2, "Trump")), Some(100), None, None)
		.await
		.expect("Contact query should succeed against the stub.");

	assert_eq!(reply.data["result"][0]["1"], "Donald");

	mock.assert_async().await;
}

#[tokio::test]
async fn contact_get_data_posts_the_remote_casing() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v2/contact/getdata/").json_body(json!({
				"keyId": "3",
				"keyValues": ["squirrel@squirrelmail.com"],
				"fields": [1, 2],
			}));
			then.status(200).header("content-type", "application/json").body(
				r#"{"data":{"errors":[],"result":[{"1":"Donald","2":"Trump","id":"589058827"}]},"replyCode":0,"replyText":"OK"}"#,
			);
		})
		.await;
	let client = client(&server);

	client
		.contacts()
		.get_data("3", vec!["squirrel@squirrelmail.com".into()], Some(vec![1, 2]))
		.await
		.expect("Contact data lookup should succeed against the stub.");

	mock.assert_async().await;
}

#[tokio::test]
async fn contact_field_list_translates_through_the_path() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v2/field/translate/es");
			then.status(200).header("content-type", "application/json").body(
				r#"{"data":[{"application_type":"interests","id":0,"name":"Intereses","string_id":"interests"}],"replyCode":0,"replyText":"OK"}"#,
			);
		})
		.await;
	let client = client(&server);

	client
		.contact_fields()
		.list(Some("es"))
		.await
		.expect("Translated field listing should succeed against the stub.");

	mock.assert_async().await;
}

#[tokio::test]
async fn contact_field_choice_lookup_builds_the_nested_path() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v2/field/31/choice");
			then.status(200).header("content-type", "application/json").body(
				r#"{"data":[{"choice":"True","id":"1"},{"choice":"False","id":"2"}],"replyCode":0,"replyText":"OK"}"#,
			);
		})
		.await;
	let client = client(&server);

	client
		.contact_fields()
		.list_choice(31, None)
		.await
		.expect("Choice listing should succeed against the stub.");

	mock.assert_async().await;
}

#[tokio::test]
async fn contact_list_add_contacts_targets_the_list_subpath() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v2/contactlist/123/add/").json_body(json!({
				"key_id": 3,
				"external_ids": ["squirrel@squirrelmail.com"],
			}));
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"data":{"inserted_contacts":1},"replyCode":0,"replyText":"OK"}"#);
		})
		.await;
	let client = client(&server);

	client
		.contact_lists()
		.add_contacts(123, vec!["squirrel@squirrelmail.com".into()], 3)
		.await
		.expect("Adding contacts to a list should succeed against the stub.");

	mock.assert_async().await;
}

#[test]
fn blocking_contact_create_matches_the_async_marshaling() {
	let server = MockServer::start();
	let mock = server.mock(|when, then| {
		when.method(POST)
			.path("/api/v2/contact/")
			.json_body(json!({ "3": "squirrel@squirrelmail.com", "key_id": "3" }));
		then.status(200)
			.header("content-type", "application/json")
			.body(r#"{"data":{"id":123456789},"replyCode":0,"replyText":"OK"}"#);
	});
	let client = blocking_client(&server);
	let reply = client
		.contacts()
		.create(squirrel(), Some("3"), None)
		.expect("Blocking contact creation should succeed against the stub.");

	assert_eq!(reply.reply_code, 0);

	mock.assert();
}
