//! Contacts endpoint wrapper (`api/v2/contact/`).

// self
use crate::{
	_prelude::*,
	http::Transport,
	request::{ApiRequest, Method},
	response::ApiResponse,
};

pub(super) const ENDPOINT: &str = "api/v2/contact/";

/// Wrapper for the contacts endpoint.
///
/// Field-id/value pairs identify contact fields on the remote side—for
/// example field id `3` is the email address. `key_id` selects which field
/// identifies the contact (the remote service defaults to `3` when absent)
/// and `source_id` tags the external application performing the change.
pub struct Contact<C>
where
	C: ?Sized + Transport,
{
	connection: Arc<C>,
}
impl<C> Contact<C>
where
	C: ?Sized + Transport,
{
	/// Creates a wrapper sharing `connection`.
	pub fn new(connection: impl Into<Arc<C>>) -> Self {
		Self { connection: connection.into() }
	}

	/// Creates a single contact from field-id/value pairs.
	pub async fn create(
		&self,
		contact: Map<String, Json>,
		key_id: Option<&str>,
		source_id: Option<&str>,
	) -> Result<ApiResponse> {
		let payload = payload::contact(contact, key_id, source_id);

		self.connection.call(ApiRequest::new(Method::Post, ENDPOINT).with_body(payload)).await
	}

	/// Creates many contacts in one call.
	pub async fn create_many(
		&self,
		contacts: Vec<Map<String, Json>>,
		key_id: Option<&str>,
	) -> Result<ApiResponse> {
		let payload = payload::contacts(contacts, key_id, None);

		self.connection.call(ApiRequest::new(Method::Post, ENDPOINT).with_body(payload)).await
	}

	/// Lists the values of one field across contacts, optionally filtered by
	/// another field's value.
	pub async fn query(
		&self,
		field_id_to_return: u64,
		filter: Option<(u64, &str)>,
		limit: Option<u64>,
		offset: Option<u64>,
		exclude_empty: Option<bool>,
	) -> Result<ApiResponse> {
		let mut request = ApiRequest::new(Method::Get, format!("{ENDPOINT}query/"))
			.with_query("return", field_id_to_return.to_string());

		if let Some(limit) = limit {
			request = request.with_query("limit", limit.to_string());
		}
		if let Some(offset) = offset {
			request = request.with_query("offset", offset.to_string());
		}
		if let Some(exclude_empty) = exclude_empty {
			request = request.with_query("excludeempty", exclude_empty.to_string());
		}
		if let Some((field_id, value)) = filter {
			request = request.with_query(field_id.to_string(), value);
		}

		self.connection.call(request).await
	}

	/// Returns the values of the given fields for the identified contacts.
	pub async fn get_data(
		&self,
		key_id: &str,
		key_values: Vec<Json>,
		fields: Option<Vec<u64>>,
	) -> Result<ApiResponse> {
		let payload = payload::get_data(key_id, key_values, fields);

		self.connection
			.call(ApiRequest::new(Method::Post, format!("{ENDPOINT}getdata/")).with_body(payload))
			.await
	}

	/// Returns email campaign launch data for the given contacts, optionally
	/// restricted to a `yyyy-mm-dd` date window.
	pub async fn get_history(
		&self,
		contacts: Vec<u64>,
		start_date: Option<&str>,
		end_date: Option<&str>,
	) -> Result<ApiResponse> {
		let mut payload = Map::new();

		payload.insert("contacts".into(), contacts.into());
		if let Some(start_date) = start_date {
			payload.insert("startDate".into(), start_date.into());
		}
		if let Some(end_date) = end_date {
			payload.insert("endDate".into(), end_date.into());
		}

		self.connection
			.call(
				ApiRequest::new(Method::Post, format!("{ENDPOINT}getcontacthistory/"))
					.with_body(Json::Object(payload)),
			)
			.await
	}

	/// Looks up a contact's internal id by one field value.
	pub async fn get_internal_id(&self, field_id: u64, field_value: &str) -> Result<ApiResponse> {
		let request = ApiRequest::new(Method::Get, ENDPOINT)
			.with_query(field_id.to_string(), field_value);

		self.connection.call(request).await
	}

	/// Lists existing contacts' internal ids indexed by `key_id`, collecting
	/// per-value errors for unknown or ambiguous keys.
	pub async fn check_ids(
		&self,
		key_id: &str,
		key_values: Vec<Json>,
		accept_duplicated_values: bool,
	) -> Result<ApiResponse> {
		let mut payload = Map::new();

		payload.insert("key_id".into(), key_id.into());
		payload.insert("external_ids".into(), Json::Array(key_values));
		if accept_duplicated_values {
			payload.insert("get_multiple_ids".into(), true.into());
		}

		self.connection
			.call(
				ApiRequest::new(Method::Post, format!("{ENDPOINT}checkids/"))
					.with_body(Json::Object(payload)),
			)
			.await
	}

	/// Updates a single contact; with `upsert` the contact is created when it
	/// does not exist yet.
	pub async fn update(
		&self,
		contact: Map<String, Json>,
		key_id: Option<&str>,
		source_id: Option<&str>,
		upsert: bool,
	) -> Result<ApiResponse> {
		let payload = payload::contact(contact, key_id, source_id);
		let mut request = ApiRequest::new(Method::Put, ENDPOINT).with_body(payload);

		if upsert {
			request = request.with_query("create_if_not_exists", "1");
		}

		self.connection.call(request).await
	}

	/// Updates many contacts at once; with `upsert` missing contacts are
	/// created automatically.
	pub async fn update_many(
		&self,
		key_id: &str,
		contacts: Vec<Map<String, Json>>,
		source_id: Option<&str>,
		upsert: bool,
	) -> Result<ApiResponse> {
		let payload = payload::contacts(contacts, Some(key_id), source_id);
		let mut request = ApiRequest::new(Method::Put, ENDPOINT).with_body(payload);

		if upsert {
			request = request.with_query("create_if_not_exists", "1");
		}

		self.connection.call(request).await
	}

	/// Deletes the contact identified by the given field-id/value pairs.
	pub async fn delete(
		&self,
		contact: Map<String, Json>,
		key_id: Option<&str>,
	) -> Result<ApiResponse> {
		let payload = payload::contact(contact, key_id, None);

		self.connection
			.call(ApiRequest::new(Method::Post, format!("{ENDPOINT}delete/")).with_body(payload))
			.await
	}
}
impl<C> Debug for Contact<C>
where
	C: ?Sized + Transport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Contact").finish_non_exhaustive()
	}
}

/// Payload assembly shared with the blocking mirror so marshaling cannot
/// drift between the execution modes.
pub(super) mod payload {
	// self
	use crate::_prelude::*;

	pub fn contact(
		fields: Map<String, Json>,
		key_id: Option<&str>,
		source_id: Option<&str>,
	) -> Json {
		let mut payload = fields;

		if let Some(key_id) = key_id {
			payload.insert("key_id".into(), key_id.into());
		}
		if let Some(source_id) = source_id {
			payload.insert("source_id".into(), source_id.into());
		}

		Json::Object(payload)
	}

	pub fn contacts(
		contacts: Vec<Map<String, Json>>,
		key_id: Option<&str>,
		source_id: Option<&str>,
	) -> Json {
		let mut payload = Map::new();

		payload
			.insert("contacts".into(), contacts.into_iter().map(Json::Object).collect::<Json>());
		if let Some(key_id) = key_id {
			payload.insert("key_id".into(), key_id.into());
		}
		if let Some(source_id) = source_id {
			payload.insert("source_id".into(), source_id.into());
		}

		Json::Object(payload)
	}

	pub fn get_data(key_id: &str, key_values: Vec<Json>, fields: Option<Vec<u64>>) -> Json {
		let mut payload = Map::new();

		payload.insert("keyId".into(), key_id.into());
		payload.insert("keyValues".into(), Json::Array(key_values));
		if let Some(fields) = fields {
			payload.insert("fields".into(), fields.into());
		}

		Json::Object(payload)
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;

	fn fields() -> Map<String, Json> {
		let mut fields = Map::new();

		fields.insert("3".into(), "squirrel@squirrelmail.com".into());

		fields
	}

	#[test]
	fn contact_payload_adds_identifiers_only_when_supplied() {
		assert_eq!(
			payload::contact(fields(), None, None),
			json!({ "3": "squirrel@squirrelmail.com" }),
		);
		assert_eq!(
			payload::contact(fields(), Some("3"), Some("42")),
			json!({ "3": "squirrel@squirrelmail.com", "key_id": "3", "source_id": "42" }),
		);
	}

	#[test]
	fn contacts_payload_nests_the_batch() {
		assert_eq!(
			payload::contacts(vec![fields()], Some("3"), None),
			json!({ "contacts": [{ "3": "squirrel@squirrelmail.com" }], "key_id": "3" }),
		);
	}

	#[test]
	fn get_data_payload_uses_remote_casing() {
		assert_eq!(
			payload::get_data("3", vec!["squirrel@squirrelmail.com".into()], Some(vec![1, 2])),
			json!({ "keyId": "3", "keyValues": ["squirrel@squirrelmail.com"], "fields": [1, 2] }),
		);
	}
}
