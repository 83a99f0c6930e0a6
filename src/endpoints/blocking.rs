//! Blocking mirror of the client entry point and the contacts wrapper.
//!
//! Marshaling is shared with the async wrappers, so the two variants differ
//! only in how the caller waits for completion.

// self
use crate::{
	_prelude::*,
	endpoints::contact::{ENDPOINT, payload},
	http::BlockingTransport,
	request::{ApiRequest, Method},
	response::ApiResponse,
};

/// Entry point for callers without an async runtime.
pub struct Emarsys<B>
where
	B: ?Sized + BlockingTransport,
{
	connection: Arc<B>,
}
impl<B> Emarsys<B>
where
	B: ?Sized + BlockingTransport,
{
	/// Creates a client around the provided blocking connection.
	pub fn new(connection: impl Into<Arc<B>>) -> Self {
		Self { connection: connection.into() }
	}

	/// Returns a handle to the shared connection.
	pub fn connection(&self) -> Arc<B> {
		self.connection.clone()
	}

	/// Contacts endpoint wrapper.
	pub fn contacts(&self) -> Contact<B> {
		Contact::new(self.connection.clone())
	}
}
impl<B> Clone for Emarsys<B>
where
	B: ?Sized + BlockingTransport,
{
	fn clone(&self) -> Self {
		Self { connection: self.connection.clone() }
	}
}
impl<B> Debug for Emarsys<B>
where
	B: ?Sized + BlockingTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Emarsys").finish_non_exhaustive()
	}
}

/// Blocking wrapper for the contacts endpoint.
pub struct Contact<B>
where
	B: ?Sized + BlockingTransport,
{
	connection: Arc<B>,
}
impl<B> Contact<B>
where
	B: ?Sized + BlockingTransport,
{
	/// Creates a wrapper sharing `connection`.
	pub fn new(connection: impl Into<Arc<B>>) -> Self {
		Self { connection: connection.into() }
	}

	/// Creates a single contact from field-id/value pairs.
	pub fn create(
		&self,
		contact: Map<String, Json>,
		key_id: Option<&str>,
		source_id: Option<&str>,
	) -> Result<ApiResponse> {
		let payload = payload::contact(contact, key_id, source_id);

		self.connection.call(ApiRequest::new(Method::Post, ENDPOINT).with_body(payload))
	}

	/// Creates many contacts in one call.
	pub fn create_many(
		&self,
		contacts: Vec<Map<String, Json>>,
		key_id: Option<&str>,
	) -> Result<ApiResponse> {
		let payload = payload::contacts(contacts, key_id, None);

		self.connection.call(ApiRequest::new(Method::Post, ENDPOINT).with_body(payload))
	}

	/// Returns the values of the given fields for the identified contacts.
	pub fn get_data(
		&self,
		key_id: &str,
		key_values: Vec<Json>,
		fields: Option<Vec<u64>>,
	) -> Result<ApiResponse> {
		let payload = payload::get_data(key_id, key_values, fields);

		self.connection
			.call(ApiRequest::new(Method::Post, format!("{ENDPOINT}getdata/")).with_body(payload))
	}

	/// Updates a single contact; with `upsert` the contact is created when it
	/// does not exist yet.
	pub fn update(
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

		self.connection.call(request)
	}

	/// Deletes the contact identified by the given field-id/value pairs.
	pub fn delete(&self, contact: Map<String, Json>, key_id: Option<&str>) -> Result<ApiResponse> {
		let payload = payload::contact(contact, key_id, None);

		self.connection
			.call(ApiRequest::new(Method::Post, format!("{ENDPOINT}delete/")).with_body(payload))
	}
}
impl<B> Debug for Contact<B>
where
	B: ?Sized + BlockingTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Contact").finish_non_exhaustive()
	}
}
