//! Contact-lists endpoint wrapper (`api/v2/contactlist/`).

// self
use crate::{
	_prelude::*,
	http::Transport,
	request::{ApiRequest, Method},
	response::ApiResponse,
};

const ENDPOINT: &str = "api/v2/contactlist/";

/// Wrapper for the contact-lists endpoint.
pub struct ContactList<C>
where
	C: ?Sized + Transport,
{
	connection: Arc<C>,
}
impl<C> ContactList<C>
where
	C: ?Sized + Transport,
{
	/// Creates a wrapper sharing `connection`.
	pub fn new(connection: impl Into<Arc<C>>) -> Self {
		Self { connection: connection.into() }
	}

	/// Creates a contact list, optionally seeding it with the contacts whose
	/// `key_id` field matches the given values.
	pub async fn create(
		&self,
		name: &str,
		key_id: u64,
		with_contacts_ids: Option<Vec<Json>>,
		description: Option<&str>,
	) -> Result<ApiResponse> {
		let mut payload = Map::new();

		payload.insert("key_id".into(), key_id.into());
		payload.insert("name".into(), name.into());
		if let Some(description) = description {
			payload.insert("description".into(), description.into());
		}
		if let Some(external_ids) = with_contacts_ids {
			payload.insert("external_ids".into(), Json::Array(external_ids));
		}

		self.connection
			.call(ApiRequest::new(Method::Post, ENDPOINT).with_body(Json::Object(payload)))
			.await
	}

	/// Adds contacts to an existing list by their `key_id` field values.
	pub async fn add_contacts(
		&self,
		list_id: u64,
		contacts_ids: Vec<Json>,
		key_id: u64,
	) -> Result<ApiResponse> {
		let mut payload = Map::new();

		payload.insert("key_id".into(), key_id.into());
		payload.insert("external_ids".into(), Json::Array(contacts_ids));

		self.connection
			.call(
				ApiRequest::new(Method::Post, format!("{ENDPOINT}{list_id}/add/"))
					.with_body(Json::Object(payload)),
			)
			.await
	}
}
impl<C> Debug for ContactList<C>
where
	C: ?Sized + Transport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ContactList").finish_non_exhaustive()
	}
}
