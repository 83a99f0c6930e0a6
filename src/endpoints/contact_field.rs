//! Contact-fields endpoint wrapper (`api/v2/field/`).

// self
use crate::{
	_prelude::*,
	http::Transport,
	request::{ApiRequest, Method},
	response::ApiResponse,
};

const ENDPOINT: &str = "api/v2/field/";
// Field-change lookups live under the contact endpoint on the remote side.
const LAST_CHANGE_ENDPOINT: &str = "api/v2/contact/last_change/";

/// Wrapper for the contact-fields endpoint.
pub struct ContactField<C>
where
	C: ?Sized + Transport,
{
	connection: Arc<C>,
}
impl<C> ContactField<C>
where
	C: ?Sized + Transport,
{
	/// Creates a wrapper sharing `connection`.
	pub fn new(connection: impl Into<Arc<C>>) -> Self {
		Self { connection: connection.into() }
	}

	/// Creates a new field in the contact database.
	///
	/// Supported `application_type` values are `shorttext`, `longtext`,
	/// `largetext`, `date`, `url`, and `numeric`; single- and multi-choice
	/// fields cannot be created through the API.
	pub async fn create(
		&self,
		name: &str,
		application_type: &str,
		string_id: Option<&str>,
	) -> Result<ApiResponse> {
		let mut payload = Map::new();

		payload.insert("name".into(), name.into());
		payload.insert("application_type".into(), application_type.into());
		if let Some(string_id) = string_id {
			payload.insert("string_id".into(), string_id.into());
		}

		self.connection
			.call(ApiRequest::new(Method::Post, ENDPOINT).with_body(Json::Object(payload)))
			.await
	}

	/// Lists all available fields, optionally translated into the given
	/// two-letter ISO 639-1 language.
	pub async fn list(&self, translate_id: Option<&str>) -> Result<ApiResponse> {
		let path = match translate_id {
			Some(lang) => format!("{ENDPOINT}translate/{lang}"),
			None => ENDPOINT.to_owned(),
		};

		self.connection.call(ApiRequest::new(Method::Get, path)).await
	}

	/// Lists the available options of a single- or multi-choice field.
	pub async fn list_choice(
		&self,
		field_id: u64,
		translate_id: Option<&str>,
	) -> Result<ApiResponse> {
		let mut path = format!("{ENDPOINT}{field_id}/choice");

		if let Some(lang) = translate_id {
			path = format!("{path}/translate/{lang}");
		}

		self.connection.call(ApiRequest::new(Method::Get, path)).await
	}

	/// Returns the latest change of one contact field: time, old value, and
	/// current value.
	pub async fn last_change(
		&self,
		key_id: &str,
		key_value: &str,
		field_id: u64,
	) -> Result<ApiResponse> {
		let request = ApiRequest::new(Method::Get, LAST_CHANGE_ENDPOINT)
			.with_query("key_id", key_id)
			.with_query("key_value", key_value)
			.with_query("field_id", field_id.to_string());

		self.connection.call(request).await
	}
}
impl<C> Debug for ContactField<C>
where
	C: ?Sized + Transport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ContactField").finish_non_exhaustive()
	}
}
