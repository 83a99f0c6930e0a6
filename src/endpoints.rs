//! Resource-oriented wrappers over the transport contract.
//!
//! Wrappers are pure payload/parameter marshaling: they never construct
//! authentication material and delegate every exchange to the connection's
//! single `call` operation. Each handle shares the client's connection, so the
//! same wrapper works against any [`Transport`] implementation.

pub mod blocking;
pub mod contact;
pub mod contact_field;
pub mod contact_list;

pub use contact::Contact;
pub use contact_field::ContactField;
pub use contact_list::ContactList;

// self
use crate::{_prelude::*, http::Transport};

/// Entry point bundling every resource wrapper over one shared connection.
pub struct Emarsys<C>
where
	C: ?Sized + Transport,
{
	connection: Arc<C>,
}
impl<C> Emarsys<C>
where
	C: ?Sized + Transport,
{
	/// Creates a client around the provided connection.
	pub fn new(connection: impl Into<Arc<C>>) -> Self {
		Self { connection: connection.into() }
	}

	/// Returns a handle to the shared connection.
	pub fn connection(&self) -> Arc<C> {
		self.connection.clone()
	}

	/// Contacts endpoint wrapper.
	pub fn contacts(&self) -> Contact<C> {
		Contact::new(self.connection.clone())
	}

	/// Contact-fields endpoint wrapper.
	pub fn contact_fields(&self) -> ContactField<C> {
		ContactField::new(self.connection.clone())
	}

	/// Contact-lists endpoint wrapper.
	pub fn contact_lists(&self) -> ContactList<C> {
		ContactList::new(self.connection.clone())
	}
}
impl<C> Clone for Emarsys<C>
where
	C: ?Sized + Transport,
{
	fn clone(&self) -> Self {
		Self { connection: self.connection.clone() }
	}
}
impl<C> Debug for Emarsys<C>
where
	C: ?Sized + Transport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Emarsys").finish_non_exhaustive()
	}
}
