//! Contact CRUD handlers.
//!
//! Each handler is a stateless function of (command/query, session store
//! handle). The contact book is hydrated from the session store at the
//! start of every operation and, for mutations, flushed back in full
//! before the handler returns.

mod create_contact;
mod delete_contact;
mod get_contact;
mod list_contacts;
mod session;
mod update_contact;

pub use create_contact::{CreateContactCommand, CreateContactHandler};
pub use delete_contact::{DeleteContactCommand, DeleteContactHandler, DeleteContactResult};
pub use get_contact::{GetContactHandler, GetContactQuery};
pub use list_contacts::{ListContactsHandler, ListContactsQuery};
pub use session::CONTACTS_KEY;
pub use update_contact::{UpdateContactCommand, UpdateContactHandler};
