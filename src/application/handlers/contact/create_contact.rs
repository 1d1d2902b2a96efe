//! CreateContactHandler - Command handler for adding a contact.

use std::sync::Arc;

use crate::domain::contact::{Contact, ContactError};
use crate::domain::foundation::SessionToken;
use crate::ports::SessionStore;

use super::session;

/// Command to create a contact from submitted form text.
///
/// `age` is carried as raw text: the conversion to an integer is part of
/// the operation, and a failed conversion aborts the whole create.
#[derive(Debug, Clone)]
pub struct CreateContactCommand {
    pub session: SessionToken,
    pub first_name: String,
    pub last_name: String,
    pub age: String,
}

/// Handler for creating contacts.
pub struct CreateContactHandler {
    store: Arc<dyn SessionStore>,
}

impl CreateContactHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Appends a new contact and persists the full list.
    ///
    /// The new contact receives a fresh server-assigned id (one past the
    /// highest in the list); client input never chooses ids. On
    /// `InvalidAge` nothing is appended and nothing is persisted.
    pub async fn handle(&self, cmd: CreateContactCommand) -> Result<Contact, ContactError> {
        let age: i32 = cmd
            .age
            .trim()
            .parse()
            .map_err(|_| ContactError::invalid_age(cmd.age.clone()))?;

        let mut book = session::hydrate(self.store.as_ref(), &cmd.session).await?;
        let contact = Contact::new(book.next_id(), cmd.first_name, cmd.last_name, age);
        book.append(contact.clone());
        session::persist(self.store.as_ref(), &cmd.session, &book).await?;

        tracing::debug!(session = %cmd.session, contact_id = %contact.contact_id, "contact created");
        Ok(contact)
    }
}
