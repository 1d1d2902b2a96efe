//! UpdateContactHandler - Command handler for editing a contact in place.

use std::sync::Arc;

use crate::domain::contact::{Contact, ContactError, ContactId};
use crate::domain::foundation::SessionToken;
use crate::ports::SessionStore;

use super::session;

/// Command to overwrite an existing contact's fields.
#[derive(Debug, Clone)]
pub struct UpdateContactCommand {
    pub session: SessionToken,
    pub contact_id: ContactId,
    pub first_name: String,
    pub last_name: String,
    pub age: String,
}

/// Handler for editing contacts.
pub struct UpdateContactHandler {
    store: Arc<dyn SessionStore>,
}

impl UpdateContactHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Overwrites `FirstName`/`LastName`/`Age` of the matching record and
    /// persists the full list.
    ///
    /// An id that matches nothing returns `NotFound`; the record's position
    /// in the list never changes. A failed age conversion aborts before any
    /// mutation.
    pub async fn handle(&self, cmd: UpdateContactCommand) -> Result<Contact, ContactError> {
        let age: i32 = cmd
            .age
            .trim()
            .parse()
            .map_err(|_| ContactError::invalid_age(cmd.age.clone()))?;

        let mut book = session::hydrate(self.store.as_ref(), &cmd.session).await?;
        let contact = book
            .find_by_id_mut(cmd.contact_id)
            .ok_or(ContactError::NotFound(cmd.contact_id))?;

        contact.first_name = cmd.first_name;
        contact.last_name = cmd.last_name;
        contact.age = age;
        let updated = contact.clone();

        session::persist(self.store.as_ref(), &cmd.session, &book).await?;

        tracing::debug!(session = %cmd.session, contact_id = %updated.contact_id, "contact updated");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::session::InMemorySessionStore;
    use crate::application::handlers::contact::{ListContactsHandler, ListContactsQuery};

    fn command(session: SessionToken, id: i32) -> UpdateContactCommand {
        UpdateContactCommand {
            session,
            contact_id: ContactId::new(id),
            first_name: "Edited".to_string(),
            last_name: "Person".to_string(),
            age: "99".to_string(),
        }
    }

    #[tokio::test]
    async fn changes_only_the_targeted_record() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = UpdateContactHandler::new(store.clone());
        let session = SessionToken::new();

        let updated = handler.handle(command(session, 2)).await.unwrap();
        assert_eq!(updated.first_name, "Edited");
        assert_eq!(updated.age, 99);

        let contacts = ListContactsHandler::new(store)
            .handle(ListContactsQuery { session })
            .await
            .unwrap();
        assert_eq!(contacts.len(), 5);
        // Position preserved, neighbors untouched.
        assert_eq!(contacts[1].first_name, "Edited");
        assert_eq!(contacts[0].first_name, "John1");
        assert_eq!(contacts[2].first_name, "John3");
    }

    #[tokio::test]
    async fn unknown_id_yields_not_found_instead_of_a_fault() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = UpdateContactHandler::new(store);

        let result = handler.handle(command(SessionToken::new(), 42)).await;
        assert_eq!(result, Err(ContactError::NotFound(ContactId::new(42))));
    }

    #[tokio::test]
    async fn bad_age_aborts_before_any_mutation() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = UpdateContactHandler::new(store.clone());
        let session = SessionToken::new();

        let mut cmd = command(session, 2);
        cmd.age = "ninety-nine".to_string();
        let result = handler.handle(cmd).await;
        assert!(matches!(result, Err(ContactError::InvalidAge { .. })));

        let contacts = ListContactsHandler::new(store)
            .handle(ListContactsQuery { session })
            .await
            .unwrap();
        assert_eq!(contacts[1].first_name, "John2");
        assert_eq!(contacts[1].age, 22);
    }

    #[tokio::test]
    async fn update_survives_the_next_request_boundary() {
        let store = Arc::new(InMemorySessionStore::new());
        let session = SessionToken::new();

        UpdateContactHandler::new(store.clone())
            .handle(command(session, 4))
            .await
            .unwrap();

        // A fresh handler simulates the next request rebuilding the book.
        let contacts = ListContactsHandler::new(store)
            .handle(ListContactsQuery { session })
            .await
            .unwrap();
        assert_eq!(contacts[3].last_name, "Person");
    }
}
