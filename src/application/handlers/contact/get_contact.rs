//! GetContactHandler - Query handler for a single contact.

use std::sync::Arc;

use crate::domain::contact::{Contact, ContactError, ContactId};
use crate::domain::foundation::SessionToken;
use crate::ports::SessionStore;

use super::session;

/// Query for one contact by id.
#[derive(Debug, Clone)]
pub struct GetContactQuery {
    pub session: SessionToken,
    pub contact_id: ContactId,
}

/// Handler for fetching a single contact.
pub struct GetContactHandler {
    store: Arc<dyn SessionStore>,
}

impl GetContactHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Returns the first contact matching the id, or `NotFound`.
    pub async fn handle(&self, query: GetContactQuery) -> Result<Contact, ContactError> {
        let book = session::hydrate(self.store.as_ref(), &query.session).await?;
        book.find_by_id(query.contact_id)
            .cloned()
            .ok_or(ContactError::NotFound(query.contact_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::session::InMemorySessionStore;

    #[tokio::test]
    async fn returns_the_exact_matching_record() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = GetContactHandler::new(store);

        let contact = handler
            .handle(GetContactQuery {
                session: SessionToken::new(),
                contact_id: ContactId::new(3),
            })
            .await
            .unwrap();

        assert_eq!(contact.first_name, "John3");
        assert_eq!(contact.last_name, "Doe3");
        assert_eq!(contact.age, 23);
    }

    #[tokio::test]
    async fn absent_id_yields_not_found() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = GetContactHandler::new(store);

        let result = handler
            .handle(GetContactQuery {
                session: SessionToken::new(),
                contact_id: ContactId::new(42),
            })
            .await;

        assert_eq!(result, Err(ContactError::NotFound(ContactId::new(42))));
    }
}
