//! ListContactsHandler - Query handler returning the full contact list.

use std::sync::Arc;

use crate::domain::contact::{Contact, ContactError};
use crate::domain::foundation::SessionToken;
use crate::ports::SessionStore;

use super::session;

/// Query for the full contact list of one session.
#[derive(Debug, Clone)]
pub struct ListContactsQuery {
    pub session: SessionToken,
}

/// Handler for listing contacts.
pub struct ListContactsHandler {
    store: Arc<dyn SessionStore>,
}

impl ListContactsHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Returns the full ordered sequence of contacts, unmodified.
    pub async fn handle(&self, query: ListContactsQuery) -> Result<Vec<Contact>, ContactError> {
        let book = session::hydrate(self.store.as_ref(), &query.session).await?;
        Ok(book.contacts().to_vec())
    }
}
