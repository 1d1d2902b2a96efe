//! DeleteContactHandler - Command handler for removing a contact.

use std::sync::Arc;

use crate::domain::contact::{ContactError, ContactId};
use crate::domain::foundation::SessionToken;
use crate::ports::SessionStore;

use super::session;

/// Command to remove a contact by id.
#[derive(Debug, Clone)]
pub struct DeleteContactCommand {
    pub session: SessionToken,
    pub contact_id: ContactId,
}

/// Result of a delete operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteContactResult {
    /// Whether a record was actually removed. Deleting an id that matches
    /// nothing is a safe no-op, not an error.
    pub removed: bool,
}

/// Handler for deleting contacts.
pub struct DeleteContactHandler {
    store: Arc<dyn SessionStore>,
}

impl DeleteContactHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Removes the first match and persists the (possibly unchanged) list
    /// regardless of whether anything was removed.
    pub async fn handle(
        &self,
        cmd: DeleteContactCommand,
    ) -> Result<DeleteContactResult, ContactError> {
        let mut book = session::hydrate(self.store.as_ref(), &cmd.session).await?;
        let removed = book.remove_by_id(cmd.contact_id);
        session::persist(self.store.as_ref(), &cmd.session, &book).await?;

        if removed {
            tracing::debug!(session = %cmd.session, contact_id = %cmd.contact_id, "contact deleted");
        } else {
            tracing::debug!(session = %cmd.session, contact_id = %cmd.contact_id, "delete matched nothing");
        }
        Ok(DeleteContactResult { removed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::session::InMemorySessionStore;
    use crate::application::handlers::contact::{ListContactsHandler, ListContactsQuery};

    #[tokio::test]
    async fn removes_exactly_the_targeted_record() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = DeleteContactHandler::new(store.clone());
        let session = SessionToken::new();

        let result = handler
            .handle(DeleteContactCommand {
                session,
                contact_id: ContactId::new(3),
            })
            .await
            .unwrap();
        assert!(result.removed);

        let contacts = ListContactsHandler::new(store)
            .handle(ListContactsQuery { session })
            .await
            .unwrap();
        assert_eq!(contacts.len(), 4);
        assert!(contacts.iter().all(|c| c.contact_id != ContactId::new(3)));
    }

    #[tokio::test]
    async fn unknown_id_is_a_silent_no_op() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = DeleteContactHandler::new(store.clone());
        let session = SessionToken::new();

        let result = handler
            .handle(DeleteContactCommand {
                session,
                contact_id: ContactId::new(42),
            })
            .await
            .unwrap();
        assert!(!result.removed);

        let contacts = ListContactsHandler::new(store)
            .handle(ListContactsQuery { session })
            .await
            .unwrap();
        assert_eq!(contacts.len(), 5);
    }
}
