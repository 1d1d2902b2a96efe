//! Hydration and flushing of the contact book to the session store.

use crate::domain::contact::{ContactBook, ContactError};
use crate::domain::foundation::SessionToken;
use crate::ports::SessionStore;

/// Session key holding the JSON-encoded contact list.
pub const CONTACTS_KEY: &str = "Contacts";

/// Reconstructs the contact book for one request.
///
/// A missing value or any deserialization failure discards whatever partial
/// result exists, reinitializes with the dummy seed list, and immediately
/// persists that seed back to the session. Recovery is local; nothing is
/// surfaced to the caller.
pub(crate) async fn hydrate(
    store: &dyn SessionStore,
    token: &SessionToken,
) -> Result<ContactBook, ContactError> {
    match store.get_string(token, CONTACTS_KEY).await? {
        Some(raw) => match ContactBook::from_json(&raw) {
            Ok(book) => Ok(book),
            Err(e) => {
                tracing::debug!(session = %token, error = %e, "stored contact list unreadable, reseeding");
                reseed(store, token).await
            }
        },
        None => {
            tracing::debug!(session = %token, "no stored contact list, seeding");
            reseed(store, token).await
        }
    }
}

/// Serializes the full book back to the session store. There is no
/// incremental update path.
pub(crate) async fn persist(
    store: &dyn SessionStore,
    token: &SessionToken,
    book: &ContactBook,
) -> Result<(), ContactError> {
    let raw = book
        .to_json()
        .map_err(|e| ContactError::serialization(e.to_string()))?;
    store.set_string(token, CONTACTS_KEY, raw).await?;
    Ok(())
}

async fn reseed(
    store: &dyn SessionStore,
    token: &SessionToken,
) -> Result<ContactBook, ContactError> {
    let book = ContactBook::seeded();
    persist(store, token, &book).await?;
    Ok(book)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::session::InMemorySessionStore;

    #[tokio::test]
    async fn fresh_session_yields_the_seed_list_and_persists_it() {
        let store = InMemorySessionStore::new();
        let token = SessionToken::new();

        let book = hydrate(&store, &token).await.unwrap();
        assert_eq!(book, ContactBook::seeded());

        // The seed must already be in the store, not just in memory.
        let raw = store.get_string(&token, CONTACTS_KEY).await.unwrap().unwrap();
        assert_eq!(ContactBook::from_json(&raw).unwrap(), ContactBook::seeded());
    }

    #[tokio::test]
    async fn corrupt_session_value_is_replaced_by_the_seed_list() {
        let store = InMemorySessionStore::new();
        let token = SessionToken::new();
        store
            .set_string(&token, CONTACTS_KEY, "{{not json".to_string())
            .await
            .unwrap();

        let book = hydrate(&store, &token).await.unwrap();
        assert_eq!(book, ContactBook::seeded());
    }

    #[tokio::test]
    async fn valid_session_value_round_trips() {
        let store = InMemorySessionStore::new();
        let token = SessionToken::new();

        let mut book = ContactBook::seeded();
        book.remove_by_id(crate::domain::contact::ContactId::new(1));
        persist(&store, &token, &book).await.unwrap();

        let restored = hydrate(&store, &token).await.unwrap();
        assert_eq!(restored, book);
    }

    #[tokio::test]
    async fn sessions_do_not_share_state() {
        let store = InMemorySessionStore::new();
        let token_a = SessionToken::new();
        let token_b = SessionToken::new();

        let mut book = hydrate(&store, &token_a).await.unwrap();
        book.remove_by_id(crate::domain::contact::ContactId::new(2));
        persist(&store, &token_a, &book).await.unwrap();

        let other = hydrate(&store, &token_b).await.unwrap();
        assert_eq!(other.len(), 5);
    }
}
