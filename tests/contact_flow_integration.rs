//! Integration tests for the contact CRUD flow.
//!
//! These tests wire the application handlers to the in-memory session
//! store and drive the same multi-request scenarios a browser would:
//! every operation rebuilds the contact book from the session store, so
//! state only survives if the mutating handler persisted it.

use std::sync::Arc;

use contacting::adapters::http::CsrfSigner;
use contacting::adapters::session::InMemorySessionStore;
use contacting::application::handlers::contact::{
    CreateContactCommand, CreateContactHandler, DeleteContactCommand, DeleteContactHandler,
    GetContactHandler, GetContactQuery, ListContactsHandler, ListContactsQuery,
    UpdateContactCommand, UpdateContactHandler,
};
use contacting::domain::contact::{ContactError, ContactId};
use contacting::domain::foundation::SessionToken;
use secrecy::SecretString;

struct App {
    store: Arc<InMemorySessionStore>,
    session: SessionToken,
}

impl App {
    fn new() -> Self {
        Self {
            store: Arc::new(InMemorySessionStore::new()),
            session: SessionToken::new(),
        }
    }

    async fn list(&self) -> Vec<contacting::domain::contact::Contact> {
        ListContactsHandler::new(self.store.clone())
            .handle(ListContactsQuery { session: self.session })
            .await
            .unwrap()
    }

    async fn create(&self, first: &str, last: &str, age: &str) -> Result<(), ContactError> {
        CreateContactHandler::new(self.store.clone())
            .handle(CreateContactCommand {
                session: self.session,
                first_name: first.to_string(),
                last_name: last.to_string(),
                age: age.to_string(),
            })
            .await
            .map(|_| ())
    }

    async fn delete(&self, id: i32) -> Result<bool, ContactError> {
        DeleteContactHandler::new(self.store.clone())
            .handle(DeleteContactCommand {
                session: self.session,
                contact_id: ContactId::new(id),
            })
            .await
            .map(|r| r.removed)
    }
}

#[tokio::test]
async fn first_request_yields_the_five_dummy_contacts() {
    let app = App::new();

    let contacts = app.list().await;

    assert_eq!(contacts.len(), 5);
    for (i, contact) in contacts.iter().enumerate() {
        assert_eq!(contact.contact_id, ContactId::new((i + 1) as i32));
    }
    assert_eq!(contacts[0].first_name, "John1");
    assert_eq!(contacts[4].last_name, "Doe5");
}

#[tokio::test]
async fn create_scenario_appends_jane_smith_as_sixth_record() {
    let app = App::new();
    app.list().await; // seed the session

    app.create("Jane", "Smith", "30").await.unwrap();

    let contacts = app.list().await;
    assert_eq!(contacts.len(), 6);
    let jane = &contacts[5];
    assert_eq!(jane.first_name, "Jane");
    assert_eq!(jane.last_name, "Smith");
    assert_eq!(jane.age, 30);
}

#[tokio::test]
async fn delete_scenario_removes_contact_three() {
    let app = App::new();
    app.list().await;

    assert!(app.delete(3).await.unwrap());

    let contacts = app.list().await;
    assert_eq!(contacts.len(), 4);
    assert!(contacts.iter().all(|c| c.contact_id != ContactId::new(3)));
}

#[tokio::test]
async fn create_with_non_numeric_age_leaves_the_list_unchanged() {
    let app = App::new();
    app.list().await;

    let result = app.create("Jane", "Smith", "thirty").await;
    assert!(matches!(result, Err(ContactError::InvalidAge { .. })));

    assert_eq!(app.list().await.len(), 5);
}

#[tokio::test]
async fn delete_of_unknown_id_is_a_no_op_across_requests() {
    let app = App::new();
    app.list().await;

    assert!(!app.delete(42).await.unwrap());
    assert_eq!(app.list().await.len(), 5);
}

#[tokio::test]
async fn update_changes_one_record_and_survives_request_boundaries() {
    let app = App::new();
    app.list().await;

    UpdateContactHandler::new(app.store.clone())
        .handle(UpdateContactCommand {
            session: app.session,
            contact_id: ContactId::new(2),
            first_name: "Edited".to_string(),
            last_name: "Record".to_string(),
            age: "44".to_string(),
        })
        .await
        .unwrap();

    let contacts = app.list().await;
    assert_eq!(contacts.len(), 5);
    assert_eq!(contacts[1].first_name, "Edited");
    assert_eq!(contacts[1].age, 44);
    assert_eq!(contacts[0].first_name, "John1");
    assert_eq!(contacts[2].first_name, "John3");
}

#[tokio::test]
async fn get_one_returns_the_exact_record_or_not_found() {
    let app = App::new();
    let handler = GetContactHandler::new(app.store.clone());

    let contact = handler
        .handle(GetContactQuery {
            session: app.session,
            contact_id: ContactId::new(4),
        })
        .await
        .unwrap();
    assert_eq!(contact.first_name, "John4");
    assert_eq!(contact.age, 24);

    let missing = handler
        .handle(GetContactQuery {
            session: app.session,
            contact_id: ContactId::new(99),
        })
        .await;
    assert_eq!(missing, Err(ContactError::NotFound(ContactId::new(99))));
}

#[tokio::test]
async fn two_sessions_never_see_each_others_contacts() {
    let store = Arc::new(InMemorySessionStore::new());
    let session_a = SessionToken::new();
    let session_b = SessionToken::new();

    CreateContactHandler::new(store.clone())
        .handle(CreateContactCommand {
            session: session_a,
            first_name: "OnlyIn".to_string(),
            last_name: "SessionA".to_string(),
            age: "50".to_string(),
        })
        .await
        .unwrap();

    let list = ListContactsHandler::new(store);
    assert_eq!(list.handle(ListContactsQuery { session: session_a }).await.unwrap().len(), 6);
    assert_eq!(list.handle(ListContactsQuery { session: session_b }).await.unwrap().len(), 5);
}

#[tokio::test]
async fn csrf_tokens_are_bound_to_their_session() {
    let signer = CsrfSigner::new(SecretString::new(
        "integration-test-key-0123456789abcdef".to_string(),
    ));
    let session_a = SessionToken::new();
    let session_b = SessionToken::new();

    let token = signer.issue(&session_a);
    assert!(signer.verify(&session_a, &token));
    assert!(!signer.verify(&session_b, &token));
}
