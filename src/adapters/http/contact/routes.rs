//! HTTP routes for contact endpoints.
//!
//! The route names (`/Index`, `/Details`, `/Edit/{id}`, ...) are the fixed
//! public URL surface, including the bare `/` alias for the index.

use axum::{routing::get, Router};

use super::handlers::{
    contact_details, create_contact, delete_contact, delete_contact_form, edit_contact_form,
    list_contacts, new_contact_form, update_contact, ContactHandlers,
};

/// Creates the contact router with all endpoints.
///
/// Mount it under `/Contacting`.
pub fn contact_routes(handlers: ContactHandlers) -> Router {
    Router::new()
        .route("/", get(list_contacts))
        .route("/Index", get(list_contacts))
        .route("/Details", get(contact_details))
        .route("/Create", get(new_contact_form).post(create_contact))
        .route("/Edit/:id", get(edit_contact_form).post(update_contact))
        .route("/Delete/:id", get(delete_contact_form).post(delete_contact))
        .with_state(handlers)
}
