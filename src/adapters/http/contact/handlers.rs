//! HTTP handlers for contact endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};

use crate::adapters::http::middleware::{ClientSession, CsrfSigner};
use crate::application::handlers::contact::{
    CreateContactCommand, CreateContactHandler, DeleteContactCommand, DeleteContactHandler,
    GetContactHandler, GetContactQuery, ListContactsHandler, ListContactsQuery,
    UpdateContactCommand, UpdateContactHandler,
};
use crate::domain::contact::{ContactError, ContactId};
use crate::domain::foundation::SessionToken;

use super::dto::{
    ContactFormResponse, ContactListResponse, CreateContactForm, DeleteContactForm, DetailsQuery,
    EditContactForm, ErrorResponse, NewContactFormResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ContactHandlers {
    list_handler: Arc<ListContactsHandler>,
    get_handler: Arc<GetContactHandler>,
    create_handler: Arc<CreateContactHandler>,
    update_handler: Arc<UpdateContactHandler>,
    delete_handler: Arc<DeleteContactHandler>,
    csrf: Arc<CsrfSigner>,
}

impl ContactHandlers {
    pub fn new(
        list_handler: Arc<ListContactsHandler>,
        get_handler: Arc<GetContactHandler>,
        create_handler: Arc<CreateContactHandler>,
        update_handler: Arc<UpdateContactHandler>,
        delete_handler: Arc<DeleteContactHandler>,
        csrf: Arc<CsrfSigner>,
    ) -> Self {
        Self {
            list_handler,
            get_handler,
            create_handler,
            update_handler,
            delete_handler,
            csrf,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /Contacting, GET /Contacting/Index - List all contacts
pub async fn list_contacts(
    State(handlers): State<ContactHandlers>,
    ClientSession(session): ClientSession,
) -> Response {
    match handlers.list_handler.handle(ListContactsQuery { session }).await {
        Ok(contacts) => {
            let response = ContactListResponse {
                total: contacts.len(),
                items: contacts.into_iter().map(Into::into).collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_contact_error(e),
    }
}

/// GET /Contacting/Details?id={id} - Show one contact
///
/// A missing or unparseable id is indistinguishable from an unknown one:
/// both surface as "not found".
pub async fn contact_details(
    State(handlers): State<ContactHandlers>,
    ClientSession(session): ClientSession,
    Query(query): Query<DetailsQuery>,
) -> Response {
    let Some(contact_id) = query.id.as_deref().and_then(parse_id) else {
        return not_found();
    };

    match handlers
        .get_handler
        .handle(GetContactQuery { session, contact_id })
        .await
    {
        Ok(contact) => (StatusCode::OK, Json(super::dto::ContactResponse::from(contact)))
            .into_response(),
        Err(e) => handle_contact_error(e),
    }
}

/// GET /Contacting/Create - Create form view data
pub async fn new_contact_form(
    State(handlers): State<ContactHandlers>,
    ClientSession(session): ClientSession,
) -> Response {
    let response = NewContactFormResponse {
        csrf_token: handlers.csrf.issue(&session),
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// POST /Contacting/Create - Submit new contact
///
/// A malformed submission is logged and the client is redirected to the
/// list as if nothing happened; only a bad CSRF token is surfaced.
pub async fn create_contact(
    State(handlers): State<ContactHandlers>,
    ClientSession(session): ClientSession,
    Form(form): Form<CreateContactForm>,
) -> Response {
    if let Some(rejection) = verify_csrf(&handlers, &session, &form.csrf_token) {
        return rejection;
    }

    let cmd = CreateContactCommand {
        session,
        first_name: form.first_name,
        last_name: form.last_name,
        age: form.age,
    };

    if let Err(e) = handlers.create_handler.handle(cmd).await {
        tracing::warn!(session = %session, error = %e, "create contact discarded");
    }
    redirect_to_index()
}

/// GET /Contacting/Edit/{id} - Edit form view data
pub async fn edit_contact_form(
    State(handlers): State<ContactHandlers>,
    ClientSession(session): ClientSession,
    Path(id): Path<String>,
) -> Response {
    let Some(contact_id) = parse_id(&id) else {
        return not_found();
    };

    match handlers
        .get_handler
        .handle(GetContactQuery { session, contact_id })
        .await
    {
        Ok(contact) => {
            let response = ContactFormResponse {
                contact: contact.into(),
                csrf_token: handlers.csrf.issue(&session),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_contact_error(e),
    }
}

/// POST /Contacting/Edit/{id} - Submit edit
///
/// Unlike create, failures here are surfaced: an unknown id is 404 and a
/// malformed age is 400.
pub async fn update_contact(
    State(handlers): State<ContactHandlers>,
    ClientSession(session): ClientSession,
    Path(id): Path<String>,
    Form(form): Form<EditContactForm>,
) -> Response {
    if let Some(rejection) = verify_csrf(&handlers, &session, &form.csrf_token) {
        return rejection;
    }

    let Some(contact_id) = parse_id(&id) else {
        return not_found();
    };

    let cmd = UpdateContactCommand {
        session,
        contact_id,
        first_name: form.first_name,
        last_name: form.last_name,
        age: form.age,
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(_) => redirect_to_index(),
        Err(e) => handle_contact_error(e),
    }
}

/// GET /Contacting/Delete/{id} - Delete confirmation view data
pub async fn delete_contact_form(
    State(handlers): State<ContactHandlers>,
    ClientSession(session): ClientSession,
    Path(id): Path<String>,
) -> Response {
    let Some(contact_id) = parse_id(&id) else {
        return not_found();
    };

    match handlers
        .get_handler
        .handle(GetContactQuery { session, contact_id })
        .await
    {
        Ok(contact) => {
            let response = ContactFormResponse {
                contact: contact.into(),
                csrf_token: handlers.csrf.issue(&session),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_contact_error(e),
    }
}

/// POST /Contacting/Delete/{id} - Confirm delete
///
/// Always redirects to the list; deleting an unknown id is a no-op and an
/// unparseable id is treated the same way.
pub async fn delete_contact(
    State(handlers): State<ContactHandlers>,
    ClientSession(session): ClientSession,
    Path(id): Path<String>,
    Form(form): Form<DeleteContactForm>,
) -> Response {
    if let Some(rejection) = verify_csrf(&handlers, &session, &form.csrf_token) {
        return rejection;
    }

    if let Some(contact_id) = parse_id(&id) {
        let cmd = DeleteContactCommand { session, contact_id };
        if let Err(e) = handlers.delete_handler.handle(cmd).await {
            tracing::warn!(session = %session, error = %e, "delete contact failed");
        }
    }
    redirect_to_index()
}

// ════════════════════════════════════════════════════════════════════════════
// Helpers and error handling
// ════════════════════════════════════════════════════════════════════════════

fn parse_id(raw: &str) -> Option<ContactId> {
    raw.parse::<ContactId>().ok()
}

fn redirect_to_index() -> Response {
    Redirect::to("/Contacting").into_response()
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::not_found())).into_response()
}

fn verify_csrf(
    handlers: &ContactHandlers,
    session: &SessionToken,
    provided: &str,
) -> Option<Response> {
    if handlers.csrf.verify(session, provided) {
        return None;
    }
    tracing::warn!(session = %session, "rejected POST with invalid CSRF token");
    Some(
        (
            StatusCode::FORBIDDEN,
            Json(ErrorResponse::forbidden("Invalid or missing CSRF token")),
        )
            .into_response(),
    )
}

fn handle_contact_error(error: ContactError) -> Response {
    match error {
        ContactError::NotFound(_) => not_found(),
        ContactError::InvalidAge { .. } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Age must be a whole number")),
        )
            .into_response(),
        ContactError::SessionStore(msg) | ContactError::Serialization(msg) => {
            tracing::error!(error = %msg, "contact operation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal()),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_error_maps_to_404() {
        let error = ContactError::not_found(ContactId::new(9));
        let response = handle_contact_error(error);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn invalid_age_error_maps_to_400() {
        let error = ContactError::invalid_age("thirty");
        let response = handle_contact_error(error);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn session_store_error_maps_to_500() {
        let error = ContactError::session_store("backend down");
        let response = handle_contact_error(error);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn parse_id_accepts_integers_only() {
        assert_eq!(parse_id("5"), Some(ContactId::new(5)));
        assert_eq!(parse_id(" 5 "), Some(ContactId::new(5)));
        assert_eq!(parse_id("five"), None);
        assert_eq!(parse_id(""), None);
    }

    #[test]
    fn redirect_points_at_the_list() {
        let response = redirect_to_index();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(axum::http::header::LOCATION).unwrap(),
            "/Contacting"
        );
    }
}
