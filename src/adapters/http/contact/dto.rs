//! HTTP DTOs for contact endpoints.
//!
//! Form field names (`FirstName`, `LastName`, `Age`, `CsrfToken`) are the
//! PascalCase names the form templates submit; response DTOs decouple the
//! JSON view data from domain types.

use serde::{Deserialize, Serialize};

use crate::domain::contact::Contact;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Form body for creating a contact. `Age` stays text until the handler
/// converts it; missing fields default to empty text the way HTML forms
/// submit them.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateContactForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub csrf_token: String,
}

/// Form body for editing a contact.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EditContactForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub csrf_token: String,
}

/// Form body for confirming a delete.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteContactForm {
    #[serde(default)]
    pub csrf_token: String,
}

/// Query parameters for the details endpoint. The id is optional at the
/// HTTP level; absence becomes "not found" in the handler.
#[derive(Debug, Clone, Deserialize)]
pub struct DetailsQuery {
    #[serde(default)]
    pub id: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Single contact as view data.
#[derive(Debug, Clone, Serialize)]
pub struct ContactResponse {
    pub contact_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
}

impl From<Contact> for ContactResponse {
    fn from(contact: Contact) -> Self {
        Self {
            contact_id: contact.contact_id.value(),
            first_name: contact.first_name,
            last_name: contact.last_name,
            age: contact.age,
        }
    }
}

/// Full list view data.
#[derive(Debug, Clone, Serialize)]
pub struct ContactListResponse {
    pub items: Vec<ContactResponse>,
    pub total: usize,
}

/// View data for the create form: only the CSRF token the form must echo.
#[derive(Debug, Clone, Serialize)]
pub struct NewContactFormResponse {
    pub csrf_token: String,
}

/// View data for edit and delete-confirmation forms.
#[derive(Debug, Clone, Serialize)]
pub struct ContactFormResponse {
    pub contact: ContactResponse,
    pub csrf_token: String,
}

/// Standard error response. Failures carry no diagnostic detail beyond a
/// code and a generic message.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn not_found() -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: "Contact not found".to_string(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self {
            code: "FORBIDDEN".to_string(),
            message: message.into(),
        }
    }

    pub fn internal() -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: "Something went wrong".to_string(),
        }
    }
}
