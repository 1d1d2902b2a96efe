//! Session middleware and extractor for axum.
//!
//! This module provides:
//! - `session_middleware` - Layer that resolves the session cookie and injects
//!   a `SessionToken` into request extensions, minting one when absent
//! - `ClientSession` - Extractor that hands the token to handlers
//!
//! ```text
//! Request → session_middleware → injects SessionToken into extensions
//!                                       ↓
//!                               Handler → ClientSession extractor reads it
//! ```
//!
//! A missing or unparseable cookie is never an error: the visitor simply
//! gets a fresh session, exactly as a framework-managed session would.

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::foundation::SessionToken;

/// Name of the session cookie, carried as middleware state.
#[derive(Debug, Clone)]
pub struct SessionCookie {
    name: String,
}

impl SessionCookie {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Session middleware.
///
/// 1. Reads the session cookie from the `Cookie` header
/// 2. Parses it into a `SessionToken`; garbage is treated as absent
/// 3. Mints a fresh token when no valid cookie is present
/// 4. Injects the token into request extensions
/// 5. Appends a `Set-Cookie` header to the response when a token was minted
pub async fn session_middleware(
    State(cookie): State<SessionCookie>,
    mut request: Request,
    next: Next,
) -> Response {
    let existing = request
        .headers()
        .get(header::COOKIE)
        .and_then(|h| h.to_str().ok())
        .and_then(|raw| cookie_value(raw, cookie.name()))
        .and_then(|v| v.parse::<SessionToken>().ok());

    let (token, minted) = match existing {
        Some(token) => (token, false),
        None => (SessionToken::new(), true),
    };

    request.extensions_mut().insert(token);
    let mut response = next.run(request).await;

    if minted {
        let value = format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax",
            cookie.name(),
            token
        );
        match HeaderValue::from_str(&value) {
            Ok(header_value) => {
                response.headers_mut().append(header::SET_COOKIE, header_value);
            }
            Err(e) => {
                tracing::error!(error = %e, "session cookie could not be encoded");
            }
        }
    }

    response
}

fn cookie_value<'a>(raw: &'a str, name: &str) -> Option<&'a str> {
    raw.split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

/// Extractor handing the resolved session token to handlers.
#[derive(Debug, Clone, Copy)]
pub struct ClientSession(pub SessionToken);

impl<S> axum::extract::FromRequestParts<S> for ClientSession
where
    S: Send + Sync,
{
    type Rejection = SessionRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<SessionToken>()
                .copied()
                .map(ClientSession)
                .ok_or(SessionRejection::Missing)
        })
    }
}

/// Rejection for handlers mounted without the session middleware.
#[derive(Debug, Clone)]
pub enum SessionRejection {
    Missing,
}

impl IntoResponse for SessionRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({
                "error": "Session not initialized",
                "code": "SESSION_MISSING"
            })),
        )
            .into_response()
    }
}
