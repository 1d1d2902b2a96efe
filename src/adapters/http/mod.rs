//! HTTP adapters - routing, middleware, and the contact endpoint surface.

pub mod contact;
pub mod middleware;

use axum::Router;

pub use contact::{contact_routes, ContactHandlers};
pub use middleware::{session_middleware, ClientSession, CsrfSigner, SessionCookie};

/// Assembles the application router: contact routes nested under
/// `/Contacting`, wrapped in the session middleware.
pub fn build_router(handlers: ContactHandlers, cookie: SessionCookie) -> Router {
    Router::new()
        .nest("/Contacting", contact_routes(handlers))
        .layer(axum::middleware::from_fn_with_state(
            cookie,
            session_middleware,
        ))
}
