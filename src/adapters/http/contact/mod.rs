//! HTTP adapter for contact endpoints.

mod dto;
mod handlers;
mod routes;

pub use handlers::ContactHandlers;
pub use routes::contact_routes;
