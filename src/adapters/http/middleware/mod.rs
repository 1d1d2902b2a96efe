//! HTTP middleware - session identity and CSRF protection.

mod csrf;
mod session;

pub use csrf::CsrfSigner;
pub use session::{session_middleware, ClientSession, SessionCookie, SessionRejection};
