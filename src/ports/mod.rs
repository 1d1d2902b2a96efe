//! Ports - trait boundaries between the application core and the outside.

mod session_store;

pub use session_store::{SessionStore, SessionStoreError};
