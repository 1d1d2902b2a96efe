//! Domain layer - contact records and the session-scoped contact book.

pub mod contact;
pub mod foundation;
