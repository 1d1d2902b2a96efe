//! Contact domain module.
//!
//! A `Contact` is the only entity in the system. The `ContactBook` is the
//! in-memory reconstruction of one session's contact list for the duration
//! of a single request.

mod book;
mod errors;
mod model;

pub use book::ContactBook;
pub use errors::ContactError;
pub use model::{Contact, ContactId};
