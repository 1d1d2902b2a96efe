//! Command and query handlers.

pub mod contact;
