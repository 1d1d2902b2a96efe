//! Application layer - one handler per CRUD operation.

pub mod handlers;
