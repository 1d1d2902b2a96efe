//! Session store adapters.
//!
//! The in-memory store backs development and tests; the redis store backs
//! multi-server deployments where session state must outlive one process.

mod in_memory_session_store;
mod redis_session_store;

pub use in_memory_session_store::InMemorySessionStore;
pub use redis_session_store::RedisSessionStore;
