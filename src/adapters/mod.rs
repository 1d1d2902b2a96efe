//! Adapters - concrete implementations of the ports plus the HTTP surface.

pub mod http;
pub mod session;
