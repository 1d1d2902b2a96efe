//! Shared value objects used across layers.

mod ids;

pub use ids::SessionToken;
