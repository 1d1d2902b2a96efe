//! Contacting - Session-Backed Contact Management
//!
//! This crate implements a small contact management web application whose
//! only persistence is the caller's server-side session: the contact list
//! is rehydrated from the session store at the start of each request and
//! flushed back after every mutation.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
