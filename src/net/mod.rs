//! Networking modules for the asset REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `types` defines the wire schema, and `error`
//! classifies what can go wrong.

pub mod api;
pub mod error;
pub mod types;
