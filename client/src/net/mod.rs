//! Networking modules for the mock REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls and `types` defines the request and response
//! bodies that are not part of the `marina` data model.

pub mod api;
pub mod types;
