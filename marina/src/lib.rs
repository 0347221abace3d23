//! Domain model and pure helpers for the DockNow marina booking app.
//!
//! This crate is UI-framework agnostic so both the `server` mock API and the
//! Leptos `client` slices consume the same port/reservation types, the search
//! predicate, and booking math.

pub mod filter;
pub mod format;
pub mod i18n;
pub mod mock;
pub mod pricing;
pub mod types;
pub mod validate;

pub use types::*;
