//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome, port listings, and the map while reading
//! and writing shared state slices from Leptos context providers.

pub mod header;
pub mod notifications;
pub mod port_card;
pub mod port_filters;
pub mod ports_map;
