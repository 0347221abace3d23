//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split into slices (`ports`, `reservations`, `auth`, `ui`), each a
//! plain struct with reducer methods. `app::App` wraps every slice in an
//! `RwSignal` and provides it via context; pages call the reducers inside
//! `update` closures around each mock API request.

pub mod auth;
pub mod ports;
pub mod reservations;
pub mod ui;
