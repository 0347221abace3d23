//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (loading data, redirects,
//! form state) and delegates cards, filters, and the map to `components`.

pub mod about;
pub mod booking;
pub mod home;
pub mod port_detail;
pub mod ports_list;
pub mod reservations;
pub mod sign_in;
pub mod sign_up;
