//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure view math
//! from page and component logic to improve reuse and testability.

pub mod document;
pub mod map_math;
