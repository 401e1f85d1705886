//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure business math
//! from page and component logic to improve reuse and testability.

pub mod auth;
pub mod currency;
pub mod error_message;
pub mod metrics;
pub mod session_gate;
pub mod storage;
