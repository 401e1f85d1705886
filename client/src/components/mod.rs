//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and interaction surfaces while reading shared
//! state from Leptos context providers.

pub mod branch_card;
pub mod metric_card;
pub mod session_gate;
