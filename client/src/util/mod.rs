//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser storage, routing guards and pure form/chart
//! logic from page and component code to improve reuse and testability.

pub mod auth;
pub mod chart;
pub mod dark_mode;
pub mod guard;
pub mod password;
pub mod session_store;
pub mod validation;
