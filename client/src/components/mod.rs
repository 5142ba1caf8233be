//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome and data views while reading/writing shared
//! state from Leptos context providers.

pub mod chat_panel;
pub mod guarded;
pub mod navbar;
pub mod password_helper;
pub mod spending_chart;
pub mod transactions_table;
