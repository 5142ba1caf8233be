//! Networking for the BudgetAI backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gateway` is the single place that performs HTTP calls, `api` pins each
//! endpoint's path and payload, and `types` defines the wire schema.

pub mod api;
pub mod gateway;
pub mod types;
