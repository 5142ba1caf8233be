//! Reactive state shared through Leptos context.
//!
//! DESIGN
//! ======
//! Plain structs wrapped in `RwSignal`. Session, UI and chat state are
//! provided by `app::App` and read through `expect_context`; analysis state is
//! owned by its page.

pub mod analysis;
pub mod chat;
pub mod session;
pub mod ui;
