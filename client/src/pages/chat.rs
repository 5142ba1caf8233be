//! Assistant chat page.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;

/// Chat route; the transcript itself lives in app-wide context.
#[component]
pub fn ChatPage() -> impl IntoView {
    view! {
        <div class="page chat-page">
            <h1>"ChatBot"</h1>
            <ChatPanel/>
        </div>
    }
}
