//! Chat transcript and message input for the budgeting assistant.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sends prompts through `net::api::send_chat_prompt` and keeps the
//! transcript in the shared [`ChatState`] context. Bot replies are rendered
//! as markdown with raw HTML stripped.

#[cfg(test)]
#[path = "chat_panel_test.rs"]
mod chat_panel_test;

use leptos::prelude::*;
use pulldown_cmark::{Event, Options, Parser, html};

use crate::state::chat::{ChatState, Sender, validate_message};

/// Conversation history plus a prompt input row.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let input = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        chat.track();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        if chat.get().pending {
            return;
        }
        let text = match validate_message(&input.get()) {
            Ok(text) => text,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        error.set(None);
        input.set(String::new());
        chat.update(|c| c.push_user(&text));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let reply = crate::net::api::send_chat_prompt(&text).await;
            if let Err(e) = &reply {
                log::error!("chat prompt failed: {e}");
            }
            chat.update(|c| c.push_reply(reply));
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        do_send();
    };

    view! {
        <div class="chat-panel">
            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    let messages = chat.get().messages;
                    if messages.is_empty() {
                        return view! {
                            <div class="chat-panel__empty">"Ask anything about your spending."</div>
                        }
                            .into_any();
                    }

                    messages
                        .iter()
                        .map(|msg| {
                            let is_bot = msg.sender == Sender::Bot;
                            let text = msg.text.clone();
                            view! {
                                <div
                                    class="chat-panel__message"
                                    class:chat-panel__message--bot=is_bot
                                    class:chat-panel__message--user=!is_bot
                                >
                                    {if is_bot {
                                        let rendered = render_markdown_html(&text);
                                        view! { <div class="chat-panel__markdown" inner_html=rendered></div> }
                                            .into_any()
                                    } else {
                                        view! { <span>{text}</span> }.into_any()
                                    }}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}

                {move || {
                    chat.get()
                        .pending
                        .then(|| view! { <div class="chat-panel__loading">"Thinking..."</div> })
                }}
            </div>

            <form class="chat-panel__input-row" on:submit=on_submit>
                <label class="chat-panel__label" for="chat-message">
                    "Message"
                </label>
                <input
                    id="chat-message"
                    class="chat-panel__input"
                    type="text"
                    placeholder="Type your message..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
                <button class="btn btn--primary chat-panel__send" type="submit" disabled=move || chat.get().pending>
                    "Send"
                </button>
            </form>
            {move || error.get().map(|message| view! { <p class="form__error">{message}</p> })}
        </div>
    }
}

fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    // Model output may contain HTML; only markdown is rendered.
    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
