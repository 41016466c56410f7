//! Support chat popup with canned automated replies.
//!
//! DESIGN
//! ======
//! The widget is a toggle button plus a panel holding the message log and an
//! input form. Submitting echoes the user's text and arms a one-shot timer
//! per message; each timer appends its own reply when it fires. Timers are
//! never cancelled or ordered against each other.

use leptos::html;
use leptos::prelude::*;

use crate::state::chat::{ChatState, MessageOrigin, PendingReply};
use crate::util::replies::MathRandom;

#[cfg(feature = "csr")]
use gloo_timers::callback::Timeout;

const GREETING: &str = "Hi! 👋 Need online tech support? Type your question below and a volunteer will get back to you soon.";

/// Floating chat button and panel.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let chat = RwSignal::new(ChatState::default());
    let input_ref = NodeRef::<html::Input>::new();
    let messages_ref = NodeRef::<html::Div>::new();

    let is_open = Memo::new(move |_| chat.with(ChatState::is_open));
    let messages = Memo::new(move |_| chat.with(|c| c.messages.clone()));
    let message_count = Memo::new(move |_| messages.with(Vec::len));

    Effect::new(move || {
        if is_open.get() {
            focus_input(input_ref);
        }
    });

    Effect::new(move || {
        message_count.track();
        scroll_to_bottom(messages_ref);
    });

    let on_toggle = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        chat.update(|c| {
            c.toggle();
        });
    };

    let on_close = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        chat.update(ChatState::close);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(reply) = chat.try_update(|c| c.submit(&mut MathRandom)).flatten() else {
            return;
        };
        schedule_reply(chat, reply);
    };

    view! {
        <div id="chat-widget" class="chat-widget">
            <button
                id="chat-toggle"
                class="chat-toggle"
                class:chat-open=move || is_open.get()
                aria-label="Open chat"
                on:click=on_toggle
            >
                <svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <path d="M21 11.5a8.38 8.38 0 0 1-.9 3.8 8.5 8.5 0 0 1-7.6 4.7 8.38 8.38 0 0 1-3.8-.9L3 21l1.9-5.7a8.38 8.38 0 0 1-.9-3.8 8.5 8.5 0 0 1 4.7-7.6 8.38 8.38 0 0 1 3.8-.9h.5a8.48 8.48 0 0 1 8 8v.5z" />
                </svg>
                <span class="chat-toggle-text">{move || chat.with(ChatState::toggle_label)}</span>
            </button>

            <div
                id="chat-panel"
                class="chat-panel"
                hidden=move || !is_open.get()
                style:display=move || if is_open.get() { "flex" } else { "none" }
            >
                <div class="chat-header">
                    <h3>"Support"</h3>
                    <p>"We typically reply within a few hours"</p>
                    <button id="chat-close" class="chat-close" aria-label="Close chat" on:click=on_close>
                        "×"
                    </button>
                </div>

                <div class="chat-messages" node_ref=messages_ref>
                    <div class="chat-msg chat-msg-bot">
                        <div class="chat-msg-bubble">{GREETING}</div>
                    </div>
                    {move || {
                        messages
                            .get()
                            .into_iter()
                            .map(|msg| match msg.origin {
                                MessageOrigin::User => view! {
                                    <div class="chat-msg chat-msg-user">
                                        <div class="chat-msg-bubble">{msg.text}</div>
                                    </div>
                                }
                                .into_any(),
                                MessageOrigin::Automated => view! {
                                    <div class="chat-msg chat-msg-bot">
                                        <div class="chat-msg-bubble" inner_html=msg.text></div>
                                    </div>
                                }
                                .into_any(),
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>

                <form id="chat-form" class="chat-input-area" on:submit=on_submit>
                    <input
                        type="text"
                        id="chat-input"
                        placeholder="Type your message..."
                        autocomplete="off"
                        node_ref=input_ref
                        prop:value=move || chat.with(|c| c.draft.clone())
                        on:input=move |ev| chat.update(|c| c.draft = event_target_value(&ev))
                    />
                    <button type="submit" class="chat-send" aria-label="Send">
                        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                            <line x1="22" y1="2" x2="11" y2="13" />
                            <polygon points="22 2 15 22 11 13 2 9 22 2" />
                        </svg>
                    </button>
                </form>
            </div>
        </div>
    }
}

/// Deliver `reply` into `chat` once its delay elapses.
#[cfg(feature = "csr")]
fn schedule_reply(chat: RwSignal<ChatState>, reply: PendingReply) {
    let millis = u32::try_from(reply.delay.as_millis()).unwrap_or(u32::MAX);
    Timeout::new(millis, move || chat.update(|c| c.deliver(reply))).forget();
}

#[cfg(not(feature = "csr"))]
fn schedule_reply(_chat: RwSignal<ChatState>, _reply: PendingReply) {}

/// Focus the message input on the next tick, once the panel is visible.
#[cfg(feature = "csr")]
fn focus_input(input_ref: NodeRef<html::Input>) {
    Timeout::new(0, move || {
        let Some(input) = input_ref.get_untracked() else {
            return;
        };
        if let Err(err) = input.focus() {
            log::warn!("chat input focus failed: {err:?}");
        }
    })
    .forget();
}

#[cfg(not(feature = "csr"))]
fn focus_input(_input_ref: NodeRef<html::Input>) {}

#[cfg(feature = "csr")]
fn scroll_to_bottom(messages_ref: NodeRef<html::Div>) {
    if let Some(el) = messages_ref.get_untracked() {
        el.set_scroll_top(el.scroll_height());
    }
}

#[cfg(not(feature = "csr"))]
fn scroll_to_bottom(_messages_ref: NodeRef<html::Div>) {}
