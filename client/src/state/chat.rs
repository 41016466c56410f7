//! State for the support chat popup.
//!
//! DESIGN
//! ======
//! The panel is a two-state machine (`Closed` ⇄ `Open`). Messages form an
//! append-only log; nothing is removed or persisted. Submitting hands back a
//! [`PendingReply`] instead of scheduling anything, so the caller decides how
//! the delay is realized (a browser timer, or nothing at all in tests).

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::time::Duration;

use crate::util::replies::{RandomSource, pick_reply, reply_delay};

pub const TOGGLE_LABEL_CLOSED: &str = "Chat with us";
pub const TOGGLE_LABEL_OPEN: &str = "Close chat";

/// Visibility of the chat panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

/// Who wrote a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageOrigin {
    User,
    Automated,
}

/// A single chat message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub text: String,
    pub origin: MessageOrigin,
}

/// An automated reply waiting for its delay to elapse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingReply {
    pub delay: Duration,
    pub text: &'static str,
}

/// State for the chat widget.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub panel: PanelState,
    /// Current contents of the input field.
    pub draft: String,
    pub messages: Vec<ChatMessage>,
}

impl ChatState {
    pub fn is_open(&self) -> bool {
        self.panel == PanelState::Open
    }

    pub fn open(&mut self) {
        self.panel = PanelState::Open;
    }

    pub fn close(&mut self) {
        self.panel = PanelState::Closed;
    }

    /// Flip the panel and return the new state.
    pub fn toggle(&mut self) -> PanelState {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
        self.panel
    }

    /// Label shown on the toggle button.
    pub fn toggle_label(&self) -> &'static str {
        match self.panel {
            PanelState::Open => TOGGLE_LABEL_OPEN,
            PanelState::Closed => TOGGLE_LABEL_CLOSED,
        }
    }

    /// Submit the current draft.
    ///
    /// Blank drafts are ignored and return `None`. Otherwise the trimmed text
    /// is appended as a user message, the draft is cleared, and the reply to
    /// deliver later is returned.
    pub fn submit(&mut self, rng: &mut impl RandomSource) -> Option<PendingReply> {
        let text = self.draft.trim();
        if text.is_empty() {
            return None;
        }

        self.messages.push(ChatMessage { text: text.to_owned(), origin: MessageOrigin::User });
        self.draft.clear();

        let text = pick_reply(rng);
        let delay = reply_delay(rng);
        Some(PendingReply { delay, text })
    }

    /// Append an automated reply whose delay has elapsed.
    pub fn deliver(&mut self, reply: PendingReply) {
        self.messages
            .push(ChatMessage { text: reply.text.to_owned(), origin: MessageOrigin::Automated });
    }
}
