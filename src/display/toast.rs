//! Toast notifications
//!
//! One-shot toasts are shown once. The participant status toast is created the
//! first time a count is known and updated in place afterwards.

use serde::Serialize;

use super::view::participants_text;

/// Text of the one-shot toast fired when someone joins
pub const PARTICIPANT_JOINED_TEXT: &str = "A new person joined the session! 🍅";

/// Whether a toast disappears after showing or stays and gets updated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    OneShot,
    Status,
}

/// Toast change emitted to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ToastEvent {
    Show { id: u64, kind: ToastKind, text: String },
    /// Replaces the text of a shown status toast
    Update { id: u64, text: String },
}

impl ToastEvent {
    pub fn id(&self) -> u64 {
        match self {
            ToastEvent::Show { id, .. } | ToastEvent::Update { id, .. } => *id,
        }
    }

    pub fn kind(&self) -> ToastKind {
        match self {
            ToastEvent::Show { kind, .. } => *kind,
            ToastEvent::Update { .. } => ToastKind::Status,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            ToastEvent::Show { text, .. } | ToastEvent::Update { text, .. } => text,
        }
    }
}

/// Hands out toast ids and tracks the persistent status toast
#[derive(Debug, Default)]
pub struct Toaster {
    next_id: u64,
    status_id: Option<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Fire a toast that is shown once
    pub fn one_shot(&mut self, text: impl Into<String>) -> ToastEvent {
        ToastEvent::Show {
            id: self.allocate(),
            kind: ToastKind::OneShot,
            text: text.into(),
        }
    }

    /// Show or update the participant status toast
    pub fn participant_status(&mut self, count: u64) -> ToastEvent {
        let text = participants_text(count);
        match self.status_id {
            Some(id) => ToastEvent::Update { id, text },
            None => {
                let id = self.allocate();
                self.status_id = Some(id);
                ToastEvent::Show { id, kind: ToastKind::Status, text }
            }
        }
    }
}
