// HotelChat — Atoms: Types

use serde::{Deserialize, Serialize};

// ── Transcript ───────────────────────────────────────────────────────

/// Who a transcript bubble belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Lowercase name, also used as the bubble CSS class suffix.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One transcript entry as persisted. `content` is raw text, never markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }
}

// ── Submit round trip ────────────────────────────────────────────────

/// What a submit call actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was empty after trimming; nothing happened.
    EmptyInput,
    /// A previous submit is still in flight; nothing happened.
    Busy,
    /// The assistant answered normally.
    Answered,
    /// The service replied but carried no usable answer; the apology
    /// bubble was shown instead.
    NoAnswer,
    /// The round trip itself failed; the connectivity bubble was shown.
    Failed,
}

// ── Introspection ────────────────────────────────────────────────────

/// Snapshot of widget state for host-side introspection.
#[derive(Debug, Clone, Serialize)]
pub struct WidgetStatus {
    pub open: bool,
    pub busy: bool,
    pub message_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), "\"assistant\"");
    }

    #[test]
    fn message_round_trips_through_json() {
        let msg = ChatMessage::user("Tôi muốn đặt phòng");
        let json = serde_json::to_string(&msg).unwrap();
        assert_eq!(json, r#"{"role":"user","content":"Tôi muốn đặt phòng"}"#);
        let back: ChatMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }
}
