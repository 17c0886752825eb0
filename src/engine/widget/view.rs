// HotelChat — Engine: Transcript View

use crate::atoms::types::Role;

/// Surface the controller patches as the conversation advances: one
/// method per mutation the widget performs on its page. Implementations
/// that do not track a given detail keep the default no-op.
pub trait TranscriptView: Send + Sync {
    /// A finished bubble for `role`; `html` is the pre-rendered body.
    fn append_bubble(&self, role: Role, html: &str);

    /// Show or hide the typing indicator.
    fn set_typing(&self, visible: bool) {
        let _ = visible;
    }

    /// Open or close the chat window.
    fn set_open(&self, open: bool) {
        let _ = open;
    }

    /// Blank the input box once a message is on its way.
    fn clear_input(&self) {}
}
