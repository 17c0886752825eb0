// HotelChat — Engine: HTML Transcript
//
// Reference view: owns the rendered conversation and produces the
// complete widget markup on demand. Hosts that re-render the whole
// widget per patch (server-driven pages, snapshot tests) use this;
// browser hosts usually implement TranscriptView over live DOM calls.

use parking_lot::Mutex;

use crate::atoms::constants;
use crate::atoms::types::Role;
use crate::engine::widget::view::TranscriptView;

const TYPING_BUBBLE: &str = concat!(
    r#"<div class="chatbot-message chatbot-message-assistant" id="chatbotTyping">"#,
    r#"<div class="chatbot-bubble chatbot-typing"><span></span><span></span><span></span></div>"#,
    r#"</div>"#,
);

#[derive(Default)]
struct TranscriptState {
    bubbles: Vec<String>,
    typing: bool,
    open: bool,
}

/// See module docs. Starts closed, empty, indicator hidden.
#[derive(Default)]
pub struct HtmlTranscript {
    state: Mutex<TranscriptState>,
}

impl HtmlTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Complete widget markup for the current state. The window carries
    /// `d-none` exactly while the widget is closed.
    pub fn render(&self) -> String {
        let state = self.state.lock();
        let window_class =
            if state.open { "chatbot-window" } else { "chatbot-window d-none" };

        let mut html = String::new();
        html.push_str(r#"<div class="chatbot-widget">"#);
        html.push_str(concat!(
            r#"<div class="chatbot-toggle-btn" id="chatbotToggleBtn">"#,
            r#"<i class="bi bi-chat-dots-fill"></i></div>"#,
        ));
        html.push_str(&format!(r#"<div class="{window_class}" id="chatbotWindow">"#));
        html.push_str(&format!(
            concat!(
                r#"<div class="chatbot-header"><div><strong>{title}</strong>"#,
                r#"<div class="small text-muted">{subtitle}</div></div>"#,
                r#"<button type="button" class="btn-close btn-close-white" id="chatbotCloseBtn">"#,
                r#"</button></div>"#,
            ),
            title = constants::WIDGET_TITLE,
            subtitle = constants::WIDGET_SUBTITLE,
        ));
        html.push_str(r#"<div class="chatbot-messages" id="chatbotMessages">"#);
        for bubble in &state.bubbles {
            html.push_str(bubble);
        }
        if state.typing {
            html.push_str(TYPING_BUBBLE);
        }
        html.push_str("</div>");
        html.push_str(&format!(
            concat!(
                r#"<form class="chatbot-input-area" id="chatbotForm">"#,
                r#"<input type="text" class="form-control chatbot-input" id="chatbotInput" "#,
                r#"placeholder="{placeholder}" autocomplete="off"/>"#,
                r#"<button type="submit" class="btn btn-primary chatbot-send-btn">"#,
                r#"<i class="bi bi-send-fill"></i></button></form>"#,
            ),
            placeholder = constants::INPUT_PLACEHOLDER,
        ));
        html.push_str("</div></div>");
        html
    }

    pub fn bubble_count(&self) -> usize {
        self.state.lock().bubbles.len()
    }
}

fn bubble_html(role: Role, body: &str) -> String {
    format!(
        r#"<div class="chatbot-message chatbot-message-{role}"><div class="chatbot-bubble">{body}</div></div>"#
    )
}

impl TranscriptView for HtmlTranscript {
    fn append_bubble(&self, role: Role, html: &str) {
        self.state.lock().bubbles.push(bubble_html(role, html));
    }

    fn set_typing(&self, visible: bool) {
        self.state.lock().typing = visible;
    }

    fn set_open(&self, open: bool) {
        self.state.lock().open = open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_with_empty_transcript() {
        let view = HtmlTranscript::new();
        let html = view.render();
        assert!(html.contains(r#"class="chatbot-window d-none""#));
        assert!(html.contains("Trợ lý HotelBooking"));
        assert!(html.contains("Nhập câu hỏi của bạn..."));
        assert!(!html.contains("chatbot-bubble"));
    }

    #[test]
    fn open_state_drops_the_hidden_class() {
        let view = HtmlTranscript::new();
        view.set_open(true);
        assert!(view.render().contains(r#"class="chatbot-window" id="chatbotWindow""#));
        view.set_open(false);
        assert!(view.render().contains(r#"class="chatbot-window d-none""#));
    }

    #[test]
    fn bubbles_keep_arrival_order_and_role_class() {
        let view = HtmlTranscript::new();
        view.append_bubble(Role::Assistant, "Xin chào");
        view.append_bubble(Role::User, "Giá phòng?");
        let html = view.render();
        let assistant = html.find("chatbot-message-assistant").unwrap();
        let user = html.find("chatbot-message-user").unwrap();
        assert!(assistant < user);
        assert_eq!(view.bubble_count(), 2);
    }

    #[test]
    fn typing_indicator_appears_only_while_set() {
        let view = HtmlTranscript::new();
        assert!(!view.render().contains("chatbotTyping"));
        view.set_typing(true);
        assert!(view.render().contains("chatbotTyping"));
        view.set_typing(false);
        assert!(!view.render().contains("chatbotTyping"));
    }
}
