// HotelChat — Engine: Transcript Markup

use std::sync::LazyLock;

use regex::Regex;

use super::parser::parse;
use super::types::{RoomCard, Segment};

/// `**bold**` pairs on a single line.
static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid regex"));

/// Bubble body for an assistant message. Room listings become cards;
/// everything else gets bold markers and line breaks converted.
/// Assistant text is trusted and rendered as-is otherwise.
pub fn assistant_html(text: &str) -> String {
    let mut html = String::new();
    for segment in parse(text) {
        match segment {
            Segment::Prose(prose) => html.push_str(&prose_html(&prose)),
            Segment::Room(card) => html.push_str(&room_card_html(&card)),
        }
    }
    html
}

/// Bubble body for a user message: escaped, then line breaks converted.
/// Visitors type whatever they like; none of it may reach the page as
/// live markup.
pub fn user_html(text: &str) -> String {
    escape_html(text).replace('\n', "<br>")
}

fn prose_html(text: &str) -> String {
    BOLD.replace_all(text, "<strong>${1}</strong>").replace('\n', "<br>")
}

fn room_card_html(card: &RoomCard) -> String {
    let mut html = String::new();
    html.push_str(r#"<div class="chatbot-room-card">"#);
    html.push_str(&format!(
        r#"<div class="chatbot-room-header"><i class="bi bi-door-open"></i><strong>{}</strong></div>"#,
        card.name
    ));
    html.push_str(r#"<div class="chatbot-room-details">"#);
    if let Some(price) = &card.price {
        push_row(
            &mut html,
            "chatbot-room-item",
            "bi-currency-dollar",
            &format!("Giá: <strong>{price}</strong>"),
        );
    }
    if let Some(area) = &card.area {
        push_row(&mut html, "chatbot-room-item", "bi-rulers", &format!("Diện tích: {area}"));
    }
    if let Some(guests) = &card.max_guests {
        push_row(&mut html, "chatbot-room-item", "bi-people", &format!("Tối đa: {guests}"));
    }
    if let Some(bed) = &card.bed {
        push_row(&mut html, "chatbot-room-item", "bi-bed", &format!("Giường: {bed}"));
    }
    if let Some(description) = &card.description {
        push_row(&mut html, "chatbot-room-desc", "bi-info-circle", description);
    }
    if let Some(amenities) = &card.amenities {
        push_row(&mut html, "chatbot-room-amenities", "bi-star", &format!("Tiện nghi: {amenities}"));
    }
    html.push_str("</div></div>");
    html
}

fn push_row(html: &mut String, class: &str, icon: &str, body: &str) {
    html.push_str(&format!(
        r#"<div class="{class}"><i class="bi {icon}"></i><span>{body}</span></div>"#
    ));
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
