// HotelChat — Engine: Listing Parser
//
// Assistant replies carry room listings as `**Phòng N: **name` headers
// followed by `**Label:** value` lines. The parser lifts each block
// into a RoomCard and keeps the text around the blocks as prose.

use std::sync::LazyLock;

use regex::Regex;

use super::types::{RoomCard, Segment};

/// One whole listing block: header plus any number of labeled lines.
/// Greedy tails mean text after the last labeled line is absorbed into
/// the block until the next `*`.
static ROOM_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*Phòng \d+:\s*\*\*[^*]+(?:\*\*[^*]+:\*\*[^*]+)*").expect("valid regex")
});

static ROOM_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*Phòng \d+:\s*\*\*([^*\n]+)").expect("valid regex"));

static PRICE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*Giá:\*\*\s*([^\n*]+)").expect("valid regex"));

static AREA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*Diện tích:\*\*\s*([^\n*]+)").expect("valid regex"));

static MAX_GUESTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*Tối đa:\*\*\s*([^\n*]+)").expect("valid regex"));

static BED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*Giường:\*\*\s*([^\n*]+)").expect("valid regex"));

static DESCRIPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*Mô tả:\*\*\s*([^\n*]+)").expect("valid regex"));

static AMENITIES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*Tiện nghi:\*\*\s*([^\n*]+)").expect("valid regex"));

/// Split assistant text into prose runs and room listings.
///
/// Text with no listing at all comes back as a single prose segment,
/// even when it is empty. Around listings, whitespace-only prose runs
/// are dropped; non-blank ones are kept verbatim.
pub fn parse(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut tail = 0;

    for block in ROOM_BLOCK.find_iter(text) {
        let before = &text[tail..block.start()];
        if !before.trim().is_empty() {
            segments.push(Segment::Prose(before.to_string()));
        }
        segments.push(Segment::Room(parse_room(block.as_str())));
        tail = block.end();
    }

    if segments.is_empty() {
        return vec![Segment::Prose(text.to_string())];
    }

    let after = &text[tail..];
    if !after.trim().is_empty() {
        segments.push(Segment::Prose(after.to_string()));
    }
    segments
}

fn parse_room(block: &str) -> RoomCard {
    RoomCard {
        name: ROOM_NAME
            .captures(block)
            .and_then(|caps| caps.get(1))
            .map(|name| name.as_str().trim().to_string())
            .unwrap_or_default(),
        price: labeled_field(&PRICE, block),
        area: labeled_field(&AREA, block),
        max_guests: labeled_field(&MAX_GUESTS, block),
        bed: labeled_field(&BED, block),
        description: labeled_field(&DESCRIPTION, block),
        amenities: labeled_field(&AMENITIES, block),
    }
}

fn labeled_field(pattern: &Regex, block: &str) -> Option<String> {
    pattern
        .captures(block)
        .and_then(|caps| caps.get(1))
        .map(|value| value.as_str().trim().to_string())
        .filter(|value| !value.is_empty())
}
