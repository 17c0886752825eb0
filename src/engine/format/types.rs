// HotelChat — Engine: Format Types

/// One room listing lifted out of assistant text.
///
/// `name` may be empty when the listing header carried no text; detail
/// fields are `None` when the label is absent or its value is blank.
/// Cards are rebuilt from raw text on every render and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomCard {
    pub name: String,
    pub price: Option<String>,
    pub area: Option<String>,
    pub max_guests: Option<String>,
    pub bed: Option<String>,
    pub description: Option<String>,
    pub amenities: Option<String>,
}

/// Assistant text split into renderable runs, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Plain text between listings. Kept verbatim, surrounding
    /// whitespace included.
    Prose(String),
    /// A structured room listing.
    Room(RoomCard),
}
