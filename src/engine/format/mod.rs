// HotelChat — Engine: Assistant Message Formatting
//
// Raw assistant text in, transcript markup out. Parsing and rendering
// are split so hosts with their own renderer can stop at the typed
// segments.

pub mod markup;
pub mod parser;
pub mod types;

pub use markup::{assistant_html, user_html};
pub use parser::parse;
pub use types::{RoomCard, Segment};
