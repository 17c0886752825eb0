// HotelChat — Atoms
//
// Leaf building blocks shared by every engine module: constants,
// error plumbing, and the plain data types the widget passes around.

pub mod constants;
pub mod error;
pub mod types;
