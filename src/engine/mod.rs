// HotelChat — Engine
//
// Everything behind the widget surface: configuration, persistence,
// the answer client, message formatting, and the controller itself.

pub mod client;
pub mod config;
pub mod format;
pub mod history;
pub mod storage;
pub mod widget;
