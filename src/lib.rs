// HotelChat — Crate Root

//! Floating chat assistant for the HotelBooking site.
//!
//! The widget keeps one conversation per visitor: a launcher bubble, a
//! message window, per-user persisted history, and a single POST round
//! trip per submitted message. Assistant replies that carry room
//! listings (`**Phòng N: **` blocks) render as structured room cards.
//!
//! Hosts wire three seams and drive the rest through [`ChatWidget`]:
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use hotelchat::{ChatWidget, HtmlTranscript, HttpAnswerClient, SqliteStorage, WidgetConfig};
//!
//! # async fn run() -> hotelchat::WidgetResult<()> {
//! let config = WidgetConfig::for_user("user-42");
//! let client = HttpAnswerClient::new(config.endpoint.clone());
//! let view = Arc::new(HtmlTranscript::new());
//! let widget = ChatWidget::new(config, SqliteStorage::open_default()?, client, Arc::clone(&view));
//!
//! widget.mount();
//! widget.toggle_open();
//! widget.submit("Còn phòng đôi cuối tuần này không?").await;
//! let page_fragment = view.render();
//! # Ok(())
//! # }
//! ```

pub mod atoms;
pub mod engine;

pub use atoms::constants;
pub use atoms::error::{WidgetError, WidgetResult};
pub use atoms::types::{ChatMessage, Role, SubmitOutcome, WidgetStatus};
pub use engine::client::{AnswerClient, ChatReply, HttpAnswerClient};
pub use engine::config::WidgetConfig;
pub use engine::format::{assistant_html, parse, user_html, RoomCard, Segment};
pub use engine::history::HistoryStore;
pub use engine::storage::{MemoryStorage, SqliteStorage, StorageBackend};
pub use engine::widget::html::HtmlTranscript;
pub use engine::widget::{ChatWidget, TranscriptView};
