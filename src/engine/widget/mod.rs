// HotelChat — Engine: Chat Widget
//
// The controller behind the floating launcher: owns the conversation,
// drives the view, and runs the submit round trip. Storage, service
// and rendering surface all arrive as trait implementations.

pub mod html;
pub mod view;

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::atoms::constants;
use crate::atoms::types::{ChatMessage, Role, SubmitOutcome, WidgetStatus};
use crate::engine::client::{AnswerClient, ChatReply};
use crate::engine::config::WidgetConfig;
use crate::engine::format;
use crate::engine::history::HistoryStore;
use crate::engine::storage::StorageBackend;

pub use view::TranscriptView;

/// One widget instance for one visitor.
///
/// The in-memory transcript is authoritative for the lifetime of the
/// instance; storage is a best-effort mirror read once at mount. At
/// most one submit round trip runs at a time, later calls bounce with
/// [`SubmitOutcome::Busy`] instead of queueing.
pub struct ChatWidget<S, C, V> {
    config: WidgetConfig,
    store: HistoryStore<S>,
    client: C,
    view: Arc<V>,
    history: Mutex<Vec<ChatMessage>>,
    busy: AtomicBool,
    open: AtomicBool,
    messages_sent: AtomicU64,
}

impl<S, C, V> ChatWidget<S, C, V>
where
    S: StorageBackend,
    C: AnswerClient,
    V: TranscriptView,
{
    pub fn new(config: WidgetConfig, backend: S, client: C, view: Arc<V>) -> Self {
        let store = HistoryStore::new(backend, config.storage_key());
        Self {
            config,
            store,
            client,
            view,
            history: Mutex::new(Vec::new()),
            busy: AtomicBool::new(false),
            open: AtomicBool::new(false),
            messages_sent: AtomicU64::new(0),
        }
    }

    /// Bring the widget up: replay the saved transcript, or seed and
    /// persist the greeting when there is none. The window starts
    /// closed either way.
    pub fn mount(&self) {
        let mut history = self.store.load();
        if history.is_empty() {
            let greeting = ChatMessage::assistant(self.config.greeting.clone());
            self.show(&greeting);
            history.push(greeting);
            self.store.save(&history);
        } else {
            for message in &history {
                self.show(message);
            }
        }
        log::info!(
            "[widget] mounted for user '{}' with {} message(s)",
            self.config.user_id,
            history.len()
        );
        *self.history.lock() = history;
        self.view.set_open(false);
    }

    /// Launcher click. Returns the new open state.
    pub fn toggle_open(&self) -> bool {
        let now_open = !self.open.load(Ordering::Relaxed);
        self.open.store(now_open, Ordering::Relaxed);
        self.view.set_open(now_open);
        now_open
    }

    /// Close-button click. A no-op when already closed.
    pub fn close(&self) {
        self.open.store(false, Ordering::Relaxed);
        self.view.set_open(false);
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::Relaxed)
    }

    /// Current transcript, oldest first.
    pub fn history(&self) -> Vec<ChatMessage> {
        self.history.lock().clone()
    }

    pub fn status(&self) -> WidgetStatus {
        WidgetStatus {
            open: self.open.load(Ordering::Relaxed),
            busy: self.busy.load(Ordering::Relaxed),
            message_count: self.messages_sent.load(Ordering::Relaxed),
        }
    }

    /// Send-form submission.
    ///
    /// Trims the input, shows the user bubble, runs one round trip and
    /// always closes with an assistant bubble: the answer, the apology
    /// when the service had none, or the connectivity notice when the
    /// trip failed. Every shown message is persisted, fallbacks
    /// included.
    pub async fn submit(&self, input: &str) -> SubmitOutcome {
        let text = input.trim();
        if text.is_empty() {
            return SubmitOutcome::EmptyInput;
        }
        if self.busy.swap(true, Ordering::Relaxed) {
            return SubmitOutcome::Busy;
        }

        let user = ChatMessage::user(text);
        self.show(&user);
        let outgoing = {
            let mut history = self.history.lock();
            history.push(user);
            self.store.save(&history);
            history.clone()
        };
        self.view.clear_input();
        self.view.set_typing(true);

        let reply = self.client.send_message(text, &outgoing).await;
        self.view.set_typing(false);

        let (content, outcome) = match reply {
            Ok(ChatReply { answer: Some(answer) }) => (answer, SubmitOutcome::Answered),
            Ok(ChatReply { answer: None }) => {
                (constants::NO_ANSWER_FALLBACK.to_string(), SubmitOutcome::NoAnswer)
            }
            Err(e) => {
                log::error!("[widget] chatbot error: {e}");
                (constants::CONNECTION_FALLBACK.to_string(), SubmitOutcome::Failed)
            }
        };

        let assistant = ChatMessage::assistant(content);
        self.show(&assistant);
        {
            let mut history = self.history.lock();
            history.push(assistant);
            self.store.save(&history);
        }

        self.messages_sent.fetch_add(1, Ordering::Relaxed);
        self.busy.store(false, Ordering::Relaxed);
        outcome
    }

    fn show(&self, message: &ChatMessage) {
        let body = match message.role {
            Role::User => format::user_html(&message.content),
            Role::Assistant => format::assistant_html(&message.content),
        };
        self.view.append_bubble(message.role, &body);
    }
}
