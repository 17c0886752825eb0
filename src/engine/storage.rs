// HotelChat — Engine: Storage Backends
//
// The widget persists history through a plain string key/value store,
// the same contract a browser's localStorage offers. Hosts pick a
// backend; the widget never knows which one it got.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;
use rusqlite::Connection;

use crate::atoms::error::{WidgetError, WidgetResult};

/// String key/value store the history layer sits on.
pub trait StorageBackend: Send + Sync {
    /// Value for `key`, or `None` if it was never written.
    fn get(&self, key: &str) -> WidgetResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> WidgetResult<()>;
}

// ── SQLite ───────────────────────────────────────────────────────────

/// Durable backend: a single `kv` table in a SQLite file.
pub struct SqliteStorage {
    conn: Mutex<Connection>,
}

impl SqliteStorage {
    /// Open (or create) the store at `path`.
    pub fn open(path: impl AsRef<Path>) -> WidgetResult<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        log::debug!("[storage] opened {}", path.display());
        Ok(Self { conn: Mutex::new(conn) })
    }

    /// Open the store at the platform data dir (`<data>/hotelchat/widget.db`).
    pub fn open_default() -> WidgetResult<Self> {
        let base = dirs::data_dir()
            .ok_or_else(|| WidgetError::Config("no platform data directory".into()))?
            .join("hotelchat");
        std::fs::create_dir_all(&base)?;
        Self::open(base.join("widget.db"))
    }
}

impl StorageBackend for SqliteStorage {
    fn get(&self, key: &str) -> WidgetResult<Option<String>> {
        let conn = self.conn.lock();
        match conn.query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| row.get(0)) {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> WidgetResult<()> {
        let conn = self.conn.lock();
        conn.execute("INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)", [key, value])?;
        Ok(())
    }
}

// ── In-memory ────────────────────────────────────────────────────────

/// Volatile backend for tests and hosts that opt out of persistence.
/// Clones share the same map.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> WidgetResult<Option<String>> {
        Ok(self.inner.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> WidgetResult<()> {
        self.inner.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
