// HotelChat — Engine: Widget Configuration

use serde::{Deserialize, Serialize};

use crate::atoms::constants;

/// Host-supplied widget settings. Every field has a sensible default so
/// an empty config blob yields the stock guest widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Identifies the visitor; scopes the persisted history key.
    #[serde(default = "default_user_id")]
    pub user_id: String,

    /// Absolute URL the widget posts each message to.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Assistant bubble seeded into every fresh conversation.
    #[serde(default = "default_greeting")]
    pub greeting: String,
}

fn default_user_id() -> String {
    constants::DEFAULT_USER_ID.to_string()
}

fn default_endpoint() -> String {
    constants::DEFAULT_ENDPOINT.to_string()
}

fn default_greeting() -> String {
    constants::GREETING.to_string()
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
            endpoint: default_endpoint(),
            greeting: default_greeting(),
        }
    }
}

impl WidgetConfig {
    /// Stock config for a known visitor.
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self { user_id: user_id.into(), ..Self::default() }
    }

    /// History key for this visitor. Two users sharing one backend get
    /// disjoint keys.
    pub fn storage_key(&self) -> String {
        format!("{}{}", constants::STORAGE_KEY_PREFIX, self.user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_blob_yields_guest_defaults() {
        let config: WidgetConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.user_id, "guest");
        assert_eq!(config.endpoint, constants::DEFAULT_ENDPOINT);
        assert_eq!(config.storage_key(), "hotel_chat_history_guest");
    }

    #[test]
    fn storage_key_scopes_by_user() {
        let a = WidgetConfig::for_user("alice");
        let b = WidgetConfig::for_user("bob");
        assert_ne!(a.storage_key(), b.storage_key());
        assert_eq!(a.storage_key(), "hotel_chat_history_alice");
    }
}
