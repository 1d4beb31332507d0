//! Message envelope and sync response types.

use super::{ServerId, SyncKey};

/// Minimal envelope of a synced message.
///
/// EAS `Sync` responses carry far more; this is the slice the client
/// relies on. Servers may omit any header, and older Exchange versions
/// return X.500 distinguished names instead of SMTP addresses, so the
/// header values are raw strings for the caller to normalize.
#[derive(Debug, Clone)]
pub struct Message {
    /// Server-assigned identifier within the synced folder.
    pub server_id: ServerId,
    /// Raw `From` header value, if present.
    pub from: Option<String>,
    /// Raw `To` header value, if present.
    pub to: Option<String>,
    /// Subject, if present.
    pub subject: Option<String>,
}

impl Message {
    /// Creates a message envelope with no headers.
    #[must_use]
    pub fn new(server_id: impl Into<String>) -> Self {
        Self {
            server_id: ServerId::new(server_id),
            from: None,
            to: None,
            subject: None,
        }
    }
}

/// Result of a `Sync` command against one folder.
#[derive(Debug, Clone)]
pub struct SyncResponse {
    /// Fresh cursor for the next sync of this folder.
    pub sync_key: SyncKey,
    /// Items reported for the supplied window. Ordering within the
    /// window is server-defined.
    pub messages: Vec<Message>,
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::redundant_clone,
    clippy::manual_string_new,
    clippy::needless_collect,
    clippy::unreadable_literal,
    clippy::used_underscore_items,
    clippy::similar_names
)]
mod tests {
    use super::*;

    #[test]
    fn new_message_has_no_headers() {
        let message = Message::new("1:9");
        assert_eq!(message.server_id.as_str(), "1:9");
        assert!(message.from.is_none());
        assert!(message.to.is_none());
        assert!(message.subject.is_none());
    }

    #[test]
    fn sync_response_carries_cursor() {
        let response = SyncResponse {
            sync_key: SyncKey::new("7"),
            messages: vec![Message::new("1:1")],
        };
        assert_eq!(response.sync_key.as_str(), "7");
        assert_eq!(response.messages.len(), 1);
    }
}
