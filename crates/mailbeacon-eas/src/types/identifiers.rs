//! Core ActiveSync identifiers.
//!
//! Newtypes for server-assigned IDs and sync cursors.

/// Server-assigned identifier for a folder or message.
///
/// EAS identifiers are opaque strings minted by the server. The client
/// never parses them; it only echoes them back in later commands.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServerId(pub String);

impl ServerId {
    /// Creates a new server ID from a string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ServerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cursor into a folder's change history.
///
/// The server mints a fresh key on every `Sync` response. Syncing from
/// the zero key ([`SyncKey::initial`]) discards any previous cursor and
/// returns a usable key without items; subsequent syncs walk the change
/// log from wherever the supplied key points.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SyncKey(pub String);

impl SyncKey {
    /// The zero key that starts a fresh sync conversation.
    #[must_use]
    pub fn initial() -> Self {
        Self("0".to_string())
    }

    /// Creates a sync key from a server-provided token.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the zero key.
    #[must_use]
    pub fn is_initial(&self) -> bool {
        self.0 == "0"
    }
}

impl std::fmt::Display for SyncKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
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

    mod server_id_tests {
        use super::*;

        #[test]
        fn new_from_string() {
            let id = ServerId::new("5:22".to_string());
            assert_eq!(id.as_str(), "5:22");
        }

        #[test]
        fn new_from_str() {
            let id = ServerId::new("folder-7");
            assert_eq!(id.as_str(), "folder-7");
        }

        #[test]
        fn display() {
            let id = ServerId::new("12");
            assert_eq!(format!("{id}"), "12");
        }

        #[test]
        fn equality() {
            let id1 = ServerId::new("1:3");
            let id2 = ServerId::new("1:3");
            let id3 = ServerId::new("1:4");
            assert_eq!(id1, id2);
            assert_ne!(id1, id3);
        }
    }

    mod sync_key_tests {
        use super::*;

        #[test]
        fn initial_is_zero() {
            let key = SyncKey::initial();
            assert_eq!(key.as_str(), "0");
            assert!(key.is_initial());
        }

        #[test]
        fn server_minted_key_is_not_initial() {
            let key = SyncKey::new("1053667178");
            assert!(!key.is_initial());
            assert_eq!(key.as_str(), "1053667178");
        }

        #[test]
        fn display() {
            let key = SyncKey::new("42-17");
            assert_eq!(format!("{key}"), "42-17");
        }

        #[test]
        fn equality() {
            assert_eq!(SyncKey::initial(), SyncKey::new("0"));
            assert_ne!(SyncKey::new("a"), SyncKey::new("b"));
        }
    }
}
