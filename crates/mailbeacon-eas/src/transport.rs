//! The transport contract the client logic consumes.
//!
//! A transport owns the wire details: WBXML encoding, HTTP plumbing,
//! provisioning handshakes, retry policy. This trait fixes only the
//! operations and semantics the rest of the client relies on, which is
//! also what lets tests substitute a scripted double for a live server.

use async_trait::async_trait;
use tracing::debug;

use crate::error::Result;
use crate::types::{Folder, Message, ServerId, SyncKey, SyncResponse};

/// Async session with an ActiveSync server.
///
/// A session is single-flow: operations take `&mut self` and callers
/// running two logical flows concurrently must hold two transport
/// instances. Credentials are bound at construction time and never
/// travel through this interface.
#[async_trait]
pub trait EasTransport: Send {
    /// Fetches the folder hierarchy via `FolderSync`.
    async fn folder_sync(&mut self) -> Result<Vec<Folder>>;

    /// Runs `Sync` against one folder from the given cursor.
    ///
    /// Syncing from [`SyncKey::initial`] mints a fresh cursor and
    /// returns no items; `window_size` caps the number of items in a
    /// follow-up response.
    async fn sync(
        &mut self,
        folder_id: &ServerId,
        sync_key: &SyncKey,
        window_size: u32,
    ) -> Result<SyncResponse>;

    /// Submits a message for delivery via `SendMail`.
    async fn send_mail(&mut self, to: &str, subject: &str, body: &str) -> Result<()>;

    /// Hard-deletes a message, bypassing Deleted Items.
    async fn delete_email_permanently(
        &mut self,
        folder_id: &ServerId,
        message_id: &ServerId,
        sync_key: &SyncKey,
    ) -> Result<()>;

    /// Fetches one representative message from a folder, if any.
    ///
    /// The default implementation primes a cursor with a zero-key sync
    /// and takes the first item of a window-1 follow-up. Which message
    /// the server picks for that window is its own business; callers
    /// only need *a* message with populated headers.
    async fn fetch_one_message(&mut self, folder_id: &ServerId) -> Result<Option<Message>> {
        let primed = self.sync(folder_id, &SyncKey::initial(), 1).await?;
        let response = self.sync(folder_id, &primed.sync_key, 1).await?;
        debug!(
            "sampled {} message(s) from folder {folder_id}",
            response.messages.len()
        );
        Ok(response.messages.into_iter().next())
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
    use crate::error::Error;

    /// Scripts `sync` responses and records the cursors it was given.
    struct ScriptedSync {
        responses: Vec<SyncResponse>,
        seen_keys: Vec<SyncKey>,
    }

    #[async_trait]
    impl EasTransport for ScriptedSync {
        async fn folder_sync(&mut self) -> Result<Vec<Folder>> {
            unimplemented!("not exercised")
        }

        async fn sync(
            &mut self,
            _folder_id: &ServerId,
            sync_key: &SyncKey,
            _window_size: u32,
        ) -> Result<SyncResponse> {
            self.seen_keys.push(sync_key.clone());
            if self.responses.is_empty() {
                return Err(Error::Protocol("script exhausted".to_string()));
            }
            Ok(self.responses.remove(0))
        }

        async fn send_mail(&mut self, _to: &str, _subject: &str, _body: &str) -> Result<()> {
            unimplemented!("not exercised")
        }

        async fn delete_email_permanently(
            &mut self,
            _folder_id: &ServerId,
            _message_id: &ServerId,
            _sync_key: &SyncKey,
        ) -> Result<()> {
            unimplemented!("not exercised")
        }
    }

    #[tokio::test]
    async fn default_fetch_primes_then_samples() {
        let mut transport = ScriptedSync {
            responses: vec![
                SyncResponse {
                    sync_key: SyncKey::new("k1"),
                    messages: vec![],
                },
                SyncResponse {
                    sync_key: SyncKey::new("k2"),
                    messages: vec![Message::new("2:41"), Message::new("2:40")],
                },
            ],
            seen_keys: vec![],
        };

        let message = transport
            .fetch_one_message(&ServerId::new("2"))
            .await
            .unwrap();

        assert_eq!(message.unwrap().server_id.as_str(), "2:41");
        assert_eq!(
            transport.seen_keys,
            vec![SyncKey::initial(), SyncKey::new("k1")]
        );
    }

    #[tokio::test]
    async fn default_fetch_empty_folder_returns_none() {
        let mut transport = ScriptedSync {
            responses: vec![
                SyncResponse {
                    sync_key: SyncKey::new("k1"),
                    messages: vec![],
                },
                SyncResponse {
                    sync_key: SyncKey::new("k2"),
                    messages: vec![],
                },
            ],
            seen_keys: vec![],
        };

        let message = transport
            .fetch_one_message(&ServerId::new("2"))
            .await
            .unwrap();

        assert!(message.is_none());
    }

    #[tokio::test]
    async fn default_fetch_propagates_sync_errors() {
        let mut transport = ScriptedSync {
            responses: vec![],
            seen_keys: vec![],
        };

        let result = transport.fetch_one_message(&ServerId::new("2")).await;

        assert!(result.is_err());
    }
}
