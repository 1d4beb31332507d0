#![allow(clippy::expect_used, clippy::doc_markdown, clippy::uninlined_format_args)]
//! Example: run the mailbox verification engine against an in-memory
//! ActiveSync double.
//!
//! There is no live transport in this workspace, so the example wires
//! the engine to a canned mailbox and shows the decision flow for a
//! matching and a mismatching candidate address.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=debug cargo run --package mailbeacon-core --example verify_account
//! ```

use mailbeacon_core::{VerificationOutcome, verify_mailbox};
use mailbeacon_eas::{
    EasTransport, Folder, FolderType, Message, Result, ServerId, SyncKey, SyncResponse,
    async_trait,
};

/// Canned mailbox with one message in Sent Items.
struct CannedMailbox;

#[async_trait]
impl EasTransport for CannedMailbox {
    async fn folder_sync(&mut self) -> Result<Vec<Folder>> {
        Ok(vec![
            Folder::new("2", "Inbox", FolderType::Inbox),
            Folder::new("5", "Sent Items", FolderType::Sent),
        ])
    }

    async fn sync(
        &mut self,
        _folder_id: &ServerId,
        sync_key: &SyncKey,
        _window_size: u32,
    ) -> Result<SyncResponse> {
        Ok(SyncResponse {
            sync_key: SyncKey::new(format!("{}1", sync_key.as_str())),
            messages: Vec::new(),
        })
    }

    async fn send_mail(&mut self, _to: &str, _subject: &str, _body: &str) -> Result<()> {
        Ok(())
    }

    async fn delete_email_permanently(
        &mut self,
        _folder_id: &ServerId,
        _message_id: &ServerId,
        _sync_key: &SyncKey,
    ) -> Result<()> {
        Ok(())
    }

    async fn fetch_one_message(&mut self, folder_id: &ServerId) -> Result<Option<Message>> {
        if folder_id.as_str() == "5" {
            let mut message = Message::new("5:1");
            message.from = Some("Riley Chen <riley.chen@fabrikam.example>".to_string());
            message.subject = Some("Quarterly numbers".to_string());
            Ok(Some(message))
        } else {
            Ok(None)
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    for candidate in ["riley.chen@fabrikam.example", "rchen@fabrikam.example"] {
        let mut transport = CannedMailbox;
        println!("Verifying {candidate}...");
        match verify_mailbox(&mut transport, candidate).await {
            VerificationOutcome::Success => println!("  accepted"),
            VerificationOutcome::Mismatch { entered, actual } => {
                println!("  rejected: mailbox mail is addressed to {actual}, not {entered}");
            }
            VerificationOutcome::Error { message } => println!("  failed: {message}"),
        }
    }
}
