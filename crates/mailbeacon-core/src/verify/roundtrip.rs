//! Active evidence: the self-addressed round-trip probe.
//!
//! When the mailbox holds nothing to sample, the engine manufactures
//! its own evidence: send a marked message to the candidate address,
//! give the server a moment to file it, read the Sent copy back, and
//! remove every trace on both ends. The probe never fails the
//! verification flow; everything short of usable evidence reports
//! [`ProbeOutcome::Inconclusive`].

use std::time::Duration;

use mailbeacon_eas::{EasTransport, Folder, FolderType, ServerId, SyncKey, SyncResponse};
use tracing::{debug, warn};

use super::address::extract_address;

/// Subject line marking the probe; also the key used to find the
/// self-delivered copy in the Inbox.
const PROBE_SUBJECT: &str = "Mailbeacon settings check";

/// Body of the probe message. Fixed text, never user content.
const PROBE_BODY: &str = "This message was sent automatically while checking your \
account settings. It is safe to delete.";

/// How long to let the server deliver and file the probe. EAS offers no
/// delivery acknowledgment to wait on, so this is a pragmatic pause,
/// not a guaranteed bound.
const PROPAGATION_DELAY: Duration = Duration::from_secs(3);

/// Window for the Sent follow-up sync; one item is all we need.
const SENT_WINDOW: u32 = 1;

/// Window for scanning recent Inbox items for the probe echo.
const INBOX_WINDOW: u32 = 25;

/// What the probe learned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ProbeOutcome {
    /// A normalized owner address recovered from the Sent copy.
    Evidence(String),
    /// Nothing usable either way.
    Inconclusive,
}

/// Runs the round-trip probe.
///
/// `sent` and `inbox` are the folders known at engine entry. On a fresh
/// mailbox either may be absent, and the first send can materialize
/// them, so the folder list is refreshed once after the wait.
pub(crate) async fn run<T: EasTransport>(
    transport: &mut T,
    candidate_email: &str,
    mut sent: Option<Folder>,
    mut inbox: Option<Folder>,
) -> ProbeOutcome {
    if let Err(e) = transport
        .send_mail(candidate_email, PROBE_SUBJECT, PROBE_BODY)
        .await
    {
        // A failed send proves nothing about the address.
        warn!("probe send failed: {e}");
        return ProbeOutcome::Inconclusive;
    }
    debug!("probe sent to {candidate_email}, waiting for the server to file it");

    tokio::time::sleep(PROPAGATION_DELAY).await;

    if sent.is_none() || inbox.is_none() {
        refresh_folders(transport, &mut sent, &mut inbox).await;
    }

    let evidence = match &sent {
        Some(folder) => inspect_sent(transport, folder).await,
        None => {
            debug!("no sent folder to read the probe back from");
            None
        }
    };

    // Inbox cleanup runs regardless of what Sent yielded.
    if let Some(folder) = &inbox {
        remove_inbox_echo(transport, folder).await;
    }

    match evidence {
        Some(address) => ProbeOutcome::Evidence(address),
        None => ProbeOutcome::Inconclusive,
    }
}

/// Re-runs `FolderSync` to pick up folders the first send materialized.
async fn refresh_folders<T: EasTransport>(
    transport: &mut T,
    sent: &mut Option<Folder>,
    inbox: &mut Option<Folder>,
) {
    match transport.folder_sync().await {
        Ok(folders) => {
            if sent.is_none() {
                *sent = find(&folders, FolderType::Sent);
            }
            if inbox.is_none() {
                *inbox = find(&folders, FolderType::Inbox);
            }
        }
        Err(e) => debug!("folder refresh failed: {e}"),
    }
}

fn find(folders: &[Folder], folder_type: FolderType) -> Option<Folder> {
    folders.iter().find(|f| f.folder_type == folder_type).cloned()
}

/// Reads the newest Sent item back and extracts its `From` address.
///
/// Whatever was found is deleted whether or not it yielded usable
/// evidence; the probe must not linger in the user's Sent Items.
async fn inspect_sent<T: EasTransport>(transport: &mut T, sent: &Folder) -> Option<String> {
    let response = sample_folder(transport, &sent.server_id, SENT_WINDOW).await?;
    let sync_key = response.sync_key;
    let Some(message) = response.messages.into_iter().next() else {
        debug!("probe not visible in sent items");
        return None;
    };

    let evidence = message
        .from
        .as_deref()
        .map(extract_address)
        .filter(|address| address.contains('@'));

    delete_copy(transport, &sent.server_id, &message.server_id, &sync_key, "sent items").await;

    evidence
}

/// Locates the self-delivered probe copy in the Inbox and deletes it.
///
/// Best-effort throughout; the verification outcome never depends on
/// whether this succeeds.
async fn remove_inbox_echo<T: EasTransport>(transport: &mut T, inbox: &Folder) {
    let Some(response) = sample_folder(transport, &inbox.server_id, INBOX_WINDOW).await else {
        return;
    };
    let Some(echo) = response
        .messages
        .iter()
        .find(|m| m.subject.as_deref() == Some(PROBE_SUBJECT))
    else {
        debug!("no probe echo in the inbox");
        return;
    };
    delete_copy(
        transport,
        &inbox.server_id,
        &echo.server_id,
        &response.sync_key,
        "inbox",
    )
    .await;
}

/// Zero-key priming sync followed by a windowed fetch of recent items.
async fn sample_folder<T: EasTransport>(
    transport: &mut T,
    folder_id: &ServerId,
    window: u32,
) -> Option<SyncResponse> {
    let primed = match transport.sync(folder_id, &SyncKey::initial(), window).await {
        Ok(response) => response,
        Err(e) => {
            debug!("priming sync of folder {folder_id} failed: {e}");
            return None;
        }
    };
    match transport.sync(folder_id, &primed.sync_key, window).await {
        Ok(response) => Some(response),
        Err(e) => {
            debug!("follow-up sync of folder {folder_id} failed: {e}");
            None
        }
    }
}

/// Deletes one probe copy. An abandoned copy is a stray email, not a
/// verification failure, so errors are logged and swallowed.
async fn delete_copy<T: EasTransport>(
    transport: &mut T,
    folder_id: &ServerId,
    message_id: &ServerId,
    sync_key: &SyncKey,
    location: &str,
) {
    if let Err(e) = transport
        .delete_email_permanently(folder_id, message_id, sync_key)
        .await
    {
        debug!("could not remove probe copy from {location}: {e}");
    }
}
