//! The verification engine.
//!
//! Orchestrates the evidence strategies in strict priority order and
//! turns whatever they yield into a terminal outcome.

use mailbeacon_eas::{EasTransport, Folder, FolderType};
use tracing::{debug, warn};

use super::address::{addresses_match, extract_address};
use super::evidence::{self, AddressField};
use super::roundtrip::{self, ProbeOutcome};

/// Outcome of a mailbox identity verification attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// The candidate address belongs to the mailbox, or could not be
    /// contradicted; see [`verify_mailbox`] for the acceptance policy.
    Success,
    /// Mailbox evidence contradicts the candidate address. Both
    /// normalized addresses are carried so the caller can show a
    /// precise correction prompt.
    Mismatch {
        /// The address the user typed, normalized.
        entered: String,
        /// The address the mailbox's own mail points at, normalized.
        actual: String,
    },
    /// The server could not even be asked: the opening folder sync
    /// failed. Bad credentials and unreachable hosts land here.
    Error {
        /// Human-readable failure description.
        message: String,
    },
}

/// Verifies that `candidate_email` belongs to the mailbox behind
/// `transport`.
///
/// Strategies run strictly in order: Sent sample, Inbox sample,
/// round-trip probe. Only the opening `folder_sync` can fail the
/// attempt; every later problem degrades to the next strategy and, at
/// the end, to acceptance. Connection problems must stay visible so
/// the user can fix their settings, while inability to *confirm*
/// identity must not block a legitimate empty mailbox. A confirmed
/// mismatch is never downgraded; only absence of evidence is.
///
/// Dropping the returned future cancels the attempt at the next await
/// point without cleanup retries; an orphaned probe copy is a stray
/// email, not a correctness hazard.
pub async fn verify_mailbox<T: EasTransport>(
    transport: &mut T,
    candidate_email: &str,
) -> VerificationOutcome {
    let folders = match transport.folder_sync().await {
        Ok(folders) => folders,
        Err(e) => {
            warn!("folder sync failed, aborting verification: {e}");
            return VerificationOutcome::Error {
                message: e.to_string(),
            };
        }
    };

    let sent = find_folder(&folders, FolderType::Sent);
    let inbox = find_folder(&folders, FolderType::Inbox);

    if let Some(folder) = &sent
        && let Some(address) = evidence::check_folder(transport, folder, AddressField::From).await
    {
        debug!("sent items yielded evidence: {address}");
        return conclude(candidate_email, &address);
    }

    if let Some(folder) = &inbox
        && let Some(address) = evidence::check_folder(transport, folder, AddressField::To).await
    {
        debug!("inbox yielded evidence: {address}");
        return conclude(candidate_email, &address);
    }

    match roundtrip::run(transport, candidate_email, sent, inbox).await {
        ProbeOutcome::Evidence(address) => {
            debug!("round-trip probe yielded evidence: {address}");
            conclude(candidate_email, &address)
        }
        ProbeOutcome::Inconclusive => {
            // Unverifiable is not wrong: accept rather than lock a
            // legitimate user out of an empty mailbox.
            debug!("no evidence obtainable for {candidate_email}, accepting");
            VerificationOutcome::Success
        }
    }
}

fn find_folder(folders: &[Folder], folder_type: FolderType) -> Option<Folder> {
    folders.iter().find(|f| f.folder_type == folder_type).cloned()
}

/// Turns one piece of evidence into a terminal outcome.
fn conclude(entered: &str, actual: &str) -> VerificationOutcome {
    if addresses_match(entered, actual) {
        VerificationOutcome::Success
    } else {
        VerificationOutcome::Mismatch {
            entered: extract_address(entered),
            actual: extract_address(actual),
        }
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

    #[test]
    fn conclude_accepts_case_insensitive_match() {
        assert_eq!(
            conclude("JANE@CORP.COM", "jane@corp.com"),
            VerificationOutcome::Success
        );
    }

    #[test]
    fn conclude_reports_normalized_mismatch() {
        assert_eq!(
            conclude("Alice@Corp.com", "Bob <bob@corp.com>"),
            VerificationOutcome::Mismatch {
                entered: "alice@corp.com".to_string(),
                actual: "bob@corp.com".to_string(),
            }
        );
    }
}
