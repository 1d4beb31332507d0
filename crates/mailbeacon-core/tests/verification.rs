//! Integration tests for the mailbox verification engine.
//!
//! A scripted transport stands in for the ActiveSync server. It records
//! every call so the tests can assert not just the outcome but which
//! strategies ran and what was cleaned up.

use std::collections::HashMap;

use mailbeacon_core::{VerificationOutcome, verify_mailbox};
use mailbeacon_eas::{
    EasTransport, Error, Folder, FolderType, Message, Result, ServerId, SyncKey, SyncResponse,
    async_trait,
};

/// Scripted ActiveSync server double.
///
/// `folder_lists` feeds successive `folder_sync` calls (the last entry
/// repeats). `samples` backs `fetch_one_message` per folder id, and
/// `synced` backs follow-up `sync` responses. When
/// `files_sent_copy_from` is set, a successful send files a copy of the
/// outgoing message into the `sent` folder's sync stream with that
/// `From` header, emulating the server's Sent Items behaviour, and
/// `echoes_to_inbox` additionally loops it back like self-addressed
/// mail.
#[derive(Default)]
struct MockTransport {
    folder_lists: Vec<Vec<Folder>>,
    folder_sync_fails: bool,
    samples: HashMap<String, Message>,
    synced: HashMap<String, Vec<Message>>,
    files_sent_copy_from: Option<String>,
    echoes_to_inbox: bool,
    send_fails: bool,
    delete_fails: bool,
    calls: Vec<String>,
    deleted: Vec<(String, String)>,
    folder_sync_count: usize,
}

#[async_trait]
impl EasTransport for MockTransport {
    async fn folder_sync(&mut self) -> Result<Vec<Folder>> {
        self.calls.push("folder_sync".to_string());
        if self.folder_sync_fails {
            return Err(Error::Auth("credentials rejected".to_string()));
        }
        let list = if self.folder_lists.is_empty() {
            Vec::new()
        } else {
            let idx = self.folder_sync_count.min(self.folder_lists.len() - 1);
            self.folder_lists[idx].clone()
        };
        self.folder_sync_count += 1;
        Ok(list)
    }

    async fn sync(
        &mut self,
        folder_id: &ServerId,
        sync_key: &SyncKey,
        window_size: u32,
    ) -> Result<SyncResponse> {
        self.calls.push(format!("sync:{}", folder_id.as_str()));
        if sync_key.is_initial() {
            return Ok(SyncResponse {
                sync_key: SyncKey::new(format!("{}-primed", folder_id.as_str())),
                messages: Vec::new(),
            });
        }
        let messages: Vec<Message> = self
            .synced
            .get(folder_id.as_str())
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .take(window_size as usize)
            .collect();
        Ok(SyncResponse {
            sync_key: SyncKey::new(format!("{}-current", folder_id.as_str())),
            messages,
        })
    }

    async fn send_mail(&mut self, to: &str, subject: &str, _body: &str) -> Result<()> {
        self.calls.push(format!("send:{to}"));
        if self.send_fails {
            return Err(Error::Http { status: 500 });
        }
        if let Some(owner) = self.files_sent_copy_from.clone() {
            let mut copy = Message::new("probe-sent");
            copy.from = Some(owner.clone());
            copy.to = Some(to.to_string());
            copy.subject = Some(subject.to_string());
            self.synced
                .entry("sent".to_string())
                .or_default()
                .insert(0, copy);
            if self.echoes_to_inbox {
                let mut echo = Message::new("probe-inbox");
                echo.from = Some(owner);
                echo.to = Some(to.to_string());
                echo.subject = Some(subject.to_string());
                self.synced
                    .entry("inbox".to_string())
                    .or_default()
                    .insert(0, echo);
            }
        }
        Ok(())
    }

    async fn delete_email_permanently(
        &mut self,
        folder_id: &ServerId,
        message_id: &ServerId,
        _sync_key: &SyncKey,
    ) -> Result<()> {
        self.calls.push(format!("delete:{}", message_id.as_str()));
        self.deleted.push((
            folder_id.as_str().to_string(),
            message_id.as_str().to_string(),
        ));
        if self.delete_fails {
            return Err(Error::Status { code: 8 });
        }
        Ok(())
    }

    async fn fetch_one_message(&mut self, folder_id: &ServerId) -> Result<Option<Message>> {
        self.calls.push(format!("fetch:{}", folder_id.as_str()));
        Ok(self.samples.get(folder_id.as_str()).cloned())
    }
}

fn mailbox_folders() -> Vec<Folder> {
    vec![
        Folder::new("inbox", "Inbox", FolderType::Inbox),
        Folder::new("sent", "Sent Items", FolderType::Sent),
        Folder::new("cal", "Calendar", FolderType::Calendar),
    ]
}

fn message(id: &str, from: Option<&str>, to: Option<&str>) -> Message {
    let mut message = Message::new(id);
    message.from = from.map(str::to_string);
    message.to = to.map(str::to_string);
    message
}

fn sent_probe_ran(transport: &MockTransport) -> bool {
    transport.calls.iter().any(|c| c.starts_with("send:"))
}

#[tokio::test]
async fn sent_evidence_matches_case_insensitively() {
    let mut transport = MockTransport {
        folder_lists: vec![mailbox_folders()],
        samples: HashMap::from([(
            "sent".to_string(),
            message("s1", Some("Jane <jane@corp.com>"), None),
        )]),
        ..Default::default()
    };

    let outcome = verify_mailbox(&mut transport, "JANE@CORP.COM").await;

    assert_eq!(outcome, VerificationOutcome::Success);
    assert!(!sent_probe_ran(&transport), "round trip must not run");
}

#[tokio::test]
async fn sent_evidence_mismatch_carries_both_addresses() {
    let mut transport = MockTransport {
        folder_lists: vec![mailbox_folders()],
        samples: HashMap::from([("sent".to_string(), message("s1", Some("bob@corp.com"), None))]),
        ..Default::default()
    };

    let outcome = verify_mailbox(&mut transport, "alice@corp.com").await;

    assert_eq!(
        outcome,
        VerificationOutcome::Mismatch {
            entered: "alice@corp.com".to_string(),
            actual: "bob@corp.com".to_string(),
        }
    );
    assert!(!sent_probe_ran(&transport));
}

#[tokio::test]
async fn inbox_recipient_evidence_used_when_sent_is_empty() {
    let mut transport = MockTransport {
        folder_lists: vec![mailbox_folders()],
        samples: HashMap::from([(
            "inbox".to_string(),
            message("i1", Some("someone@elsewhere.example"), Some("Jane <jane@corp.com>")),
        )]),
        ..Default::default()
    };

    let outcome = verify_mailbox(&mut transport, "jane@corp.com").await;

    assert_eq!(outcome, VerificationOutcome::Success);
    let sent_pos = transport.calls.iter().position(|c| c == "fetch:sent");
    let inbox_pos = transport.calls.iter().position(|c| c == "fetch:inbox");
    assert!(sent_pos.is_some() && sent_pos < inbox_pos, "sent is sampled first");
}

#[tokio::test]
async fn dn_only_sent_sample_falls_through_to_inbox() {
    let dn = "/o=Corp/ou=First Administrative Group/cn=Recipients/cn=jdoe";
    let mut transport = MockTransport {
        folder_lists: vec![mailbox_folders()],
        samples: HashMap::from([
            ("sent".to_string(), message("s1", Some(dn), None)),
            ("inbox".to_string(), message("i1", None, Some("jane@corp.com"))),
        ]),
        ..Default::default()
    };

    let outcome = verify_mailbox(&mut transport, "jane@corp.com").await;

    assert_eq!(outcome, VerificationOutcome::Success);
    assert!(transport.calls.contains(&"fetch:inbox".to_string()));
}

#[tokio::test(start_paused = true)]
async fn fresh_mailbox_probe_confirms_candidate() {
    // No folders at all until the first send materializes them.
    let mut transport = MockTransport {
        folder_lists: vec![Vec::new(), mailbox_folders()],
        files_sent_copy_from: Some("jane@corp.com".to_string()),
        ..Default::default()
    };

    let outcome = verify_mailbox(&mut transport, "jane@corp.com").await;

    assert_eq!(outcome, VerificationOutcome::Success);
    assert!(sent_probe_ran(&transport));
    assert_eq!(transport.folder_sync_count, 2, "folder list is refreshed once");
    assert!(
        transport
            .deleted
            .contains(&("sent".to_string(), "probe-sent".to_string())),
        "the probe's sent copy is removed"
    );
}

#[tokio::test(start_paused = true)]
async fn probe_detects_rewritten_sender() {
    // The server files the sent copy under the mailbox's real address.
    let mut transport = MockTransport {
        folder_lists: vec![mailbox_folders()],
        files_sent_copy_from: Some("bob@corp.com".to_string()),
        ..Default::default()
    };

    let outcome = verify_mailbox(&mut transport, "alice@corp.com").await;

    assert_eq!(
        outcome,
        VerificationOutcome::Mismatch {
            entered: "alice@corp.com".to_string(),
            actual: "bob@corp.com".to_string(),
        }
    );
}

#[tokio::test(start_paused = true)]
async fn send_failure_accepts_candidate() {
    let mut transport = MockTransport {
        send_fails: true,
        ..Default::default()
    };

    let outcome = verify_mailbox(&mut transport, "alice@corp.com").await;

    assert_eq!(outcome, VerificationOutcome::Success);
    assert_eq!(
        transport.calls,
        vec!["folder_sync".to_string(), "send:alice@corp.com".to_string()],
        "a failed send ends the probe immediately"
    );
}

#[tokio::test]
async fn folder_sync_failure_is_fatal() {
    let mut transport = MockTransport {
        folder_sync_fails: true,
        ..Default::default()
    };

    let outcome = verify_mailbox(&mut transport, "jane@corp.com").await;

    match outcome {
        VerificationOutcome::Error { message } => {
            assert!(message.contains("credentials rejected"));
        }
        other => panic!("expected an error outcome, got {other:?}"),
    }
    assert_eq!(
        transport.calls,
        vec!["folder_sync".to_string()],
        "no further network calls after a failed folder sync"
    );
}

#[tokio::test(start_paused = true)]
async fn cleanup_failure_keeps_outcome() {
    let mut transport = MockTransport {
        folder_lists: vec![mailbox_folders()],
        files_sent_copy_from: Some("jane@corp.com".to_string()),
        echoes_to_inbox: true,
        delete_fails: true,
        ..Default::default()
    };

    let outcome = verify_mailbox(&mut transport, "jane@corp.com").await;

    assert_eq!(outcome, VerificationOutcome::Success);
    assert!(
        !transport.deleted.is_empty(),
        "cleanup was attempted even though it failed"
    );
}

#[tokio::test(start_paused = true)]
async fn probe_echo_removed_from_inbox() {
    let mut transport = MockTransport {
        folder_lists: vec![mailbox_folders()],
        files_sent_copy_from: Some("jane@corp.com".to_string()),
        echoes_to_inbox: true,
        ..Default::default()
    };

    let outcome = verify_mailbox(&mut transport, "jane@corp.com").await;

    assert_eq!(outcome, VerificationOutcome::Success);
    assert!(
        transport
            .deleted
            .contains(&("sent".to_string(), "probe-sent".to_string()))
    );
    assert!(
        transport
            .deleted
            .contains(&("inbox".to_string(), "probe-inbox".to_string())),
        "the self-delivered inbox copy is removed too"
    );
}

#[tokio::test(start_paused = true)]
async fn empty_unverifiable_mailbox_is_accepted() {
    // Send succeeds but nothing ever shows up in Sent Items.
    let mut transport = MockTransport {
        folder_lists: vec![mailbox_folders()],
        ..Default::default()
    };

    let outcome = verify_mailbox(&mut transport, "jane@corp.com").await;

    assert_eq!(outcome, VerificationOutcome::Success);
    assert!(sent_probe_ran(&transport));
    assert!(transport.deleted.is_empty(), "nothing to clean up");
}
