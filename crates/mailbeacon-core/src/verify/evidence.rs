//! Passive evidence: sample mail the mailbox already holds.
//!
//! Before doing anything invasive, the engine looks at what is already
//! there. One message from Sent Items tells us who the mailbox sends
//! as; one message from the Inbox tells us who it receives for.

use mailbeacon_eas::{EasTransport, Folder};
use tracing::debug;

use super::address::extract_address;

/// Which envelope header carries the mailbox owner's address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AddressField {
    /// `From`: the owner wrote the sampled message (Sent Items).
    From,
    /// `To`: the owner received the sampled message (Inbox).
    To,
}

/// Samples one message from `folder` and extracts the owner's address.
///
/// Anything short of usable evidence (fetch failure, empty folder,
/// missing header, a distinguished name with no SMTP form) yields
/// `None`. This strategy is never allowed to fail the verification
/// flow; it either produces an address or stands aside.
pub(crate) async fn check_folder<T: EasTransport>(
    transport: &mut T,
    folder: &Folder,
    field: AddressField,
) -> Option<String> {
    let message = match transport.fetch_one_message(&folder.server_id).await {
        Ok(Some(message)) => message,
        Ok(None) => {
            debug!("folder '{}' holds no sampleable message", folder.display_name);
            return None;
        }
        Err(e) => {
            debug!("sampling folder '{}' failed: {e}", folder.display_name);
            return None;
        }
    };

    let raw = match field {
        AddressField::From => message.from,
        AddressField::To => message.to,
    }?;

    let address = extract_address(&raw);
    if address.contains('@') {
        Some(address)
    } else {
        debug!("sampled header in '{}' carries no SMTP address", folder.display_name);
        None
    }
}
