//! Core ActiveSync types.
//!
//! Identifiers, the folder model, and the message envelope shared by
//! every transport implementation and by the client logic above it.

mod folder;
mod identifiers;
mod message;

pub use folder::{Folder, FolderType};
pub use identifiers::{ServerId, SyncKey};
pub use message::{Message, SyncResponse};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_type_codes() {
        assert_eq!(FolderType::from_code(2), FolderType::Inbox);
        assert_eq!(FolderType::from_code(5), FolderType::Sent);
        assert_eq!(FolderType::from_code(99), FolderType::Other(99));
    }

    #[test]
    fn test_sync_key_initial() {
        assert!(SyncKey::initial().is_initial());
        assert!(!SyncKey::new("52a1").is_initial());
    }

    #[test]
    fn test_server_id_display() {
        assert_eq!(ServerId::new("5:12").to_string(), "5:12");
    }
}
