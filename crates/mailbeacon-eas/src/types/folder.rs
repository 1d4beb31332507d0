//! Folder model and well-known EAS folder types.

use super::ServerId;

/// Well-known folder roles from the EAS `FolderSync` response.
///
/// The server tags every folder with an integer type code. Only a few
/// roles matter to the client; unrecognized codes are carried through
/// as [`FolderType::Other`] and never interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderType {
    /// User-created generic folder (code 1).
    Generic,
    /// Inbox (code 2).
    Inbox,
    /// Drafts (code 3).
    Drafts,
    /// Deleted Items (code 4).
    DeletedItems,
    /// Sent Items (code 5).
    Sent,
    /// Outbox (code 6).
    Outbox,
    /// Tasks (code 7).
    Tasks,
    /// Calendar (code 8).
    Calendar,
    /// Contacts (code 9).
    Contacts,
    /// Notes (code 10).
    Notes,
    /// Journal (code 11).
    Journal,
    /// User-created mail folder (code 12).
    UserMail,
    /// Any other type code.
    Other(u32),
}

impl FolderType {
    /// Maps an EAS type code to a folder role.
    #[must_use]
    pub const fn from_code(code: u32) -> Self {
        match code {
            1 => Self::Generic,
            2 => Self::Inbox,
            3 => Self::Drafts,
            4 => Self::DeletedItems,
            5 => Self::Sent,
            6 => Self::Outbox,
            7 => Self::Tasks,
            8 => Self::Calendar,
            9 => Self::Contacts,
            10 => Self::Notes,
            11 => Self::Journal,
            12 => Self::UserMail,
            _ => Self::Other(code),
        }
    }

    /// Returns the EAS type code for this role.
    #[must_use]
    pub const fn code(self) -> u32 {
        match self {
            Self::Generic => 1,
            Self::Inbox => 2,
            Self::Drafts => 3,
            Self::DeletedItems => 4,
            Self::Sent => 5,
            Self::Outbox => 6,
            Self::Tasks => 7,
            Self::Calendar => 8,
            Self::Contacts => 9,
            Self::Notes => 10,
            Self::Journal => 11,
            Self::UserMail => 12,
            Self::Other(code) => code,
        }
    }

    /// Whether this folder holds mail items.
    #[must_use]
    pub const fn is_mail(self) -> bool {
        matches!(
            self,
            Self::Inbox
                | Self::Drafts
                | Self::DeletedItems
                | Self::Sent
                | Self::Outbox
                | Self::UserMail
        )
    }
}

/// A folder reported by `FolderSync`.
#[derive(Debug, Clone)]
pub struct Folder {
    /// Server-assigned identifier.
    pub server_id: ServerId,
    /// Display name shown to the user.
    pub display_name: String,
    /// Well-known role.
    pub folder_type: FolderType,
}

impl Folder {
    /// Creates a new folder.
    #[must_use]
    pub fn new(
        server_id: impl Into<String>,
        display_name: impl Into<String>,
        folder_type: FolderType,
    ) -> Self {
        Self {
            server_id: ServerId::new(server_id),
            display_name: display_name.into(),
            folder_type,
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
    fn from_code_well_known() {
        assert_eq!(FolderType::from_code(2), FolderType::Inbox);
        assert_eq!(FolderType::from_code(3), FolderType::Drafts);
        assert_eq!(FolderType::from_code(4), FolderType::DeletedItems);
        assert_eq!(FolderType::from_code(5), FolderType::Sent);
        assert_eq!(FolderType::from_code(12), FolderType::UserMail);
    }

    #[test]
    fn from_code_unknown_is_carried_through() {
        assert_eq!(FolderType::from_code(0), FolderType::Other(0));
        assert_eq!(FolderType::from_code(17), FolderType::Other(17));
    }

    #[test]
    fn code_round_trips() {
        for code in 1..=12 {
            assert_eq!(FolderType::from_code(code).code(), code);
        }
        assert_eq!(FolderType::Other(255).code(), 255);
    }

    #[test]
    fn mail_folders() {
        assert!(FolderType::Inbox.is_mail());
        assert!(FolderType::Sent.is_mail());
        assert!(!FolderType::Calendar.is_mail());
        assert!(!FolderType::Contacts.is_mail());
    }

    #[test]
    fn folder_new() {
        let folder = Folder::new("5", "Sent Items", FolderType::Sent);
        assert_eq!(folder.server_id.as_str(), "5");
        assert_eq!(folder.display_name, "Sent Items");
        assert_eq!(folder.folder_type, FolderType::Sent);
    }
}
