//! # mailbeacon-eas
//!
//! Exchange ActiveSync (EAS) protocol types and the transport contract
//! consumed by the rest of the Mailbeacon client.
//!
//! This crate contains no wire code. WBXML encoding, the
//! HTTP plumbing, and the folder-sync delta algorithm live in the
//! transport implementation; what is fixed here is everything the
//! client logic relies on:
//!
//! - **Strongly-typed identifiers**: opaque [`ServerId`]s and the
//!   [`SyncKey`] cursor EAS threads through every `Sync` exchange
//! - **Folder model**: [`Folder`] with the well-known `FolderSync`
//!   type codes ([`FolderType`])
//! - **Message envelope**: the minimal [`Message`] slice of a `Sync`
//!   response the client reads
//! - **Transport contract**: the [`EasTransport`] trait with the
//!   operations and semantics implementations must provide
//!
//! ## Quick Start
//!
//! ```ignore
//! use mailbeacon_eas::{EasTransport, FolderType};
//!
//! async fn count_inbox_folders<T: EasTransport>(transport: &mut T) -> mailbeacon_eas::Result<usize> {
//!     let folders = transport.folder_sync().await?;
//!     Ok(folders
//!         .iter()
//!         .filter(|f| f.folder_type == FolderType::Inbox)
//!         .count())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`transport`]: the async session contract
//! - [`types`]: core ActiveSync types (identifiers, folders, messages)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod error;
pub mod transport;
pub mod types;

// Re-export async_trait so implementors don't need a direct dependency.
pub use async_trait::async_trait;
pub use error::{Error, Result};
pub use transport::EasTransport;
pub use types::{Folder, FolderType, Message, ServerId, SyncKey, SyncResponse};

/// EAS protocol version this client targets.
pub const EAS_PROTOCOL_VERSION: &str = "14.1";
