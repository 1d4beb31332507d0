//! # mailbeacon-core
//!
//! Business logic for the Mailbeacon ActiveSync mail client.
//!
//! This crate provides:
//! - Account model and validation for the setup flow
//! - The **mailbox identity verification engine**: ActiveSync has no
//!   reliable "who am I" call, so adding an account infers whether the
//!   typed address belongs to the mailbox the credentials reach, by
//!   sampling existing mail and, failing that, round-tripping a probe
//!   message through the server
//!
//! The wire transport is consumed through the
//! [`EasTransport`](mailbeacon_eas::EasTransport) contract; nothing in
//! this crate speaks WBXML or HTTP.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod account;
pub mod verify;

pub use account::{
    Account, AccountId, EasConfig, TlsOptions, ValidationError, ValidationResult, validate_account,
};
pub use verify::{VerificationOutcome, addresses_match, extract_address, verify_mailbox};
