//! Mailbox identity verification.
//!
//! ActiveSync has no reliable "who am I" call, so adding an account has
//! to *infer* whether the typed address belongs to the mailbox the
//! credentials reach. Strategies run in strict priority order:
//!
//! 1. sample the Sent folder and read its `From` header;
//! 2. sample the Inbox and read its `To` header;
//! 3. send a marked probe message to the candidate address, wait for
//!    the server to file it, read the Sent copy back, and clean up both
//!    copies.
//!
//! Inconclusive evidence accepts the address rather than rejecting it:
//! an empty, unverifiable mailbox must not block a legitimate account.
//! Only a confirmed contradiction is reported as a mismatch, and only a
//! failure of the opening folder sync is reported as an error.

mod address;
mod engine;
mod evidence;
mod roundtrip;

pub use address::{addresses_match, extract_address};
pub use engine::{VerificationOutcome, verify_mailbox};
