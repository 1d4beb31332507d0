//! Account management module.
//!
//! Provides the account model and setup-form validation. Persistent
//! storage and credential keeping are the embedding application's
//! concern; this module only defines the data it hands around.

mod model;
mod validation;

pub use model::{Account, AccountId, EasConfig, TlsOptions};
pub use validation::{ValidationError, ValidationResult, validate_account};
