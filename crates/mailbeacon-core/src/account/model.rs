//! Account model types.

use serde::{Deserialize, Serialize};

/// Unique identifier for an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub i64);

impl AccountId {
    /// Create a new account ID.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// TLS behaviour for the ActiveSync connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlsOptions {
    /// Connect over HTTPS. Plain HTTP is for lab servers only.
    pub use_tls: bool,
    /// Accept certificates that fail validation. **Not recommended.**
    pub accept_all_certs: bool,
}

impl Default for TlsOptions {
    fn default() -> Self {
        Self {
            use_tls: true,
            accept_all_certs: false,
        }
    }
}

/// ActiveSync endpoint configuration and credentials.
///
/// Handed as an opaque bundle to whatever constructs the transport
/// session; nothing in this crate reads the password.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EasConfig {
    /// Endpoint URL, e.g. `https://mail.corp.com/Microsoft-Server-ActiveSync`.
    pub server_url: String,
    /// Login user.
    pub username: String,
    /// Login password.
    pub password: String,
    /// NT domain; empty for servers that authenticate by address.
    pub domain: String,
    /// TLS options.
    pub tls: TlsOptions,
}

/// Email account configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier (None for unsaved accounts).
    pub id: Option<AccountId>,
    /// Display name for the account.
    pub name: String,
    /// Email address.
    pub email: String,
    /// ActiveSync configuration.
    pub eas: EasConfig,
    /// Whether this is the default account.
    pub is_default: bool,
}

impl Account {
    /// Create a new empty account.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create account with common defaults derived from the address.
    #[must_use]
    pub fn with_email(email: &str) -> Self {
        let mut account = Self {
            email: email.to_string(),
            ..Default::default()
        };

        // Auto-detect provider settings
        if let Some(domain) = email.split('@').nth(1) {
            match domain.to_lowercase().as_str() {
                "outlook.com" | "hotmail.com" | "live.com" | "msn.com" => {
                    account.name = "Outlook".to_string();
                    account.eas.server_url =
                        "https://outlook.office365.com/Microsoft-Server-ActiveSync".to_string();
                }
                _ => {
                    // Use domain as account name
                    account.name = domain.to_string();
                }
            }
        }

        // Most servers authenticate with the full address
        account.eas.username = email.to_string();

        account
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

    mod account_id_tests {
        use super::*;

        #[test]
        fn new() {
            let id = AccountId::new(42);
            assert_eq!(id.0, 42);
        }

        #[test]
        fn display() {
            let id = AccountId::new(123);
            assert_eq!(format!("{id}"), "123");
        }

        #[test]
        fn equality() {
            let id1 = AccountId::new(1);
            let id2 = AccountId::new(1);
            let id3 = AccountId::new(2);
            assert_eq!(id1, id2);
            assert_ne!(id1, id3);
        }
    }

    mod tls_options_tests {
        use super::*;

        #[test]
        fn default_is_strict_tls() {
            let tls = TlsOptions::default();
            assert!(tls.use_tls);
            assert!(!tls.accept_all_certs);
        }
    }

    mod account_tests {
        use super::*;

        #[test]
        fn new_creates_empty() {
            let account = Account::new();
            assert!(account.id.is_none());
            assert!(account.name.is_empty());
            assert!(account.email.is_empty());
            assert!(!account.is_default);
        }

        #[test]
        fn with_email_outlook() {
            let account = Account::with_email("user@outlook.com");
            assert_eq!(account.name, "Outlook");
            assert_eq!(
                account.eas.server_url,
                "https://outlook.office365.com/Microsoft-Server-ActiveSync"
            );
        }

        #[test]
        fn with_email_hotmail() {
            let account = Account::with_email("user@hotmail.com");
            assert_eq!(account.name, "Outlook");
        }

        #[test]
        fn with_email_live() {
            let account = Account::with_email("user@live.com");
            assert_eq!(account.name, "Outlook");
        }

        #[test]
        fn with_email_unknown_domain() {
            let account = Account::with_email("user@fabrikam.example");
            assert_eq!(account.name, "fabrikam.example");
            // Server URL is not guessable for unknown domains
            assert!(account.eas.server_url.is_empty());
        }

        #[test]
        fn with_email_sets_username() {
            let account = Account::with_email("test@fabrikam.example");
            assert_eq!(account.eas.username, "test@fabrikam.example");
        }

        #[test]
        fn with_email_keeps_default_tls() {
            let account = Account::with_email("user@outlook.com");
            assert!(account.eas.tls.use_tls);
            assert!(!account.eas.tls.accept_all_certs);
        }
    }
}
