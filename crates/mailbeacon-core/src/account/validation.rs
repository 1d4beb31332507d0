//! Account validation.

use super::model::Account;

/// Validation error for account configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Account name is empty.
    EmptyName,
    /// Email address is empty.
    EmptyEmail,
    /// Email address format is invalid.
    InvalidEmail,
    /// Server URL is empty.
    EmptyServerUrl,
    /// Server URL is not an HTTP(S) endpoint.
    InvalidServerUrl,
    /// Username is empty.
    EmptyUsername,
    /// Password is empty.
    EmptyPassword,
}

impl ValidationError {
    /// Get human-readable error message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::EmptyName => "Account name is required",
            Self::EmptyEmail => "Email address is required",
            Self::InvalidEmail => "Invalid email address format",
            Self::EmptyServerUrl => "Server address is required",
            Self::InvalidServerUrl => "Server address must start with https:// or http://",
            Self::EmptyUsername => "Username is required",
            Self::EmptyPassword => "Password is required",
        }
    }

    /// Get the field name this error relates to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::EmptyName => "name",
            Self::EmptyEmail | Self::InvalidEmail => "email",
            Self::EmptyServerUrl | Self::InvalidServerUrl => "server_url",
            Self::EmptyUsername => "username",
            Self::EmptyPassword => "password",
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ValidationError {}

/// Result of validating an account.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// Validate an account configuration.
///
/// Returns `Ok(())` if valid, or `Err(Vec<ValidationError>)` with all errors.
///
/// # Errors
///
/// Returns a vector of `ValidationError` if any fields are invalid.
pub fn validate_account(account: &Account) -> ValidationResult {
    let mut errors = Vec::new();

    // Name validation
    if account.name.trim().is_empty() {
        errors.push(ValidationError::EmptyName);
    }

    // Email validation
    if account.email.trim().is_empty() {
        errors.push(ValidationError::EmptyEmail);
    } else if !is_valid_email(&account.email) {
        errors.push(ValidationError::InvalidEmail);
    }

    // Endpoint validation
    let server_url = account.eas.server_url.trim();
    if server_url.is_empty() {
        errors.push(ValidationError::EmptyServerUrl);
    } else if !server_url.starts_with("https://") && !server_url.starts_with("http://") {
        errors.push(ValidationError::InvalidServerUrl);
    }

    // Credential validation
    if account.eas.username.trim().is_empty() {
        errors.push(ValidationError::EmptyUsername);
    }
    if account.eas.password.is_empty() {
        errors.push(ValidationError::EmptyPassword);
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Basic email validation.
fn is_valid_email(email: &str) -> bool {
    let email = email.trim();

    // Must contain exactly one @
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return false;
    }

    let local = parts[0];
    let domain = parts[1];

    // Local part must not be empty
    if local.is_empty() {
        return false;
    }

    // Domain must contain at least one dot and not be empty
    if domain.is_empty() || !domain.contains('.') {
        return false;
    }

    // Domain parts must not be empty
    let domain_parts: Vec<&str> = domain.split('.').collect();
    if domain_parts.iter().any(|p| p.is_empty()) {
        return false;
    }

    true
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

    fn complete_account() -> Account {
        let mut account = Account::with_email("user@fabrikam.example");
        account.eas.server_url = "https://mail.fabrikam.example/Microsoft-Server-ActiveSync".into();
        account.eas.password = "secret".into();
        account
    }

    #[test]
    fn test_valid_email() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("user.name@example.com"));
        assert!(is_valid_email("user@sub.example.com"));
    }

    #[test]
    fn test_invalid_email() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("user"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@@example.com"));
    }

    #[test]
    fn test_validate_empty_account() {
        let account = Account::new();
        let result = validate_account(&account);
        assert!(result.is_err());
        let errors = result.unwrap_err();
        assert!(errors.contains(&ValidationError::EmptyName));
        assert!(errors.contains(&ValidationError::EmptyEmail));
        assert!(errors.contains(&ValidationError::EmptyServerUrl));
        assert!(errors.contains(&ValidationError::EmptyUsername));
        assert!(errors.contains(&ValidationError::EmptyPassword));
    }

    #[test]
    fn test_validate_complete_account() {
        let account = complete_account();
        assert!(validate_account(&account).is_ok());
    }

    #[test]
    fn test_validate_rejects_non_http_endpoint() {
        let mut account = complete_account();
        account.eas.server_url = "mail.fabrikam.example".into();
        let errors = validate_account(&account).unwrap_err();
        assert_eq!(errors, vec![ValidationError::InvalidServerUrl]);
    }

    #[test]
    fn test_validation_error_fields() {
        assert_eq!(ValidationError::InvalidEmail.field(), "email");
        assert_eq!(ValidationError::EmptyServerUrl.field(), "server_url");
        assert_eq!(
            format!("{}", ValidationError::EmptyPassword),
            "Password is required"
        );
    }
}
