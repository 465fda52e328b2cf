//! Login credentials type.

use std::fmt;

use crate::error::ValidationError;

/// Minimum accepted secret length.
const MIN_SECRET_LEN: usize = 6;

/// Login credentials for the Eventia API.
///
/// Holds the identifier (an e-mail address) and the secret. The secret is
/// never exposed in Debug output.
///
/// # Example
///
/// ```
/// use eventia_core::Credentials;
///
/// let creds = Credentials::new("a@b.com", "pw123456");
/// assert_eq!(creds.identifier(), "a@b.com");
/// assert!(creds.validate().is_ok());
/// ```
#[derive(Clone)]
pub struct Credentials {
    identifier: String,
    secret: String,
}

impl Credentials {
    /// Create new credentials.
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
        }
    }

    /// Returns the identifier.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Returns the secret.
    ///
    /// Use this only when building the login request body.
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Check the credentials the way the login form does before submitting.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.identifier.is_empty() {
            return Err(ValidationError::Required {
                field: "identifier",
            });
        }
        if !looks_like_email(&self.identifier) {
            return Err(ValidationError::Invalid {
                field: "identifier",
                reason: "must be an e-mail address".to_string(),
            });
        }
        if self.secret.is_empty() {
            return Err(ValidationError::Required { field: "secret" });
        }
        if self.secret.chars().count() < MIN_SECRET_LEN {
            return Err(ValidationError::Invalid {
                field: "secret",
                reason: format!("must be at least {} characters", MIN_SECRET_LEN),
            });
        }
        Ok(())
    }
}

/// `local@domain.tld` with no whitespace and a single `@`.
fn looks_like_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_hides_secret_in_debug() {
        let creds = Credentials::new("a@b.com", "secret123");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("a@b.com"));
        assert!(!debug.contains("secret123"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn accepts_valid_login() {
        assert!(Credentials::new("a@b.com", "pw123456").validate().is_ok());
        assert!(
            Credentials::new("ana.perez@eventia.co", "123456")
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn rejects_missing_identifier() {
        assert_eq!(
            Credentials::new("", "pw123456").validate(),
            Err(ValidationError::Required {
                field: "identifier"
            })
        );
    }

    #[test]
    fn rejects_malformed_email() {
        for bad in ["ana", "ana@", "@b.com", "a@b", "a@.com", "a@b.", "a b@c.com", "a@b@c.com"] {
            assert!(
                matches!(
                    Credentials::new(bad, "pw123456").validate(),
                    Err(ValidationError::Invalid {
                        field: "identifier",
                        ..
                    })
                ),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_short_secret() {
        assert_eq!(
            Credentials::new("a@b.com", "").validate(),
            Err(ValidationError::Required { field: "secret" })
        );
        assert!(matches!(
            Credentials::new("a@b.com", "12345").validate(),
            Err(ValidationError::Invalid { field: "secret", .. })
        ));
    }
}
