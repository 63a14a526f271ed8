use secrecy::{ExposeSecret, SecretString};

use crate::{Result, err};

/// What the login form collects.
#[derive(Debug)]
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        let password: String = password.into();
        Self {
            email: email.into(),
            password: SecretString::from(password),
        }
    }
}

/// Decides whether a login attempt may enter the dashboard.
pub trait LoginGate {
    fn admit(&self, credentials: &Credentials) -> Result<()>;
}

/// Admits anyone who filled in both fields. There is no account store behind
/// the dashboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenGate;

impl LoginGate for OpenGate {
    fn admit(&self, credentials: &Credentials) -> Result<()> {
        if credentials.email.trim().is_empty() {
            return Err(err!("email is required"));
        }
        if credentials.password.expose_secret().is_empty() {
            return Err(err!("password is required"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_gate_needs_both_fields() {
        assert!(OpenGate.admit(&Credentials::new("mas@example.com", "hunter2")).is_ok());
        assert!(OpenGate.admit(&Credentials::new("", "hunter2")).is_err());
        assert!(OpenGate.admit(&Credentials::new("mas@example.com", "")).is_err());
    }

    #[test]
    fn password_is_redacted_in_debug() {
        let creds = Credentials::new("mas@example.com", "hunter2");
        assert!(!format!("{creds:?}").contains("hunter2"));
    }
}
