//! Request DTOs for the posting API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Largest accepted post text, in UTF-8 bytes
pub const MAX_POST_BYTES: usize = 1_000_000;

/// Request body for POST /signup
#[derive(Debug, Clone, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
}

impl SignupRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if !is_valid_email(&self.email) {
            return Some("value is not a valid email address".to_string());
        }
        None
    }
}

/// Form body for POST /login (OAuth2 password flow field names).
///
/// `username` carries the account email. Other password-flow fields such as
/// `grant_type` or `scope` are accepted and ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Request body for POST /addpost
#[derive(Debug, Clone, Deserialize)]
pub struct PostCreate {
    pub text: String,
}

impl PostCreate {
    /// True when the text is larger than [`MAX_POST_BYTES`] once UTF-8 encoded.
    pub fn exceeds_limit(&self) -> bool {
        self.text.len() > MAX_POST_BYTES
    }
}

/// Syntactic email check: a single `@`, a non-empty local part, and a dotted
/// domain whose labels are non-empty. No whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') || !domain.contains('.') {
        return false;
    }

    domain
        .split('.')
        .all(|label| !label.is_empty() && !label.starts_with('-') && !label.ends_with('-'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_request_deserialize() {
        let json = r#"{"email": "ada@example.com", "password": "secret"}"#;
        let req: SignupRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.email, "ada@example.com");
        assert_eq!(req.password, "secret");
        assert!(req.validate().is_none());
    }

    #[test]
    fn test_signup_request_invalid_email() {
        let req = SignupRequest {
            email: "not-an-email".to_string(),
            password: "secret".to_string(),
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last+tag@mail.example.org"));

        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@localhost"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user@example..com"));
        assert!(!is_valid_email("user name@example.com"));
        assert!(!is_valid_email("user@-example.com"));
    }

    #[test]
    fn test_login_form_ignores_extra_fields() {
        let form: LoginForm = serde_json::from_str(
            r#"{"username": "ada@example.com", "password": "pw", "grant_type": "password", "scope": ""}"#,
        )
        .unwrap();
        assert_eq!(form.username, "ada@example.com");
        assert_eq!(form.password, "pw");
    }

    #[test]
    fn test_post_size_limit_counts_bytes() {
        let at_limit = PostCreate {
            text: "é".repeat(MAX_POST_BYTES / 2),
        };
        assert_eq!(at_limit.text.len(), MAX_POST_BYTES);
        assert!(!at_limit.exceeds_limit());

        let over_limit = PostCreate {
            text: format!("{}a", at_limit.text),
        };
        assert!(over_limit.exceeds_limit());
    }
}
