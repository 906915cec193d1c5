//! Credential checks and token issue/resolution.

use std::sync::Arc;

use tracing::debug;

use super::token::TokenService;
use crate::error::{ApiError, Result};
use crate::models::User;
use crate::storage::Storage;

/// Verifies email/password pairs and turns bearer tokens back into users.
pub struct Authenticator {
    storage: Arc<dyn Storage>,
    tokens: TokenService,
}

impl Authenticator {
    pub fn new(storage: Arc<dyn Storage>, tokens: TokenService) -> Self {
        Self { storage, tokens }
    }

    /// Returns the user registered under `email` when `password` matches the
    /// stored credential, `None` otherwise.
    ///
    /// Passwords are stored and compared as plaintext. This is a known security
    /// gap kept for compatibility with existing accounts.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<Option<User>> {
        let Some(user) = self.storage.find_user_by_email(email).await? else {
            debug!(email, "login for unknown email");
            return Ok(None);
        };

        if user.password != password {
            debug!(user_id = user.id, "login with wrong password");
            return Ok(None);
        }

        Ok(Some(user))
    }

    /// Issues an access token whose subject is `subject_email`.
    pub fn create_token(&self, subject_email: &str) -> Result<String> {
        Ok(self.tokens.issue(subject_email)?)
    }

    /// Validates `token` and loads the user named by its subject.
    pub async fn resolve(&self, token: &str) -> Result<User> {
        let claims = self.tokens.verify(token).map_err(|e| {
            debug!(error = %e, "rejected bearer token");
            ApiError::from(e)
        })?;

        self.storage
            .find_user_by_email(&claims.sub)
            .await?
            .ok_or_else(|| {
                debug!(subject = %claims.sub, "token subject has no account");
                ApiError::invalid_credentials()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Claims;
    use crate::storage::InMemoryStorage;

    fn authenticator() -> (Arc<InMemoryStorage>, Authenticator) {
        let storage = Arc::new(InMemoryStorage::new());
        let auth = Authenticator::new(storage.clone(), TokenService::new("test-secret", 30));
        (storage, auth)
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let (storage, auth) = authenticator();
        let user = storage.create_user("ada@example.com", "pw").await.unwrap();

        let found = auth.authenticate("ada@example.com", "pw").await.unwrap();
        assert_eq!(found, Some(user));
    }

    #[tokio::test]
    async fn test_authenticate_failures_return_none() {
        let (storage, auth) = authenticator();
        storage.create_user("ada@example.com", "pw").await.unwrap();

        assert!(auth
            .authenticate("ada@example.com", "wrong")
            .await
            .unwrap()
            .is_none());
        assert!(auth
            .authenticate("nobody@example.com", "pw")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_resolve_round_trip() {
        let (storage, auth) = authenticator();
        let user = storage.create_user("ada@example.com", "pw").await.unwrap();

        let token = auth.create_token("ada@example.com").unwrap();
        let resolved = auth.resolve(&token).await.unwrap();

        assert_eq!(resolved, user);
    }

    #[tokio::test]
    async fn test_resolve_unknown_subject() {
        let (_storage, auth) = authenticator();

        let token = auth.create_token("ghost@example.com").unwrap();
        let result = auth.resolve(&token).await;

        assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_resolve_expired_token() {
        let (storage, auth) = authenticator();
        storage.create_user("ada@example.com", "pw").await.unwrap();

        let now = chrono::Utc::now().timestamp();
        let token = TokenService::new("test-secret", 30)
            .encode_claims(&Claims {
                sub: "ada@example.com".to_string(),
                iat: now - 3600,
                exp: now - 1,
            })
            .unwrap();

        assert!(matches!(
            auth.resolve(&token).await,
            Err(ApiError::Unauthorized(_))
        ));
    }

    #[tokio::test]
    async fn test_resolve_malformed_token() {
        let (_storage, auth) = authenticator();

        assert!(matches!(
            auth.resolve("abc").await,
            Err(ApiError::Unauthorized(_))
        ));
    }
}
