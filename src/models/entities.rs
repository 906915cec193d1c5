//! Stored entities
//!
//! Records held by the credential and post stores.

use serde::{Deserialize, Serialize};

/// A registered account.
///
/// `password` holds the credential exactly as submitted at signup. It is never
/// serialized into responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password: String,
}

/// A short text post owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub text: String,
    pub owner_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_serialize_shape() {
        let post = Post {
            id: 7,
            text: "hello".to_string(),
            owner_id: 3,
        };
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json, serde_json::json!({"id": 7, "text": "hello", "owner_id": 3}));
    }
}
