use serde::{Deserialize, Serialize};

use crate::types::{Id, Timestamp};

/// Default avatar assigned at signup.
pub const DEFAULT_AVATAR: &str = "images/avatar-default.png";

/// Minimum accepted username length.
pub const MIN_USERNAME_LENGTH: usize = 3;

/// An account record.
///
/// The password hash is a PHC-formatted Argon2id string produced by the API
/// layer; it is never serialized into HTTP responses (handlers expose
/// [`User::public`] views only).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Id,
    pub username: String,
    pub password_hash: String,
    pub role: String,
    pub avatar: String,
    pub created_at: Timestamp,
}

/// Public projection of a [`User`] safe to embed in HTTP responses.
#[derive(Debug, Clone, Serialize)]
pub struct PublicUser {
    pub id: Id,
    pub username: String,
    pub role: String,
    pub avatar: String,
}

impl User {
    /// Strip credential material for response payloads.
    pub fn public(&self) -> PublicUser {
        PublicUser {
            id: self.id.clone(),
            username: self.username.clone(),
            role: self.role.clone(),
            avatar: self.avatar.clone(),
        }
    }
}

/// Validate a username for signup or profile update.
pub fn validate_username(username: &str) -> Result<(), String> {
    let trimmed = username.trim();
    if trimmed.len() < MIN_USERNAME_LENGTH {
        return Err(format!(
            "Username must be at least {MIN_USERNAME_LENGTH} characters long"
        ));
    }
    if trimmed != username {
        return Err("Username must not start or end with whitespace".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::ROLE_CUSTOMER;

    #[test]
    fn test_valid_username() {
        assert!(validate_username("client123").is_ok());
    }

    #[test]
    fn test_short_username_rejected() {
        let result = validate_username("ab");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("at least 3"));
    }

    #[test]
    fn test_padded_username_rejected() {
        assert!(validate_username(" alice ").is_err());
    }

    #[test]
    fn test_public_view_has_no_hash() {
        let user = User {
            id: "u1".into(),
            username: "alice".into(),
            password_hash: "$argon2id$secret".into(),
            role: ROLE_CUSTOMER.into(),
            avatar: DEFAULT_AVATAR.into(),
            created_at: crate::types::now(),
        };
        let json = serde_json::to_value(user.public()).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["username"], "alice");
    }
}
