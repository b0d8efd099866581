//! # User models for registration
//!
//! ## [`RegisterRequest`]
//!
//! The JSON body posted to `/api/users/register`: `name`, `email`, `password`.
//! The confirmation password never leaves the form.
//!
//! ## [`UserInfo`]
//!
//! The user document the backend returns after registering. The backend is a
//! document store, so the identifier arrives as `_id`; it is renamed to `id` here.
//! Profile fields (`photo`, `phone`, `bio`) are optional and default when absent,
//! and any session token in the body is ignored since the session rides on a cookie.

use serde::{Deserialize, Serialize};

/// Body of a registration request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// User information returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UserInfo {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

impl UserInfo {
    /// Get display name, falling back to email if name is blank.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_document() {
        let body = r#"{
            "_id": "64b7f0c2e1",
            "name": "Jo",
            "email": "jo@example.com",
            "photo": "https://i.ibb.co/avatar.png",
            "phone": "+234",
            "bio": "bio",
            "token": "ignored"
        }"#;
        let user: UserInfo = serde_json::from_str(body).unwrap();
        assert_eq!(user.id, "64b7f0c2e1");
        assert_eq!(user.name, "Jo");
        assert_eq!(user.email, "jo@example.com");
        assert_eq!(user.photo.as_deref(), Some("https://i.ibb.co/avatar.png"));
    }

    #[test]
    fn test_deserialize_minimal_document() {
        let user: UserInfo = serde_json::from_str(r#"{"name":"Jo"}"#).unwrap();
        assert_eq!(user.name, "Jo");
        assert!(user.id.is_empty());
        assert!(user.bio.is_none());
    }

    #[test]
    fn test_register_request_has_no_confirmation_field() {
        let req = RegisterRequest {
            name: "Jo".to_string(),
            email: "jo@example.com".to_string(),
            password: "secret1".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Jo", "email": "jo@example.com", "password": "secret1"})
        );
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user = UserInfo {
            name: " ".to_string(),
            email: "jo@example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(user.display_name(), "jo@example.com");
    }
}
