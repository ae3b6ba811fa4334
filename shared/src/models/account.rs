//! Account Models
//!
//! Login and sign-up payloads. Only the login call ever leaves the
//! process; sign-up is validated locally and goes nowhere.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request body
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "username must not be empty"))]
    pub username: String,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

/// Login response body
///
/// Only `access_token` gates navigation; the remaining profile fields are
/// kept for the home greeting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl LoginResponse {
    /// Whether the response carries a usable access token
    pub fn is_authenticated(&self) -> bool {
        self.access_token
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty())
    }
}

/// Sign-up form payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SignUpForm {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(email(message = "email is not a valid address"))]
    pub email: String,
    pub birth_date: Option<NaiveDate>,
    #[validate(length(min = 1, max = 128, message = "password must be 1-128 characters"))]
    pub password: String,
    #[validate(must_match(other = "password", message = "passwords do not match"))]
    pub repeat_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_token_gate() {
        let resp: LoginResponse =
            serde_json::from_str(r#"{"username":"emilys","accessToken":"abc"}"#).unwrap();
        assert!(resp.is_authenticated());
        assert_eq!(resp.username.as_deref(), Some("emilys"));

        let resp: LoginResponse = serde_json::from_str(r#"{"accessToken":"  "}"#).unwrap();
        assert!(!resp.is_authenticated());

        let resp: LoginResponse = serde_json::from_str("{}").unwrap();
        assert!(!resp.is_authenticated());
    }

    #[test]
    fn test_login_request_requires_fields() {
        let req = LoginRequest {
            username: String::new(),
            password: "pw".to_string(),
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("username"));
    }

    #[test]
    fn test_sign_up_validation() {
        let mut form = SignUpForm {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            birth_date: None,
            password: "secret".to_string(),
            repeat_password: "secret".to_string(),
        };
        assert!(form.validate().is_ok());

        form.repeat_password = "other".to_string();
        form.email = "not-an-email".to_string();
        let errors = form.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("repeat_password"));
        assert!(fields.contains_key("email"));
    }
}
