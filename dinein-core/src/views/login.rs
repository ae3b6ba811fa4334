//! Login screen state

use shared::models::LoginRequest;
use shared::route::HomeParams;
use validator::{Validate, ValidationErrors};

#[derive(Debug, Clone, Default)]
pub struct LoginView {
    username: String,
    password: String,
    password_visible: bool,
}

impl LoginView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_username(&mut self, value: impl Into<String>) {
        self.username = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn toggle_password_visibility(&mut self) {
        self.password_visible = !self.password_visible;
    }

    pub fn is_password_visible(&self) -> bool {
        self.password_visible
    }

    /// Password as the text field shows it
    pub fn password_display(&self) -> String {
        if self.password_visible {
            self.password.clone()
        } else {
            "•".repeat(self.password.chars().count())
        }
    }

    /// Validated login request body
    pub fn request(&self) -> Result<LoginRequest, ValidationErrors> {
        let request = LoginRequest {
            username: self.username.trim().to_string(),
            password: self.password.clone(),
        };
        request.validate()?;
        Ok(request)
    }

    /// Parameters for the home screen after a successful login
    pub fn home_params(&self) -> HomeParams {
        HomeParams::new(self.username.trim())
    }
}
