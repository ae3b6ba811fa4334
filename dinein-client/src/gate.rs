//! Login gate
//!
//! Decides whether the user may proceed to Home. Any failure, whether
//! rejected credentials, network trouble or a token-less response, maps
//! to `false` and is logged.

use shared::models::{LoginRequest, LoginResponse};
use validator::Validate;

use crate::{AuthClient, ClientError, ClientResult};

pub struct LoginGate<A: AuthClient> {
    client: A,
}

impl<A: AuthClient> LoginGate<A> {
    pub fn new(client: A) -> Self {
        Self { client }
    }

    /// Log in, returning the response only when it carries an access token
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<LoginResponse> {
        let request = LoginRequest {
            username: username.trim().to_string(),
            password: password.to_string(),
        };
        request.validate()?;

        let response = self.client.login(&request).await?;
        if !response.is_authenticated() {
            return Err(ClientError::InvalidResponse(
                "login response has no access token".to_string(),
            ));
        }
        Ok(response)
    }

    /// True iff the login succeeded with a non-empty access token
    pub async fn attempt(&self, username: &str, password: &str) -> bool {
        match self.login(username, password).await {
            Ok(_) => {
                tracing::info!(username = %username.trim(), "Login successful");
                true
            }
            Err(e) => {
                tracing::warn!(username = %username.trim(), error = %e, "Login failed");
                false
            }
        }
    }
}
