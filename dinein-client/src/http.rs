//! Auth clients

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use shared::models::{LoginRequest, LoginResponse};
use std::time::Duration;

use crate::{ClientConfig, ClientError, ClientResult};

/// Something that can exchange credentials for a login response
#[async_trait]
pub trait AuthClient: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse>;
}

/// Login over HTTP: `POST {base}/auth/login` with a JSON body
#[derive(Debug, Clone)]
pub struct NetworkAuthClient {
    client: Client,
    login_url: String,
}

impl NetworkAuthClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            login_url: config.login_url(),
        })
    }

    pub fn login_url(&self) -> &str {
        &self.login_url
    }

    async fn handle_response(response: reqwest::Response) -> ClientResult<LoginResponse> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            let message = server_message(&text);
            return match status {
                StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED => {
                    Err(ClientError::InvalidCredentials(message))
                }
                _ => Err(ClientError::Server {
                    status: status.as_u16(),
                    message,
                }),
            };
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(Into::into)
    }
}

#[async_trait]
impl AuthClient for NetworkAuthClient {
    async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse> {
        tracing::debug!(url = %self.login_url, username = %request.username, "Sending login request");
        let response = self
            .client
            .post(&self.login_url)
            .json(request)
            .send()
            .await?;
        Self::handle_response(response).await
    }
}

/// Error bodies look like `{"message": "Invalid credentials"}`
fn server_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: String,
    }

    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

/// Accepts any credentials without touching the network
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineAuthClient;

#[async_trait]
impl AuthClient for OfflineAuthClient {
    async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse> {
        Ok(LoginResponse {
            access_token: Some(format!("offline-{}", request.username)),
            refresh_token: None,
            username: Some(request.username.clone()),
            email: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message() {
        assert_eq!(
            server_message(r#"{"message":"Invalid credentials"}"#),
            "Invalid credentials"
        );
        assert_eq!(server_message("Bad Gateway\n"), "Bad Gateway");
    }

    #[tokio::test]
    async fn test_offline_client_accepts_anything() {
        let req = LoginRequest {
            username: "anyone".to_string(),
            password: String::new(),
        };
        let resp = OfflineAuthClient.login(&req).await.unwrap();
        assert!(resp.is_authenticated());
        assert_eq!(resp.username.as_deref(), Some("anyone"));
    }
}
