// dinein-client/tests/login_gate.rs
// Login gate against a local axum auth server

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use dinein_client::{
    AuthClient, ClientConfig, ClientError, LoginGate, LoginRequest, NetworkAuthClient,
    OfflineAuthClient,
};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// Last login body the server received
type Received = Arc<Mutex<Option<Value>>>;

#[derive(Clone)]
struct AuthStub {
    status: StatusCode,
    reply: Value,
    received: Received,
}

async fn login(
    State(stub): State<AuthStub>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    *stub.received.lock().unwrap() = Some(body);
    (stub.status, Json(stub.reply))
}

/// Serve `POST /auth/login` with a canned reply on an ephemeral port
async fn spawn_auth_server(status: StatusCode, reply: Value) -> (String, Received) {
    let received = Received::default();
    let app = Router::new()
        .route("/auth/login", post(login))
        .with_state(AuthStub {
            status,
            reply,
            received: received.clone(),
        });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), received)
}

#[tokio::test]
async fn test_network_login_success() {
    let (base_url, received) = spawn_auth_server(
        StatusCode::OK,
        json!({
            "id": 1,
            "username": "emilys",
            "email": "emily@x.dummyjson.com",
            "accessToken": "token-abc",
            "refreshToken": "refresh-abc"
        }),
    )
    .await;

    let client = NetworkAuthClient::new(&ClientConfig::new(base_url)).unwrap();
    let gate = LoginGate::new(client);
    assert!(gate.attempt("emilys", "emilyspass").await);

    let body = received.lock().unwrap().clone().unwrap();
    assert_eq!(body["username"], "emilys");
    assert_eq!(body["password"], "emilyspass");
}

#[tokio::test]
async fn test_network_login_rejected() {
    let (base_url, received) = spawn_auth_server(
        StatusCode::BAD_REQUEST,
        json!({ "message": "Invalid credentials" }),
    )
    .await;

    let client = NetworkAuthClient::new(&ClientConfig::new(base_url)).unwrap();
    let request = LoginRequest {
        username: "emilys".to_string(),
        password: "wrong".to_string(),
    };
    match client.login(&request).await {
        Err(ClientError::InvalidCredentials(message)) => {
            assert_eq!(message, "Invalid credentials")
        }
        other => panic!("expected InvalidCredentials, got {other:?}"),
    }
    assert!(received.lock().unwrap().is_some());
}

#[tokio::test]
async fn test_missing_token_is_not_a_login() {
    let (base_url, _received) =
        spawn_auth_server(StatusCode::OK, json!({ "username": "emilys" })).await;

    let gate = LoginGate::new(NetworkAuthClient::new(&ClientConfig::new(base_url)).unwrap());
    assert!(!gate.attempt("emilys", "emilyspass").await);
}

#[tokio::test]
async fn test_unreachable_server_fails_closed() {
    // Bind then drop to get a port nobody listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ClientConfig::new(format!("http://{addr}")).with_timeout(2);
    let gate = LoginGate::new(NetworkAuthClient::new(&config).unwrap());
    assert!(!gate.attempt("emilys", "emilyspass").await);
}

#[tokio::test]
async fn test_offline_gate() {
    let gate = LoginGate::new(OfflineAuthClient);
    assert!(gate.attempt("guest", "anything").await);

    // Blank credentials never reach the client
    assert!(!gate.attempt("  ", "anything").await);
    assert!(matches!(
        gate.login("guest", "").await,
        Err(ClientError::Validation(_))
    ));
}
