use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::JwtHandler;
use auth::UserClaims;
use chrono::NaiveDate;
use pdf_service::document::errors::QueueError;
use pdf_service::document::ports::TaskQueue;
use pdf_service::document::renderer::ProfileRenderer;
use pdf_service::inbound::http::router::create_router;
use uuid::Uuid;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const TEST_TTL_MINUTES: i64 = 30;

/// Queue that records enqueued payloads instead of talking to SQS.
#[derive(Default)]
pub struct RecordingQueue {
    pub sent: Mutex<Vec<String>>,
}

#[async_trait]
impl TaskQueue for RecordingQueue {
    async fn enqueue_render(&self, claims: &UserClaims) -> Result<(), QueueError> {
        let body = serde_json::to_string(claims)
            .map_err(|e| QueueError::SerializationFailed(e.to_string()))?;
        self.sent.lock().unwrap().push(body);
        Ok(())
    }
}

/// Test application that spawns a real server on a random port
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    /// Codec configured identically to the server's guard
    pub jwt_handler: JwtHandler,
    pub queue: Arc<RecordingQueue>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let queue = Arc::new(RecordingQueue::default());
        let renderer = Arc::new(ProfileRenderer::new());
        let jwt_handler = Arc::new(JwtHandler::new(TEST_SECRET, TEST_TTL_MINUTES));

        let router = create_router(renderer, Arc::clone(&queue), jwt_handler);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(TEST_SECRET, TEST_TTL_MINUTES),
            queue,
        }
    }

    /// A valid token for a fixed test user, signed with the server's secret.
    pub fn valid_token(&self) -> (UserClaims, String) {
        let claims = test_claims();
        let token = self
            .jwt_handler
            .encode(&claims)
            .expect("Failed to encode token");
        (claims, token)
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }
}

pub fn test_claims() -> UserClaims {
    UserClaims {
        id: Uuid::new_v4(),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        email: "jane.doe@example.com".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 15).unwrap(),
        exp: None,
    }
}
