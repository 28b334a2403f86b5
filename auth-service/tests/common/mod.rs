use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::JwtHandler;
use auth_service::domain::user::models::EmailAddress;
use auth_service::domain::user::models::User;
use auth_service::domain::user::ports::UserRepository;
use auth_service::domain::user::service::AccountService;
use auth_service::inbound::http::router::create_router;
use auth_service::user::errors::AccountError;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const TEST_TTL_MINUTES: i64 = 30;

/// In-memory store implementing the same port as the Postgres repository,
/// so the suite runs without external infrastructure.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<String, User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, AccountError> {
        let mut users = self.users.lock().unwrap();
        if users.contains_key(user.email.as_str()) {
            return Err(AccountError::DuplicateEmail);
        }
        users.insert(user.email.as_str().to_string(), user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, AccountError> {
        let users = self.users.lock().unwrap();
        Ok(users.get(email.as_str()).cloned())
    }
}

/// Test application that spawns a real server on a random port
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let repository = Arc::new(InMemoryUserRepository::default());
        let jwt_handler = Arc::new(JwtHandler::new(TEST_SECRET, TEST_TTL_MINUTES));
        let account_service = Arc::new(AccountService::new(repository, jwt_handler));

        let router = create_router(account_service);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            // A codec configured like the consuming service's guard
            jwt_handler: JwtHandler::new(TEST_SECRET, TEST_TTL_MINUTES),
        }
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }
}
