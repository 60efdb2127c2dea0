use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
  body::{Body, Bytes},
  http::{Request, StatusCode},
  Router,
};
use chrono::Utc;
use serde::Serialize;
use tower::ServiceExt;

use crate::app::create_app;
use crate::domains::auth::{
  model::{LoginRequest, LoginResponse, RegisterRequest, User},
  repository::UserRepository,
  service::{AuthService, AuthServiceError, AuthServiceImpl},
};
use crate::domains::relay::{
  model::{ContactFormRequest, SendEmailRequest},
  service::{RelayService, RelayServiceError, RelayServiceImpl},
};
use crate::email::{EmailError, Mailer};
use crate::state::AppState;
use crate::utils::jwt::TokenService;

pub const TEST_JWT_SECRET: &str = "test-signing-secret";

#[derive(Default)]
pub struct InMemoryUserRepository {
  users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
  async fn create(&self, email: &str, password_hash: &str) -> Result<User, sqlx::Error> {
    let mut users = self.users.lock().unwrap();
    let user = User {
      id: users.len() as i32 + 1,
      email: email.to_string(),
      password_hash: password_hash.to_string(),
      created_at: Some(Utc::now()),
    };
    users.push(user.clone());
    Ok(user)
  }

  async fn find_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
    let users = self.users.lock().unwrap();
    Ok(users.iter().find(|u| u.email == email).cloned())
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentMail {
  Raw { to: String, subject: String, body: String },
  ContactForm { from: String, destination: String },
}

#[derive(Clone, Default)]
pub struct MockMailer {
  sent: Arc<Mutex<Vec<SentMail>>>,
  fail_with: Arc<Mutex<Option<EmailError>>>,
}

impl MockMailer {
  pub fn sent(&self) -> Vec<SentMail> {
    self.sent.lock().unwrap().clone()
  }

  /// Makes the next dispatch fail with `err` instead of recording it.
  pub fn fail_with(&self, err: EmailError) {
    *self.fail_with.lock().unwrap() = Some(err);
  }

  fn take_failure(&self) -> Option<EmailError> {
    self.fail_with.lock().unwrap().take()
  }
}

#[async_trait]
impl Mailer for MockMailer {
  async fn send_raw(&self, to: &str, subject: &str, body: &str) -> Result<(), EmailError> {
    if let Some(err) = self.take_failure() {
      return Err(err);
    }
    self.sent.lock().unwrap().push(SentMail::Raw {
      to: to.to_string(),
      subject: subject.to_string(),
      body: body.to_string(),
    });
    Ok(())
  }

  async fn send_contact_form(&self, submission: &ContactFormRequest, destination: &str) -> Result<(), EmailError> {
    if let Some(err) = self.take_failure() {
      return Err(err);
    }
    self.sent.lock().unwrap().push(SentMail::ContactForm {
      from: submission.email.clone(),
      destination: destination.to_string(),
    });
    Ok(())
  }
}

/// Fully wired application state backed by in-memory collaborators, so
/// route-level tests run without Postgres or an SMTP server.
#[derive(Clone)]
pub struct TestState {
  auth_service: Arc<AuthServiceImpl<InMemoryUserRepository>>,
  relay_service: Arc<RelayServiceImpl<MockMailer>>,
  token_service: Arc<TokenService>,
  pub mailer: MockMailer,
}

impl TestState {
  pub fn new() -> Self {
    let token_service = Arc::new(TokenService::new(TEST_JWT_SECRET));
    let mailer = MockMailer::default();
    let auth_service = Arc::new(AuthServiceImpl::new(
      InMemoryUserRepository::default(),
      Arc::clone(&token_service),
    ));
    let relay_service = Arc::new(RelayServiceImpl::new(mailer.clone()));

    Self {
      auth_service,
      relay_service,
      token_service,
      mailer,
    }
  }

  pub fn issue_token(&self, subject_email: &str) -> String {
    self.token_service.issue(subject_email).expect("issue test token")
  }
}

impl AppState for TestState {
  fn tokens(&self) -> &TokenService {
    &self.token_service
  }

  async fn register(&self, req: RegisterRequest) -> Result<User, AuthServiceError> {
    self.auth_service.register(req).await
  }

  async fn login(&self, req: LoginRequest) -> Result<LoginResponse, AuthServiceError> {
    self.auth_service.login(req).await
  }

  async fn send_email(&self, sender_email: String, req: SendEmailRequest) -> Result<(), RelayServiceError> {
    self.relay_service.send_email(&sender_email, req).await
  }

  async fn submit_contact(
    &self,
    sender_email: Option<String>,
    req: ContactFormRequest,
  ) -> Result<(), RelayServiceError> {
    self.relay_service.submit_contact(sender_email, req).await
  }
}

pub fn test_app() -> Router {
  create_app(TestState::new())
}

pub fn test_app_with_state(state: TestState) -> Router {
  create_app(state)
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(Body::from(serde_json::to_vec(body).expect("serialize request body")))
    .expect("build request");

  send(app, request).await
}

pub async fn post_json_auth<T: Serialize>(app: Router, uri: &str, token: &str, body: &T) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .header("authorization", format!("Bearer {}", token))
    .body(Body::from(serde_json::to_vec(body).expect("serialize request body")))
    .expect("build request");

  send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Bytes) {
  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}
