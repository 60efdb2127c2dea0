use std::sync::Arc;

use sqlx::PgPool;

use crate::domains::auth::{
  model::{LoginRequest, LoginResponse, RegisterRequest, User},
  repository::SqlxUserRepository,
  service::{AuthService, AuthServiceError, AuthServiceImpl},
};
use crate::domains::relay::{
  model::{ContactFormRequest, SendEmailRequest},
  service::{RelayService, RelayServiceError, RelayServiceImpl},
};
use crate::email::EmailService;
use crate::utils::jwt::TokenService;

pub trait AppState: Clone + Send + Sync + 'static {
  fn tokens(&self) -> &TokenService;
  fn register(
    &self,
    req: RegisterRequest,
  ) -> impl std::future::Future<Output = Result<User, AuthServiceError>> + Send;
  fn login(
    &self,
    req: LoginRequest,
  ) -> impl std::future::Future<Output = Result<LoginResponse, AuthServiceError>> + Send;
  fn send_email(
    &self,
    sender_email: String,
    req: SendEmailRequest,
  ) -> impl std::future::Future<Output = Result<(), RelayServiceError>> + Send;
  fn submit_contact(
    &self,
    sender_email: Option<String>,
    req: ContactFormRequest,
  ) -> impl std::future::Future<Output = Result<(), RelayServiceError>> + Send;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub auth_service: Arc<AuthServiceImpl<SqlxUserRepository>>,
  pub relay_service: Arc<RelayServiceImpl<EmailService>>,
  pub token_service: Arc<TokenService>,
}

impl SharedAppState {
  pub async fn new(pool: PgPool, email_service: EmailService, token_service: TokenService) -> Self {
    let token_service = Arc::new(token_service);
    let user_repository = SqlxUserRepository::new(pool);
    let auth_service = Arc::new(AuthServiceImpl::new(user_repository, Arc::clone(&token_service)));
    let relay_service = Arc::new(RelayServiceImpl::new(email_service));

    Self {
      auth_service,
      relay_service,
      token_service,
    }
  }
}

impl AppState for SharedAppState {
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
