use std::error::Error;
use std::sync::Arc;

use async_trait::async_trait;
use validator::Validate;

use super::{
  model::{LoginRequest, LoginResponse, RegisterRequest, User},
  repository::UserRepository,
};
use crate::utils::jwt::TokenService;
use crate::utils::{hash_password, verify_password};

#[derive(Debug)]
pub enum AuthServiceError {
  Conflict(String),
  Unauthorized(String),
  ValidationError(String),
  InternalServerError(String),
}

impl Error for AuthServiceError {}

impl std::fmt::Display for AuthServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      AuthServiceError::Conflict(msg) => write!(f, "Conflict: {}", msg),
      AuthServiceError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
      AuthServiceError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
      AuthServiceError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
    }
  }
}

impl From<sqlx::Error> for AuthServiceError {
  fn from(err: sqlx::Error) -> Self {
    AuthServiceError::InternalServerError(format!("Database error: {}", err))
  }
}

#[async_trait]
pub trait AuthService: Send + Sync {
  async fn register(&self, req: RegisterRequest) -> Result<User, AuthServiceError>;
  async fn login(&self, req: LoginRequest) -> Result<LoginResponse, AuthServiceError>;
}

pub struct AuthServiceImpl<R> {
  user_repository: R,
  token_service: Arc<TokenService>,
}

impl<R> AuthServiceImpl<R>
where
  R: UserRepository,
{
  pub fn new(user_repository: R, token_service: Arc<TokenService>) -> Self {
    Self {
      user_repository,
      token_service,
    }
  }
}

/// Accounts are keyed by case-normalized email.
fn normalize_email(email: &str) -> String {
  email.trim().to_lowercase()
}

#[async_trait]
impl<R> AuthService for AuthServiceImpl<R>
where
  R: UserRepository,
{
  async fn register(&self, req: RegisterRequest) -> Result<User, AuthServiceError> {
    req
      .validate()
      .map_err(|e| AuthServiceError::ValidationError(format!("Validation failed: {}", e)))?;

    let email = normalize_email(&req.email);

    if self.user_repository.find_by_email(&email).await?.is_some() {
      return Err(AuthServiceError::Conflict("User already exists".to_string()));
    }

    let password_hash = hash_password(&req.password)
      .map_err(|e| AuthServiceError::InternalServerError(format!("Password hashing failed: {}", e)))?;

    let user = self.user_repository.create(&email, &password_hash).await?;

    tracing::info!("Registered user {}", user.email);

    Ok(user)
  }

  async fn login(&self, req: LoginRequest) -> Result<LoginResponse, AuthServiceError> {
    let email = normalize_email(&req.email);

    // Unknown account and wrong password collapse into the same answer so a
    // caller cannot probe which addresses are registered.
    let user = match self.user_repository.find_by_email(&email).await? {
      Some(user) => user,
      None => return Err(AuthServiceError::Unauthorized("Invalid credentials".to_string())),
    };

    if !verify_password(&req.password, &user.password_hash) {
      return Err(AuthServiceError::Unauthorized("Invalid credentials".to_string()));
    }

    let token = self
      .token_service
      .issue(&user.email)
      .map_err(|e| AuthServiceError::InternalServerError(format!("Token issuance failed: {}", e)))?;

    Ok(LoginResponse {
      token,
      user_id: user.id,
      email: user.email,
    })
  }
}
