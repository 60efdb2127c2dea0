use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor};
use validator::Validate;

#[derive(Debug, Clone, FromRow)]
pub struct User {
  pub id: i32,
  pub email: String,
  pub password_hash: String,
  pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct RegisterRequest {
  #[validate(email)]
  pub email: String,
  pub password: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegisterResponse {
  pub id: i32,
  pub email: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoginRequest {
  pub email: String,
  pub password: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoginResponse {
  pub token: String,
  pub user_id: i32,
  pub email: String,
}

impl User {
  pub async fn create<'e, E>(executor: E, email: &str, password_hash: &str) -> Result<User, sqlx::Error>
  where
    E: PgExecutor<'e>,
  {
    sqlx::query_as::<_, User>(
      r#"
            INSERT INTO users (email, password_hash)
            VALUES ($1, $2)
            RETURNING id, email, password_hash, created_at
            "#,
    )
    .bind(email)
    .bind(password_hash)
    .fetch_one(executor)
    .await
  }

  pub async fn find_by_email<'e, E>(executor: E, email: &str) -> Result<Option<User>, sqlx::Error>
  where
    E: PgExecutor<'e>,
  {
    sqlx::query_as::<_, User>(r#"SELECT id, email, password_hash, created_at FROM users WHERE email = $1"#)
      .bind(email)
      .fetch_optional(executor)
      .await
  }
}
