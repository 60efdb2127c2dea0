use axum::http::HeaderMap;

use crate::utils::error::AppError;
use crate::utils::jwt::{Claims, TokenService};

/// Extracts and validates the bearer token, yielding the caller's claims.
pub fn authenticate(headers: &HeaderMap, tokens: &TokenService) -> Result<Claims, AppError> {
  let auth_header = headers
    .get(axum::http::header::AUTHORIZATION)
    .ok_or_else(|| AppError::unauthorized("Authorization header missing"))?
    .to_str()
    .map_err(|_| AppError::unauthorized("Invalid authorization header"))?;

  let token = auth_header
    .strip_prefix("Bearer ")
    .ok_or_else(|| AppError::unauthorized("Invalid authorization format"))?;

  let claims = tokens
    .validate(token)
    .map_err(|e| AppError::unauthorized(format!("Invalid token: {}", e)))?;

  Ok(claims)
}
