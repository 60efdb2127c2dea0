use axum::{
  extract::{Json, State},
  response::Json as JsonResponse,
  routing::{post, Router},
};

use super::model::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use crate::state::AppState;
use crate::utils::error::AppError;

pub fn auth_routes<S: AppState>() -> Router<S> {
  Router::new()
    .route("/register", post(register_handler::<S>))
    .route("/login", post(login_handler::<S>))
}

pub async fn register_handler<S: AppState>(
  State(state): State<S>,
  Json(payload): Json<RegisterRequest>,
) -> Result<JsonResponse<RegisterResponse>, AppError> {
  let user = state.register(payload).await?;

  Ok(JsonResponse(RegisterResponse {
    id: user.id,
    email: user.email,
  }))
}

pub async fn login_handler<S: AppState>(
  State(state): State<S>,
  Json(payload): Json<LoginRequest>,
) -> Result<JsonResponse<LoginResponse>, AppError> {
  let response = state.login(payload).await?;
  Ok(JsonResponse(response))
}
