use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::json;

#[derive(Debug)]
pub struct AppError {
  pub status_code: StatusCode,
  pub message: String,
}

impl AppError {
  pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status_code,
      message: message.into(),
    }
  }

  pub fn bad_request(message: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_REQUEST, message)
  }

  pub fn unauthorized(message: impl Into<String>) -> Self {
    Self::new(StatusCode::UNAUTHORIZED, message)
  }

  pub fn conflict(message: impl Into<String>) -> Self {
    Self::new(StatusCode::CONFLICT, message)
  }

  pub fn bad_gateway(message: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_GATEWAY, message)
  }

  pub fn internal_server_error(message: impl Into<String>) -> Self {
    Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let body = Json(json!({
      "error": self.message,
      "status_code": self.status_code.as_u16(),
    }));

    (self.status_code, body).into_response()
  }
}

impl From<crate::domains::auth::service::AuthServiceError> for AppError {
  fn from(error: crate::domains::auth::service::AuthServiceError) -> Self {
    use crate::domains::auth::service::AuthServiceError;
    match error {
      AuthServiceError::Conflict(msg) => AppError::conflict(msg),
      AuthServiceError::Unauthorized(msg) => AppError::unauthorized(msg),
      AuthServiceError::ValidationError(msg) => AppError::bad_request(msg),
      AuthServiceError::InternalServerError(msg) => {
        tracing::error!("Auth service error: {}", msg);
        AppError::internal_server_error("Internal server error occurred")
      }
    }
  }
}

impl From<crate::domains::relay::service::RelayServiceError> for AppError {
  fn from(error: crate::domains::relay::service::RelayServiceError) -> Self {
    use crate::domains::relay::service::RelayServiceError;
    match error {
      RelayServiceError::ValidationError(msg) => AppError::bad_request(msg),
      RelayServiceError::TransportError(msg) => {
        tracing::error!("Mail transport error: {}", msg);
        AppError::bad_gateway("Failed to dispatch email")
      }
      RelayServiceError::InternalServerError(msg) => {
        tracing::error!("Relay service error: {}", msg);
        AppError::internal_server_error("Something went wrong on our side")
      }
    }
  }
}
