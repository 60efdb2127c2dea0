use axum::{
  extract::{Json, State},
  http::HeaderMap,
  response::Json as JsonResponse,
  routing::{post, Router},
};
use serde_json::{json, Value};

use super::model::{ContactFormRequest, SendEmailRequest};
use crate::middleware::auth::authenticate;
use crate::state::AppState;
use crate::utils::error::AppError;

pub fn relay_routes<S: AppState>() -> Router<S> {
  Router::new()
    .route("/send", post(send_handler::<S>))
    .route("/contact", post(contact_handler::<S>))
}

pub async fn send_handler<S: AppState>(
  State(state): State<S>,
  headers: HeaderMap,
  Json(payload): Json<SendEmailRequest>,
) -> Result<JsonResponse<Value>, AppError> {
  let claims = authenticate(&headers, state.tokens())?;
  let sender_email = claims.sub;

  state.send_email(sender_email.clone(), payload).await?;

  Ok(JsonResponse(json!({
    "message": format!("Email sent by {}", sender_email),
  })))
}

pub async fn contact_handler<S: AppState>(
  State(state): State<S>,
  headers: HeaderMap,
  Json(payload): Json<ContactFormRequest>,
) -> Result<JsonResponse<Value>, AppError> {
  // Authentication is not enforced up front here: input validation runs
  // first, and an anonymous caller with a well-formed submission gets the
  // internal-error response from the service layer.
  let sender_email = authenticate(&headers, state.tokens()).ok().map(|claims| claims.sub);

  state.submit_contact(sender_email, payload).await?;

  Ok(JsonResponse(json!({
    "message": "Your message has been delivered. Thank you!",
  })))
}
