use axum::{response::Html, routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::{
  domains::{auth::rest::auth_routes, relay::rest::relay_routes},
  state::AppState,
};

pub fn create_app<S: AppState>(state: S) -> Router {
  Router::new()
    .route("/", get(hello_handler))
    .nest("/api/v1", auth_routes().merge(relay_routes()))
    .layer(CorsLayer::permissive())
    .with_state(state)
}

pub async fn hello_handler() -> Html<String> {
  Html("<h1>Email Relay API</h1>".to_string())
}
