use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SendEmailRequest {
  pub to: String,
  pub subject: String,
  pub body: String,
}

/// One contact-form submission. Lives only for the duration of a single
/// dispatch; never persisted.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContactFormRequest {
  pub name: String,
  pub email: String,
  pub message: String,
  pub subject: Option<String>,
  pub phone: Option<String>,
  pub website: Option<String>,
}
