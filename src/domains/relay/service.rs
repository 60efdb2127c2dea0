use std::error::Error;

use async_trait::async_trait;

use super::model::{ContactFormRequest, SendEmailRequest};
use crate::email::{EmailError, Mailer};

#[derive(Debug)]
pub enum RelayServiceError {
  ValidationError(String),
  TransportError(String),
  InternalServerError(String),
}

impl Error for RelayServiceError {}

impl std::fmt::Display for RelayServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      RelayServiceError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
      RelayServiceError::TransportError(msg) => write!(f, "Transport Error: {}", msg),
      RelayServiceError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
    }
  }
}

impl From<EmailError> for RelayServiceError {
  fn from(err: EmailError) -> Self {
    match err {
      EmailError::Transport(msg) => RelayServiceError::TransportError(msg),
      EmailError::InvalidAddress(msg) => RelayServiceError::ValidationError(format!("Invalid address: {}", msg)),
      EmailError::TemplateLoad(msg) => RelayServiceError::InternalServerError(msg),
    }
  }
}

#[async_trait]
pub trait RelayService: Send + Sync {
  async fn send_email(&self, sender_email: &str, req: SendEmailRequest) -> Result<(), RelayServiceError>;
  async fn submit_contact(
    &self,
    sender_email: Option<String>,
    req: ContactFormRequest,
  ) -> Result<(), RelayServiceError>;
}

pub struct RelayServiceImpl<M> {
  mailer: M,
}

impl<M> RelayServiceImpl<M>
where
  M: Mailer,
{
  pub fn new(mailer: M) -> Self {
    Self { mailer }
  }
}

fn is_blank(value: &str) -> bool {
  value.trim().is_empty()
}

#[async_trait]
impl<M> RelayService for RelayServiceImpl<M>
where
  M: Mailer,
{
  async fn send_email(&self, sender_email: &str, req: SendEmailRequest) -> Result<(), RelayServiceError> {
    self.mailer.send_raw(&req.to, &req.subject, &req.body).await?;

    tracing::info!("Email relayed to {} on behalf of {}", req.to, sender_email);

    Ok(())
  }

  async fn submit_contact(
    &self,
    sender_email: Option<String>,
    req: ContactFormRequest,
  ) -> Result<(), RelayServiceError> {
    if is_blank(&req.name) || is_blank(&req.email) || is_blank(&req.message) {
      return Err(RelayServiceError::ValidationError(
        "Name, email and message are required.".to_string(),
      ));
    }

    // A missing sender identity surfaces as an internal error, not as 401.
    // The contact endpoint has always answered this way and callers treat it
    // as part of the contract.
    let destination = sender_email
      .ok_or_else(|| RelayServiceError::InternalServerError("No authenticated sender identity".to_string()))?;

    self.mailer.send_contact_form(&req, &destination).await?;

    tracing::info!("Contact form from {} delivered to {}", req.email, destination);

    Ok(())
  }
}
