use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
  pub host: String,
  pub port: u16,
  pub username: String,
  pub password: String,
  pub from_email: String,
}

#[derive(Debug)]
pub enum EmailError {
  /// Relay unreachable, rejected the session, or rejected the message.
  Transport(String),
  /// A mailbox address failed to parse.
  InvalidAddress(String),
  /// The contact template resource is unavailable. Non-retryable
  /// configuration failure.
  TemplateLoad(String),
}

impl std::error::Error for EmailError {}

impl std::fmt::Display for EmailError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      EmailError::Transport(msg) => write!(f, "Transport error: {}", msg),
      EmailError::InvalidAddress(msg) => write!(f, "Invalid address: {}", msg),
      EmailError::TemplateLoad(msg) => write!(f, "Template load error: {}", msg),
    }
  }
}

impl From<lettre::transport::smtp::Error> for EmailError {
  fn from(err: lettre::transport::smtp::Error) -> Self {
    EmailError::Transport(err.to_string())
  }
}

impl From<lettre::address::AddressError> for EmailError {
  fn from(err: lettre::address::AddressError) -> Self {
    EmailError::InvalidAddress(err.to_string())
  }
}

impl From<lettre::error::Error> for EmailError {
  fn from(err: lettre::error::Error) -> Self {
    EmailError::Transport(format!("Failed to build message: {}", err))
  }
}
