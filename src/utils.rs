use bcrypt::{hash, verify, DEFAULT_COST};

pub mod error;
pub mod jwt;

use crate::email::{EmailService, SmtpConfig, TemplateRenderer};
use crate::utils::jwt::TokenService;

/// Adaptive, salted hashing. Two hashes of the same password differ
/// bit-for-bit because each embeds a fresh salt, yet both verify.
pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
  hash(password, DEFAULT_COST)
}

/// Malformed stored hashes count as a failed verification, never an error.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
  verify(password, password_hash).unwrap_or(false)
}

pub fn init_email_service() -> EmailService {
  use std::env;

  let smtp_config = SmtpConfig {
    host: env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
    port: env::var("SMTP_PORT")
      .unwrap_or_else(|_| "587".to_string())
      .parse()
      .unwrap_or(587),
    username: env::var("SMTP_USERNAME").expect("SMTP_USERNAME environment variable must be set."),
    password: env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD environment variable must be set."),
    from_email: env::var("SMTP_FROM_EMAIL").expect("SMTP_FROM_EMAIL environment variable must be set."),
  };

  let template_path =
    std::env::var("CONTACT_TEMPLATE_PATH").unwrap_or_else(|_| "templates/contact.html".to_string());

  EmailService::new(smtp_config, TemplateRenderer::new(template_path))
}

pub fn init_token_service() -> TokenService {
  let secret = std::env::var("JWT_SECRET").expect("JWT_SECRET environment variable must be set.");
  TokenService::new(&secret)
}
