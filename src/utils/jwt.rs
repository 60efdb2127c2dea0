use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use chrono::{Duration, Utc};

pub const ISSUER: &str = "emailrelay";
pub const AUDIENCE: &str = "emailrelay";

const TOKEN_TTL_HOURS: i64 = 2;

/// Typed claims. The subject is populated once at validation time and read as
/// a plain field afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
  pub sub: String,
  pub iss: String,
  pub aud: String,
  pub exp: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
  InvalidSignature,
  InvalidIssuer,
  InvalidAudience,
  Expired,
  Malformed,
}

impl std::error::Error for TokenError {}

impl std::fmt::Display for TokenError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      TokenError::InvalidSignature => write!(f, "token signature does not verify"),
      TokenError::InvalidIssuer => write!(f, "token issuer mismatch"),
      TokenError::InvalidAudience => write!(f, "token audience mismatch"),
      TokenError::Expired => write!(f, "token has expired"),
      TokenError::Malformed => write!(f, "token is malformed"),
    }
  }
}

impl From<jsonwebtoken::errors::Error> for TokenError {
  fn from(err: jsonwebtoken::errors::Error) -> Self {
    match err.kind() {
      ErrorKind::InvalidSignature => TokenError::InvalidSignature,
      ErrorKind::ExpiredSignature => TokenError::Expired,
      ErrorKind::InvalidIssuer => TokenError::InvalidIssuer,
      ErrorKind::InvalidAudience => TokenError::InvalidAudience,
      _ => TokenError::Malformed,
    }
  }
}

/// Issues and validates the compact signed tokens gating every dispatch call.
///
/// The signing secret is injected at construction and shared process-wide.
/// Tokens are self-contained: there is no session store and no revocation
/// list, so an unexpired, correctly signed token stays valid regardless of
/// later account changes. That is an accepted limitation of the stateless
/// model; a denylist keyed by token id would slot into `validate` if it is
/// ever needed.
pub struct TokenService {
  encoding_key: EncodingKey,
  decoding_key: DecodingKey,
  validation: Validation,
}

impl TokenService {
  pub fn new(secret: &str) -> Self {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[ISSUER]);
    validation.set_audience(&[AUDIENCE]);

    Self {
      encoding_key: EncodingKey::from_secret(secret.as_bytes()),
      decoding_key: DecodingKey::from_secret(secret.as_bytes()),
      validation,
    }
  }

  pub fn issue(&self, subject_email: &str) -> Result<String, TokenError> {
    let expiration = Utc::now() + Duration::hours(TOKEN_TTL_HOURS);

    let claims = Claims {
      sub: subject_email.to_string(),
      iss: ISSUER.to_string(),
      aud: AUDIENCE.to_string(),
      exp: expiration.timestamp() as usize,
    };

    Ok(encode(&Header::default(), &claims, &self.encoding_key)?)
  }

  /// Signature integrity is checked before any claim, so a tampered token is
  /// always reported as `InvalidSignature` even if its claims look sane.
  pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
    let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
    Ok(token_data.claims)
  }
}
