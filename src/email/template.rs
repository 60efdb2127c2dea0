use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::domains::relay::model::ContactFormRequest;
use crate::email::types::EmailError;

// e.g. "June 05, 2024 at 3:04 PM"
const TIMESTAMP_FORMAT: &str = "%B %d, %Y at %-l:%M %p";

/// Fills the contact template by fixed-placeholder substitution. Every
/// user-controlled field is entity-escaped before it reaches the output.
#[derive(Debug, Clone)]
pub struct TemplateRenderer {
  template_path: PathBuf,
}

impl TemplateRenderer {
  pub fn new(template_path: impl Into<PathBuf>) -> Self {
    Self {
      template_path: template_path.into(),
    }
  }

  pub async fn render(&self, submission: &ContactFormRequest, timestamp: DateTime<Utc>) -> Result<String, EmailError> {
    let template = tokio::fs::read_to_string(&self.template_path).await.map_err(|e| {
      EmailError::TemplateLoad(format!(
        "Failed to load contact template {}: {}",
        self.template_path.display(),
        e
      ))
    })?;

    Ok(
      template
        .replace("{{Name}}", &html_escape(&submission.name))
        .replace("{{Email}}", &html_escape(&submission.email))
        .replace("{{ContactInfo}}", &contact_info_block(submission))
        .replace("{{Message}}", &html_escape(&submission.message))
        .replace("{{Timestamp}}", &timestamp.format(TIMESTAMP_FORMAT).to_string()),
    )
  }
}

/// One line per present field, empty when both phone and website are blank.
fn contact_info_block(submission: &ContactFormRequest) -> String {
  let mut block = String::new();

  if let Some(phone) = submission.phone.as_deref().filter(|p| !p.trim().is_empty()) {
    block.push_str(&format!("<br><strong>Phone:</strong> {}", html_escape(phone)));
  }
  if let Some(website) = submission.website.as_deref().filter(|w| !w.trim().is_empty()) {
    block.push_str(&format!("<br><strong>Website:</strong> {}", html_escape(website)));
  }

  block
}

fn html_escape(s: &str) -> String {
  s.replace('&', "&amp;")
    .replace('<', "&lt;")
    .replace('>', "&gt;")
    .replace('"', "&quot;")
}
