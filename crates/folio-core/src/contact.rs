//! Contact form and chat-widget helpers.
//!
//! Nothing here performs network I/O: the chat widget only builds a link for
//! the messaging app, and form submissions are acknowledged locally.

use crate::error::{StoreError, StoreResult};
use crate::models::ValidationError;
use folio_storage::time_utils;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Number the chat widget opens a conversation with.
pub const DEFAULT_WHATSAPP_NUMBER: &str = "94764421332";

/// Canned messages offered by the chat widget.
pub const QUICK_REPLIES: [&str; 4] = [
    "I want to discuss a project.",
    "Can I see your portfolio?",
    "Do you offer app development?",
    "What are your rates?",
];

/// Pre-filled messaging link, `None` for a blank message.
pub fn whatsapp_link(number: &str, message: &str) -> Option<String> {
    if message.trim().is_empty() {
        return None;
    }
    Some(format!(
        "https://wa.me/{}?text={}",
        number.trim(),
        urlencoding::encode(message)
    ))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Local acknowledgement of a contact form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactReceipt {
    pub received_at: i64,
    /// Always false: there is no transport behind the form
    pub delivered: bool,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(ValidationError::required("name"));
        }
        let email = self.email.trim();
        if email.is_empty() {
            errors.push(ValidationError::required("email"));
        } else if !email.contains('@') {
            errors.push(ValidationError::new("email", "must be an email address"));
        }
        if self.message.trim().is_empty() {
            errors.push(ValidationError::required("message"));
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Validate and acknowledge the submission without sending it anywhere.
    pub fn submit(&self) -> StoreResult<ContactReceipt> {
        self.validate().map_err(StoreError::Validation)?;
        info!(subject = %self.subject, "Contact form accepted locally (not delivered)");
        Ok(ContactReceipt {
            received_at: time_utils::now_ms(),
            delivered: false,
        })
    }
}
