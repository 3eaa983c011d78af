//! Contact message entity
//!
//! A contact-form submission. Exists for one request only.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::error::ContactError;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex should compile"));

/// Raw form fields as posted by the browser; any of them may be missing
#[derive(Debug, Default)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

/// Read the form out of a JSON body. Fields that are not strings, and bodies
/// that are not objects, leave the field missing.
impl From<&Value> for ContactForm {
    fn from(body: &Value) -> Self {
        let field = |key: &str| body.get(key).and_then(Value::as_str).map(str::to_string);

        Self {
            name: field("name"),
            email: field("email"),
            subject: field("subject"),
            message: field("message"),
        }
    }
}

/// A validated contact message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub body: String,
}

impl ContactMessage {
    /// Text delivered to the notification webhook
    pub fn to_notification_text(&self) -> String {
        format!(
            "\nName: {}\nEmail: {}\nSubject: {}\n\nMessage: {}",
            self.name, self.email, self.subject, self.body
        )
    }
}

impl TryFrom<ContactForm> for ContactMessage {
    type Error = ContactError;

    fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
        let (name, email, subject, body) = match (
            non_empty(form.name),
            non_empty(form.email),
            non_empty(form.subject),
            non_empty(form.message),
        ) {
            (Some(name), Some(email), Some(subject), Some(body)) => (name, email, subject, body),
            _ => return Err(ContactError::MissingField),
        };

        if !is_valid_email(&email) {
            return Err(ContactError::InvalidEmail);
        }

        Ok(Self {
            name,
            email,
            subject,
            body,
        })
    }
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

/// Loose `local@domain.tld` shape check
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
