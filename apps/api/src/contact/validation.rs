use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::contact::{ContactRequest, ContactSubmission};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub fn as_str(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Absent and empty values count as missing. Whitespace is content.
fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}

/// Required fields (name, email, message) that are missing, in form order.
/// Subject is optional and never reported.
pub fn missing_required_fields(
    name: Option<&str>,
    email: Option<&str>,
    message: Option<&str>,
) -> Vec<ContactField> {
    [
        (ContactField::Name, name),
        (ContactField::Email, email),
        (ContactField::Message, message),
    ]
    .into_iter()
    .filter(|(_, value)| is_blank(*value))
    .map(|(field, _)| field)
    .collect()
}

impl ContactRequest {
    pub fn missing_fields(&self) -> Vec<ContactField> {
        missing_required_fields(
            self.name.as_deref(),
            self.email.as_deref(),
            self.message.as_deref(),
        )
    }

    /// Accepts the request, stamping it with an id and receive time.
    /// An empty subject is dropped.
    pub fn into_submission(self) -> Result<ContactSubmission, Vec<ContactField>> {
        let missing = self.missing_fields();
        match (self.name, self.email, self.message) {
            (Some(name), Some(email), Some(message)) if missing.is_empty() => {
                Ok(ContactSubmission {
                    id: Uuid::new_v4(),
                    received_at: Utc::now(),
                    name,
                    email,
                    subject: self.subject.filter(|s| !s.is_empty()),
                    message,
                })
            }
            _ => Err(missing),
        }
    }
}
