//! Single-step contact form.
//!
//! Three display states: editing, submitting (inputs locked), and a result
//! banner. Fields are cleared only after the relay acknowledges; a failure
//! keeps them for correction and resubmission.

use serde::{Deserialize, Serialize};

use crate::email::is_valid_email;
use crate::relay::{Ack, Relay, RelayError, RelayPayload, RelayTemplate};

// =============================================================================
// MESSAGE
// =============================================================================

/// `Full` carries a subject line (contacts page); `Short` does not.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactVariant {
    Full,
    Short,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

/// Wire shape of a contact submission. `subject` is absent for the short variant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: String,
}

impl ContactMessage {
    #[must_use]
    pub fn empty(variant: ContactVariant) -> Self {
        let subject = match variant {
            ContactVariant::Full => Some(String::new()),
            ContactVariant::Short => None,
        };
        Self { subject, ..Self::default() }
    }

    #[must_use]
    pub fn variant(&self) -> ContactVariant {
        if self.subject.is_some() { ContactVariant::Full } else { ContactVariant::Short }
    }

    /// Fields this message carries, in display order.
    #[must_use]
    pub fn fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|f| *f != ContactField::Subject || self.subject.is_some())
            .collect()
    }

    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => self.subject.as_deref().unwrap_or(""),
            ContactField::Message => &self.message,
        }
    }

    /// Empty or whitespace-only fields.
    #[must_use]
    pub fn missing(&self) -> Vec<ContactField> {
        self.fields()
            .into_iter()
            .filter(|f| self.get(*f).trim().is_empty())
            .collect()
    }

    #[must_use]
    pub fn to_payload(&self) -> RelayPayload {
        let params = self
            .fields()
            .into_iter()
            .map(|f| (f.key().to_owned(), self.get(f).to_owned()))
            .collect();
        RelayPayload::new(RelayTemplate::Contact, params)
    }
}

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("required fields are empty: {}", join_keys(.0))]
    MissingFields(Vec<ContactField>),
    #[error("invalid email address")]
    InvalidEmail,
    #[error("this form has no subject field")]
    NoSubjectField,
    #[error("a submission is already in progress")]
    SubmissionInFlight,
    #[error("no submission in progress")]
    NotSubmitting,
    #[error(transparent)]
    Relay(#[from] RelayError),
}

fn join_keys(fields: &[ContactField]) -> String {
    fields.iter().map(|f| f.key()).collect::<Vec<_>>().join(", ")
}

// =============================================================================
// FORM
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ContactStatus {
    #[default]
    Editing,
    Submitting,
    Sent,
    Failed(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactForm {
    message: ContactMessage,
    status: ContactStatus,
}

impl ContactForm {
    #[must_use]
    pub fn new(variant: ContactVariant) -> Self {
        Self { message: ContactMessage::empty(variant), status: ContactStatus::Editing }
    }

    /// Form pre-populated with a message received over the wire.
    #[must_use]
    pub fn filled(message: ContactMessage) -> Self {
        Self { message, status: ContactStatus::Editing }
    }

    #[must_use]
    pub fn variant(&self) -> ContactVariant {
        self.message.variant()
    }

    #[must_use]
    pub fn message(&self) -> &ContactMessage {
        &self.message
    }

    #[must_use]
    pub fn status(&self) -> &ContactStatus {
        &self.status
    }

    #[must_use]
    pub fn value(&self, field: ContactField) -> &str {
        self.message.get(field)
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.status == ContactStatus::Submitting
    }

    /// Edit one field. The result banner stays until the next submit.
    ///
    /// # Errors
    ///
    /// Rejected while a submission is outstanding, or for `Subject` on the
    /// short variant.
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) -> Result<(), ContactError> {
        if self.is_submitting() {
            return Err(ContactError::SubmissionInFlight);
        }
        let value = value.into();
        match field {
            ContactField::Name => self.message.name = value,
            ContactField::Email => self.message.email = value,
            ContactField::Subject => match &mut self.message.subject {
                Some(subject) => *subject = value,
                None => return Err(ContactError::NoSubjectField),
            },
            ContactField::Message => self.message.message = value,
        }
        Ok(())
    }

    /// Validate and lock the form; returns the message to send.
    ///
    /// # Errors
    ///
    /// Returns missing fields, a bad email, or an outstanding submission.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, ContactError> {
        if self.is_submitting() {
            return Err(ContactError::SubmissionInFlight);
        }
        let missing = self.message.missing();
        if !missing.is_empty() {
            return Err(ContactError::MissingFields(missing));
        }
        if !is_valid_email(&self.message.email) {
            return Err(ContactError::InvalidEmail);
        }
        self.status = ContactStatus::Submitting;
        Ok(self.message.clone())
    }

    /// Apply the relay outcome: clear on success, keep values on failure.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::NotSubmitting`] if nothing is outstanding.
    pub fn finish_submit(&mut self, outcome: Result<(), String>) -> Result<(), ContactError> {
        if !self.is_submitting() {
            return Err(ContactError::NotSubmitting);
        }
        match outcome {
            Ok(()) => {
                self.message = ContactMessage::empty(self.message.variant());
                self.status = ContactStatus::Sent;
            }
            Err(message) => self.status = ContactStatus::Failed(message),
        }
        Ok(())
    }

    /// Submit through `relay` in one request.
    ///
    /// # Errors
    ///
    /// Returns the validation error or the relay failure.
    pub async fn submit(&mut self, relay: &dyn Relay) -> Result<Ack, ContactError> {
        let message = self.begin_submit()?;
        match relay.submit(&message.to_payload()).await {
            Ok(ack) => {
                self.finish_submit(Ok(()))?;
                Ok(ack)
            }
            Err(e) => {
                self.finish_submit(Err(e.to_string()))?;
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
