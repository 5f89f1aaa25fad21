//! Contact form with required-field validation.
//!
//! Submission is simulated: a valid form produces an acknowledgment for the
//! user and is cleared. Nothing is sent or stored.

use crate::error::ContactError;

/// Identifies one of the form's inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

/// The four required contact fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Confirmation of a (simulated) successful send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgment {
    pub name: String,
    pub email: String,
}

impl Acknowledgment {
    /// Text shown to the user
    pub fn message(&self) -> String {
        format!(
            "✅ Thank you, {}! Your message has been sent successfully.\n\nI'll get back to you at {} as soon as possible.",
            self.name, self.email
        )
    }
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    /// Replace one field's value, as typing into the input does
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// True when every field has content. Whitespace counts as content.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|field| !field.is_empty())
    }

    /// Clear all four fields
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Validate and acknowledge the form.
    ///
    /// An incomplete form is left exactly as it was so the user can fix it
    /// and resubmit. A complete form is cleared after the acknowledgment is
    /// built.
    pub fn submit(&mut self) -> Result<Acknowledgment, ContactError> {
        if !self.is_complete() {
            return Err(ContactError::IncompleteForm);
        }

        let ack = Acknowledgment {
            name: std::mem::take(&mut self.name),
            email: std::mem::take(&mut self.email),
        };
        self.reset();

        tracing::debug!("Contact form acknowledged");
        Ok(ack)
    }
}

/// Severity of a blocking notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Warning,
    Info,
}

/// A blocking dialog to show the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub text: String,
}

impl Notification {
    /// Build the dialog for a submission outcome
    pub fn from_submission(result: &Result<Acknowledgment, ContactError>) -> Self {
        match result {
            Ok(ack) => Self {
                level: NotificationLevel::Info,
                text: ack.message(),
            },
            Err(err) => Self {
                level: NotificationLevel::Warning,
                text: err.to_string(),
            },
        }
    }
}
