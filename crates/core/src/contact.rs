//! Contact-form submissions.

use serde::Deserialize;
use validator::Validate;

/// Body of `POST /api/contact`. Only presence is checked.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ContactMessage {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub message: Option<String>,
}

/// Rendered plain-text email for a contact submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMail {
    pub subject: String,
    pub body: String,
}

impl ContactMessage {
    pub fn to_mail(&self) -> ContactMail {
        let name = self.name.as_deref().unwrap_or_default();
        let email = self.email.as_deref().unwrap_or_default();
        let message = self.message.as_deref().unwrap_or_default();

        ContactMail {
            subject: format!("New contact message from {name}"),
            body: format!("Name: {name}\nEmail: {email}\n\n{message}\n"),
        }
    }
}
