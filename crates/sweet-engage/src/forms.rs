//! Client-side validation for the contact and newsletter forms.
//!
//! Validation runs synchronously before any (simulated) submission;
//! failures are values the presentation turns into notices.

use crate::error::FormError;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Check whether a string looks like an email address.
///
/// Same shape check the site has always used: something before the
/// `@`, something after it, and a dot in the domain part.
pub fn is_valid_email(email: &str) -> bool {
    let email_re = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    email_re.is_match(email)
}

/// The contact form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ContactForm {
    /// Sender name.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Message body.
    pub message: String,
}

impl ContactForm {
    /// Create a filled-in contact form.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Validate the form: every field is required, and the email must
    /// look like an email address.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(FormError::MissingField("email"));
        }
        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail(self.email.clone()));
        }
        if self.message.trim().is_empty() {
            return Err(FormError::MissingField("message"));
        }
        Ok(())
    }
}

/// The newsletter signup form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct NewsletterSignup {
    /// Subscriber email address.
    pub email: String,
}

impl NewsletterSignup {
    /// Create a filled-in signup.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    /// Validate the signup: the email must look like an email address.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.email.trim().is_empty() {
            return Err(FormError::MissingField("email"));
        }
        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("contato@pssweethouse.com.br"));
        assert!(is_valid_email("a@b.co"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("spaces in@mail.com"));
        assert!(!is_valid_email("missing@dot"));
        assert!(!is_valid_email("two@@signs.com"));
    }

    #[test]
    fn test_contact_form_valid() {
        let form = ContactForm::new("Ana", "ana@example.com", "Adorei os doces!");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_contact_form_missing_fields() {
        let form = ContactForm::new("", "ana@example.com", "oi");
        assert_eq!(form.validate(), Err(FormError::MissingField("name")));

        let form = ContactForm::new("Ana", "ana@example.com", "  ");
        assert_eq!(form.validate(), Err(FormError::MissingField("message")));
    }

    #[test]
    fn test_contact_form_bad_email() {
        let form = ContactForm::new("Ana", "not-an-email", "oi");
        assert_eq!(
            form.validate(),
            Err(FormError::InvalidEmail("not-an-email".to_string()))
        );
    }

    #[test]
    fn test_newsletter_signup() {
        assert!(NewsletterSignup::new("ana@example.com").validate().is_ok());
        assert_eq!(
            NewsletterSignup::new("").validate(),
            Err(FormError::MissingField("email"))
        );
        assert_eq!(
            NewsletterSignup::new("bad").validate(),
            Err(FormError::InvalidEmail("bad".to_string()))
        );
    }
}
