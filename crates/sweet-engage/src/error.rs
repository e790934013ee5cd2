//! Form validation error types.

use thiserror::Error;

/// Validation outcomes for visitor-submitted forms.
///
/// These are surfaced to the user as on-screen notices, not
/// propagated as failures through any store.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    /// A required field was left blank.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// The email address does not look like an email address.
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
}
