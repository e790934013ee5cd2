//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// A caller-supplied argument was malformed (empty name, negative
    /// or non-finite price, wrong currency). The operation that
    /// returned it did not mutate any state.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
