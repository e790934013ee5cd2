//! Shopping cart module.
//!
//! Contains the session-scoped cart store, its line items, and the
//! read-only snapshot the presentation layer renders from.

mod store;

pub use store::{CartSnapshot, CartStore, LineItem};
