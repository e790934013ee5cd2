//! Visitor engagement logic for the Sweet House bakery.
//!
//! The non-commerce interactivity of the site, kept DOM-free:
//!
//! - **Chat**: keyword-matched canned replies and the session
//!   transcript
//! - **Forms**: contact and newsletter validation
//! - **Notify**: transient on-screen notice data
//!
//! # Example
//!
//! ```
//! use sweet_engage::forms::NewsletterSignup;
//! use sweet_engage::notify::Notice;
//!
//! let signup = NewsletterSignup::new("not-an-email");
//! let notice = match signup.validate() {
//!     Ok(()) => Notice::success("Inscri\u{e7}\u{e3}o realizada com sucesso!"),
//!     Err(err) => Notice::from(&err),
//! };
//! assert_eq!(notice.kind.as_str(), "error");
//! ```

pub mod chat;
pub mod error;
pub mod forms;
pub mod notify;

pub use error::FormError;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::chat::{ChatMessage, ChatResponder, ChatTranscript, Sender};
    pub use crate::error::FormError;
    pub use crate::forms::{is_valid_email, ContactForm, NewsletterSignup};
    pub use crate::notify::{Notice, NoticeKind};
}
