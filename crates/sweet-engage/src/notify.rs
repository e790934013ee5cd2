//! Transient on-screen notices.
//!
//! A notice is the data behind the toast the presentation shows and
//! removes after a short delay; the delay itself is presentation.

use crate::error::FormError;
use serde::{Deserialize, Serialize};

/// Visual kind of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum NoticeKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NoticeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeKind::Info => "info",
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

/// A transient on-screen notice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notice {
    /// Text shown to the visitor.
    pub message: String,
    /// Visual kind.
    pub kind: NoticeKind,
}

impl Notice {
    /// Create an informational notice.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Info,
        }
    }

    /// Create a success notice.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Success,
        }
    }

    /// Create an error notice.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
        }
    }
}

impl From<&FormError> for Notice {
    fn from(err: &FormError) -> Self {
        Notice::error(err.to_string())
    }
}
