//! Form controllers
//!
//! Each form owns its input state, validates locally, submits through the
//! [`SiteApi`](crate::SiteApi) seam, and maps the outcome to a message the
//! view displays. Submission is split into `begin_submit` / `finish_submit`
//! so an event loop can run the network call as a spawned task; the
//! one-call `submit` drives both halves.

pub mod newsletter;
pub mod reservation;

pub use newsletter::NewsletterForm;
pub use reservation::{ReservationField, ReservationForm};

/// How a form message should be styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
    /// Neutral progress feedback while a submit is in flight
    Info,
}

/// User-facing outcome of a form interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl FormMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Info,
            text: text.into(),
        }
    }
}
