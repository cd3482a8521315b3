//! Shared types for the Café Fausse client suite
//!
//! Common types used across the client and the site front-end: wire
//! request/response structures, the composite reservation time slot,
//! and the static content registry rendered by the page views.

pub mod content;
pub mod models;
pub mod request;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use content::ContentRegistry;
pub use request::{GuestCount, NewsletterRequest, ReservationRequest, TimeSlot};
pub use response::{NewsletterAck, ReservationConfirmation, ServiceError};
