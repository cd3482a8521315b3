//! Remote-service response types
//!
//! The reservation/newsletter service answers every request with one of
//! three JSON bodies: a confirmation carrying a display message, a plain
//! acknowledgement, or an error object surfaced verbatim to the guest.

use serde::{Deserialize, Serialize};

/// Success body for `POST /api/reservations`.
///
/// The message is composed server-side (confirmed slot, table number) and
/// displayed to the guest without rewording.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationConfirmation {
    pub message: String,
}

/// Success body for `POST /api/newsletter`.
///
/// The client only needs the 2xx status; both fields are optional so older
/// service versions that return an empty body still parse.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsletterAck {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Error body for any non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceError {
    pub error: String,
}
