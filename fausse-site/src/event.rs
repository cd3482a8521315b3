//! Events resolved outside the input stream

use fausse_client::ClientResult;
use shared::{NewsletterAck, ReservationConfirmation};

/// Outcome of a spawned submit task, delivered back to the event loop
#[derive(Debug)]
pub enum AppEvent {
    ReservationResolved(ClientResult<ReservationConfirmation>),
    NewsletterResolved(ClientResult<NewsletterAck>),
}
