//! Service seam
//!
//! The form controllers talk to the remote service through this trait so
//! tests can substitute a double for the network client.

use async_trait::async_trait;

use crate::ClientResult;
use shared::{NewsletterAck, NewsletterRequest, ReservationConfirmation, ReservationRequest};

/// Remote reservation/newsletter service operations
#[async_trait]
pub trait SiteApi: Send + Sync {
    /// `POST /api/newsletter`
    async fn subscribe_newsletter(
        &self,
        request: &NewsletterRequest,
    ) -> ClientResult<NewsletterAck>;

    /// `POST /api/reservations`
    async fn create_reservation(
        &self,
        request: &ReservationRequest,
    ) -> ClientResult<ReservationConfirmation>;
}
