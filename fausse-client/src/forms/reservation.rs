//! Reservation form controller

use chrono::{Days, Local, NaiveDate, NaiveTime};

use crate::forms::FormMessage;
use crate::{ClientError, ClientResult, SiteApi};
use shared::{GuestCount, ReservationConfirmation, ReservationRequest};

/// How far ahead a table can be booked, in days
pub const BOOKING_WINDOW_DAYS: u64 = 14;

const MSG_PROCESSING: &str = "Processing your reservation...";
const MSG_MISSING_FIELDS: &str = "Please fill in all required fields.";
const MSG_SERVICE_DOWN: &str =
    "Unable to process reservation. Please try again or call us directly.";

/// The next bookable dates: exactly [`BOOKING_WINDOW_DAYS`] calendar dates
/// strictly after `today`, ascending.
pub fn available_dates_from(today: NaiveDate) -> impl Iterator<Item = NaiveDate> + Clone {
    (1..=BOOKING_WINDOW_DAYS).filter_map(move |offset| today.checked_add_days(Days::new(offset)))
}

/// The next bookable dates counted from today's local date.
pub fn available_dates() -> impl Iterator<Item = NaiveDate> + Clone {
    available_dates_from(Local::now().date_naive())
}

/// Offered seating times: 17:00 through 22:00 in half-hour steps.
pub fn available_time_slots() -> impl Iterator<Item = NaiveTime> + Clone {
    (17u32 * 60..=22 * 60)
        .step_by(30)
        .filter_map(|minutes| NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0))
}

/// Free-text reservation fields addressed by the generic setter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationField {
    Name,
    Email,
    Phone,
    SpecialRequests,
}

/// Reservation form state
///
/// Collects the request fields, composes the time slot from the two
/// independent date/time selectors, and runs the submit cycle:
/// `Idle -> Submitting -> {Success, Error, TransportFailure} -> Idle`.
#[derive(Debug, Default)]
pub struct ReservationForm {
    request: ReservationRequest,
    message: Option<FormMessage>,
    submitting: bool,
}

impl ReservationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current field values
    pub fn request(&self) -> &ReservationRequest {
        &self.request
    }

    /// Message from the last interaction, if any
    pub fn message(&self) -> Option<&FormMessage> {
        self.message.as_ref()
    }

    /// Whether a submission is in flight (submit control disabled)
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Overwrite a free-text field. No validation happens here.
    pub fn set_field(&mut self, field: ReservationField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ReservationField::Name => self.request.name = value,
            ReservationField::Email => self.request.email = value,
            ReservationField::Phone => self.request.phone = value,
            ReservationField::SpecialRequests => self.request.special_requests = value,
        }
    }

    pub fn set_guests(&mut self, guests: GuestCount) {
        self.request.guests = guests;
    }

    /// Pick a date; the previously chosen time survives.
    pub fn set_date(&mut self, date: NaiveDate) {
        self.request.time_slot = self.request.time_slot.with_date(date);
    }

    /// Pick a time; the previously chosen date survives.
    pub fn set_time(&mut self, time: NaiveTime) {
        self.set_time_from(time, Local::now().date_naive());
    }

    fn set_time_from(&mut self, time: NaiveTime, today: NaiveDate) {
        // Fallback when no date was picked yet: the first offered date.
        let first_date = available_dates_from(today)
            .next()
            .unwrap_or(today);
        self.request.time_slot = self.request.time_slot.with_time(time, first_date);
    }

    /// Run the local guard and open the submit cycle.
    ///
    /// Returns the request to send, or `None` when validation failed or a
    /// submission is already in flight — in either case nothing must go out
    /// on the network.
    pub fn begin_submit(&mut self) -> Option<ReservationRequest> {
        if self.submitting {
            return None;
        }

        let request = &self.request;
        if request.name.trim().is_empty()
            || request.email.trim().is_empty()
            || request.time_slot.is_empty()
        {
            self.message = Some(FormMessage::error(MSG_MISSING_FIELDS));
            return None;
        }

        self.submitting = true;
        self.message = Some(FormMessage::info(MSG_PROCESSING));
        Some(request.clone())
    }

    /// Close the submit cycle with the service outcome.
    ///
    /// Success shows the server message verbatim and resets every field to
    /// its default; failures keep the fields so the guest can correct and
    /// resubmit. The form is interactive again afterwards.
    pub fn finish_submit(&mut self, result: ClientResult<ReservationConfirmation>) {
        self.submitting = false;
        match result {
            Ok(confirmation) => {
                self.message = Some(FormMessage::success(confirmation.message));
                self.request = ReservationRequest::default();
            }
            Err(ClientError::Service { message }) => {
                self.message = Some(FormMessage::error(format!("Error: {}", message)));
            }
            Err(err) => {
                tracing::warn!("reservation submit failed in transport: {}", err);
                self.message = Some(FormMessage::error(MSG_SERVICE_DOWN));
            }
        }
    }

    /// Validate, submit, and resolve in one call.
    pub async fn submit(&mut self, api: &dyn SiteApi) {
        if let Some(request) = self.begin_submit() {
            let result = api.create_reservation(&request).await;
            self.finish_submit(result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::MessageKind;
    use async_trait::async_trait;
    use shared::{NewsletterAck, NewsletterRequest, TimeSlot};
    use std::sync::atomic::{AtomicUsize, Ordering};

    enum MockOutcome {
        Confirmed(&'static str),
        Rejected(&'static str),
        Unreachable,
    }

    struct MockService {
        outcome: MockOutcome,
        calls: AtomicUsize,
    }

    impl MockService {
        fn new(outcome: MockOutcome) -> Self {
            Self {
                outcome,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SiteApi for MockService {
        async fn subscribe_newsletter(
            &self,
            _request: &NewsletterRequest,
        ) -> ClientResult<NewsletterAck> {
            unreachable!("reservation tests never touch the newsletter endpoint")
        }

        async fn create_reservation(
            &self,
            _request: &ReservationRequest,
        ) -> ClientResult<ReservationConfirmation> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.outcome {
                MockOutcome::Confirmed(message) => Ok(ReservationConfirmation {
                    message: message.to_string(),
                }),
                MockOutcome::Rejected(error) => Err(ClientError::Service {
                    message: error.to_string(),
                }),
                MockOutcome::Unreachable => Err(ClientError::InvalidResponse(
                    "connection refused".to_string(),
                )),
            }
        }
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn time(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    fn filled_form() -> ReservationForm {
        let mut form = ReservationForm::new();
        form.set_field(ReservationField::Name, "Jane Doe");
        form.set_field(ReservationField::Email, "jane@example.com");
        form.set_date(date("2025-06-01"));
        form.set_time(time("18:00"));
        form
    }

    #[test]
    fn test_available_dates_window() {
        let today = date("2025-05-20");
        let dates: Vec<NaiveDate> = available_dates_from(today).collect();

        assert_eq!(dates.len(), 14);
        assert_eq!(dates[0], date("2025-05-21"));
        assert_eq!(dates[13], date("2025-06-03"));
        assert!(dates.iter().all(|d| *d > today));
        assert!(dates.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_available_dates_cross_month_boundary() {
        let dates: Vec<NaiveDate> = available_dates_from(date("2025-01-31")).collect();
        assert_eq!(dates[0], date("2025-02-01"));
        assert_eq!(dates[13], date("2025-02-14"));
    }

    #[test]
    fn test_available_time_slots() {
        let slots: Vec<String> = available_time_slots()
            .map(|t| t.format("%H:%M").to_string())
            .collect();

        assert_eq!(slots.len(), 11);
        assert_eq!(slots.first().map(String::as_str), Some("17:00"));
        assert_eq!(slots.last().map(String::as_str), Some("22:00"));
        assert!(slots.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_date_and_time_compose_commutatively() {
        let today = date("2025-05-20");

        let mut date_first = ReservationForm::new();
        date_first.set_date(date("2025-06-01"));
        date_first.set_time_from(time("19:30"), today);

        let mut time_first = ReservationForm::new();
        time_first.set_time_from(time("19:30"), today);
        time_first.set_date(date("2025-06-01"));

        assert_eq!(
            date_first.request().time_slot,
            TimeSlot::new("2025-06-01T19:30")
        );
        assert_eq!(date_first.request().time_slot, time_first.request().time_slot);
    }

    #[test]
    fn test_time_alone_falls_back_to_first_offered_date() {
        let mut form = ReservationForm::new();
        form.set_time_from(time("20:00"), date("2025-05-20"));
        assert_eq!(form.request().time_slot, TimeSlot::new("2025-05-21T20:00"));
    }

    #[tokio::test]
    async fn test_missing_name_never_calls_service() {
        let service = MockService::new(MockOutcome::Confirmed("unused"));
        let mut form = filled_form();
        form.set_field(ReservationField::Name, "");

        form.submit(&service).await;

        assert_eq!(service.calls(), 0);
        let message = form.message().unwrap();
        assert_eq!(message.text, MSG_MISSING_FIELDS);
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_empty_time_slot_never_calls_service() {
        let service = MockService::new(MockOutcome::Confirmed("unused"));
        let mut form = ReservationForm::new();
        form.set_field(ReservationField::Name, "Jane Doe");
        form.set_field(ReservationField::Email, "jane@example.com");

        form.submit(&service).await;

        assert_eq!(service.calls(), 0);
        assert_eq!(form.message().unwrap().text, MSG_MISSING_FIELDS);
    }

    #[tokio::test]
    async fn test_confirmed_reservation_resets_fields() {
        let service = MockService::new(MockOutcome::Confirmed("Reservation confirmed"));
        let mut form = filled_form();

        form.submit(&service).await;

        assert_eq!(service.calls(), 1);
        let message = form.message().unwrap();
        assert_eq!(message.kind, MessageKind::Success);
        assert_eq!(message.text, "Reservation confirmed");
        assert_eq!(form.request(), &ReservationRequest::default());
        assert_eq!(form.request().guests, GuestCount::Seated(2));
    }

    #[tokio::test]
    async fn test_rejected_reservation_keeps_fields() {
        let service = MockService::new(MockOutcome::Rejected("Time slot full"));
        let mut form = filled_form();

        form.submit(&service).await;

        let message = form.message().unwrap();
        assert_eq!(message.kind, MessageKind::Error);
        assert_eq!(message.text, "Error: Time slot full");
        assert_eq!(form.request().name, "Jane Doe");
        assert_eq!(
            form.request().time_slot,
            TimeSlot::new("2025-06-01T18:00")
        );
    }

    #[tokio::test]
    async fn test_unreachable_service_shows_fallback() {
        let service = MockService::new(MockOutcome::Unreachable);
        let mut form = filled_form();

        form.submit(&service).await;

        let message = form.message().unwrap();
        assert_eq!(message.kind, MessageKind::Error);
        assert_eq!(message.text, MSG_SERVICE_DOWN);
        assert_eq!(form.request().name, "Jane Doe");
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_begin_submit_guards_against_double_submit() {
        let mut form = filled_form();

        assert!(form.begin_submit().is_some());
        assert!(form.is_submitting());
        assert!(form.begin_submit().is_none());
    }
}
