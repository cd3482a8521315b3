//! Submission request types
//!
//! Wire bodies for the two remote-service endpoints, plus the composite
//! [`TimeSlot`] value and the [`GuestCount`] party-size type.

use chrono::{NaiveDate, NaiveTime};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Time-of-day used when a date is picked before any time: 6 PM.
pub const DEFAULT_DINING_TIME: &str = "18:00";

/// Combined reservation time slot, stored as one `YYYY-MM-DDTHH:MM` string.
///
/// The date and time sub-parts are edited by two independent selectors, so
/// each mutator recombines the new sub-part with whatever the other sub-part
/// already holds. The slot is empty until at least one sub-part is chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeSlot(String);

impl TimeSlot {
    /// Parse a combined slot string. Intended for tests and fixtures; form
    /// code goes through [`TimeSlot::with_date`] / [`TimeSlot::with_time`].
    pub fn new(slot: impl Into<String>) -> Self {
        Self(slot.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `YYYY-MM-DD` sub-part, if any sub-part has been chosen.
    pub fn date_part(&self) -> Option<&str> {
        self.0.split_once('T').map(|(date, _)| date)
    }

    /// The `HH:MM` sub-part, if any sub-part has been chosen.
    pub fn time_part(&self) -> Option<&str> {
        self.0.split_once('T').map(|(_, time)| time)
    }

    /// Recombine with a new date, retaining the previously chosen time.
    ///
    /// Falls back to [`DEFAULT_DINING_TIME`] when no time was picked yet.
    #[must_use]
    pub fn with_date(&self, date: NaiveDate) -> Self {
        let time = self
            .time_part()
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_DINING_TIME);
        Self(format!("{}T{}", date.format("%Y-%m-%d"), time))
    }

    /// Recombine with a new time, retaining the previously chosen date.
    ///
    /// Falls back to `fallback_date` (the first offered date) when no date
    /// was picked yet.
    #[must_use]
    pub fn with_time(&self, time: NaiveTime, fallback_date: NaiveDate) -> Self {
        let date = match self.date_part().filter(|d| !d.is_empty()) {
            Some(date) => date.to_string(),
            None => fallback_date.format("%Y-%m-%d").to_string(),
        };
        Self(format!("{}T{}", date, time.format("%H:%M")))
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reservation party size.
///
/// Exact counts go up to eight guests; anything larger is the `10+`
/// large-party sentinel, which the service receives as the string `"10+"`
/// rather than a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuestCount {
    /// Exactly this many guests (1..=8).
    Seated(u8),
    /// Large party, booked as "10+".
    LargeParty,
}

impl GuestCount {
    pub const MAX_SEATED: u8 = 8;

    /// All selectable party sizes, smallest first, large party last.
    pub fn options() -> impl Iterator<Item = GuestCount> {
        (1..=Self::MAX_SEATED)
            .map(GuestCount::Seated)
            .chain(std::iter::once(GuestCount::LargeParty))
    }
}

impl Default for GuestCount {
    fn default() -> Self {
        GuestCount::Seated(2)
    }
}

impl std::fmt::Display for GuestCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GuestCount::Seated(n) => write!(f, "{}", n),
            GuestCount::LargeParty => write!(f, "10+"),
        }
    }
}

impl Serialize for GuestCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            GuestCount::Seated(n) => serializer.serialize_u8(*n),
            GuestCount::LargeParty => serializer.serialize_str("10+"),
        }
    }
}

struct GuestCountVisitor;

impl Visitor<'_> for GuestCountVisitor {
    type Value = GuestCount;

    fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "a guest count between 1 and 8, or \"10+\"")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        match v {
            1..=8 => Ok(GuestCount::Seated(v as u8)),
            // The large-party select option submits a bare 10.
            10 => Ok(GuestCount::LargeParty),
            _ => Err(E::custom(format!("guest count out of range: {}", v))),
        }
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        u64::try_from(v)
            .map_err(|_| E::custom(format!("guest count out of range: {}", v)))
            .and_then(|v| self.visit_u64(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        match v {
            "10+" | "10" => Ok(GuestCount::LargeParty),
            other => other
                .parse::<u64>()
                .map_err(|_| E::custom(format!("invalid guest count: {}", other)))
                .and_then(|n| self.visit_u64(n)),
        }
    }
}

impl<'de> Deserialize<'de> for GuestCount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(GuestCountVisitor)
    }
}

/// Body for `POST /api/reservations`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReservationRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub time_slot: TimeSlot,
    pub guests: GuestCount,
    pub special_requests: String,
}

/// Body for `POST /api/newsletter`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterRequest {
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn time(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    #[test]
    fn test_time_slot_date_first_defaults_time() {
        let slot = TimeSlot::default().with_date(date("2025-06-01"));
        assert_eq!(slot.as_str(), "2025-06-01T18:00");
    }

    #[test]
    fn test_time_slot_time_first_defaults_date() {
        let slot = TimeSlot::default().with_time(time("19:30"), date("2025-06-02"));
        assert_eq!(slot.as_str(), "2025-06-02T19:30");
    }

    #[test]
    fn test_time_slot_composition_is_commutative() {
        let first = date("2025-06-02");
        let d = date("2025-06-05");
        let t = time("20:30");

        let date_then_time = TimeSlot::default().with_date(d).with_time(t, first);
        let time_then_date = TimeSlot::default().with_time(t, first).with_date(d);

        assert_eq!(date_then_time, time_then_date);
        assert_eq!(date_then_time.as_str(), "2025-06-05T20:30");
    }

    #[test]
    fn test_time_slot_edit_retains_other_part() {
        let slot = TimeSlot::new("2025-06-01T19:00");

        let redated = slot.with_date(date("2025-06-03"));
        assert_eq!(redated.as_str(), "2025-06-03T19:00");

        let retimed = slot.with_time(time("21:30"), date("2025-06-02"));
        assert_eq!(retimed.as_str(), "2025-06-01T21:30");
    }

    #[test]
    fn test_time_slot_parts_empty_until_chosen() {
        let slot = TimeSlot::default();
        assert!(slot.is_empty());
        assert_eq!(slot.date_part(), None);
        assert_eq!(slot.time_part(), None);
    }

    #[test]
    fn test_guest_count_serializes_as_number_or_sentinel() {
        assert_eq!(serde_json::to_string(&GuestCount::Seated(4)).unwrap(), "4");
        assert_eq!(
            serde_json::to_string(&GuestCount::LargeParty).unwrap(),
            "\"10+\""
        );
    }

    #[test]
    fn test_guest_count_deserializes_both_forms() {
        assert_eq!(
            serde_json::from_str::<GuestCount>("2").unwrap(),
            GuestCount::Seated(2)
        );
        assert_eq!(
            serde_json::from_str::<GuestCount>("\"10+\"").unwrap(),
            GuestCount::LargeParty
        );
        assert_eq!(
            serde_json::from_str::<GuestCount>("10").unwrap(),
            GuestCount::LargeParty
        );
        assert!(serde_json::from_str::<GuestCount>("9").is_err());
        assert!(serde_json::from_str::<GuestCount>("0").is_err());
    }

    #[test]
    fn test_guest_count_options_order() {
        let options: Vec<GuestCount> = GuestCount::options().collect();
        assert_eq!(options.len(), 9);
        assert_eq!(options[0], GuestCount::Seated(1));
        assert_eq!(options[7], GuestCount::Seated(8));
        assert_eq!(options[8], GuestCount::LargeParty);
    }

    #[test]
    fn test_reservation_request_wire_shape() {
        let request = ReservationRequest {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: String::new(),
            time_slot: TimeSlot::new("2025-06-01T18:00"),
            guests: GuestCount::default(),
            special_requests: String::new(),
        };

        let json: serde_json::Value = serde_json::to_value(&request).unwrap();
        assert_eq!(json["time_slot"], "2025-06-01T18:00");
        assert_eq!(json["guests"], 2);
        assert_eq!(json["special_requests"], "");
    }
}
