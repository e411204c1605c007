use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{Booking, BookingId, BookingStatus};

/// Temporal group a booking falls into relative to a reference day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingBucket {
    Upcoming,
    Current,
    Past,
}

impl BookingBucket {
    pub const fn ordered() -> [Self; 3] {
        [Self::Upcoming, Self::Current, Self::Past]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::Current => "Current",
            Self::Past => "Past",
        }
    }

    /// Place one booking. Dates are already day-granular, so `today` is compared as a date.
    pub fn of(booking: &Booking, today: NaiveDate) -> Self {
        if !booking.booking_status.is_live() {
            return Self::Past;
        }

        if booking.checkin_date() > today {
            Self::Upcoming
        } else if booking.checkout_date() >= today {
            Self::Current
        } else {
            Self::Past
        }
    }
}

/// A user's bookings partitioned into upcoming, current and past stays.
///
/// Upcoming and current stays are ordered by earliest check-in; past stays by most recent
/// check-in. Bookings sharing a check-in date keep their input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BookingSchedule {
    pub upcoming: Vec<Booking>,
    pub current: Vec<Booking>,
    pub past: Vec<Booking>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BucketCounts {
    pub upcoming: usize,
    pub current: usize,
    pub past: usize,
}

impl BookingSchedule {
    pub fn classify(bookings: &[Booking], today: NaiveDate) -> Self {
        let mut schedule = Self::default();

        for booking in bookings {
            let target = match BookingBucket::of(booking, today) {
                BookingBucket::Upcoming => &mut schedule.upcoming,
                BookingBucket::Current => &mut schedule.current,
                BookingBucket::Past => &mut schedule.past,
            };
            target.push(booking.clone());
        }

        // `sort_by` is stable, which keeps equal check-in dates in input order.
        schedule.upcoming.sort_by_key(Booking::checkin_date);
        schedule.current.sort_by_key(Booking::checkin_date);
        schedule
            .past
            .sort_by(|a, b| b.checkin_date().cmp(&a.checkin_date()));

        schedule
    }

    pub fn bucket(&self, bucket: BookingBucket) -> &[Booking] {
        match bucket {
            BookingBucket::Upcoming => &self.upcoming,
            BookingBucket::Current => &self.current,
            BookingBucket::Past => &self.past,
        }
    }

    pub fn counts(&self) -> BucketCounts {
        BucketCounts {
            upcoming: self.upcoming.len(),
            current: self.current.len(),
            past: self.past.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.upcoming.len() + self.current.len() + self.past.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Shorthand for [`BookingSchedule::classify`].
pub fn classify(bookings: &[Booking], today: NaiveDate) -> BookingSchedule {
    BookingSchedule::classify(bookings, today)
}

/// Whether a stay can still be changed or cancelled by the guest.
pub fn is_actionable(booking: &Booking, today: NaiveDate) -> bool {
    booking.booking_status == BookingStatus::Confirmed
        && booking.checkin_date() > today
        && booking.checkout_date() > today
}

pub fn find_booking(bookings: &[Booking], booking_id: BookingId) -> Option<&Booking> {
    bookings
        .iter()
        .find(|booking| booking.booking_id == booking_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::bookings::domain::UserId;
    use crate::workflows::dates::midnight;
    use crate::workflows::search::domain::PropertyId;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid date")
    }

    fn booking(id: u64, status: BookingStatus, checkin: i64, checkout: i64) -> Booking {
        Booking {
            booking_id: BookingId(id),
            property_id: PropertyId(100 + id),
            user_id: UserId(1),
            checkin_at: midnight(today() + Duration::days(checkin)),
            checkout_at: midnight(today() + Duration::days(checkout)),
            booking_status: status,
            payment_status: false,
            property_name: format!("Property {id}"),
            property_image: String::new(),
            city: "Goa".to_string(),
            username: "guest".to_string(),
            has_extra_cot: false,
            has_deep_clean: false,
        }
    }

    fn ids(bookings: &[Booking]) -> Vec<u64> {
        bookings.iter().map(|booking| booking.booking_id.0).collect()
    }

    #[test]
    fn checkout_today_is_still_current() {
        let stay = booking(1, BookingStatus::Pending, -3, 0);
        assert_eq!(BookingBucket::of(&stay, today()), BookingBucket::Current);
    }

    #[test]
    fn checkin_today_is_current_not_upcoming() {
        let stay = booking(1, BookingStatus::Confirmed, 0, 2);
        assert_eq!(BookingBucket::of(&stay, today()), BookingBucket::Current);
    }

    #[test]
    fn non_live_statuses_are_past_regardless_of_dates() {
        for status in [
            BookingStatus::Cancelled,
            BookingStatus::Completed,
            BookingStatus::Other("REFUNDED".to_string()),
        ] {
            let stay = booking(1, status, 10, 12);
            assert_eq!(BookingBucket::of(&stay, today()), BookingBucket::Past);
        }
    }

    #[test]
    fn lowercase_status_codes_are_not_live() {
        let payload = serde_json::json!({
            "bookingId": 4,
            "propertyId": 2,
            "userId": 1,
            "checkinDate": "2025-07-01",
            "checkoutDate": "2025-07-03",
            "isBookingStatus": "confirmed"
        });
        let stay: Booking = serde_json::from_value(payload).expect("decodes");

        assert_eq!(BookingBucket::of(&stay, today()), BookingBucket::Past);
    }

    #[test]
    fn time_of_day_does_not_move_a_booking() {
        let mut stay = booking(1, BookingStatus::Confirmed, 0, 2);
        stay.checkin_at += Duration::hours(15);
        assert_eq!(BookingBucket::of(&stay, today()), BookingBucket::Current);

        let mut leaving = booking(2, BookingStatus::Confirmed, -2, 0);
        leaving.checkout_at += Duration::hours(11);
        assert_eq!(BookingBucket::of(&leaving, today()), BookingBucket::Current);
    }

    #[test]
    fn past_is_most_recent_first_and_stable() {
        let bookings = vec![
            booking(1, BookingStatus::Completed, -30, -28),
            booking(2, BookingStatus::Cancelled, -5, -3),
            booking(3, BookingStatus::Confirmed, -30, -29),
            booking(4, BookingStatus::Confirmed, -10, -8),
        ];

        let schedule = classify(&bookings, today());

        assert_eq!(ids(&schedule.past), vec![2, 4, 1, 3]);
    }

    #[test]
    fn bucket_lookup_matches_fields() {
        let bookings = vec![
            booking(1, BookingStatus::Confirmed, 4, 6),
            booking(2, BookingStatus::Confirmed, -1, 1),
        ];
        let schedule = classify(&bookings, today());

        assert_eq!(ids(schedule.bucket(BookingBucket::Upcoming)), vec![1]);
        assert_eq!(ids(schedule.bucket(BookingBucket::Current)), vec![2]);
        assert!(schedule.bucket(BookingBucket::Past).is_empty());
        assert_eq!(
            schedule.counts(),
            BucketCounts {
                upcoming: 1,
                current: 1,
                past: 0
            }
        );
    }

    #[test]
    fn only_future_confirmed_stays_are_actionable() {
        assert!(is_actionable(
            &booking(1, BookingStatus::Confirmed, 2, 4),
            today()
        ));
        assert!(!is_actionable(
            &booking(2, BookingStatus::Pending, 2, 4),
            today()
        ));
        assert!(!is_actionable(
            &booking(3, BookingStatus::Confirmed, 0, 4),
            today()
        ));
    }

    #[test]
    fn finds_booking_by_id() {
        let bookings = vec![
            booking(1, BookingStatus::Confirmed, 2, 4),
            booking(9, BookingStatus::Pending, 5, 6),
        ];
        let found = find_booking(&bookings, BookingId(9)).expect("booking present");
        assert_eq!(found.booking_status, BookingStatus::Pending);
        assert!(find_booking(&bookings, BookingId(3)).is_none());
    }
}
