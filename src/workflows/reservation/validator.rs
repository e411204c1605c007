use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::workflows::dates::midnight;

/// Outcome of checking one proposed stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationVerdict {
    Valid,
    /// Check-out is not after check-in.
    InvalidDateRange,
    /// Check-in falls before today.
    PastDate,
}

impl ValidationVerdict {
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Form message shown for a failing verdict.
    pub const fn message(self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::InvalidDateRange => Some("Check-out date must be after check-in date."),
            Self::PastDate => Some("Check-in date cannot be in the past."),
        }
    }
}

/// Cross-field check for a stay request.
///
/// Nothing is checked until both dates are present; a missing date is reported by the form
/// layer instead. The range check runs first, so a reversed range masks a past check-in.
pub fn validate(
    checkin: Option<NaiveDateTime>,
    checkout: Option<NaiveDateTime>,
    today: NaiveDateTime,
) -> ValidationVerdict {
    let (Some(checkin), Some(checkout)) = (checkin, checkout) else {
        return ValidationVerdict::Valid;
    };

    if checkout <= checkin {
        return ValidationVerdict::InvalidDateRange;
    }

    if checkin < midnight(today.date()) {
        return ValidationVerdict::PastDate;
    }

    ValidationVerdict::Valid
}

/// [`validate`] for date-only inputs, each taken at midnight.
pub fn validate_dates(
    checkin: Option<NaiveDate>,
    checkout: Option<NaiveDate>,
    today: NaiveDate,
) -> ValidationVerdict {
    validate(checkin.map(midnight), checkout.map(midnight), midnight(today))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).expect("valid date")
    }

    fn day(offset: i64) -> Option<NaiveDate> {
        Some(today() + Duration::days(offset))
    }

    #[test]
    fn missing_dates_are_left_to_the_form() {
        assert_eq!(validate_dates(None, day(2), today()), ValidationVerdict::Valid);
        assert_eq!(validate_dates(day(-5), None, today()), ValidationVerdict::Valid);
    }

    #[test]
    fn same_day_checkout_is_an_invalid_range() {
        assert_eq!(
            validate_dates(day(3), day(3), today()),
            ValidationVerdict::InvalidDateRange
        );
    }

    #[test]
    fn range_error_masks_past_checkin() {
        assert_eq!(
            validate_dates(day(-2), day(-4), today()),
            ValidationVerdict::InvalidDateRange
        );
    }

    #[test]
    fn checkin_today_is_valid_even_late_in_the_day() {
        let now = midnight(today()) + Duration::hours(22);
        let verdict = validate(
            Some(midnight(today())),
            Some(midnight(today()) + Duration::days(1)),
            now,
        );
        assert_eq!(verdict, ValidationVerdict::Valid);
    }

    #[test]
    fn yesterday_checkin_is_past() {
        let verdict = validate_dates(day(-1), day(2), today());
        assert_eq!(verdict, ValidationVerdict::PastDate);
        assert_eq!(verdict.message(), Some("Check-in date cannot be in the past."));
    }
}
