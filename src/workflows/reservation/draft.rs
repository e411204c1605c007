use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::pricing::Quote;
use super::validator::{validate_dates, ValidationVerdict};
use crate::workflows::bookings::domain::UserId;
use crate::workflows::dates::midnight;
use crate::workflows::search::domain::PropertyId;

/// Payload accepted by the booking submission endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub property_id: PropertyId,
    pub user_id: UserId,
    pub checkin_date: NaiveDate,
    pub checkout_date: NaiveDate,
    pub has_extra_cot: bool,
    pub has_deep_clean: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BookingDraftError {
    #[error("Check-in Date is required.")]
    MissingCheckin,
    #[error("Check-out Date is required.")]
    MissingCheckout,
    #[error("Check-out date must be after check-in date.")]
    InvalidDateRange,
    #[error("Check-in date cannot be in the past.")]
    PastDate,
}

/// Values of the booking form while the guest is editing it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingDraft {
    pub checkin: Option<NaiveDate>,
    pub checkout: Option<NaiveDate>,
    pub has_extra_cot: bool,
    pub has_deep_clean: bool,
}

impl BookingDraft {
    pub fn new(checkin: NaiveDate, checkout: NaiveDate) -> Self {
        Self {
            checkin: Some(checkin),
            checkout: Some(checkout),
            ..Self::default()
        }
    }

    pub fn verdict(&self, today: NaiveDate) -> ValidationVerdict {
        validate_dates(self.checkin, self.checkout, today)
    }

    /// Every problem the form should display, required fields first.
    pub fn errors(&self, today: NaiveDate) -> Vec<BookingDraftError> {
        let mut errors = Vec::new();
        if self.checkin.is_none() {
            errors.push(BookingDraftError::MissingCheckin);
        }
        if self.checkout.is_none() {
            errors.push(BookingDraftError::MissingCheckout);
        }
        match self.verdict(today) {
            ValidationVerdict::Valid => {}
            ValidationVerdict::InvalidDateRange => errors.push(BookingDraftError::InvalidDateRange),
            ValidationVerdict::PastDate => errors.push(BookingDraftError::PastDate),
        }
        errors
    }

    /// Build the submission payload for `user_id`, or the first problem blocking it.
    pub fn submit(
        &self,
        property_id: PropertyId,
        user_id: UserId,
        today: NaiveDate,
    ) -> Result<BookingRequest, BookingDraftError> {
        let checkin = self.checkin.ok_or(BookingDraftError::MissingCheckin)?;
        let checkout = self.checkout.ok_or(BookingDraftError::MissingCheckout)?;

        match self.verdict(today) {
            ValidationVerdict::Valid => Ok(BookingRequest {
                property_id,
                user_id,
                checkin_date: checkin,
                checkout_date: checkout,
                has_extra_cot: self.has_extra_cot,
                has_deep_clean: self.has_deep_clean,
            }),
            ValidationVerdict::InvalidDateRange => Err(BookingDraftError::InvalidDateRange),
            ValidationVerdict::PastDate => Err(BookingDraftError::PastDate),
        }
    }

    pub fn quote(&self, price_per_day: f64) -> Option<Quote> {
        match (self.checkin, self.checkout) {
            (Some(checkin), Some(checkout)) => Some(Quote::new(
                midnight(checkin),
                midnight(checkout),
                price_per_day,
            )),
            _ => None,
        }
    }
}
