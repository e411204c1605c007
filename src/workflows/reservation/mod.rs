//! Stay request checks: date-range validation, night counts and booking drafts.

mod draft;
mod pricing;
mod validator;

pub use draft::{BookingDraft, BookingDraftError, BookingRequest};
pub use pricing::{nights, total_price, Quote};
pub use validator::{validate, validate_dates, ValidationVerdict};
