//! Booking lifecycle classification for a guest's stays.

mod classifier;
pub mod domain;

pub use classifier::{
    classify, find_booking, is_actionable, BookingBucket, BookingSchedule, BucketCounts,
};
pub use domain::{Booking, BookingId, BookingStatus, UserId};
