//! Core rules of a property-rental client: booking lifecycle buckets, listing search, and
//! stay request validation, plus the configuration, telemetry and error plumbing shared by
//! the command line and HTTP front ends.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
