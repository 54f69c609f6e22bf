//! CLI command implementations.
//!
//! Each command loads the data file, works on the [`Dataset`](sales_tracker_core::Dataset)
//! and writes human-readable output to the given writer.

pub mod attendant;
pub mod login;
pub mod report;
pub mod sale;
pub mod seed;
