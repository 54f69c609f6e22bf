//! Sales Tracker Core - records and reporting engine.
//!
//! This crate provides everything the sales tracker computes:
//! - account and sale records, and the values they are built from
//! - the [`RecordStore`] seam and the in-memory [`Dataset`]
//! - the reporting engine: filtering, monthly breakdown, attendant
//!   performance and commission
//!
//! # Architecture
//!
//! The core crate performs no I/O. Callers load records from wherever they
//! are persisted and pass them in; every report is a pure function of its
//! inputs and can be recomputed on each change.
//!
//! # Modules
//!
//! - [`types`] - Newtypes for keys, emails, roles, payment methods and dates
//! - [`models`] - `User` and `Sale` records and sale entry validation
//! - [`store`] - `RecordStore` trait and `Dataset`
//! - [`report`] - Filter engine, aggregators and report builder

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
pub mod report;
pub mod store;
pub mod types;

pub use models::{Sale, SaleDraft, User, ValidationError};
pub use report::{FilterSpec, Report, ReportBuilder};
pub use store::{Dataset, RecordStore, StoreError};
pub use types::*;
