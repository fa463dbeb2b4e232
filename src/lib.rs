//! Geofence-driven work shift tracker
//!
//! This crate detects work shifts from location samples: a device that stays
//! within 200 m of the workplace for long enough starts a shift, and leaving
//! ends it. Finished shifts are floored to the hour or half hour, priced at
//! an hourly rate, kept in a repository and exported as CSV.
//!
//! The [`tracker`] module holds the dwell state machine, [`calculation`] the
//! geofence and pay arithmetic, and [`api`] serves everything over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod notify;
pub mod storage;
pub mod tracker;
