//! Ferie and PAR leave balance engine
//!
//! This crate computes accrued and remaining paid-leave hours (ferie and PAR)
//! for an employee from a start date, a reference date and the leave already
//! taken, and generates the Italian public holiday calendar for a year.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
