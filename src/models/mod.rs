//! Core data models for the Ferie Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod balance_report;
mod leave_entry;

pub use balance_report::{BalanceReport, DayEquivalents, EarnedHours, SimulationResult};
pub use leave_entry::{LeaveEntry, LeaveKind};
