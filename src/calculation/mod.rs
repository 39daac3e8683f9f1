//! Calculation logic for the Ferie Engine.
//!
//! This module contains the calendar primitives, proportional accrual by
//! calendar month, ferie-first usage allocation, balance report assembly with
//! request simulation, and Italian public holiday generation.

mod accrual;
mod allocation;
mod balance;
mod calendar;
mod holidays;

pub use accrual::{AccrualSegment, accrual_segments, accrue_hours_between};
pub use allocation::{AllocationResult, allocate_usage};
pub use balance::{calculate_balance, earned_as_of, hours_to_days, simulate_request};
pub use calendar::{
    DATE_FORMAT, MonthStarts, add_days, days_in_month, diff_days_inclusive, format_date,
    is_leap_year, iterate_month_starts, month_end, month_start, next_month_start, parse_date,
    working_days_in_range,
};
pub use holidays::{Province, easter_sunday, get_holidays_for_year};
