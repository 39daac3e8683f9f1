//! Leave entry model and related types.
//!
//! This module defines the [`LeaveEntry`] struct and [`LeaveKind`] tag used both
//! for recorded absences and for public holiday records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Distinguishes a vacation-type absence from a public holiday marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveKind {
    /// Hours drawn from the ferie/PAR pools.
    Ferie,
    /// A non-working public holiday (zero hours).
    Festa,
}

/// A single leave-usage entry.
///
/// Entries are supplied by the caller and only read by the engine. Hours are
/// not validated: negative values propagate arithmetically into the balance.
///
/// # Example
///
/// ```
/// use ferie_engine::models::{LeaveEntry, LeaveKind};
/// use chrono::NaiveDate;
///
/// let entry = LeaveEntry::new(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(), 8.0, "Dentist");
/// assert_eq!(entry.kind, Some(LeaveKind::Ferie));
/// assert!(!entry.is_holiday());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveEntry {
    /// The calendar day of the absence.
    pub date: NaiveDate,
    /// Hours taken on that day.
    pub hours: f64,
    /// Free-form description.
    #[serde(default)]
    pub note: String,
    /// Optional tag; untagged entries count as ordinary leave.
    #[serde(default, alias = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<LeaveKind>,
}

impl LeaveEntry {
    /// Creates a ferie entry for the given day.
    pub fn new(date: NaiveDate, hours: f64, note: impl Into<String>) -> Self {
        Self {
            date,
            hours,
            note: note.into(),
            kind: Some(LeaveKind::Ferie),
        }
    }

    /// Creates a zero-hour holiday record.
    ///
    /// # Example
    ///
    /// ```
    /// use ferie_engine::models::LeaveEntry;
    /// use chrono::NaiveDate;
    ///
    /// let natale = LeaveEntry::holiday(NaiveDate::from_ymd_opt(2025, 12, 25).unwrap(), "Natale");
    /// assert_eq!(natale.hours, 0.0);
    /// assert!(natale.is_holiday());
    /// ```
    pub fn holiday(date: NaiveDate, note: impl Into<String>) -> Self {
        Self {
            date,
            hours: 0.0,
            note: note.into(),
            kind: Some(LeaveKind::Festa),
        }
    }

    /// Returns true if this entry marks a public holiday.
    pub fn is_holiday(&self) -> bool {
        self.kind == Some(LeaveKind::Festa)
    }
}
