//! Italian public holiday generation.
//!
//! This module produces the national holiday calendar for a year, including
//! the moving Easter Sunday and Easter Monday (Pasquetta), plus the patron
//! saint's day for provinces that observe one.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::LeaveEntry;

use super::calendar::add_days;

/// Province selector for holiday generation.
///
/// Only Milan adds a local holiday; every other code is treated as the
/// national calendar.
///
/// # Example
///
/// ```
/// use ferie_engine::calculation::Province;
///
/// assert_eq!(Province::from_code("MI"), Province::Milano);
/// assert_eq!(Province::from_code("IT"), Province::National);
/// assert_eq!(Province::from_code("RM"), Province::National);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Province {
    /// Milan: national holidays plus Sant'Ambrogio (Dec 7).
    #[default]
    Milano,
    /// National calendar only.
    National,
}

impl Province {
    /// Maps a province code to a selector.
    pub fn from_code(code: &str) -> Self {
        match code {
            "MI" => Province::Milano,
            _ => Province::National,
        }
    }

    /// Canonical code for this selector.
    pub fn code(&self) -> &'static str {
        match self {
            Province::Milano => "MI",
            Province::National => "IT",
        }
    }
}

impl fmt::Display for Province {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl From<String> for Province {
    fn from(code: String) -> Self {
        Province::from_code(&code)
    }
}

impl From<Province> for String {
    fn from(province: Province) -> Self {
        province.code().to_string()
    }
}

/// Fixed-date national holidays as (month, day, note).
const NATIONAL_HOLIDAYS: [(u32, u32, &str); 10] = [
    (1, 1, "Capodanno"),
    (1, 6, "Epifania"),
    (4, 25, "Liberazione"),
    (5, 1, "Festa dei Lavoratori"),
    (6, 2, "Festa della Repubblica"),
    (8, 15, "Ferragosto"),
    (11, 1, "Ognissanti"),
    (12, 8, "Immacolata Concezione"),
    (12, 25, "Natale"),
    (12, 26, "Santo Stefano"),
];

/// Milan's patron saint.
const SANT_AMBROGIO: (u32, u32, &str) = (12, 7, "Sant'Ambrogio");

/// Computes Western Easter Sunday with the anonymous Gregorian algorithm.
///
/// Fails with [`EngineError::YearOutOfRange`] for years chrono cannot
/// represent.
///
/// # Example
///
/// ```
/// use ferie_engine::calculation::{easter_sunday, format_date};
///
/// assert_eq!(format_date(easter_sunday(2024).unwrap()), "2024-03-31");
/// assert_eq!(format_date(easter_sunday(2025).unwrap()), "2025-04-20");
/// assert!(easter_sunday(300_000).is_err());
/// ```
pub fn easter_sunday(year: i32) -> EngineResult<NaiveDate> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c.div_euclid(4);
    let k = c.rem_euclid(4);
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l).div_euclid(451);
    let n = h + l - 7 * m + 114;
    let month = n.div_euclid(31) as u32;
    let day = (n.rem_euclid(31) + 1) as u32;

    date_in_year(year, month, day)
}

fn date_in_year(year: i32, month: u32, day: u32) -> EngineResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(EngineError::YearOutOfRange { year })
}

/// Returns the public holidays of `year` for `province`, sorted by date.
///
/// The set is the ten fixed national holidays, Sant'Ambrogio for Milan,
/// Easter Sunday (Pasqua) and Easter Monday (Pasquetta). Every record has zero
/// hours and is tagged as a holiday. Records that share a date are all kept.
///
/// Years outside chrono's calendar range fail with
/// [`EngineError::YearOutOfRange`].
///
/// # Example
///
/// ```
/// use ferie_engine::calculation::{Province, get_holidays_for_year};
///
/// let holidays = get_holidays_for_year(2025, Province::Milano).unwrap();
/// assert_eq!(holidays.len(), 13);
/// assert!(holidays.iter().any(|h| h.note == "Sant'Ambrogio"));
///
/// let national = get_holidays_for_year(2025, Province::National).unwrap();
/// assert_eq!(national.len(), 12);
/// ```
pub fn get_holidays_for_year(year: i32, province: Province) -> EngineResult<Vec<LeaveEntry>> {
    let local = match province {
        Province::Milano => Some(SANT_AMBROGIO),
        Province::National => None,
    };

    let mut holidays: Vec<LeaveEntry> = NATIONAL_HOLIDAYS
        .iter()
        .chain(local.iter())
        .map(|&(month, day, note)| {
            date_in_year(year, month, day).map(|date| LeaveEntry::holiday(date, note))
        })
        .collect::<EngineResult<Vec<_>>>()?;

    let easter = easter_sunday(year)?;
    holidays.push(LeaveEntry::holiday(easter, "Pasqua"));
    holidays.push(LeaveEntry::holiday(add_days(easter, 1), "Pasquetta"));

    holidays.sort_by_key(|h| h.date);
    Ok(holidays)
}
