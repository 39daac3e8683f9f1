//! Request types for the Ferie Engine API.
//!
//! Dates arrive as `YYYY-MM-DD` text and are parsed with
//! [`parse_date`](crate::calculation::parse_date) when a request is converted
//! into domain types, so a malformed date surfaces as
//! [`EngineError::InvalidDateFormat`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::parse_date;
use crate::config::AccrualRates;
use crate::error::{EngineError, EngineResult};
use crate::models::{LeaveEntry, LeaveKind};

/// Request body for the `/balance` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceRequest {
    /// Reference date of the balance.
    pub as_of: String,
    /// Date accrual starts from.
    pub start: String,
    /// Leave already taken or planned.
    #[serde(default)]
    pub leaves: Vec<LeaveEntryRequest>,
    /// Optional override of the annual ferie entitlement.
    #[serde(default)]
    pub ferie_hours_per_year: Option<f64>,
    /// Optional override of the annual PAR entitlement.
    #[serde(default)]
    pub par_hours_per_year: Option<f64>,
}

/// Request body for the `/simulate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// The balance to simulate against.
    #[serde(flatten)]
    pub balance: BalanceRequest,
    /// Hours of additional leave being requested.
    pub requested_hours: f64,
}

/// Leave entry information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveEntryRequest {
    /// Day of the absence.
    pub date: String,
    /// Hours taken.
    pub hours: f64,
    /// Free-form description.
    #[serde(default)]
    pub note: String,
    /// Optional tag.
    #[serde(default, alias = "type")]
    pub kind: Option<LeaveKind>,
}

/// Query string for `/holidays/:year`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HolidaysQuery {
    /// Province code; the policy default applies when absent.
    #[serde(default)]
    pub province: Option<String>,
}

/// Query string for `/working-days`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingDaysQuery {
    /// First day of the range.
    pub start: String,
    /// Last day of the range.
    pub end: String,
}

/// A balance request with its dates parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceInput {
    /// Reference date.
    pub as_of: NaiveDate,
    /// Accrual start date.
    pub start: NaiveDate,
    /// Parsed leave entries.
    pub leaves: Vec<LeaveEntry>,
    /// Rates named by the request; unset rates fall back to the policy.
    pub rates: AccrualRates,
}

impl TryFrom<LeaveEntryRequest> for LeaveEntry {
    type Error = EngineError;

    fn try_from(req: LeaveEntryRequest) -> EngineResult<Self> {
        Ok(LeaveEntry {
            date: parse_date(&req.date)?,
            hours: req.hours,
            note: req.note,
            kind: req.kind,
        })
    }
}

impl TryFrom<BalanceRequest> for BalanceInput {
    type Error = EngineError;

    fn try_from(req: BalanceRequest) -> EngineResult<Self> {
        let leaves = req
            .leaves
            .into_iter()
            .map(LeaveEntry::try_from)
            .collect::<EngineResult<Vec<_>>>()?;

        Ok(BalanceInput {
            as_of: parse_date(&req.as_of)?,
            start: parse_date(&req.start)?,
            leaves,
            rates: AccrualRates::new(req.ferie_hours_per_year, req.par_hours_per_year),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_balance_request_converts_dates_and_leaves() {
        let req: BalanceRequest = serde_json::from_value(json!({
            "as_of": "2024-01-31",
            "start": "2024-01-01",
            "leaves": [
                {"date": "2024-01-15", "hours": 8, "note": "Test"},
                {"date": "2024-01-06", "hours": 0, "type": "festa"}
            ]
        }))
        .unwrap();

        let input = BalanceInput::try_from(req).unwrap();
        assert_eq!(input.as_of, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
        assert_eq!(input.leaves.len(), 2);
        assert_eq!(input.leaves[0].kind, None);
        assert!(input.leaves[1].is_holiday());
        assert_eq!(input.rates, AccrualRates::default());
    }

    #[test]
    fn test_bad_leave_date_is_reported() {
        let req = BalanceRequest {
            as_of: "2024-01-31".to_string(),
            start: "2024-01-01".to_string(),
            leaves: vec![LeaveEntryRequest {
                date: "15/01/2024".to_string(),
                hours: 8.0,
                note: String::new(),
                kind: None,
            }],
            ferie_hours_per_year: None,
            par_hours_per_year: None,
        };

        match BalanceInput::try_from(req) {
            Err(EngineError::InvalidDateFormat { input }) => assert_eq!(input, "15/01/2024"),
            other => panic!("Expected InvalidDateFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_simulation_request_flattens_balance_fields() {
        let req: SimulationRequest = serde_json::from_value(json!({
            "as_of": "2024-06-30",
            "start": "2024-01-01",
            "ferie_hours_per_year": 120.0,
            "requested_hours": 16
        }))
        .unwrap();

        assert_eq!(req.requested_hours, 16.0);
        assert_eq!(req.balance.ferie_hours_per_year, Some(120.0));
        assert!(req.balance.leaves.is_empty());
    }
}
