//! Allocation input documents.

use std::fs;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use deposit_allocator_core::errors::{Error, Result};
use deposit_allocator_core::{Deposit, DepositPlan, NewDeposit, PlanType, PortfolioAmounts};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Plans and deposits to allocate, as read from a JSON document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationInput {
    pub plans: Vec<DepositPlan>,
    pub deposits: Vec<NewDeposit>,
}

impl AllocationInput {
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// A one-time plan that absorbs most of two deposits and a monthly plan
    /// that takes the rest.
    pub fn sample() -> Result<Self> {
        let deposited_at = sample_deposited_at()
            .ok_or_else(|| Error::Unexpected("invalid sample deposit date".to_string()))?;

        let plans = vec![
            DepositPlan::new(
                PlanType::OneTime,
                weights(&[("High risk", 10000.0), ("Retirement", 500.0)]),
            ),
            DepositPlan::new(
                PlanType::Monthly,
                weights(&[("Medium risk", 300.0), ("Retirement", 100.0)]),
            ),
        ];
        let deposits = vec![
            NewDeposit {
                id: Some("deposit1".to_string()),
                amount: 10000.0,
                reference_code: "ref123".to_string(),
                deposited_at,
            },
            NewDeposit {
                id: Some("deposit2".to_string()),
                amount: 600.0,
                reference_code: "ref123".to_string(),
                deposited_at,
            },
        ];

        Ok(AllocationInput { plans, deposits })
    }

    /// Rejects plans with blank names or invalid weights. Negative deposits
    /// are allowed and only logged.
    pub fn validate(&self) -> Result<()> {
        for plan in &self.plans {
            plan.validate()?;
        }
        for deposit in self.deposits.iter().filter(|d| d.amount < 0.0) {
            warn!(
                "Deposit {} has negative amount {}",
                deposit.reference_code, deposit.amount
            );
        }
        Ok(())
    }

    pub fn into_parts(self) -> (Vec<DepositPlan>, Vec<Deposit>) {
        let deposits = self.deposits.into_iter().map(Deposit::from).collect();
        (self.plans, deposits)
    }
}

fn sample_deposited_at() -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(2025, 7, 31)?.and_hms_opt(0, 0, 0)
}

fn weights(entries: &[(&str, f64)]) -> PortfolioAmounts {
    entries
        .iter()
        .map(|(name, weight)| (name.to_string(), *weight))
        .collect()
}
