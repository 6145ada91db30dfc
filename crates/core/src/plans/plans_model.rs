//! Deposit plan domain models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{PLAN_TYPE_MONTHLY, PLAN_TYPE_ONE_TIME};
use crate::errors::{Error, Result, ValidationError};
use crate::utils::ratio_utils::{allocation_ratios, sum_amounts, PortfolioAmounts};

/// Kind of deposit plan. Determines the order in which plans are funded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanType {
    /// Funded first
    OneTime,
    /// Funded after every one-time plan
    Monthly,
}

impl PlanType {
    /// Funding priority rank; lower ranks are funded first.
    pub fn priority(&self) -> u8 {
        match self {
            PlanType::OneTime => 0,
            PlanType::Monthly => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::OneTime => PLAN_TYPE_ONE_TIME,
            PlanType::Monthly => PLAN_TYPE_MONTHLY,
        }
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            PLAN_TYPE_ONE_TIME => Ok(PlanType::OneTime),
            PLAN_TYPE_MONTHLY => Ok(PlanType::Monthly),
            other => Err(ValidationError::InvalidPlanType(other.to_string()).into()),
        }
    }
}

/// Domain model representing a user's deposit plan.
///
/// Each weight is both the monetary capacity of that portfolio within the
/// plan and its relative share when leftover money is spread out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DepositPlan {
    pub plan_type: PlanType,
    pub portfolio_allocation: PortfolioAmounts,
}

impl DepositPlan {
    pub fn new(plan_type: PlanType, portfolio_allocation: PortfolioAmounts) -> Self {
        Self {
            plan_type,
            portfolio_allocation,
        }
    }

    /// Total of all portfolio weights.
    pub fn total_allocation(&self) -> f64 {
        sum_amounts(&self.portfolio_allocation)
    }

    /// Weight of each portfolio divided by the total weight.
    /// Every ratio is 0.0 when the plan has no weight at all.
    pub fn allocation_ratio(&self) -> PortfolioAmounts {
        allocation_ratios(&self.portfolio_allocation)
    }

    /// Checks that portfolio names are non-empty and weights are finite and
    /// non-negative.
    ///
    /// Allocation never calls this; callers that load plans from outside
    /// sources decide whether to enforce it.
    pub fn validate(&self) -> Result<()> {
        for (portfolio, weight) in &self.portfolio_allocation {
            if portfolio.trim().is_empty() {
                return Err(ValidationError::EmptyPortfolioName.into());
            }
            if !weight.is_finite() || *weight < 0.0 {
                return Err(ValidationError::InvalidWeight {
                    portfolio: portfolio.clone(),
                    weight: *weight,
                }
                .into());
            }
        }
        Ok(())
    }
}
