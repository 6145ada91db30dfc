//! Allocation result models.

use serde::{Deserialize, Serialize};

use crate::plans::PlanType;
use crate::utils::ratio_utils::{sum_amounts, PortfolioAmounts};

/// What a single plan's pot absorbed during one allocation run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanFill {
    pub plan_type: PlanType,
    /// Amount placed in each of the plan's portfolios
    pub filled: PortfolioAmounts,
    /// Sum of `filled`
    pub absorbed: f64,
    /// Part of the offered amount that did not fit in the pot
    pub excess: f64,
}

/// Full outcome of allocating a set of deposits.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DepositAllocationResult {
    /// Sum of every deposit amount
    pub total_deposited: f64,
    /// Final amount per portfolio across all plans
    pub allocations: PortfolioAmounts,
    /// One entry per plan that was funded, in funding order
    pub plan_fills: Vec<PlanFill>,
    /// Amount left once every plan was full, spread by the last plan's weights
    pub remainder: f64,
}

impl DepositAllocationResult {
    /// Sum of all portfolio allocations.
    pub fn total_allocated(&self) -> f64 {
        sum_amounts(&self.allocations)
    }

    /// Deposited money that did not land in any portfolio.
    ///
    /// Non-zero only when there were no plans, or when the remainder had to
    /// be spread over a plan whose weights are all zero.
    pub fn unallocated(&self) -> f64 {
        self.total_deposited - self.total_allocated()
    }
}
