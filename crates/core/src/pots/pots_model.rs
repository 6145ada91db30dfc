//! Capacity-tracked deposit pot.

use serde::{Deserialize, Serialize};

use crate::plans::DepositPlan;
use crate::utils::ratio_utils::{allocation_ratios, sum_amounts, PortfolioAmounts};

/// Tracks how much of a plan's capacity has been filled.
///
/// `limit` holds the capacity of each portfolio and never changes. `filled`
/// grows as deposits are allocated. Only the pot's aggregate capacity is
/// clamped; individual portfolios are filled by their share of the total
/// limit and are never clamped on their own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DepositPot {
    limit: PortfolioAmounts,
    filled: PortfolioAmounts,
}

impl DepositPot {
    pub fn new(limit: PortfolioAmounts, filled: PortfolioAmounts) -> Self {
        Self { limit, filled }
    }

    /// Creates an empty pot whose limits are the plan's weights.
    pub fn from_plan(plan: &DepositPlan) -> Self {
        Self::new(plan.portfolio_allocation.clone(), PortfolioAmounts::new())
    }

    pub fn limit(&self) -> &PortfolioAmounts {
        &self.limit
    }

    pub fn filled(&self) -> &PortfolioAmounts {
        &self.filled
    }

    pub fn into_filled(self) -> PortfolioAmounts {
        self.filled
    }

    pub fn total_allocation_limit(&self) -> f64 {
        sum_amounts(&self.limit)
    }

    pub fn total_allocation_amount(&self) -> f64 {
        sum_amounts(&self.filled)
    }

    /// Share of the total limit held by each portfolio, independent of how
    /// full the pot is. All zero when the pot has no capacity.
    pub fn capacity_ratio(&self) -> PortfolioAmounts {
        allocation_ratios(&self.limit)
    }

    /// Total limit minus total filled. Negative when the pot is overfull.
    pub fn remaining_capacity(&self) -> f64 {
        self.total_allocation_limit() - self.total_allocation_amount()
    }

    pub fn is_full(&self) -> bool {
        self.remaining_capacity() <= 0.0
    }

    /// Allocates `amount` across the pot's portfolios by capacity share and
    /// returns the part that did not fit.
    ///
    /// When `amount` exceeds the remaining capacity the pot absorbs exactly
    /// the remaining capacity, which is negative for an overfull pot and
    /// drains the overfill proportionally. Negative amounts are accepted and
    /// reduce every portfolio by its share.
    pub fn allocate(&mut self, amount: f64) -> f64 {
        let remaining = self.remaining_capacity();
        let (absorbed, excess) = if amount > remaining {
            (remaining, amount - remaining)
        } else {
            (amount, 0.0)
        };

        let ratios = self.capacity_ratio();
        for portfolio in self.limit.keys() {
            let share = ratios.get(portfolio).copied().unwrap_or(0.0) * absorbed;
            *self.filled.entry(portfolio.clone()).or_insert(0.0) += share;
        }

        excess
    }
}
