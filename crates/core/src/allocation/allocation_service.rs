use log::{debug, warn};

use crate::deposits::Deposit;
use crate::plans::DepositPlan;
use crate::pots::DepositPot;
use crate::utils::ratio_utils::{distribute_by_ratio, merge_amounts, PortfolioAmounts};

use super::allocation_model::{DepositAllocationResult, PlanFill};

/// Allocates deposits across portfolios following a user's deposit plans.
///
/// Plans are funded in priority order (every one-time plan before any
/// monthly plan, keeping the given order within a type). Each plan gets a
/// fresh [`DepositPot`] that is offered everything still unallocated. Money
/// left after every pot is full is spread by the weight ratios of the last
/// plan in funding order.
///
/// The allocator holds no state; one instance can serve any number of
/// calls, from any thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepositAllocator;

impl DepositAllocator {
    pub fn new() -> Self {
        DepositAllocator
    }

    /// Returns the amount allocated to each portfolio.
    ///
    /// Empty `plans` or empty `deposits` yield an empty map.
    pub fn execute(&self, plans: &[DepositPlan], deposits: &[Deposit]) -> PortfolioAmounts {
        self.execute_with_breakdown(plans, deposits).allocations
    }

    /// Same as [`execute`](Self::execute), also reporting what each plan
    /// absorbed and what was left for the fallback distribution.
    pub fn execute_with_breakdown(
        &self,
        plans: &[DepositPlan],
        deposits: &[Deposit],
    ) -> DepositAllocationResult {
        let total_deposited: f64 = deposits.iter().map(|deposit| deposit.amount).sum();

        if plans.is_empty() || deposits.is_empty() {
            debug!(
                "Nothing to allocate: {} plans, {} deposits",
                plans.len(),
                deposits.len()
            );
            return DepositAllocationResult {
                total_deposited,
                ..Default::default()
            };
        }

        let ordered_plans = Self::order_by_priority(plans);

        let mut allocations = PortfolioAmounts::new();
        let mut plan_fills = Vec::with_capacity(ordered_plans.len());
        let mut remaining = total_deposited;

        for plan in &ordered_plans {
            let mut pot = DepositPot::from_plan(plan);
            let excess = pot.allocate(remaining);
            let absorbed = pot.total_allocation_amount();
            remaining -= absorbed;

            debug!(
                "{} plan absorbed {} of its {} capacity, {} left",
                plan.plan_type,
                absorbed,
                pot.total_allocation_limit(),
                remaining
            );

            let filled = pot.into_filled();
            merge_amounts(&mut allocations, &filled);
            plan_fills.push(PlanFill {
                plan_type: plan.plan_type,
                filled,
                absorbed,
                excess,
            });

            if remaining <= 0.0 {
                break;
            }
        }

        let mut remainder = 0.0;
        if remaining > 0.0 {
            if let Some(fallback_plan) = ordered_plans.last() {
                if fallback_plan.total_allocation() == 0.0 {
                    warn!(
                        "All plans are full and the {} fallback plan has no weights; {} stays unallocated",
                        fallback_plan.plan_type, remaining
                    );
                } else {
                    debug!(
                        "Spreading {} by {} plan weights",
                        remaining, fallback_plan.plan_type
                    );
                }
                distribute_by_ratio(
                    &mut allocations,
                    &fallback_plan.allocation_ratio(),
                    remaining,
                );
                remainder = remaining;
            }
        }

        DepositAllocationResult {
            total_deposited,
            allocations,
            plan_fills,
            remainder,
        }
    }

    /// Stable ordering of plans by funding priority. The caller's slice is
    /// left untouched.
    fn order_by_priority(plans: &[DepositPlan]) -> Vec<&DepositPlan> {
        let mut ordered: Vec<&DepositPlan> = plans.iter().collect();
        ordered.sort_by_key(|plan| plan.plan_type.priority());
        ordered
    }
}
