//! Deposit Allocator Core - domain entities and the allocation algorithm.
//!
//! This crate splits incoming deposits across a user's portfolios according
//! to prioritized deposit plans. It is pure computation: no storage, no I/O,
//! no shared state between calls.

pub mod allocation;
pub mod constants;
pub mod deposits;
pub mod errors;
pub mod plans;
pub mod pots;
pub mod utils;

pub use allocation::{DepositAllocationResult, DepositAllocator, PlanFill};
pub use deposits::{Deposit, NewDeposit};
pub use plans::{DepositPlan, PlanType};
pub use pots::DepositPot;
pub use utils::ratio_utils::PortfolioAmounts;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
