//! Deposit plans module - plan types and target portfolio weights.

mod plans_model;

pub use plans_model::{DepositPlan, PlanType};
