//! Deposit allocation module - splits deposits across portfolios by plan.

mod allocation_model;
mod allocation_service;

pub use allocation_model::*;
pub use allocation_service::*;
