//! Deposits module - domain models for incoming money.

mod deposits_model;

pub use deposits_model::{Deposit, NewDeposit};
