//! Deposit pots - capacity-tracked, per-plan allocation state.

mod pots_model;

pub use pots_model::DepositPot;
