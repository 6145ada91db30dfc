//! Deposit domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Domain model representing a deposit made by a user.
///
/// Only `amount` takes part in allocation. The amount is not validated, so a
/// negative value flows through the allocation math as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Deposit {
    pub id: String,
    pub amount: f64,
    pub reference_code: String,
    pub deposited_at: NaiveDateTime,
}

/// Input model for recording a new deposit
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewDeposit {
    pub id: Option<String>,
    pub amount: f64,
    pub reference_code: String,
    pub deposited_at: NaiveDateTime,
}

impl From<NewDeposit> for Deposit {
    fn from(new_deposit: NewDeposit) -> Self {
        Deposit {
            id: new_deposit
                .id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            amount: new_deposit.amount,
            reference_code: new_deposit.reference_code,
            deposited_at: new_deposit.deposited_at,
        }
    }
}
