use thiserror::Error;

use crate::domain::{Cents, NationalId, format_cents};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error(
        "Insufficient funds: balance is R$ {}, requested R$ {}",
        format_cents(*.balance),
        format_cents(*.requested)
    )]
    InsufficientFunds { balance: Cents, requested: Cents },

    #[error(
        "Withdrawal of R$ {} exceeds the per-withdrawal limit of R$ {}",
        format_cents(*.requested),
        format_cents(*.limit)
    )]
    WithdrawalLimitExceeded { requested: Cents, limit: Cents },

    #[error("Maximum number of withdrawals reached ({max})")]
    WithdrawalQuotaReached { max: u32 },

    #[error("No user found with national ID {0}")]
    UserNotFound(NationalId),

    #[error("A user with national ID {0} already exists")]
    UserAlreadyExists(NationalId),
}
