// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use caixa::application::{Session, SessionConfig};
use caixa::domain::{NationalId, User};
use chrono::NaiveDate;

/// Session with the classic defaults: limit R$ 500.00, 3 withdrawals, branch 0001.
pub fn test_session() -> Session {
    Session::default()
}

/// Session with a custom per-withdrawal limit and quota.
pub fn test_session_with(withdrawal_limit: i64, max_withdrawals: u32) -> Session {
    Session::new(SessionConfig {
        withdrawal_limit,
        max_withdrawals,
        ..SessionConfig::default()
    })
}

/// Helper to parse a YYYY-MM-DD date
pub fn parse_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

/// A registrable user with the given national ID
pub fn sample_user(national_id: NationalId) -> User {
    User::new(
        "Maria Silva",
        national_id,
        parse_date("1990-04-12"),
        "Rua das Flores 10, Centro, Salvador/BA",
    )
}
