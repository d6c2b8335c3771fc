use super::NationalId;

/// Branch code stamped on accounts when none is configured.
/// There is no multi-branch logic; the code is a fixed tag.
pub const DEFAULT_BRANCH: &str = "0001";

/// A bank account. Accounts are append-only: never mutated or deleted.
/// Numbers are assigned sequentially from 1, and a number is only consumed
/// when the account is actually created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub branch: String,
    pub number: u32,
    /// National ID of the owning user. Resolved against the user registry.
    pub holder: NationalId,
}

impl Account {
    pub fn new(branch: impl Into<String>, number: u32, holder: NationalId) -> Self {
        Self {
            branch: branch.into(),
            number,
            holder,
        }
    }
}
