use std::fmt;

use super::{Cents, format_cents};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Deposit,
    Withdrawal,
}

impl EntryKind {
    /// Label used on printed statement lines.
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::Deposit => "Depósito",
            EntryKind::Withdrawal => "Saque",
        }
    }
}

/// One line of the session statement. The amount is always positive;
/// the kind carries the sign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementEntry {
    pub kind: EntryKind,
    pub amount_cents: Cents,
}

impl StatementEntry {
    pub fn deposit(amount_cents: Cents) -> Self {
        Self {
            kind: EntryKind::Deposit,
            amount_cents,
        }
    }

    pub fn withdrawal(amount_cents: Cents) -> Self {
        Self {
            kind: EntryKind::Withdrawal,
            amount_cents,
        }
    }

    /// Signed effect of this entry on the balance.
    pub fn signed_cents(&self) -> Cents {
        match self.kind {
            EntryKind::Deposit => self.amount_cents,
            EntryKind::Withdrawal => -self.amount_cents,
        }
    }
}

impl fmt::Display for StatementEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: R$ {}",
            self.kind.label(),
            format_cents(self.amount_cents)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_display() {
        assert_eq!(
            StatementEntry::deposit(10000).to_string(),
            "Depósito: R$ 100.00"
        );
        assert_eq!(
            StatementEntry::withdrawal(5000).to_string(),
            "Saque: R$ 50.00"
        );
    }

    #[test]
    fn test_signed_cents() {
        assert_eq!(StatementEntry::deposit(1234).signed_cents(), 1234);
        assert_eq!(StatementEntry::withdrawal(1234).signed_cents(), -1234);
    }
}
