use crate::domain::{
    Account, Cents, DEFAULT_BRANCH, NationalId, StatementEntry, User, find_user_index,
};

use super::AppError;

/// Tunable parameters of a teller session. The defaults match the classic
/// exercise: branch "0001", R$ 500.00 per withdrawal, 3 withdrawals total.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub branch: String,
    pub withdrawal_limit: Cents,
    pub max_withdrawals: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            branch: DEFAULT_BRANCH.to_string(),
            withdrawal_limit: 50_000,
            max_withdrawals: 3,
        }
    }
}

/// All mutable state of one teller run: the user registry, the account list
/// and the single implicit ledger (balance, statement, withdrawal count).
/// Everything lives in memory and dies with the session.
pub struct Session {
    config: SessionConfig,
    users: Vec<User>,
    accounts: Vec<Account>,
    balance: Cents,
    statement: Vec<StatementEntry>,
    withdrawal_count: u32,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            users: Vec::new(),
            accounts: Vec::new(),
            balance: 0,
            statement: Vec::new(),
            withdrawal_count: 0,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    // ========================
    // User registry
    // ========================

    /// Position of the user with the given national ID, if registered.
    pub fn find_user_index(&self, national_id: NationalId) -> Option<usize> {
        find_user_index(&self.users, national_id)
    }

    pub fn find_user(&self, national_id: NationalId) -> Option<&User> {
        self.find_user_index(national_id).map(|idx| &self.users[idx])
    }

    /// Register a new user. National IDs are unique; a duplicate is rejected
    /// and the registry is left untouched.
    pub fn register_user(&mut self, user: User) -> Result<(), AppError> {
        if self.find_user_index(user.national_id).is_some() {
            return Err(AppError::UserAlreadyExists(user.national_id));
        }
        self.users.push(user);
        Ok(())
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    // ========================
    // Account service
    // ========================

    /// Open an account for a registered user. The next sequential number
    /// (starting at 1) is consumed only when the lookup succeeds, so the
    /// numbering stays gapless.
    pub fn open_account(&mut self, national_id: NationalId) -> Result<Account, AppError> {
        if self.find_user_index(national_id).is_none() {
            return Err(AppError::UserNotFound(national_id));
        }

        let number = self.accounts.len() as u32 + 1;
        let account = Account::new(self.config.branch.clone(), number, national_id);
        self.accounts.push(account.clone());
        Ok(account)
    }

    /// Accounts in creation order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    // ========================
    // Transaction processor
    // ========================

    /// Credit the balance and log a statement entry. Returns the new balance.
    pub fn deposit(&mut self, amount: Cents) -> Result<Cents, AppError> {
        if amount <= 0 {
            return Err(AppError::InvalidAmount("Amount must be positive".to_string()));
        }

        self.balance += amount;
        self.statement.push(StatementEntry::deposit(amount));
        Ok(self.balance)
    }

    /// Debit the balance and log a statement entry. Returns the new balance.
    ///
    /// The rejection precedence is fixed: invalid amount, then insufficient
    /// funds, then the per-withdrawal limit, then the session quota. Exactly
    /// one reason is reported per call and state is untouched on failure.
    pub fn withdraw(&mut self, amount: Cents) -> Result<Cents, AppError> {
        if amount <= 0 {
            return Err(AppError::InvalidAmount("Amount must be positive".to_string()));
        }

        if amount > self.balance {
            Err(AppError::InsufficientFunds {
                balance: self.balance,
                requested: amount,
            })
        } else if amount > self.config.withdrawal_limit {
            Err(AppError::WithdrawalLimitExceeded {
                requested: amount,
                limit: self.config.withdrawal_limit,
            })
        } else if self.withdrawal_count >= self.config.max_withdrawals {
            Err(AppError::WithdrawalQuotaReached {
                max: self.config.max_withdrawals,
            })
        } else {
            self.balance -= amount;
            self.statement.push(StatementEntry::withdrawal(amount));
            self.withdrawal_count += 1;
            Ok(self.balance)
        }
    }

    pub fn balance(&self) -> Cents {
        self.balance
    }

    /// Statement entries in the order they were recorded.
    pub fn statement(&self) -> &[StatementEntry] {
        &self.statement
    }

    pub fn withdrawal_count(&self) -> u32 {
        self.withdrawal_count
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
