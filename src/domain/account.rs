use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::domain::{Error, Money, Transaction};

/// Variant-specific state. The variant set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Basic,
    Savings { interest_rate: Decimal },
    Checking { overdraft_limit: Money },
}

#[derive(Debug)]
pub struct Account {
    owner: String,
    password: String,
    balance: Money,
    kind: AccountKind,
    transactions: Vec<Transaction>, // append-only, call order
}

impl Account {
    pub fn new(
        kind: AccountKind,
        owner: impl Into<String>,
        password: impl Into<String>,
        balance: Money,
    ) -> Self {
        Self {
            owner: owner.into(),
            password: password.into(),
            balance,
            kind,
            transactions: Vec::new(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The interest capability: `Some(rate)` only for savings accounts.
    pub fn interest_rate(&self) -> Option<Decimal> {
        match self.kind {
            AccountKind::Savings { interest_rate } => Some(interest_rate),
            _ => None,
        }
    }

    pub fn deposit(&mut self, amount: Money) -> Result<Money, Error> {
        if !amount.is_positive() {
            warn!(owner = %self.owner, %amount, "rejected non-positive deposit");
            return Err(Error::InvalidAmount);
        }

        self.balance = self.checked(self.balance.checked_add(amount))?;
        self.transactions.push(Transaction::deposit(amount));
        info!(owner = %self.owner, %amount, balance = %self.balance, "deposit");

        Ok(self.balance)
    }

    pub fn withdraw(&mut self, amount: Money) -> Result<Money, Error> {
        if !amount.is_positive() {
            warn!(owner = %self.owner, %amount, "rejected non-positive withdrawal");
            return Err(Error::InvalidAmount);
        }

        match self.kind {
            AccountKind::Checking { overdraft_limit } => {
                let available = self.checked(self.balance.checked_add(overdraft_limit))?;
                if amount > available {
                    warn!(owner = %self.owner, %amount, "withdrawal exceeds overdraft limit");
                    return Err(Error::OverdraftExceeded {
                        requested: amount,
                        limit: overdraft_limit,
                    });
                }
            }
            AccountKind::Basic | AccountKind::Savings { .. } => {
                if amount > self.balance {
                    warn!(owner = %self.owner, %amount, "insufficient funds");
                    return Err(Error::InsufficientFunds {
                        requested: amount,
                        available: self.balance,
                    });
                }
            }
        }

        self.balance = self.checked(self.balance.checked_sub(amount))?;
        self.transactions.push(Transaction::withdrawal(amount));
        info!(owner = %self.owner, %amount, balance = %self.balance, "withdrawal");

        Ok(self.balance)
    }

    /// Accrues `balance * rate / 100`. Returns `Ok(None)`, with no state
    /// change, for accounts without an interest rate.
    pub fn apply_interest(&mut self) -> Result<Option<Money>, Error> {
        let Some(rate) = self.interest_rate() else {
            debug!(owner = %self.owner, "no interest capability, skipped");
            return Ok(None);
        };

        let interest = self.checked(self.balance.checked_percent(rate))?;
        self.balance = self.checked(self.balance.checked_add(interest))?;
        self.transactions.push(Transaction::interest(interest));
        info!(owner = %self.owner, %interest, balance = %self.balance, "interest applied");

        Ok(Some(interest))
    }

    fn checked(&self, value: Option<Money>) -> Result<Money, Error> {
        value.ok_or_else(|| {
            warn!(owner = %self.owner, balance = %self.balance, "amount overflow");
            Error::Overflow
        })
    }

    /// Exact, case-sensitive comparison. Attempts are not recorded here.
    pub fn authenticate(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    pub fn info(&self) -> String {
        self.to_string()
    }

    pub fn show_transactions(&self) -> String {
        let mut out = format!("--- Transaction History for {} ---\n", self.owner);
        if self.transactions.is_empty() {
            out.push_str("No transactions yet.\n");
        }
        for tx in self.transactions() {
            out.push_str(&tx.to_string());
            out.push('\n');
        }
        out
    }
}

impl core::fmt::Display for Account {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            AccountKind::Basic => write!(f, "Owner: {}, Balance: {}", self.owner, self.balance),
            AccountKind::Savings { interest_rate } => write!(
                f,
                "[Savings] Owner: {}, Balance: {}, Interest Rate: {}%",
                self.owner,
                self.balance,
                interest_rate.normalize()
            ),
            AccountKind::Checking { overdraft_limit } => write!(
                f,
                "[Checking] Owner: {}, Balance: {}, Overdraft Limit: {}",
                self.owner, self.balance, overdraft_limit
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(n: i64) -> Money {
        Money::from(n)
    }

    fn basic(owner: &str, password: &str, balance: Money) -> Account {
        Account::new(AccountKind::Basic, owner, password, balance)
    }

    fn savings(owner: &str, password: &str, balance: Money, interest_rate: Decimal) -> Account {
        Account::new(AccountKind::Savings { interest_rate }, owner, password, balance)
    }

    fn checking(owner: &str, password: &str, balance: Money, overdraft_limit: Money) -> Account {
        Account::new(AccountKind::Checking { overdraft_limit }, owner, password, balance)
    }

    #[test]
    fn savings_scenario_deposit_then_interest() {
        let mut acc = savings("A", "1", money(100), Decimal::from(5));

        assert_eq!(acc.deposit(money(50)).unwrap(), money(150));
        let log: Vec<String> = acc.transactions().iter().map(|t| t.to_string()).collect();
        assert_eq!(log, vec!["Deposited: 50.000000"]);

        assert_eq!(acc.apply_interest().unwrap(), Some(Money::from(Decimal::new(75, 1))));
        assert_eq!(acc.balance(), Money::from(Decimal::new(1575, 1)));
        assert_eq!(acc.transactions().len(), 2);
        assert_eq!(acc.transactions()[1].to_string(), "Interest applied: 7.500000");
    }

    #[test]
    fn checking_may_reach_exactly_minus_overdraft() {
        let mut acc = checking("B", "2", money(0), money(100));

        assert_eq!(acc.withdraw(money(100)).unwrap(), money(-100));
        let err = acc.withdraw(money(1)).unwrap_err();
        assert!(matches!(err, Error::OverdraftExceeded { .. }));
        assert_eq!(acc.balance(), money(-100));
        assert_eq!(acc.transactions().len(), 1);
    }

    #[test]
    fn overdraft_headroom_includes_positive_balance() {
        let mut acc = checking("B", "2", money(30), money(100));

        assert_eq!(acc.withdraw(money(130)).unwrap(), money(-100));
        assert!(matches!(
            acc.withdraw(money(1)),
            Err(Error::OverdraftExceeded { .. })
        ));
        assert_eq!(acc.balance(), money(-100));
    }

    #[test]
    fn overflow_is_an_error_and_leaves_state_untouched() {
        let max = Money::from(Decimal::MAX);

        let mut basic = basic("C", "pw", max);
        assert!(matches!(basic.deposit(money(1)), Err(Error::Overflow)));
        assert_eq!(basic.balance(), max);
        assert!(basic.transactions().is_empty());

        let mut savings = savings("D", "pw", max, Decimal::from(1000));
        assert!(matches!(savings.apply_interest(), Err(Error::Overflow)));
        assert_eq!(savings.balance(), max);
        assert!(savings.transactions().is_empty());

        let mut checking = checking("E", "pw", max, money(100));
        assert!(matches!(checking.withdraw(money(1)), Err(Error::Overflow)));
        assert_eq!(checking.balance(), max);
        assert!(checking.transactions().is_empty());
    }

    #[test]
    fn non_positive_amounts_are_rejected_without_side_effects() {
        let mut acc = basic("C", "pw", money(10));

        for amount in [money(0), money(-5)] {
            assert!(matches!(acc.deposit(amount), Err(Error::InvalidAmount)));
            assert!(matches!(acc.withdraw(amount), Err(Error::InvalidAmount)));
        }
        assert_eq!(acc.balance(), money(10));
        assert!(acc.transactions().is_empty());
    }

    #[test]
    fn basic_and_savings_cannot_go_negative() {
        let mut basic = basic("C", "pw", money(10));
        let mut savings = savings("D", "pw", money(10), Decimal::from(3));

        for acc in [&mut basic, &mut savings] {
            let err = acc.withdraw(money(11)).unwrap_err();
            assert!(matches!(err, Error::InsufficientFunds { .. }));
            assert_eq!(acc.balance(), money(10));
            assert!(acc.transactions().is_empty());

            assert_eq!(acc.withdraw(money(10)).unwrap(), money(0));
        }
    }

    #[test]
    fn log_follows_call_order() {
        let mut acc = savings("E", "pw", money(0), Decimal::from(10));
        acc.deposit(money(100)).unwrap();
        acc.withdraw(money(40)).unwrap();
        acc.apply_interest().unwrap();
        assert!(acc.withdraw(money(1_000)).is_err());

        let log: Vec<String> = acc.transactions().iter().map(|t| t.to_string()).collect();
        assert_eq!(
            log,
            vec![
                "Deposited: 100.000000",
                "Withdrawn: 40.000000",
                "Interest applied: 6.000000",
            ]
        );
        assert_eq!(acc.balance(), money(66));
    }

    #[test]
    fn interest_is_unavailable_for_non_savings() {
        let mut acc = checking("F", "pw", money(100), money(50));
        assert_eq!(acc.interest_rate(), None);
        assert_eq!(acc.apply_interest().unwrap(), None);
        assert_eq!(acc.balance(), money(100));
        assert!(acc.transactions().is_empty());
    }

    #[test]
    fn authenticate_is_exact_and_case_sensitive() {
        let acc = basic("G", "Secret", money(0));
        assert!(acc.authenticate("Secret"));
        assert!(!acc.authenticate("secret"));
        assert!(!acc.authenticate("Secret "));
        assert!(!acc.authenticate(""));
    }

    #[test]
    fn info_varies_by_kind() {
        let savings = savings("A", "1", Money::from(Decimal::new(1575, 1)), Decimal::from(5));
        let checking = checking("B", "2", money(-100), money(100));
        let basic = basic("C", "3", money(10));

        assert_eq!(
            savings.info(),
            "[Savings] Owner: A, Balance: 157.5, Interest Rate: 5%"
        );
        assert_eq!(
            checking.info(),
            "[Checking] Owner: B, Balance: -100, Overdraft Limit: 100"
        );
        assert_eq!(basic.info(), "Owner: C, Balance: 10");
    }

    #[test]
    fn show_transactions_handles_empty_log() {
        let mut acc = basic("H", "pw", money(0));
        assert_eq!(
            acc.show_transactions(),
            "--- Transaction History for H ---\nNo transactions yet.\n"
        );

        acc.deposit(money(5)).unwrap();
        assert_eq!(
            acc.show_transactions(),
            "--- Transaction History for H ---\nDeposited: 5.000000\n"
        );
    }
}
