use tracing::info;

use crate::domain::{Account, AccountKind, Error, Money};

/// Owns every account; accounts are addressed by creation order.
#[derive(Default, Debug)]
pub struct Ledger {
    accounts: Vec<Account>,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            accounts: Vec::new(),
        }
    }

    /// Opens an account and returns its index. Opening balance, rate and
    /// overdraft limit are taken as given.
    pub fn create(
        &mut self,
        kind: AccountKind,
        owner: impl Into<String>,
        password: impl Into<String>,
        balance: Money,
    ) -> usize {
        let account = Account::new(kind, owner, password, balance);
        let index = self.accounts.len();
        info!(
            index,
            owner = account.owner(),
            kind = ?account.kind(),
            balance = %account.balance(),
            "account created"
        );
        self.accounts.push(account);
        index
    }

    pub fn get(&self, index: usize) -> Result<&Account, Error> {
        let count = self.accounts.len();
        self.accounts
            .get(index)
            .ok_or_else(|| out_of_range(index, count))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Account, Error> {
        let count = self.accounts.len();
        self.accounts
            .get_mut(index)
            .ok_or_else(|| out_of_range(index, count))
    }

    pub fn count(&self) -> usize {
        self.accounts.len()
    }

    /// Accrues interest on every account that has the capability; the rest
    /// are skipped. One failing account does not stop the others.
    pub fn apply_interest_to_all(&mut self) -> Vec<(usize, Result<Money, Error>)> {
        self.accounts
            .iter_mut()
            .enumerate()
            .filter_map(|(index, account)| {
                account.apply_interest().transpose().map(|res| (index, res))
            })
            .collect()
    }

    pub fn list_all(&self) -> Vec<(usize, String)> {
        self.accounts
            .iter()
            .enumerate()
            .map(|(index, account)| (index, account.info()))
            .collect()
    }
}

fn out_of_range(index: usize, count: usize) -> Error {
    Error::IndexOutOfRange {
        index: i64::try_from(index).unwrap_or(i64::MAX),
        count,
    }
}
