use crate::domain::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit { amount: Money },
    Withdrawal { amount: Money },
    Interest { amount: Money },
}

/// One entry of an account's append-only history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub kind: TransactionKind,
}

impl Transaction {
    pub fn deposit(amount: Money) -> Self {
        Self {
            kind: TransactionKind::Deposit { amount },
        }
    }

    pub fn withdrawal(amount: Money) -> Self {
        Self {
            kind: TransactionKind::Withdrawal { amount },
        }
    }

    pub fn interest(amount: Money) -> Self {
        Self {
            kind: TransactionKind::Interest { amount },
        }
    }
}

impl core::fmt::Display for Transaction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            TransactionKind::Deposit { amount } => write!(f, "Deposited: {:.6}", amount),
            TransactionKind::Withdrawal { amount } => write!(f, "Withdrawn: {:.6}", amount),
            TransactionKind::Interest { amount } => write!(f, "Interest applied: {:.6}", amount),
        }
    }
}
