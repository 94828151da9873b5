use crate::domain::Money;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error("Amount must be greater than 0!")]
    InvalidAmount,

    #[error("Insufficient funds! Requested {requested}, available {available}")]
    InsufficientFunds { requested: Money, available: Money },

    #[error("Exceeds overdraft limit! Requested {requested}, limit {limit}")]
    OverdraftExceeded { requested: Money, limit: Money },

    #[error("Amount out of range")]
    Overflow,

    #[error("Account number {index} out of range ({count} accounts)")]
    IndexOutOfRange { index: i64, count: usize },

    #[error("Incorrect password!")]
    AuthenticationFailed,

    #[error("Invalid input: {0}")]
    Input(String),

    #[error("Input closed")]
    InputClosed,
}

impl Error {
    /// Only I/O failures end the session; everything else is reported and skipped.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::IO(_))
    }
}
