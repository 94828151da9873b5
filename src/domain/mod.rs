pub mod account;
pub mod error;
pub mod money;
pub mod transaction;

pub use account::{Account, AccountKind};
pub use error::Error;
pub use money::Money;
pub use transaction::Transaction;
