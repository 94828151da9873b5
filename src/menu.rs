use std::io::{BufRead, Write};
use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::warn;

use crate::domain::{AccountKind, Error, Money};
use crate::ledger::Ledger;

const MENU: &str = "\n--- BANK MENU ---\n\
1. Create Account\n\
2. Deposit\n\
3. Withdraw\n\
4. Apply Interest (Savings only)\n\
5. Show All Accounts\n\
6. Show Transaction History\n\
7. Exit\n";

enum Flow {
    Continue,
    Exit,
}

/// Line-oriented driver: reads selections from `input`, runs them against
/// the ledger and writes results to `output`.
pub struct Menu<R: BufRead, W: Write> {
    input: R,
    output: W,
    ledger: Ledger,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            ledger: Ledger::new(),
        }
    }

    /// Runs until `7`, end of input, or an I/O failure. Every other error is
    /// reported and the session continues.
    pub fn run(&mut self) -> Result<(), Error> {
        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) | Err(Error::InputClosed) => break,
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => self.report(&e)?,
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn step(&mut self) -> Result<Flow, Error> {
        write!(self.output, "{}", MENU)?;
        let choice = self.prompt("Enter choice: ")?;

        match choice.trim() {
            "1" => self.create_account(),
            "2" => self.deposit(),
            "3" => self.withdraw(),
            "4" => self.apply_interest(),
            "5" => self.list_accounts(),
            "6" => self.show_transactions(),
            "7" => Ok(Flow::Exit),
            _ => {
                writeln!(self.output, "Invalid choice!")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn create_account(&mut self) -> Result<Flow, Error> {
        let kind = self.prompt("Enter account type (1: Savings, 2: Checking, 3: Basic): ")?;
        let kind = kind.trim().to_owned();
        if !matches!(kind.as_str(), "1" | "2" | "3") {
            writeln!(self.output, "Invalid account type!")?;
            return Ok(Flow::Continue);
        }

        let owner = self.prompt("Enter owner name: ")?;
        let password = self.prompt("Set a password: ")?;
        let balance: Money = self.prompt_money("Enter initial balance: ")?;

        let kind = match kind.as_str() {
            "1" => AccountKind::Savings {
                interest_rate: self.prompt_number::<Decimal>("Enter interest rate (%): ", "a rate")?,
            },
            "2" => AccountKind::Checking {
                overdraft_limit: self.prompt_money("Enter overdraft limit: ")?,
            },
            _ => AccountKind::Basic,
        };

        let index = self.ledger.create(kind, owner, password, balance);
        writeln!(self.output, "Account created with number {}.", index)?;
        Ok(Flow::Continue)
    }

    fn deposit(&mut self) -> Result<Flow, Error> {
        let Some(index) = self.select_account()? else {
            return Ok(Flow::Continue);
        };

        let amount: Money = self.prompt_money("Enter amount to deposit: ")?;
        let balance = self.ledger.get_mut(index)?.deposit(amount)?;
        writeln!(self.output, "Deposited: {}. New balance: {}", amount, balance)?;
        Ok(Flow::Continue)
    }

    fn withdraw(&mut self) -> Result<Flow, Error> {
        let Some(index) = self.select_account()? else {
            return Ok(Flow::Continue);
        };

        let amount: Money = self.prompt_money("Enter amount to withdraw: ")?;
        let balance = self.ledger.get_mut(index)?.withdraw(amount)?;
        writeln!(self.output, "Withdrawn: {}. New balance: {}", amount, balance)?;
        Ok(Flow::Continue)
    }

    fn apply_interest(&mut self) -> Result<Flow, Error> {
        let accrued = self.ledger.apply_interest_to_all();
        if accrued.is_empty() {
            writeln!(self.output, "No savings accounts.")?;
        }

        for (index, result) in accrued {
            match result {
                Ok(interest) => {
                    let balance = self.ledger.get(index)?.balance();
                    writeln!(
                        self.output,
                        "Interest applied: {}. New balance: {}",
                        interest, balance
                    )?;
                }
                Err(e) => writeln!(self.output, "Error: account {}: {}", index, e)?,
            }
        }
        Ok(Flow::Continue)
    }

    fn list_accounts(&mut self) -> Result<Flow, Error> {
        if self.ledger.count() == 0 {
            writeln!(self.output, "No accounts yet.")?;
        }

        for (index, summary) in self.ledger.list_all() {
            writeln!(self.output, "{}. {}", index, summary)?;
        }
        Ok(Flow::Continue)
    }

    fn show_transactions(&mut self) -> Result<Flow, Error> {
        let Some(index) = self.select_account()? else {
            return Ok(Flow::Continue);
        };

        let history = self.ledger.get(index)?.show_transactions();
        write!(self.output, "{}", history)?;
        Ok(Flow::Continue)
    }

    /// Asks for an account number and its password. `None` when the ledger
    /// is empty.
    fn select_account(&mut self) -> Result<Option<usize>, Error> {
        let count = self.ledger.count();
        if count == 0 {
            writeln!(self.output, "No accounts yet.")?;
            return Ok(None);
        }

        let msg = format!("Enter account number (0-{}): ", count - 1);
        let index: i64 = self.prompt_number(&msg, "an account number")?;
        let index = usize::try_from(index).map_err(|_| Error::IndexOutOfRange { index, count })?;
        self.ledger.get(index)?;

        let password = self.prompt("Enter password: ")?;
        if !self.ledger.get(index)?.authenticate(&password) {
            warn!(index, "authentication failed");
            return Err(Error::AuthenticationFailed);
        }

        Ok(Some(index))
    }

    fn prompt(&mut self, msg: &str) -> Result<String, Error> {
        write!(self.output, "{}", msg)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    fn prompt_number<T: FromStr>(&mut self, msg: &str, what: &str) -> Result<T, Error> {
        let line = self.prompt(msg)?;
        line.trim()
            .parse()
            .map_err(|_| Error::Input(format!("expected {}, got {:?}", what, line.trim())))
    }

    fn prompt_money(&mut self, msg: &str) -> Result<Money, Error> {
        self.prompt(msg)?.parse()
    }

    fn report(&mut self, error: &Error) -> Result<(), Error> {
        warn!(%error, "operation failed");
        match error {
            Error::AuthenticationFailed => writeln!(self.output, "{}", error)?,
            _ => writeln!(self.output, "Error: {}", error)?,
        }
        Ok(())
    }
}
