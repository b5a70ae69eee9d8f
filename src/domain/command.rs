use crate::domain::ledger::{Outcome, PayrollLedger};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

/// A payroll command parsed from `"<verb>:<argument>"`.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Salary { employee_id: i64 },
    AddFunds { amount: Decimal },
}

impl FromStr for Command {
    /// Parse failures are ordinary outcomes, reported back like any other.
    type Err = Outcome;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (verb, argument) = text.split_once(':').unwrap_or((text, ""));
        let argument = argument.trim();

        match verb {
            "salary" => argument
                .parse::<i64>()
                .map(|employee_id| Command::Salary { employee_id })
                .map_err(|_| Outcome::InvalidEmployeeId),
            "addFunds" => Decimal::from_str(argument)
                .map(|amount| Command::AddFunds { amount })
                .map_err(|_| Outcome::InvalidAmount),
            _ => Err(Outcome::UnknownCommand),
        }
    }
}

impl Command {
    pub fn apply(self, ledger: &mut PayrollLedger, today: NaiveDate) -> Outcome {
        match self {
            Command::Salary { employee_id } => ledger.distribute_salary(employee_id, today),
            Command::AddFunds { amount } => ledger.add_funds(amount),
        }
    }
}

/// Parses and applies a command string against the ledger.
///
/// No I/O happens here; the caller relays the returned outcome.
pub fn interpret_command(text: &str, ledger: &mut PayrollLedger, today: NaiveDate) -> Outcome {
    match text.parse::<Command>() {
        Ok(command) => command.apply(ledger, today),
        Err(outcome) => outcome,
    }
}
