use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opening balance of the company account when nothing else is configured.
pub const DEFAULT_OPENING_BALANCE: Decimal = dec!(50000);

/// A currency amount held by the company account.
///
/// Wraps `rust_decimal::Decimal` so balances and salaries cannot be mixed up
/// with plain numbers, and prints the way the payroll messages expect
/// (`44000`, `1000.5`).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Balance(pub Decimal);

/// A strictly positive amount: a salary or a top-up.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Amount(Decimal);

impl Amount {
    /// Returns `None` for zero or negative values.
    pub fn new(value: Decimal) -> Option<Self> {
        (value > Decimal::ZERO).then_some(Self(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = Outcome;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(Outcome::InvalidAmount)
    }
}

impl From<Amount> for Balance {
    fn from(amount: Amount) -> Self {
        Self(amount.0)
    }
}

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// `None` when the sum does not fit in a `Decimal`.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

/// The single account salaries are paid from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyAccount {
    pub balance: Balance,
}

impl CompanyAccount {
    pub fn new(balance: Balance) -> Self {
        Self { balance }
    }

    /// Deducts `amount` only if the balance covers it.
    fn withdraw(&mut self, amount: Amount) -> bool {
        let amount = Balance::from(amount);
        if self.balance < amount {
            return false;
        }
        match self.balance.checked_sub(amount) {
            Some(balance) => {
                self.balance = balance;
                true
            }
            None => false,
        }
    }

    /// Credits `amount` unless the new balance would overflow.
    fn deposit(&mut self, amount: Amount) -> bool {
        match self.balance.checked_add(amount.into()) {
            Some(balance) => {
                self.balance = balance;
                true
            }
            None => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub salary: Amount,
}

impl Employee {
    pub fn new(id: i64, name: impl Into<String>, salary: Amount) -> Self {
        Self {
            id,
            name: name.into(),
            salary,
        }
    }
}

/// The roster every process starts with.
pub fn seeded_roster() -> Vec<Employee> {
    [
        (1, "John Doe", dec!(5000)),
        (2, "Jane Smith", dec!(6000)),
        (3, "Alice Johnson", dec!(7000)),
    ]
    .into_iter()
    .filter_map(|(id, name, salary)| Amount::new(salary).map(|s| Employee::new(id, name, s)))
    .collect()
}

/// True when `date` is the last calendar day of its month.
pub fn is_end_of_month(date: NaiveDate) -> bool {
    date.succ_opt()
        .is_none_or(|next| next.month() != date.month())
}

/// Result of a ledger operation or of interpreting a command.
///
/// Every variant renders to exactly one literal message; callers relay the
/// text verbatim to the rollup host.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    NotEndOfMonth,
    EmployeeNotFound,
    InsufficientFunds,
    Disbursed {
        employee_name: String,
        amount: Amount,
        new_balance: Balance,
    },
    InvalidAmount,
    FundsAdded {
        amount: Amount,
        new_balance: Balance,
    },
    InvalidEmployeeId,
    UnknownCommand,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::NotEndOfMonth => {
                f.write_str("Salary distribution is only allowed at the end of the month")
            }
            Outcome::EmployeeNotFound => f.write_str("Employee not found"),
            Outcome::InsufficientFunds => f.write_str("Insufficient funds in company account"),
            Outcome::Disbursed {
                employee_name,
                amount,
                new_balance,
            } => write!(
                f,
                "Salary of {amount} distributed to {employee_name}. New company balance: {new_balance}"
            ),
            Outcome::InvalidAmount => f.write_str("Invalid amount"),
            Outcome::FundsAdded {
                amount,
                new_balance,
            } => write!(
                f,
                "Added {amount} to company balance. New balance: {new_balance}"
            ),
            Outcome::InvalidEmployeeId => f.write_str("Invalid employee ID"),
            Outcome::UnknownCommand => f.write_str("Unknown command"),
        }
    }
}

/// In-memory payroll state: one company account and a fixed roster.
#[derive(Debug, Clone)]
pub struct PayrollLedger {
    account: CompanyAccount,
    roster: Vec<Employee>,
}

impl Default for PayrollLedger {
    fn default() -> Self {
        Self::seeded(Balance::new(DEFAULT_OPENING_BALANCE))
    }
}

impl PayrollLedger {
    pub fn new(opening_balance: Balance, roster: Vec<Employee>) -> Self {
        Self {
            account: CompanyAccount::new(opening_balance),
            roster,
        }
    }

    /// Ledger with the seeded roster and the given opening balance.
    pub fn seeded(opening_balance: Balance) -> Self {
        Self::new(opening_balance, seeded_roster())
    }

    pub fn balance(&self) -> Balance {
        self.account.balance
    }

    pub fn roster(&self) -> &[Employee] {
        &self.roster
    }

    /// Pays one employee's salary out of the company account.
    ///
    /// Rules are checked in order: end of month, employee exists, funds
    /// suffice. Only the last branch mutates the balance.
    pub fn distribute_salary(&mut self, employee_id: i64, today: NaiveDate) -> Outcome {
        if !is_end_of_month(today) {
            return Outcome::NotEndOfMonth;
        }

        let Some(employee) = self.roster.iter().find(|e| e.id == employee_id) else {
            return Outcome::EmployeeNotFound;
        };

        if !self.account.withdraw(employee.salary) {
            return Outcome::InsufficientFunds;
        }

        Outcome::Disbursed {
            employee_name: employee.name.clone(),
            amount: employee.salary,
            new_balance: self.account.balance,
        }
    }

    /// Tops up the company account.
    ///
    /// Zero, negative and overflowing amounts are refused with `InvalidAmount`
    /// and leave the balance untouched.
    pub fn add_funds(&mut self, amount: Decimal) -> Outcome {
        let amount = match Amount::try_from(amount) {
            Ok(amount) => amount,
            Err(outcome) => return outcome,
        };

        if !self.account.deposit(amount) {
            return Outcome::InvalidAmount;
        }
        Outcome::FundsAdded {
            amount,
            new_balance: self.account.balance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn end_of_month() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
    }

    fn mid_month() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_balance_arithmetic() {
        let b1 = Balance::new(dec!(10.0));
        let b2 = Balance::new(dec!(5.0));
        assert_eq!(b1.checked_add(b2), Some(Balance::new(dec!(15.0))));
        assert_eq!(b1.checked_sub(b2), Some(Balance::new(dec!(5.0))));
        assert_eq!(Balance::new(Decimal::MAX).checked_add(b2), None);
    }

    #[test]
    fn test_amount_validation() {
        assert!(Amount::new(dec!(1.0)).is_some());
        assert!(Amount::new(dec!(0.0)).is_none());
        assert!(Amount::new(dec!(-1.0)).is_none());
    }

    #[test]
    fn test_balance_display_is_normalized() {
        assert_eq!(Balance::new(dec!(44000)).to_string(), "44000");
        assert_eq!(Balance::new(dec!(1000.50)).to_string(), "1000.5");
    }

    #[test]
    fn test_end_of_month_detection() {
        assert!(is_end_of_month(end_of_month()));
        assert!(is_end_of_month(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
        assert!(is_end_of_month(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()));
        assert!(!is_end_of_month(NaiveDate::from_ymd_opt(2023, 2, 27).unwrap()));
        assert!(!is_end_of_month(mid_month()));
    }

    #[test]
    fn test_seeded_roster() {
        let roster = seeded_roster();
        assert_eq!(roster.len(), 3);
        assert_eq!(roster[1].name, "Jane Smith");
        assert_eq!(roster[1].salary.value(), dec!(6000));
    }

    #[test]
    fn test_distribute_salary_at_end_of_month() {
        let mut ledger = PayrollLedger::default();
        let outcome = ledger.distribute_salary(2, end_of_month());

        assert_eq!(
            outcome.to_string(),
            "Salary of 6000 distributed to Jane Smith. New company balance: 44000"
        );
        assert_eq!(ledger.balance(), Balance::new(dec!(44000)));
    }

    #[test]
    fn test_distribute_salary_mid_month_is_refused() {
        let mut ledger = PayrollLedger::default();
        let outcome = ledger.distribute_salary(2, mid_month());

        assert_eq!(outcome, Outcome::NotEndOfMonth);
        assert_eq!(
            outcome.to_string(),
            "Salary distribution is only allowed at the end of the month"
        );
        assert_eq!(ledger.balance(), Balance::new(dec!(50000)));
    }

    #[test]
    fn test_date_rule_checked_before_roster() {
        let mut ledger = PayrollLedger::default();
        assert_eq!(ledger.distribute_salary(99, mid_month()), Outcome::NotEndOfMonth);
    }

    #[test]
    fn test_distribute_salary_unknown_employee() {
        let mut ledger = PayrollLedger::default();
        let outcome = ledger.distribute_salary(99, end_of_month());

        assert_eq!(outcome.to_string(), "Employee not found");
        assert_eq!(ledger.balance(), Balance::new(dec!(50000)));
    }

    #[test]
    fn test_distribute_salary_insufficient_funds() {
        let mut ledger = PayrollLedger::seeded(Balance::new(dec!(6999.99)));
        let outcome = ledger.distribute_salary(3, end_of_month());

        assert_eq!(outcome.to_string(), "Insufficient funds in company account");
        assert_eq!(ledger.balance(), Balance::new(dec!(6999.99)));
    }

    #[test]
    fn test_distribute_salary_can_drain_to_zero() {
        let mut ledger = PayrollLedger::seeded(Balance::new(dec!(5000)));
        ledger.distribute_salary(1, end_of_month());
        assert_eq!(ledger.balance(), Balance::ZERO);
        assert_eq!(
            ledger.distribute_salary(1, end_of_month()),
            Outcome::InsufficientFunds
        );
    }

    #[test]
    fn test_add_funds() {
        let mut ledger = PayrollLedger::seeded(Balance::new(dec!(44000)));
        let outcome = ledger.add_funds(dec!(1000));

        assert_eq!(
            outcome.to_string(),
            "Added 1000 to company balance. New balance: 45000"
        );
        assert_eq!(ledger.balance(), Balance::new(dec!(45000)));
    }

    #[test]
    fn test_add_funds_overflow_is_refused() {
        let mut ledger = PayrollLedger::default();
        let outcome = ledger.add_funds(Decimal::MAX);

        assert_eq!(outcome, Outcome::InvalidAmount);
        assert_eq!(outcome.to_string(), "Invalid amount");
        assert_eq!(ledger.balance(), Balance::new(dec!(50000)));
    }

    #[test]
    fn test_add_funds_rejects_non_positive() {
        let mut ledger = PayrollLedger::default();
        assert_eq!(ledger.add_funds(dec!(0)), Outcome::InvalidAmount);
        assert_eq!(ledger.add_funds(dec!(-25.5)), Outcome::InvalidAmount);
        assert_eq!(ledger.balance(), Balance::new(dec!(50000)));
    }
}
