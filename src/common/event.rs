use std::{fmt, str::FromStr};

use crate::{
    common::{error::AppError, money::Money},
    domain::account::AccountNumber,
};

/// An operation the menu can dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CreateAccount,
    Deposit,
    Withdraw,
    DisplayBalance,
}

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Run(Operation),
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::Run(Operation::CreateAccount),
        MenuChoice::Run(Operation::Deposit),
        MenuChoice::Run(Operation::Withdraw),
        MenuChoice::Run(Operation::DisplayBalance),
        MenuChoice::Exit,
    ];

    pub fn key(self) -> u8 {
        match self {
            MenuChoice::Run(Operation::CreateAccount) => 1,
            MenuChoice::Run(Operation::Deposit) => 2,
            MenuChoice::Run(Operation::Withdraw) => 3,
            MenuChoice::Run(Operation::DisplayBalance) => 4,
            MenuChoice::Exit => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Run(Operation::CreateAccount) => "Create Account",
            MenuChoice::Run(Operation::Deposit) => "Deposit",
            MenuChoice::Run(Operation::Withdraw) => "Withdraw",
            MenuChoice::Run(Operation::DisplayBalance) => "Display Balance",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        MenuChoice::ALL
            .into_iter()
            .find(|choice| t == choice.key().to_string())
            .ok_or_else(|| AppError::InvalidChoice(t.to_string()))
    }
}

/// A fully collected operation, sent from the menu to the processor.
/// Account numbers and amounts are carried as typed text and validated by
/// the handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Create { name: String },
    Deposit { account: String, amount: String },
    Withdraw { account: String, amount: String },
    Balance { account: String },
}

/// What a successful operation reports back to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created { name: String, number: AccountNumber },
    Deposited { number: AccountNumber, balance: Money },
    Withdrawn { number: AccountNumber, balance: Money },
    Balance { name: String, balance: Money },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Created { name, number } => write!(
                f,
                "Account successfully created for {name} with account number: {number}"
            ),
            Outcome::Deposited { balance, .. } => {
                write!(f, "Deposit successful. New balance: {balance}")
            }
            Outcome::Withdrawn { balance, .. } => {
                write!(f, "Withdrawal successful. New balance: {balance}")
            }
            Outcome::Balance { name, balance } => {
                write!(f, "Account holder: {name}, Balance: {balance}")
            }
        }
    }
}
