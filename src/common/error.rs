use std::path::PathBuf;

use crate::common::money::Money;

/// Everything that can go wrong in a session. The display strings are the
/// messages shown to the user at the menu.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Error: {} not found. Starting with no accounts.", .0.display())]
    MissingFile(PathBuf),
    #[error("failed to read accounts from {}: {source}", .path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("An error occurred while saving accounts to {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid choice: {0}")]
    InvalidChoice(String),
    #[error("Invalid account number: {0}\nPlease try again.")]
    InvalidAccount(String),
    #[error("Invalid input: {0}")]
    InvalidAmount(String),
    #[error("Insufficient funds: requested {requested}, available {available}.")]
    InsufficientFunds { requested: Money, available: Money },
    #[error("Input closed before the operation was complete.")]
    InputClosed,
    #[error("console error: {0}")]
    Console(#[from] std::io::Error),
    #[error("An unexpected error occurred: {0}\nPlease try again.")]
    Unexpected(String),
}
