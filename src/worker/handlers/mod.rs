pub mod balance;
pub mod create;
pub mod deposit;
pub mod withdrawal;

use crate::common::{error::AppError, money::Money};

/// Parses a deposit/withdrawal amount; it must be strictly positive.
pub(crate) fn positive_amount(text: &str, kind: &str) -> Result<Money, AppError> {
    let amount: Money = text
        .parse()
        .map_err(|e| AppError::InvalidAmount(format!("{text:?} is not a number ({e})")))?;
    if !amount.is_positive() {
        return Err(AppError::InvalidAmount(format!(
            "{kind} amount must be positive."
        )));
    }
    Ok(amount)
}
