use tracing::info;

use crate::{
    common::{error::AppError, event::Outcome, money::Money},
    domain::{account::Account, ledger::Ledger},
    worker::handlers::positive_amount,
};

pub fn handle(ledger: &mut Ledger, account: &str, amount: &str) -> Result<Outcome, AppError> {
    let acc = ledger
        .find_mut(account)
        .ok_or_else(|| AppError::InvalidAccount(account.trim().to_string()))?;
    let amount = positive_amount(amount, "Withdrawal")?;

    apply_withdrawal(acc, &amount)?;
    info!(number = %acc.number, %amount, balance = %acc.balance, "withdrawal applied");

    Ok(Outcome::Withdrawn {
        number: acc.number,
        balance: acc.balance.clone(),
    })
}

fn apply_withdrawal(acc: &mut Account, amount: &Money) -> Result<(), AppError> {
    if *amount > acc.balance {
        return Err(AppError::InsufficientFunds {
            requested: amount.clone(),
            available: acc.balance.clone(),
        });
    }
    acc.balance -= amount;
    Ok(())
}
