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
    let amount = positive_amount(amount, "Deposit")?;

    apply_deposit(acc, &amount);
    info!(number = %acc.number, %amount, balance = %acc.balance, "deposit applied");

    Ok(Outcome::Deposited {
        number: acc.number,
        balance: acc.balance.clone(),
    })
}

fn apply_deposit(acc: &mut Account, amount: &Money) {
    acc.balance += amount;
}
