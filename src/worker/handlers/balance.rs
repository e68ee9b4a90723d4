use crate::{
    common::{error::AppError, event::Outcome},
    domain::ledger::Ledger,
};

pub fn handle(ledger: &Ledger, account: &str) -> Result<Outcome, AppError> {
    let acc = ledger
        .find(account)
        .ok_or_else(|| AppError::InvalidAccount(account.trim().to_string()))?;

    Ok(Outcome::Balance {
        name: acc.name.clone(),
        balance: acc.balance.clone(),
    })
}
