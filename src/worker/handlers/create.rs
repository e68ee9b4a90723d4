use rand::Rng;
use tracing::info;

use crate::{
    common::{error::AppError, event::Outcome},
    domain::{
        account::{Account, AccountNumber},
        ledger::Ledger,
    },
};

const MAX_NUMBER_DRAWS: usize = 32;

pub fn handle<R: Rng + ?Sized>(
    ledger: &mut Ledger,
    rng: &mut R,
    name: String,
) -> Result<Outcome, AppError> {
    let number = unused_number(ledger, rng)?;

    ledger.push(Account::open(name.clone(), number));
    info!(%number, "account created");

    Ok(Outcome::Created { name, number })
}

// Redraws on collision with an existing account.
fn unused_number<R: Rng + ?Sized>(ledger: &Ledger, rng: &mut R) -> Result<AccountNumber, AppError> {
    std::iter::repeat_with(|| AccountNumber::generate(&mut *rng))
        .take(MAX_NUMBER_DRAWS)
        .find(|number| !ledger.contains(*number))
        .ok_or_else(|| {
            AppError::Unexpected(format!(
                "no free account number after {MAX_NUMBER_DRAWS} attempts"
            ))
        })
}
