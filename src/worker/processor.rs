use rand::{Rng, rngs::ThreadRng};

use crate::{
    common::{
        error::AppError,
        event::{Outcome, Request},
    },
    domain::ledger::Ledger,
    worker::handlers::{balance, create, deposit, withdrawal},
};

/// Routes requests to their handlers. Owns the generator used for new
/// account numbers.
#[derive(Debug)]
pub struct Processor<R = ThreadRng> {
    rng: R,
}

impl Processor<ThreadRng> {
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl Default for Processor<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Processor<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn process(&mut self, ledger: &mut Ledger, request: Request) -> Result<Outcome, AppError> {
        match request {
            Request::Create { name } => create::handle(ledger, &mut self.rng, name),
            Request::Deposit { account, amount } => deposit::handle(ledger, &account, &amount),
            Request::Withdraw { account, amount } => {
                withdrawal::handle(ledger, &account, &amount)
            }
            Request::Balance { account } => balance::handle(ledger, &account),
        }
    }
}
