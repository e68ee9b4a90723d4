use std::{
    io::{BufRead, Write, stdin, stdout},
    path::PathBuf,
};

use rand::Rng;
use tracing::{error, info, warn};

use crate::{
    common::{
        error::AppError,
        event::{MenuChoice, Operation, Outcome, Request},
    },
    domain::ledger::Ledger,
    io::{console::Console, store::Store},
    worker::processor::Processor,
};

/// Command-line configuration.
#[derive(clap::Parser, Debug, Clone)]
#[command(name = "bank_ledger", version, about = "Menu-driven bank account ledger")]
pub struct Config {
    /// Accounts file, rewritten after every operation
    #[arg(short, long, env = "BANK_LEDGER_FILE", default_value = "accounts.txt")]
    pub file: PathBuf,
}

/// Runs an interactive session on stdin/stdout.
pub fn run(config: &Config) -> Result<(), AppError> {
    let store = Store::new(&config.file);
    let stdin = stdin();
    let stdout = stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    let mut processor = Processor::new();

    run_session(&store, &mut console, &mut processor)?;
    Ok(())
}

/// The menu loop. Loads the store once, then dispatches choices until the
/// user exits or the input ends, saving after every dispatched operation.
/// Returns the final ledger.
///
/// # Errors
///
/// Only [`AppError::ReadFailure`] at startup and console failures at the menu
/// prompt end a session; operation errors are reported and the loop goes on.
pub fn run_session<I, O, R>(
    store: &Store,
    console: &mut Console<I, O>,
    processor: &mut Processor<R>,
) -> Result<Ledger, AppError>
where
    I: BufRead,
    O: Write,
    R: Rng,
{
    let mut ledger = match store.load() {
        Ok(ledger) => ledger,
        Err(e @ AppError::MissingFile(_)) => {
            warn!(path = %store.path().display(), "accounts file not found");
            console.say(e)?;
            Ledger::new()
        }
        Err(e) => {
            error!(error = %e, "could not load accounts; refusing to continue");
            return Err(e);
        }
    };
    info!(records = ledger.len(), "session started");

    loop {
        console.show_menu()?;
        let Some(line) = console.prompt("Enter choice: ")? else {
            info!("input closed, leaving");
            break;
        };

        let operation = match line.parse::<MenuChoice>() {
            Ok(MenuChoice::Exit) => break,
            Ok(MenuChoice::Run(operation)) => operation,
            Err(e) => {
                console.say(e)?;
                continue;
            }
        };

        match dispatch(operation, &mut ledger, console, processor) {
            Ok(outcome) => console.say(outcome)?,
            Err(e) => {
                warn!(?operation, error = %e, "operation failed");
                console.say(e)?;
            }
        }

        if let Err(e) = store.save(&ledger) {
            error!(error = %e, "could not save accounts");
            console.say(e)?;
        }
    }

    info!("session ended");
    Ok(ledger)
}

fn dispatch<I, O, R>(
    operation: Operation,
    ledger: &mut Ledger,
    console: &mut Console<I, O>,
    processor: &mut Processor<R>,
) -> Result<Outcome, AppError>
where
    I: BufRead,
    O: Write,
    R: Rng,
{
    let request = match operation {
        Operation::CreateAccount => Request::Create {
            name: console.require("Enter account holder name: ")?,
        },
        Operation::Deposit => {
            let account = known_account(ledger, console)?;
            let amount = console.require("Enter deposit amount: ")?;
            Request::Deposit { account, amount }
        }
        Operation::Withdraw => {
            let account = known_account(ledger, console)?;
            let amount = console.require("Enter withdrawal amount: ")?;
            Request::Withdraw { account, amount }
        }
        Operation::DisplayBalance => Request::Balance {
            account: console.require("Enter account number: ")?,
        },
    };
    processor.process(ledger, request)
}

// The amount is only asked for once the account is known to exist.
fn known_account<I: BufRead, O: Write>(
    ledger: &Ledger,
    console: &mut Console<I, O>,
) -> Result<String, AppError> {
    let account = console.require("Enter account number: ")?;
    match ledger.find(&account) {
        Some(_) => Ok(account),
        None => Err(AppError::InvalidAccount(account.trim().to_string())),
    }
}
