use crate::domain::account::Account;

/// One row of the accounts file.
///
/// Lines that do not describe an account (wrong field count, a bad number or
/// balance, an unbalanced quote) are kept as the raw line so that a later save
/// writes them back unchanged instead of dropping them. They are never
/// returned by lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Account(Account),
    Malformed(String),
}

impl Record {
    pub fn as_account(&self) -> Option<&Account> {
        match self {
            Record::Account(acc) => Some(acc),
            Record::Malformed(_) => None,
        }
    }

    pub fn as_account_mut(&mut self) -> Option<&mut Account> {
        match self {
            Record::Account(acc) => Some(acc),
            Record::Malformed(_) => None,
        }
    }
}

impl From<Account> for Record {
    fn from(acc: Account) -> Self {
        Record::Account(acc)
    }
}
