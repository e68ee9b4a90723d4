use std::str::FromStr;

use crate::domain::{
    account::{Account, AccountNumber},
    record::Record,
};

/// The in-memory account directory for one session, in file order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Ledger {
    records: Vec<Record>,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.records.iter().filter_map(Record::as_account)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn push(&mut self, record: impl Into<Record>) {
        self.records.push(record.into());
    }

    pub fn contains(&self, number: AccountNumber) -> bool {
        self.accounts().any(|acc| acc.number == number)
    }

    /// First account whose number matches `query`. A query that is not a
    /// ten-digit number matches nothing.
    pub fn find(&self, query: &str) -> Option<&Account> {
        let number = AccountNumber::from_str(query).ok()?;
        self.accounts().find(|acc| acc.number == number)
    }

    pub fn find_mut(&mut self, query: &str) -> Option<&mut Account> {
        let number = AccountNumber::from_str(query).ok()?;
        self.records
            .iter_mut()
            .filter_map(Record::as_account_mut)
            .find(|acc| acc.number == number)
    }
}

impl FromIterator<Record> for Ledger {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
