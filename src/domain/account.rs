use std::{fmt, str::FromStr};

use rand::Rng;

use crate::common::money::Money;

const NUMBER_DIGITS: usize = 10;
const LOWEST_NUMBER: u64 = 1_000_000_000;
const HIGHEST_NUMBER: u64 = 9_999_999_999;

/// Ten-digit account identifier. Not a secret, just a handle for lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountNumber(u64);

impl AccountNumber {
    /// Draws a number uniformly from the ten-digit range.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.gen_range(LOWEST_NUMBER..=HIGHEST_NUMBER))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("account numbers are exactly 10 digits, got {0:?}")]
pub struct ParseAccountNumberError(String);

impl FromStr for AccountNumber {
    type Err = ParseAccountNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.len() != NUMBER_DIGITS || !t.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseAccountNumberError(t.to_string()));
        }
        t.parse()
            .map(AccountNumber)
            .map_err(|_| ParseAccountNumberError(t.to_string()))
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$}", self.0, width = NUMBER_DIGITS)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Holder's display name. Free text, not unique.
    pub name: String,
    pub number: AccountNumber,
    pub balance: Money,
}

impl Account {
    /// A freshly opened account with a zero balance.
    pub fn open(name: impl Into<String>, number: AccountNumber) -> Self {
        Self {
            name: name.into(),
            number,
            balance: Money::zero(),
        }
    }
}
