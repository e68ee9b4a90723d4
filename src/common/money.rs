use bigdecimal::{BigDecimal, ParseBigDecimalError};
use num_traits::Zero;
use std::fmt;
use std::ops::{AddAssign, SubAssign};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
/// A monetary amount as an exact decimal.
///
/// Using `BigDecimal` keeps deposits and withdrawals free of binary
/// floating-point error and puts no bound on size or precision. The text form
/// is the shortest plain decimal with at least one fractional digit, which is
/// also the form written to the accounts file.
///
/// # Examples
/// ```
/// use bank_ledger::common::money::Money;
///
/// let amount: Money = "75.50".parse().unwrap();
/// assert_eq!(amount.to_string(), "75.5");
/// assert_eq!("1e+16".parse::<Money>().unwrap().to_string(), "10000000000000000.0");
/// assert_eq!(Money::zero().to_string(), "0.0");
/// ```
pub struct Money(BigDecimal);

impl Money {
    pub fn zero() -> Self {
        Money(BigDecimal::zero())
    }

    pub fn is_positive(&self) -> bool {
        self.0 > BigDecimal::zero()
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl std::str::FromStr for Money {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        Ok(Money(t.parse()?))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Trailing zeros are gone after normalizing, so any fraction is significant.
        let (digits, scale) = self.0.normalized().as_bigint_and_exponent();
        let digits = digits.to_string();
        let (sign, digits) = match digits.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", digits.as_str()),
        };

        if scale <= 0 {
            let zeros = "0".repeat(scale.unsigned_abs() as usize);
            return write!(f, "{sign}{digits}{zeros}.0");
        }

        let scale = scale as usize;
        if digits.len() > scale {
            let (whole, fraction) = digits.split_at(digits.len() - scale);
            write!(f, "{sign}{whole}.{fraction}")
        } else {
            let zeros = "0".repeat(scale - digits.len());
            write!(f, "{sign}0.{zeros}{digits}")
        }
    }
}

impl AddAssign<&Money> for Money {
    fn add_assign(&mut self, rhs: &Money) {
        self.0 = &self.0 + &rhs.0;
    }
}

impl SubAssign<&Money> for Money {
    fn sub_assign(&mut self, rhs: &Money) {
        self.0 = &self.0 - &rhs.0;
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn money(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    #[test]
    fn test_zero() {
        assert_eq!(Money::zero(), money("0"));
        assert_eq!(Money::default(), money("0.000"));
        assert!(!Money::zero().is_positive());
    }

    #[test]
    fn test_from_str_valid() {
        assert_eq!(money("1"), money("1.0000"));
        assert_eq!(money("  2.5 "), money("2.50"));
        assert_eq!(money("1e2"), money("100"));
        assert_eq!(money("1e+16"), money("10000000000000000"));
        assert_eq!(money("1e-05"), money("0.00001"));
    }

    #[test]
    fn test_from_str_keeps_full_precision() {
        assert!(money("0.00001").is_positive());
        assert!(money("0.00001") < money("0.0001"));
        assert!(money("99999999999999999999.123456789").is_positive());
    }

    #[test]
    fn test_from_str_invalid() {
        assert!(Money::from_str("").is_err());
        assert!(Money::from_str("   ").is_err());
        assert!(Money::from_str("abc").is_err());
        assert!(Money::from_str("nan").is_err());
        assert!(Money::from_str("inf").is_err());
    }

    #[test]
    fn test_display_keeps_one_fraction_digit() {
        assert_eq!(money("0").to_string(), "0.0");
        assert_eq!(money("50").to_string(), "50.0");
        assert_eq!(money("75.50").to_string(), "75.5");
        assert_eq!(money("30.25").to_string(), "30.25");
        assert_eq!(money("0.00001").to_string(), "0.00001");
        assert_eq!(money("1e15").to_string(), "1000000000000000.0");
        assert_eq!(money("-5").to_string(), "-5.0");
        assert_eq!(money("-0.0005").to_string(), "-0.0005");
        assert_eq!(money("-12.5").to_string(), "-12.5");
    }

    #[test]
    fn test_display_parses_back() {
        for raw in ["0", "0.0001", "75.5", "12345.6789", "-42", "1e20", "3e-9"] {
            let text = money(raw).to_string();
            assert_eq!(money(&text), money(raw), "{text}");
        }
    }

    #[test]
    fn test_add_sub_assign() {
        let mut m = money("75.5");
        m += &money("24.5");
        assert_eq!(m.to_string(), "100.0");
        m -= &money("0.00001");
        assert_eq!(m.to_string(), "99.99999");
    }

    #[test]
    fn test_ordering() {
        assert!(money("1") < money("1.5"));
        assert!(money("1.5") > money("1"));
        assert!(money("1") <= money("1.000"));
        assert!(money("1e15") > money("999999999999999.9999"));
    }
}
