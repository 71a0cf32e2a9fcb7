//! Money type for representing expense amounts
//!
//! Amounts are stored as an integer count of millionths of the currency unit,
//! so sub-cent amounts add up exactly. Rounding to cents only happens when an
//! amount is formatted for display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// Fractional digits kept for every amount
pub const SCALE_DIGITS: u32 = 6;

/// Largest magnitude `Money::parse` accepts, in whole currency units
///
/// Bounded so that summing any realistic number of rows stays far inside i128.
pub const MAX_AMOUNT: i128 = 1_000_000_000_000_000;

const SCALE: i128 = 10_i128.pow(SCALE_DIGITS);
const UNITS_PER_CENT: i128 = SCALE / 100;

/// Represents a monetary amount stored as millionths of the currency unit
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i128);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents as i128 * UNITS_PER_CENT)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Exact amount in millionths of the currency unit
    pub const fn micros(&self) -> i128 {
        self.0
    }

    /// Amount rounded to whole cents, half away from zero
    pub const fn cents(&self) -> i128 {
        let half = UNITS_PER_CENT / 2;
        if self.0 < 0 {
            (self.0 - half) / UNITS_PER_CENT
        } else {
            (self.0 + half) / UNITS_PER_CENT
        }
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Amount as a floating point number of currency units
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / SCALE as f64
    }

    /// Parse a money amount from a string
    ///
    /// Accepts "10.50", "-10.50", "+3", "$10.50", ".75" and exponent forms
    /// such as "1e3". Digits past the sixth decimal place are rounded half
    /// away from zero. Non-finite values and magnitudes above [`MAX_AMOUNT`]
    /// are rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s;
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else if let Some(stripped) = s.strip_prefix('+') {
            (false, stripped)
        } else {
            (false, s)
        };

        let s = s.strip_prefix('$').unwrap_or(s);

        let micros = if is_plain_decimal(s) {
            Some(parse_plain_decimal(s))
        } else {
            parse_float(s)
        }
        .ok_or_else(|| MoneyParseError::InvalidFormat(original.to_string()))?;

        if micros > MAX_AMOUNT * SCALE {
            return Err(MoneyParseError::OutOfRange(original.to_string()));
        }

        Ok(Self(if negative { -micros } else { micros }))
    }

    /// Format rounded to cents, with a currency symbol and thousands
    /// separators ("$1,234.56")
    pub fn format_grouped(&self, symbol: &str) -> String {
        let cents = self.cents();
        let digits = (cents.unsigned_abs() / 100).to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        let sign = if cents < 0 { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            grouped,
            cents.unsigned_abs() % 100
        )
    }

    /// Exact decimal text as stored in expense tables ("12.50", "0.004")
    ///
    /// Always at least two decimals; further digits only when non-zero.
    pub fn to_decimal_string(&self) -> String {
        let abs = self.0.unsigned_abs();
        let scale = SCALE as u128;

        let mut frac = format!("{:0width$}", abs % scale, width = SCALE_DIGITS as usize);
        while frac.len() > 2 && frac.ends_with('0') {
            frac.pop();
        }

        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{}", sign, abs / scale, frac)
    }
}

/// True for `digits[.digits]` with at least one digit overall
fn is_plain_decimal(s: &str) -> bool {
    let mut dots = 0;
    let mut digits = 0;
    for ch in s.chars() {
        match ch {
            '.' => dots += 1,
            c if c.is_ascii_digit() => digits += 1,
            _ => return false,
        }
    }
    dots <= 1 && digits > 0
}

/// Millionths for a plain decimal; saturates so the range check rejects huge values
fn parse_plain_decimal(s: &str) -> i128 {
    let (whole, frac) = s.split_once('.').unwrap_or((s, ""));

    let whole: i128 = if whole.is_empty() {
        0
    } else {
        whole.parse().unwrap_or(i128::MAX)
    };

    let frac_digits: Vec<i128> = frac
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(i128::from)
        .collect();
    let digit = |i: usize| frac_digits.get(i).copied().unwrap_or(0);

    let places = SCALE_DIGITS as usize;
    let mut micros = (0..places).fold(0, |acc, i| acc * 10 + digit(i));
    if digit(places) >= 5 {
        micros += 1;
    }

    whole.saturating_mul(SCALE).saturating_add(micros)
}

fn parse_float(s: &str) -> Option<i128> {
    let value: f64 = s.parse().ok()?;
    if !value.is_finite() || value.is_sign_negative() {
        return None;
    }
    // float to int casts saturate
    Some((value * SCALE as f64).round() as i128)
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_grouped("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Amount out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(s: &str) -> Money {
        Money::parse(s).unwrap()
    }

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.micros(), 10_500_000);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
        assert_eq!(format!("{}", Money::from_cents(123456)), "$1,234.56");
    }

    #[test]
    fn test_arithmetic() {
        let mut a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        a += b;
        assert_eq!(a, Money::from_cents(1500));
    }

    #[test]
    fn test_parse() {
        assert_eq!(parsed("10.50").cents(), 1050);
        assert_eq!(parsed("$10.50").cents(), 1050);
        assert_eq!(parsed("-10.50").cents(), -1050);
        assert_eq!(parsed("+3").cents(), 300);
        assert_eq!(parsed("10").cents(), 1000);
        assert_eq!(parsed("10.5").cents(), 1050);
        assert_eq!(parsed("0.05").cents(), 5);
        assert_eq!(parsed(".75").cents(), 75);
        assert_eq!(parsed("  12.50 ").cents(), 1250);
    }

    #[test]
    fn test_parse_keeps_sub_cent_digits() {
        assert_eq!(parsed("12.345").micros(), 12_345_000);
        assert_eq!(parsed("0.004").micros(), 4_000);
        assert_eq!(parsed("-0.000001").micros(), -1);
        assert_eq!(parsed("0.0000005").micros(), 1);
        assert_eq!(parsed("0.0000004").micros(), 0);
    }

    #[test]
    fn test_cents_round_half_away_from_zero() {
        assert_eq!(parsed("12.345").cents(), 1235);
        assert_eq!(parsed("12.344").cents(), 1234);
        assert_eq!(parsed("-0.005").cents(), -1);
        assert_eq!(parsed("0.004").cents(), 0);
        assert_eq!(parsed("9.999").cents(), 1000);
    }

    #[test]
    fn test_sub_cent_amounts_sum_before_rounding() {
        let total: Money = ["0.004", "0.004", "0.004"].iter().map(|s| parsed(s)).sum();
        assert_eq!(total.micros(), 12_000);
        assert_eq!(total.format_grouped("$"), "$0.01");
    }

    #[test]
    fn test_parse_exponent() {
        assert_eq!(parsed("1e3").cents(), 100_000);
        assert_eq!(parsed("-2.5E1").cents(), -2500);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("not-a-number").is_err());
        assert!(Money::parse("").is_err());
        assert!(Money::parse(".").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("inf").is_err());
        assert!(Money::parse("NaN").is_err());
        assert!(Money::parse("--5").is_err());
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(Money::parse("1000000000000000").is_ok());
        assert_eq!(
            Money::parse("1000000000000000.01"),
            Err(MoneyParseError::OutOfRange("1000000000000000.01".to_string()))
        );
        assert!(matches!(
            Money::parse("-90000000000000000"),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert!(matches!(
            Money::parse("1e300"),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert!(matches!(
            Money::parse("9".repeat(60).as_str()),
            Err(MoneyParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_largest_amounts_sum_without_overflow() {
        let max = parsed("1000000000000000");
        let total: Money = std::iter::repeat(max).take(10_000).sum();
        assert_eq!(total.cents(), MAX_AMOUNT * 100 * 10_000);
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(Money::from_cents(123456).format_grouped("$"), "$1,234.56");
        assert_eq!(Money::from_cents(100).format_grouped("$"), "$1.00");
        assert_eq!(
            Money::from_cents(-123456789).format_grouped("$"),
            "-$1,234,567.89"
        );
        assert_eq!(Money::from_cents(100000).format_grouped("€"), "€1,000.00");
    }

    #[test]
    fn test_decimal_string() {
        assert_eq!(Money::from_cents(1250).to_decimal_string(), "12.50");
        assert_eq!(Money::from_cents(-300).to_decimal_string(), "-3.00");
        assert_eq!(parsed("0.004").to_decimal_string(), "0.004");
        assert_eq!(parsed("-1.234567").to_decimal_string(), "-1.234567");
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let by_ref: Money = amounts.iter().sum();
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 600);
        assert_eq!(by_ref, total);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "10500000");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
