//! A fixed-point money type with two fractional digits.
//!
//! Amounts are held as minor units (cents) in an `i64` so that SQLite can
//! apply balance deltas with exact integer arithmetic. Floating-point never
//! enters any money calculation. On the wire the type is a decimal string
//! such as `"123.45"`.

use std::{fmt, ops, str::FromStr};

use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::Error;

/// A signed amount of money with two fractional digits of precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Money(i64);

impl Money {
    /// An amount of zero.
    pub const ZERO: Money = Money(0);

    /// Create an amount from minor units (cents).
    pub const fn from_minor_units(units: i64) -> Self {
        Self(units)
    }

    /// The amount in minor units (cents).
    pub const fn minor_units(self) -> i64 {
        self.0
    }

    /// Whether the amount is strictly greater than zero.
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl ops::Neg for Money {
    type Output = Money;

    fn neg(self) -> Self::Output {
        Money(-self.0)
    }
}

impl ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Self::Output {
        Money(self.0 + rhs.0)
    }
}

impl ops::Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Self::Output {
        Money(self.0 - rhs.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let units = self.0.unsigned_abs();

        write!(f, "{sign}{}.{:02}", units / 100, units % 100)
    }
}

impl FromStr for Money {
    type Err = Error;

    /// Parse a decimal string such as "12", "12.3" or "-12.34".
    ///
    /// At most two fractional digits are accepted since amounts are
    /// fixed-point with two fractional digits.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidInput(format!("\"{text}\" is not a valid amount"));

        let trimmed = text.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let (whole_text, cents_text) = match unsigned.split_once('.') {
            Some((whole, cents)) => (whole, cents),
            None => (unsigned, ""),
        };

        if whole_text.is_empty() || !whole_text.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(invalid());
        }

        if cents_text.len() > 2 || !cents_text.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(invalid());
        }

        let whole: i64 = whole_text.parse().map_err(|_| invalid())?;
        let cents: i64 = match cents_text.len() {
            0 => 0,
            1 => cents_text.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => cents_text.parse().map_err(|_| invalid())?,
        };

        let units = whole
            .checked_mul(100)
            .and_then(|units| units.checked_add(cents))
            .ok_or_else(invalid)?;

        Ok(Money(if negative { -units } else { units }))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;

        text.parse().map_err(de::Error::custom)
    }
}

impl ToSql for Money {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.0))
    }
}

impl FromSql for Money {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        i64::column_result(value).map(Money)
    }
}
