//! Yen amounts.
//!
//! Prices on the menu are whole yen, so amounts are plain integers with no
//! minor unit and no currency tag.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// A whole-yen amount.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Yen(i64);

impl Yen {
    /// Zero yen.
    pub const ZERO: Yen = Yen(0);

    /// Create an amount.
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// The raw amount.
    pub fn amount(&self) -> i64 {
        self.0
    }

    /// Parse an attribute value such as `"1200"`.
    ///
    /// ```
    /// use taj_commerce::money::Yen;
    /// assert_eq!(Yen::parse(" 1200 "), Some(Yen::new(1200)));
    /// assert_eq!(Yen::parse("abc"), None);
    /// ```
    pub fn parse(value: &str) -> Option<Self> {
        value.trim().parse::<i64>().ok().map(Self)
    }

    /// Try to add another amount, returning None on overflow.
    pub fn checked_add(self, other: Yen) -> Option<Yen> {
        self.0.checked_add(other.0).map(Yen)
    }

    /// Sum amounts, returning None on overflow.
    pub fn try_sum<I: IntoIterator<Item = Yen>>(iter: I) -> Option<Yen> {
        iter.into_iter()
            .try_fold(Yen::ZERO, |acc, amount| acc.checked_add(amount))
    }

    /// Format with grouping but no symbol (e.g., "1,200").
    pub fn display_amount(&self) -> String {
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        if self.0 < 0 {
            format!("-{}", grouped)
        } else {
            grouped
        }
    }

    /// Format as a display string (e.g., "¥1,200").
    pub fn display(&self) -> String {
        format!("\u{00a5}{}", self.display_amount())
    }
}

impl Add for Yen {
    type Output = Yen;

    fn add(self, other: Yen) -> Yen {
        Yen(self.0 + other.0)
    }
}

impl Sum for Yen {
    fn sum<I: Iterator<Item = Yen>>(iter: I) -> Yen {
        iter.fold(Yen::ZERO, |acc, amount| acc + amount)
    }
}

impl fmt::Display for Yen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Yen::parse("980"), Some(Yen::new(980)));
        assert_eq!(Yen::parse(""), None);
        assert_eq!(Yen::parse("12.5"), None);
    }

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Yen::new(0).display(), "\u{00a5}0");
        assert_eq!(Yen::new(980).display(), "\u{00a5}980");
        assert_eq!(Yen::new(1200).display(), "\u{00a5}1,200");
        assert_eq!(Yen::new(1234567).display_amount(), "1,234,567");
        assert_eq!(Yen::new(-1500).display_amount(), "-1,500");
    }

    #[test]
    fn test_sum() {
        let total: Yen = [Yen::new(1200), Yen::new(980), Yen::new(300)]
            .into_iter()
            .sum();
        assert_eq!(total, Yen::new(2480));
    }

    #[test]
    fn test_try_sum_overflow() {
        assert_eq!(Yen::try_sum([Yen::new(i64::MAX), Yen::new(1)]), None);
        assert_eq!(Yen::try_sum(Vec::<Yen>::new()), Some(Yen::ZERO));
    }
}
