// ==========================================
// Shipping Relay Planner - domain types
// ==========================================
// Constraint: the delivery calendar runs on days 1, 2, 4, 5, 6.
// Day 3 does not exist in this business domain.
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// DayTag - cyclical delivery-day label
// ==========================================
// Distinct from the calendar date: a batch of orders is confirmed for
// one of the five delivery days of the production cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DayTag {
    Day1,
    Day2,
    Day4,
    Day5,
    Day6,
}

impl DayTag {
    /// All valid delivery-day numbers, in cycle order.
    pub const VALID_DAYS: [u8; 5] = [1, 2, 4, 5, 6];

    /// Parse a delivery-day number. Returns `None` for anything outside
    /// {1, 2, 4, 5, 6} (including day 3).
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(DayTag::Day1),
            2 => Some(DayTag::Day2),
            4 => Some(DayTag::Day4),
            5 => Some(DayTag::Day5),
            6 => Some(DayTag::Day6),
            _ => None,
        }
    }

    /// The delivery-day number this tag stands for.
    pub fn as_number(&self) -> u8 {
        match self {
            DayTag::Day1 => 1,
            DayTag::Day2 => 2,
            DayTag::Day4 => 4,
            DayTag::Day5 => 5,
            DayTag::Day6 => 6,
        }
    }
}

impl fmt::Display for DayTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Day {}", self.as_number())
    }
}

impl TryFrom<u8> for DayTag {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        DayTag::from_number(n)
            .ok_or_else(|| format!("invalid day tag: {} (valid: 1, 2, 4, 5, 6)", n))
    }
}

impl From<DayTag> for u8 {
    fn from(tag: DayTag) -> u8 {
        tag.as_number()
    }
}

// ==========================================
// Tests
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_day_numbers_round_trip() {
        for n in DayTag::VALID_DAYS {
            let tag = DayTag::from_number(n).expect("valid day");
            assert_eq!(tag.as_number(), n);
        }
    }

    #[test]
    fn test_day_three_is_rejected() {
        assert_eq!(DayTag::from_number(3), None);
        assert_eq!(DayTag::from_number(0), None);
        assert_eq!(DayTag::from_number(7), None);
    }

    #[test]
    fn test_serde_uses_bare_number() {
        let json = serde_json::to_string(&DayTag::Day4).unwrap();
        assert_eq!(json, "4");

        let tag: DayTag = serde_json::from_str("6").unwrap();
        assert_eq!(tag, DayTag::Day6);

        let bad: Result<DayTag, _> = serde_json::from_str("3");
        assert!(bad.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(DayTag::Day5.to_string(), "Day 5");
    }
}
