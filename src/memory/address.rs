// Thu Oct 15 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Address {
    value: u64,
}

impl Address {
    pub fn new(value: u64) -> Self {
        Self { value }
    }

    pub fn as_u64(&self) -> u64 {
        self.value
    }

    pub fn is_within_range(&self, start: Self, end: Self) -> bool {
        self.value >= start.value && self.value < end.value
    }
}

// Rendered form used in listings: lowercase hex, no padding.
impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.value)
    }
}

impl fmt::LowerHex for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.value, f)
    }
}

// Saturates at the top of the address space.
impl Add<u64> for Address {
    type Output = Self;
    fn add(self, rhs: u64) -> Self::Output {
        Self { value: self.value.saturating_add(rhs) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_listing_form() {
        assert_eq!(Address::new(0x1000).to_string(), "0x1000");
        assert_eq!(Address::new(0).to_string(), "0x0");
        assert_eq!(format!("{:x}", Address::new(0xdead)), "dead");
    }

    #[test]
    fn test_range_and_add() {
        let a = Address::new(0x1004);
        assert!(a.is_within_range(Address::new(0x1000), Address::new(0x1008)));
        assert!(!a.is_within_range(Address::new(0x1000), Address::new(0x1004)));
        assert_eq!(a + 4, Address::new(0x1008));
        assert_eq!(Address::new(u64::MAX - 0xf) + 0x100, Address::new(u64::MAX));
    }
}
