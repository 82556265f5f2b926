//! Newtype IDs for type-safe identifiers.
//!
//! The catalog assigns every product a small positive integer that is
//! stable for the whole session. Wrapping it keeps product ids from being
//! confused with quantities or calorie counts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A product's unique identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(u32);

impl ProductId {
    /// Create an ID from its integer value.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the inner integer value.
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrip() {
        let id = ProductId::new(7);
        assert_eq!(id.get(), 7);
        assert_eq!(format!("{}", id), "7");
    }

    #[test]
    fn test_id_equality() {
        assert_eq!(ProductId::new(3), ProductId::from(3));
        assert_ne!(ProductId::new(3), ProductId::new(4));
    }
}
