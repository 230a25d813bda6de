//! Monotonic counters handed to the engines that mint ids and stacking values.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Strictly increasing `u64` source.
pub struct SequenceGenerator {
    next: u64,
}

impl SequenceGenerator {
    /// Creates a generator whose first value is `first`.
    pub const fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    /// Returns the next value and advances.
    pub fn next_value(&mut self) -> u64 {
        let value = self.next;
        self.next = self.next.saturating_add(1);
        value
    }

    /// Returns the value the next call to [`Self::next_value`] will produce.
    pub fn peek(&self) -> u64 {
        self.next
    }
}

impl Default for SequenceGenerator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_strictly_increase_from_the_seed() {
        let mut seq = SequenceGenerator::starting_at(10);
        assert_eq!(seq.peek(), 10);
        assert_eq!(seq.next_value(), 10);
        assert_eq!(seq.next_value(), 11);
        assert_eq!(seq.peek(), 12);
    }
}
