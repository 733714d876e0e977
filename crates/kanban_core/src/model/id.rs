//! Identifier types and generators.
//!
//! # Responsibility
//! - Name column/task identifiers explicitly in signatures.
//! - Produce fresh ids for new entities.
//!
//! # Invariants
//! - Generators never return the nil UUID.
//! - Uniqueness against live entities is enforced by the store allocator,
//!   generators only need to be practically unique.

use uuid::Uuid;

/// Stable identifier for one column.
pub type ColumnId = Uuid;

/// Stable identifier for one task.
pub type TaskId = Uuid;

/// Source of fresh entity identifiers.
pub trait IdGenerator {
    fn generate(&mut self) -> Uuid;
}

/// Random UUID v4 generator used by default sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn generate(&mut self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Deterministic generator yielding `1, 2, 3, ...` encoded as UUIDs.
///
/// Useful for reproducible demos and tests where ids are asserted.
#[derive(Debug, Clone, Default)]
pub struct SequentialIdGenerator {
    last: u128,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the sequence after `last`, so the next id is `last + 1`.
    pub fn starting_after(last: u128) -> Self {
        Self { last }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&mut self) -> Uuid {
        self.last = self.last.wrapping_add(1);
        if self.last == 0 {
            self.last = 1;
        }
        Uuid::from_u128(self.last)
    }
}

#[cfg(test)]
mod tests {
    use super::{IdGenerator, RandomIdGenerator, SequentialIdGenerator};
    use std::collections::HashSet;
    use uuid::Uuid;

    #[test]
    fn sequential_ids_are_monotonic_and_non_nil() {
        let mut ids = SequentialIdGenerator::new();
        assert_eq!(ids.generate(), Uuid::from_u128(1));
        assert_eq!(ids.generate(), Uuid::from_u128(2));
    }

    #[test]
    fn sequential_ids_skip_nil_on_wraparound() {
        let mut ids = SequentialIdGenerator::starting_after(u128::MAX);
        assert_eq!(ids.generate(), Uuid::from_u128(1));
    }

    #[test]
    fn random_ids_do_not_collide_at_session_scale() {
        let mut ids = RandomIdGenerator;
        let generated: HashSet<Uuid> = (0..1_000).map(|_| ids.generate()).collect();
        assert_eq!(generated.len(), 1_000);
        assert!(!generated.contains(&Uuid::nil()));
    }
}
