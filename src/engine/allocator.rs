// ==========================================
// Shipping Relay Planner - trailer allocator
// ==========================================
// Responsibility: partition a location's aggregate stack count into a
// sequence of fixed-capacity trailers.
// Constraint: stacks are fungible across trailers, so the greedy pass
// already yields the minimum trailer count ceil(total / 98). This is
// a partition, not a bin-packing search.
// ==========================================

use tracing::instrument;

use crate::domain::relay::{Trailer, TRAILER_CAPACITY_STACKS};

// ==========================================
// LoadIdSequence - load identifier source
// ==========================================
// Monotonic counter shared across one allocation run. Uniqueness is
// guaranteed by construction instead of relying on random identifiers
// without a collision check.
#[derive(Debug)]
pub struct LoadIdSequence {
    next: u32,
}

impl LoadIdSequence {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Next opaque load identifier, unique within this sequence.
    pub fn next_id(&mut self) -> String {
        let id = format!("LD{:06}", self.next);
        self.next += 1;
        id
    }
}

impl Default for LoadIdSequence {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// TrailerAllocator - fixed-capacity partition
// ==========================================
pub struct TrailerAllocator {
    // stateless engine
}

impl TrailerAllocator {
    pub fn new() -> Self {
        Self {}
    }

    /// Partition `total_stacks` into trailers of at most 98 stacks.
    ///
    /// Trailers are numbered sequentially from 1 and returned in that
    /// order; the ordering is significant downstream. Zero stacks
    /// yields zero trailers, and an exact multiple of 98 yields only
    /// full trailers with no zero-stack remainder appended.
    #[instrument(skip(self, load_ids))]
    pub fn allocate(&self, total_stacks: u32, load_ids: &mut LoadIdSequence) -> Vec<Trailer> {
        let mut trailers = Vec::new();
        let mut remaining = total_stacks;
        let mut number = 1u32;

        while remaining > 0 {
            let stacks = remaining.min(TRAILER_CAPACITY_STACKS);
            trailers.push(Trailer::new(number, stacks, load_ids.next_id()));
            remaining -= stacks;
            number += 1;
        }

        trailers
    }
}

impl Default for TrailerAllocator {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// Tests
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    fn allocate(total_stacks: u32) -> Vec<Trailer> {
        let mut seq = LoadIdSequence::new();
        TrailerAllocator::new().allocate(total_stacks, &mut seq)
    }

    #[test]
    fn test_full_plus_remainder() {
        // 150 stacks -> [98, 52]
        let trailers = allocate(150);
        let stacks: Vec<u32> = trailers.iter().map(|t| t.stacks).collect();
        assert_eq!(stacks, vec![98, 52]);
    }

    #[test]
    fn test_exact_multiple_no_empty_trailer() {
        // 196 stacks -> [98, 98], never a trailing zero-stack trailer
        let trailers = allocate(196);
        let stacks: Vec<u32> = trailers.iter().map(|t| t.stacks).collect();
        assert_eq!(stacks, vec![98, 98]);
    }

    #[test]
    fn test_zero_stacks_zero_trailers() {
        assert!(allocate(0).is_empty());
    }

    #[test]
    fn test_single_partial_trailer() {
        let trailers = allocate(1);
        assert_eq!(trailers.len(), 1);
        assert_eq!(trailers[0].stacks, 1);
    }

    #[test]
    fn test_sequence_numbers_ascend_from_one() {
        let trailers = allocate(300);
        let numbers: Vec<u32> = trailers.iter().map(|t| t.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_partition_properties_over_range() {
        // count = ceil(total/98), every load in (0, 98], sum preserved
        for total in 0..=500u32 {
            let trailers = allocate(total);
            assert_eq!(trailers.len() as u32, total.div_ceil(TRAILER_CAPACITY_STACKS));
            for t in &trailers {
                assert!(t.stacks > 0 && t.stacks <= TRAILER_CAPACITY_STACKS);
            }
            let sum: u32 = trailers.iter().map(|t| t.stacks).sum();
            assert_eq!(sum, total);
        }
    }

    #[test]
    fn test_load_ids_unique_across_locations() {
        let allocator = TrailerAllocator::new();
        let mut seq = LoadIdSequence::new();

        let first = allocator.allocate(150, &mut seq);
        let second = allocator.allocate(200, &mut seq);

        let mut ids: Vec<&str> = first
            .iter()
            .chain(second.iter())
            .map(|t| t.load_id.as_str())
            .collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }
}
