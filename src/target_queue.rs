//! LIFO store of cells to probe around confirmed hits.

use alloc::vec::Vec;

use crate::common::{Direction, Location};

/// A queued probe: the cell to fire at, the hit it was derived from and the
/// direction from that hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub location: Location,
    pub source: Location,
    pub direction: Direction,
}

impl Target {
    /// The probe one step from `source` in `direction`, if that does not
    /// leave the non-negative quadrant.
    pub fn around(source: Location, direction: Direction) -> Option<Target> {
        source.step(direction).map(|location| Target {
            location,
            source,
            direction,
        })
    }
}

/// Last-in-first-out queue of pending probes. The most recently discovered
/// neighbour is tried first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetQueue {
    stack: Vec<Target>,
}

impl TargetQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, target: Target) {
        self.stack.push(target);
    }

    pub fn pop(&mut self) -> Option<Target> {
        self.stack.pop()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Whether any pending probe aims at `at`.
    pub fn contains(&self, at: Location) -> bool {
        self.stack.iter().any(|t| t.location == at)
    }

    /// Pending probes, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Target> {
        self.stack.iter()
    }

    /// Remove the pending probe derived from `source` in `direction`.
    pub fn remove_probe(&mut self, source: Location, direction: Direction) -> Option<Target> {
        let idx = self
            .stack
            .iter()
            .rposition(|t| t.source == source && t.direction == direction)?;
        Some(self.stack.remove(idx))
    }

    /// Drop every pending probe whose source hit satisfies `from`, returning
    /// how many were dropped. Order of the remaining probes is kept.
    pub fn remove_from<F>(&mut self, mut from: F) -> usize
    where
        F: FnMut(Location) -> bool,
    {
        let before = self.stack.len();
        self.stack.retain(|t| !from(t.source));
        before - self.stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_most_recent_first() {
        let source = Location::new(4, 4);
        let mut queue = TargetQueue::new();
        for direction in Direction::ALL {
            queue.push(Target::around(source, direction).unwrap());
        }
        assert_eq!(queue.pop().map(|t| t.direction), Some(Direction::East));
        assert_eq!(queue.pop().map(|t| t.direction), Some(Direction::South));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn remove_probe_matches_source_and_direction() {
        let a = Location::new(2, 2);
        let b = Location::new(2, 3);
        let mut queue = TargetQueue::new();
        queue.push(Target::around(a, Direction::West).unwrap());
        queue.push(Target::around(b, Direction::West).unwrap());
        queue.push(Target::around(b, Direction::South).unwrap());

        let removed = queue.remove_probe(a, Direction::West).unwrap();
        assert_eq!(removed.location, Location::new(2, 1));
        assert_eq!(queue.len(), 2);
        assert!(queue.remove_probe(a, Direction::West).is_none());
        assert!(queue.contains(Location::new(3, 3)));
    }

    #[test]
    fn remove_from_keeps_other_sources_in_order() {
        let a = Location::new(5, 5);
        let b = Location::new(5, 6);
        let mut queue = TargetQueue::new();
        queue.push(Target::around(a, Direction::North).unwrap());
        queue.push(Target::around(b, Direction::North).unwrap());
        queue.push(Target::around(a, Direction::South).unwrap());
        queue.push(Target::around(b, Direction::East).unwrap());

        assert_eq!(queue.remove_from(|source| source == b), 2);
        let left: Vec<_> = queue.iter().map(|t| t.direction).collect();
        assert_eq!(left, vec![Direction::North, Direction::South]);
        assert_eq!(queue.remove_from(|_| false), 0);
    }
}
