//! Scan-ordered candidate set driving Prim's algorithm.
//!
//! Candidates live in an arena in insertion order. Removal only flips a flag
//! and clears the vertex's lookup entry, so the scan order of the remaining
//! candidates never changes. Selecting the minimum is a full linear scan and
//! lowering a cost is an in-place update.

use std::fmt;

use crate::{
    error::{PrimPathError, Result},
    graph::{Cost, VertexId},
};

/// A vertex outside the tree together with its cheapest known entry cost.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Candidate {
    vertex: VertexId,
    cost: Cost,
}

impl Candidate {
    /// Returns the candidate vertex.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex(&self) -> VertexId { self.vertex }

    /// Returns the cheapest known cost to attach the vertex to the tree.
    #[must_use]
    #[rustfmt::skip]
    pub const fn cost(&self) -> Cost { self.cost }
}

#[derive(Clone, Debug)]
struct Slot {
    candidate: Candidate,
    removed: bool,
}

/// Candidates for Prim's algorithm with a vertex → slot lookup table.
///
/// # Examples
/// ```
/// use primpath_core::CandidateSet;
///
/// let mut set = CandidateSet::from_costs(&[5, 2, 2]).expect("allocation");
/// set.decrease_key(0, 1);
/// let first = set.extract_min().expect("set is non-empty");
/// assert_eq!((first.vertex(), first.cost()), (0, 1));
/// // Ties resolve to the earliest remaining candidate in scan order.
/// assert_eq!(set.extract_min().map(|c| c.vertex()), Some(1));
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct CandidateSet {
    slots: Vec<Slot>,
    positions: Vec<Option<usize>>,
    live: usize,
}

impl CandidateSet {
    /// Creates one candidate per vertex, in vertex order, with the given
    /// initial costs.
    ///
    /// # Errors
    /// Returns [`PrimPathError::AllocationFailure`] when the arena or lookup
    /// table cannot be reserved.
    pub fn from_costs(costs: &[Cost]) -> Result<Self> {
        let count = costs.len();
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(count)
            .map_err(|_| PrimPathError::AllocationFailure {
                resource: "candidate set",
                requested: count,
            })?;
        let mut positions = Vec::new();
        positions
            .try_reserve_exact(count)
            .map_err(|_| PrimPathError::AllocationFailure {
                resource: "candidate lookup table",
                requested: count,
            })?;

        for (vertex, &cost) in costs.iter().enumerate() {
            positions.push(Some(slots.len()));
            slots.push(Slot {
                candidate: Candidate { vertex, cost },
                removed: false,
            });
        }

        Ok(Self {
            slots,
            positions,
            live: count,
        })
    }

    /// Returns the number of candidates not yet extracted.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.live }

    /// Returns `true` once every candidate has been extracted.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.live == 0 }

    /// Returns `true` while `vertex` is still a candidate.
    #[must_use]
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.position(vertex).is_some()
    }

    /// Returns the current cost recorded for `vertex`, if it is still a
    /// candidate.
    #[must_use]
    pub fn cost(&self, vertex: VertexId) -> Option<Cost> {
        self.position(vertex)
            .and_then(|index| self.slots.get(index))
            .map(|slot| slot.candidate.cost)
    }

    fn position(&self, vertex: VertexId) -> Option<usize> {
        self.positions.get(vertex).copied().flatten()
    }

    /// Removes and returns the cheapest candidate.
    ///
    /// Every remaining candidate is inspected; on equal costs the one met
    /// first in scan order wins.
    pub fn extract_min(&mut self) -> Option<Candidate> {
        let mut best: Option<(usize, Cost)> = None;
        for (index, slot) in self.slots.iter().enumerate() {
            if slot.removed {
                continue;
            }
            match best {
                Some((_, cost)) if slot.candidate.cost >= cost => {}
                _ => best = Some((index, slot.candidate.cost)),
            }
        }

        let (index, _) = best?;
        let slot = self.slots.get_mut(index)?;
        slot.removed = true;
        let candidate = slot.candidate;
        if let Some(entry) = self.positions.get_mut(candidate.vertex) {
            *entry = None;
        }
        self.live = self.live.saturating_sub(1);
        Some(candidate)
    }

    /// Overwrites the cost of `vertex` in place without reordering.
    ///
    /// Does nothing when `vertex` has already been extracted.
    pub fn decrease_key(&mut self, vertex: VertexId, cost: Cost) {
        let Some(index) = self.position(vertex) else {
            return;
        };
        if let Some(slot) = self.slots.get_mut(index) {
            slot.candidate.cost = cost;
        }
    }

    /// Iterates over the remaining candidates in scan order.
    pub fn iter(&self) -> impl Iterator<Item = Candidate> + '_ {
        self.slots
            .iter()
            .filter(|slot| !slot.removed)
            .map(|slot| slot.candidate)
    }
}

/// Renders one ` COM: vertex, MIN: cost` line per remaining candidate.
impl fmt::Display for CandidateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for candidate in self.iter() {
            writeln!(f, " COM: {}, MIN: {}", candidate.vertex, candidate.cost)?;
        }
        Ok(())
    }
}
