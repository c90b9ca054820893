//! Result of one move-generation pass for a single piece.

use std::collections::HashMap;

use crate::game_state::checkers_types::{Coordinate, PieceId};

/// Destinations a piece may move to plus, for capture landings, the ordered
/// squares whose pieces are removed when it lands there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveSet {
    pub piece: PieceId,
    pub origin: Coordinate,
    destinations: Vec<Coordinate>,
    captures: HashMap<Coordinate, Vec<Coordinate>>,
}

impl MoveSet {
    pub(crate) fn new(piece: PieceId, origin: Coordinate) -> Self {
        Self {
            piece,
            origin,
            destinations: Vec::new(),
            captures: HashMap::new(),
        }
    }

    pub(crate) fn push_step(&mut self, destination: Coordinate) {
        if !self.destinations.contains(&destination) {
            self.destinations.push(destination);
        }
    }

    /// Records a capture landing. A later path to the same landing replaces the
    /// capture list of the earlier one.
    pub(crate) fn push_capture(&mut self, landing: Coordinate, captured: Vec<Coordinate>) {
        self.push_step(landing);
        self.captures.insert(landing, captured);
    }

    /// Drops every non-capturing destination.
    pub(crate) fn retain_captures(&mut self) {
        let captures = &self.captures;
        self.destinations
            .retain(|destination| captures.contains_key(destination));
    }

    #[inline]
    pub fn destinations(&self) -> &[Coordinate] {
        &self.destinations
    }

    #[inline]
    pub fn contains(&self, destination: Coordinate) -> bool {
        self.destinations.contains(&destination)
    }

    /// Squares emptied by landing on `destination`; empty for a simple step.
    pub fn captured_by(&self, destination: Coordinate) -> &[Coordinate] {
        self.captures
            .get(&destination)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    #[inline]
    pub fn has_captures(&self) -> bool {
        !self.captures.is_empty()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.destinations.len()
    }
}
