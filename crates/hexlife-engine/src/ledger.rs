//! Event ledger: the death and resurrection history of every cell.
//!
//! Each position has at most one active [`DeathRecord`] and at most one
//! active [`ResurrectionRecord`]. Both are kept in position-keyed maps so
//! lookups and replacements are O(1). A step never mutates the ledger it
//! reads from: the lifecycle engine clones the previous generation's ledger
//! and applies that generation's events to the copy.

use hexlife_core::{DeathCause, DeathRecord, Generation, Position, ResurrectionRecord};
use indexmap::IndexMap;

/// Death and resurrection records keyed by position.
///
/// Iteration follows insertion order, which is deterministic because the
/// engine writes events in canonical cell order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventLedger {
    deaths: IndexMap<Position, DeathRecord>,
    resurrections: IndexMap<Position, ResurrectionRecord>,
}

impl EventLedger {
    /// An empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a death, superseding any earlier history at that position.
    ///
    /// Returns the death record that was replaced, if any.
    pub fn record_death(&mut self, record: DeathRecord) -> Option<DeathRecord> {
        self.resurrections.shift_remove(&record.position);
        self.deaths.insert(record.position, record)
    }

    /// Record a delayed resurrection.
    ///
    /// The originating death record stays in place; it cannot fire again
    /// because the generation counter only moves forward.
    pub fn record_resurrection(&mut self, record: ResurrectionRecord) {
        self.resurrections.insert(record.position, record);
    }

    /// Drop all history at `position`.
    pub fn clear(&mut self, position: Position) {
        self.deaths.shift_remove(&position);
        self.resurrections.shift_remove(&position);
    }

    /// Remove and return the resurrection record at `position`.
    pub fn take_resurrection(&mut self, position: Position) -> Option<ResurrectionRecord> {
        self.resurrections.shift_remove(&position)
    }

    /// The active death record at `position`.
    pub fn death_at(&self, position: Position) -> Option<&DeathRecord> {
        self.deaths.get(&position)
    }

    /// The active resurrection record at `position`.
    pub fn resurrection_at(&self, position: Position) -> Option<&ResurrectionRecord> {
        self.resurrections.get(&position)
    }

    /// The cause `position` is currently immune to, if any.
    pub fn immunity_at(&self, position: Position) -> Option<DeathCause> {
        self.resurrections.get(&position).map(|r| r.cause)
    }

    /// All active death records.
    pub fn deaths(&self) -> impl Iterator<Item = &DeathRecord> {
        self.deaths.values()
    }

    /// All active resurrection records.
    pub fn resurrections(&self) -> impl Iterator<Item = &ResurrectionRecord> {
        self.resurrections.values()
    }

    /// Death records exactly `delay` generations old at `now`.
    pub fn due_for_resurrection(
        &self,
        now: Generation,
        delay: u64,
    ) -> impl Iterator<Item = &DeathRecord> {
        self.deaths.values().filter(move |d| d.is_due(now, delay))
    }

    /// Number of active death records.
    pub fn death_count(&self) -> usize {
        self.deaths.len()
    }

    /// Number of active resurrection records.
    pub fn resurrection_count(&self) -> usize {
        self.resurrections.len()
    }

    /// Whether the ledger holds no records at all.
    pub fn is_empty(&self) -> bool {
        self.deaths.is_empty() && self.resurrections.is_empty()
    }

    /// Death records sorted into canonical (x-then-y) order.
    pub fn sorted_deaths(&self) -> Vec<DeathRecord> {
        let mut out: Vec<DeathRecord> = self.deaths.values().copied().collect();
        out.sort_by_key(|d| d.position);
        out
    }

    /// Resurrection records sorted into canonical (x-then-y) order.
    pub fn sorted_resurrections(&self) -> Vec<ResurrectionRecord> {
        let mut out: Vec<ResurrectionRecord> = self.resurrections.values().copied().collect();
        out.sort_by_key(|r| r.position);
        out
    }
}
