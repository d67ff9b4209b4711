//! Hashing utilities for snapshot comparison.
//!
//! Uses FNV-1a for fast, deterministic hashing of simulation state. These
//! hashes are not cryptographically secure; they exist so two runs can be
//! compared generation by generation without keeping every grid around.

use hexlife_core::{DeathCause, Generation, Position};

use crate::snapshot::SimulationSnapshot;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_bytes(mut hash: u64, bytes: &[u8]) -> u64 {
    for &b in bytes {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

fn fnv1a_position(hash: u64, p: Position) -> u64 {
    let hash = fnv1a_bytes(hash, &p.x.to_le_bytes());
    fnv1a_bytes(hash, &p.y.to_le_bytes())
}

fn fnv1a_record(hash: u64, p: Position, generation: Generation, cause: DeathCause) -> u64 {
    let hash = fnv1a_position(hash, p);
    let hash = fnv1a_bytes(hash, &generation.0.to_le_bytes());
    let tag = match cause {
        DeathCause::Underpopulation => 0,
        DeathCause::Overpopulation => 1,
    };
    fnv1a_byte(hash, tag)
}

/// Compute a hash over everything a snapshot exposes.
///
/// Folds in the generation, grid size, every cell in canonical order, both
/// record lists (with their lengths, so records cannot migrate between
/// lists undetected) and the reseeded position.
pub fn snapshot_hash(snapshot: &SimulationSnapshot) -> u64 {
    let mut hash = FNV_OFFSET;
    hash = fnv1a_bytes(hash, &snapshot.generation.0.to_le_bytes());
    hash = fnv1a_bytes(hash, &snapshot.grid.size().to_le_bytes());
    for &alive in snapshot.grid.cells() {
        hash = fnv1a_byte(hash, u8::from(alive));
    }

    hash = fnv1a_bytes(hash, &(snapshot.death_events.len() as u64).to_le_bytes());
    for d in &snapshot.death_events {
        hash = fnv1a_record(hash, d.position, d.generation, d.cause);
    }
    hash = fnv1a_bytes(
        hash,
        &(snapshot.resurrection_events.len() as u64).to_le_bytes(),
    );
    for r in &snapshot.resurrection_events {
        hash = fnv1a_record(hash, r.position, r.generation, r.cause);
    }

    match snapshot.reseeded {
        Some(p) => fnv1a_position(fnv1a_byte(hash, 1), p),
        None => fnv1a_byte(hash, 0),
    }
}
