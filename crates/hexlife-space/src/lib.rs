//! Spatial layer for the hexlife cellular automaton.
//!
//! [`HexNeighbourhood`] answers "which cells are adjacent" for a bounded
//! square grid under the axial hex offsets, and [`WorldGrid`] stores the
//! alive/dead state of every cell, delegating neighbour counting to it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod hex;

pub use grid::WorldGrid;
pub use hex::{HexNeighbourhood, HEX_OFFSETS};
