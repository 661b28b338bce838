//! **gridpath-core**: the grid model shared by the *gridpath* crates.
//!
//! This crate provides the static side of a pathfinding problem: cell
//! coordinates, a square passability grid with deterministic 4-neighbour
//! adjacency, an editor-facing [`Board`] that owns the start/end designation,
//! and a plain-text layout format for building boards.

pub mod board;
pub mod error;
pub mod geom;
pub mod grid;
pub mod layout;

pub use board::{Board, Placement};
pub use error::{EndpointError, GridError};
pub use geom::Coordinate;
pub use grid::{Grid, Passability};
pub use layout::LayoutError;
