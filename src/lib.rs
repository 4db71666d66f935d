//! Minimum knight-move distance on a rectangular `R x C` board in constant time,
//! with a breadth-first-search reference to check it against.

pub mod board;
pub mod coord;
pub mod distance;
pub mod grid;
pub mod oracle;
pub mod query;
pub mod verify;

pub use board::{Board, BoardError};
pub use coord::{Displacement, Square};
pub use distance::{knight_distance, knight_distance_raw, Distance};
pub use oracle::{bfs_distances, DistanceMap};
