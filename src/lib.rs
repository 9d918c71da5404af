//! Grid maze generation and path finding, with a terminal game built on top.
//!
//! A maze is a `W` by `H` grid whose open passages form a minimum spanning tree of randomly weighted
//! candidate edges, selected with Kruskal's algorithm. The library exposes the building blocks the
//! generator and the searches are made of (a deque with stack and queue adapters, union-find and an
//! edge quicksort) along with breadth-first and depth-first discovery orders and a cheapest route
//! search.
//!
//! The binary wraps the core in a terminal game: mazes are generated from a seed, walked with the
//! arrow keys, and the core's path lists are replayed over the board one cell per tick.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

pub mod collection;
pub mod deque;
pub mod error;
pub mod grid;
pub mod maze;
pub mod search;
pub mod shortest_path;
pub mod sort;
pub mod union_find;
pub mod weights;

mod app;
mod cli;
mod events;
mod game;
mod player;
mod raster;
mod replay;
mod types;
mod ui;

pub use app::App;
pub use cli::{init_logging, Args, Settings};
pub use collection::{Collection, Queue, Stack};
pub use deque::Deque;
pub use error::MazeError;
pub use grid::{Cell, CellId, Direction, Edge, EdgeId, OutEdge};
pub use maze::Maze;
pub use search::{find_path, search_path, SearchMode, Traversal};
pub use shortest_path::shortest_path;
pub use sort::sort_edges;
pub use union_find::UnionFind;
pub use weights::{SeededWeights, WeightSource, WEIGHT_LIMIT};
