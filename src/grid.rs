//! Grid model: cells, the candidate edges between them, and grid construction.

use std::fmt;

use crate::error::MazeError;

/// Stable identifier of a cell: its row-major index in the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(usize);

impl CellId {
    /// Wraps a row-major cell index.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Row-major index of the cell.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "#{}", self.0)
    }
}

/// Stable identifier of a candidate edge: its position in the maze's edge list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(usize);

impl EdgeId {
    /// Wraps an edge list position.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the edge in the maze's edge list.
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One of the four sides of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards the previous column.
    Left,
    /// Towards the previous row.
    Up,
    /// Towards the next column.
    Right,
    /// Towards the next row.
    Down,
}

/// A potential connection between two neighboring cells.
///
/// Only rightward and downward edges exist; the opposite direction is the same edge seen from
/// its `to` end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Identifier of this edge.
    pub(crate) id: EdgeId,
    /// Cell on the left of, or above, the connection.
    pub(crate) from: CellId,
    /// Cell on the right of, or below, the connection.
    pub(crate) to: CellId,
    /// Cost of the connection, fixed once the maze is built.
    pub(crate) weight: u32,
}

impl Edge {
    /// Creates an edge between two distinct cells.
    pub fn new(id: EdgeId, from: CellId, to: CellId, weight: u32) -> Self {
        debug_assert_ne!(from, to, "an edge must join two distinct cells");
        Self {
            id,
            from,
            to,
            weight,
        }
    }

    /// Identifier of the edge.
    pub const fn id(&self) -> EdgeId {
        self.id
    }

    /// Cell on the left of, or above, the connection.
    pub const fn from(&self) -> CellId {
        self.from
    }

    /// Cell on the right of, or below, the connection.
    pub const fn to(&self) -> CellId {
        self.to
    }

    /// Cost of crossing the edge.
    pub const fn weight(&self) -> u32 {
        self.weight
    }

    /// The end of the edge opposite to `cell`, if `cell` is one of its ends.
    pub fn other(&self, cell: CellId) -> Option<CellId> {
        if cell == self.from {
            Some(self.to)
        } else if cell == self.to {
            Some(self.from)
        } else {
            None
        }
    }
}

/// A traversable, directed view of a spanning-tree edge leaving a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OutEdge {
    /// Underlying undirected edge.
    pub(crate) edge: EdgeId,
    /// Cell reached by following the edge.
    pub(crate) to: CellId,
    /// Cost of following the edge.
    pub(crate) weight: u32,
}

impl OutEdge {
    /// Underlying undirected edge.
    pub const fn edge(&self) -> EdgeId {
        self.edge
    }

    /// Cell reached by following the edge.
    pub const fn to(&self) -> CellId {
        self.to
    }

    /// Cost of following the edge.
    pub const fn weight(&self) -> u32 {
        self.weight
    }
}

/// A node of the maze grid.
///
/// Walls and out-edges are filled in once, when the spanning tree has been chosen. The visited
/// flag belongs to whoever is playing the maze; searches never touch it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Row-major identifier.
    pub(crate) id: CellId,
    /// Column, counted from the left.
    pub(crate) x: usize,
    /// Row, counted from the top.
    pub(crate) y: usize,
    /// Edge shared with the left neighbor, which owns it as its right edge.
    pub(crate) left: Option<EdgeId>,
    /// Edge shared with the upper neighbor, which owns it as its bottom edge.
    pub(crate) top: Option<EdgeId>,
    /// Edge towards the right neighbor.
    pub(crate) right: Option<EdgeId>,
    /// Edge towards the lower neighbor.
    pub(crate) bottom: Option<EdgeId>,
    /// Whether the right side is blocked.
    pub(crate) right_wall: bool,
    /// Whether the bottom side is blocked.
    pub(crate) bottom_wall: bool,
    /// Whether a player has stepped on this cell.
    pub(crate) visited: bool,
    /// Edges usable for traversal, in the order they were added.
    pub(crate) out_edges: Vec<OutEdge>,
}

impl Cell {
    /// Creates a cell with every side walled and no out-edges.
    pub(crate) const fn new(id: CellId, x: usize, y: usize) -> Self {
        Self {
            id,
            x,
            y,
            left: None,
            top: None,
            right: None,
            bottom: None,
            right_wall: true,
            bottom_wall: true,
            visited: false,
            out_edges: Vec::new(),
        }
    }

    /// Identifier of the cell.
    pub const fn id(&self) -> CellId {
        self.id
    }

    /// Column and row of the cell.
    pub const fn coordinate(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// Whether the right side is blocked.
    pub const fn right_wall(&self) -> bool {
        self.right_wall
    }

    /// Whether the bottom side is blocked.
    pub const fn bottom_wall(&self) -> bool {
        self.bottom_wall
    }

    /// Whether a player has stepped on this cell.
    pub const fn is_visited(&self) -> bool {
        self.visited
    }

    /// Traversable edges leaving this cell.
    pub fn out_edges(&self) -> &[OutEdge] {
        &self.out_edges
    }

    /// Candidate edge on the given side, `None` at the grid boundary.
    pub const fn edge(&self, direction: Direction) -> Option<EdgeId> {
        match direction {
            Direction::Left => self.left,
            Direction::Up => self.top,
            Direction::Right => self.right,
            Direction::Down => self.bottom,
        }
    }
}

/// Builds the `width * height` cells in row-major order together with their candidate edges.
///
/// Every cell outside the last column gets a right edge and every cell outside the last row a
/// bottom edge. Each edge is listed once; the neighbor refers to it as its left or top edge.
///
/// # Errors
///
/// Returns [`MazeError::InvalidDimensions`] if either dimension is zero or the cell count
/// overflows.
pub(crate) fn build_grid(width: usize, height: usize) -> Result<(Vec<Cell>, Vec<Edge>), MazeError> {
    let count = width
        .checked_mul(height)
        .filter(|count| *count > 0)
        .ok_or(MazeError::InvalidDimensions { width, height })?;

    let mut cells: Vec<Cell> = (0..count)
        .map(|index| Cell::new(CellId(index), index % width, index / width))
        .collect();

    let mut edges = Vec::new();
    for index in 0..count {
        let (x, y) = (index % width, index / width);
        if x + 1 < width {
            edges.push(Edge::new(
                EdgeId(edges.len()),
                CellId(index),
                CellId(index + 1),
                0,
            ));
        }
        if y + 1 < height {
            edges.push(Edge::new(
                EdgeId(edges.len()),
                CellId(index),
                CellId(index + width),
                0,
            ));
        }
    }

    for edge in &edges {
        let horizontal = edge.from.0 / width == edge.to.0 / width;
        if let Some(from) = cells.get_mut(edge.from.0) {
            if horizontal {
                from.right = Some(edge.id);
            } else {
                from.bottom = Some(edge.id);
            }
        }
        if let Some(to) = cells.get_mut(edge.to.0) {
            if horizontal {
                to.left = Some(edge.id);
            } else {
                to.top = Some(edge.id);
            }
        }
    }

    Ok((cells, edges))
}
