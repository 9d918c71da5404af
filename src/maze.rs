//! Maze construction through Kruskal's minimum spanning tree.
//!
//! Building a maze weighs every candidate edge, keeps the lightest edges that do not close a
//! cycle, then opens the walls and wires the out-edges of the chosen ones. The resulting graph is a
//! perfect maze: exactly one route joins any two cells.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::{
    error::MazeError,
    grid::{self, Cell, CellId, Direction, Edge, EdgeId, OutEdge},
    sort,
    union_find::UnionFind,
    weights::WeightSource,
};

/// A generated maze: its cells, candidate edges and the spanning tree carved through them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    /// Number of columns.
    width: usize,
    /// Number of rows.
    height: usize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
    /// Rightward and downward candidate edges, in construction order.
    edges: Vec<Edge>,
    /// Edges selected for the spanning tree, in selection order.
    spanning: Vec<EdgeId>,
}

impl Maze {
    /// Builds a `width` by `height` maze whose edge weights come from `weights`.
    ///
    /// Weights are requested once per candidate edge, in construction order.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::InvalidDimensions`] if either dimension is zero or the grid is too
    /// large to address.
    pub fn build<W>(width: usize, height: usize, weights: &mut W) -> Result<Self, MazeError>
    where
        W: WeightSource + ?Sized,
    {
        let (cells, mut edges) = grid::build_grid(width, height)?;
        for edge in &mut edges {
            edge.weight = weights.next_weight();
        }

        let spanning = spanning_tree(cells.len(), &edges);
        let mut maze = Self {
            width,
            height,
            cells,
            edges,
            spanning,
        };
        maze.carve()?;

        debug!(
            width,
            height,
            edges = maze.edges.len(),
            spanning = maze.spanning.len(),
            "built maze"
        );

        Ok(maze)
    }

    /// Number of columns.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub const fn height(&self) -> usize {
        self.height
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// All candidate edges, whether or not they are part of the spanning tree.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Identifiers of the spanning tree's edges, in the order Kruskal's algorithm chose them.
    pub fn spanning_tree(&self) -> &[EdgeId] {
        &self.spanning
    }

    /// Top-left cell, where play starts.
    pub const fn start(&self) -> CellId {
        CellId::new(0)
    }

    /// Bottom-right cell, the goal of the maze.
    pub fn goal(&self) -> CellId {
        CellId::new(self.cells.len().saturating_sub(1))
    }

    /// The cell identified by `id`.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::NullArgument`] if `id` does not belong to this maze.
    pub fn cell(&self, id: CellId) -> Result<&Cell, MazeError> {
        self.cells.get(id.index()).ok_or(MazeError::NullArgument {
            argument: "cell identifier",
        })
    }

    /// The cell at column `x` and row `y`, if it lies inside the grid.
    pub fn cell_at(&self, x: usize, y: usize) -> Option<CellId> {
        (x < self.width && y < self.height).then(|| CellId::new(y * self.width + x))
    }

    /// The candidate edge identified by `id`.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::NullArgument`] if `id` does not belong to this maze.
    pub fn edge(&self, id: EdgeId) -> Result<&Edge, MazeError> {
        self.edges.get(id.index()).ok_or(MazeError::NullArgument {
            argument: "edge identifier",
        })
    }

    /// Whether the edge `id` was selected for the spanning tree.
    pub fn is_spanning(&self, id: EdgeId) -> bool {
        self.spanning.contains(&id)
    }

    /// The cell reached by leaving `from` through its `direction` side, if no wall is in the way.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::NullArgument`] if `from` does not belong to this maze.
    pub fn passage(&self, from: CellId, direction: Direction) -> Result<Option<CellId>, MazeError> {
        let cell = self.cell(from)?;
        let Some(edge) = cell.edge(direction) else {
            return Ok(None);
        };

        Ok(cell
            .out_edges()
            .iter()
            .find(|out| out.edge() == edge)
            .map(OutEdge::to))
    }

    /// Records whether a player has stepped on `id`.
    ///
    /// This is the only cell state that may change after construction.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::NullArgument`] if `id` does not belong to this maze.
    pub fn set_visited(&mut self, id: CellId, visited: bool) -> Result<(), MazeError> {
        let cell = self.cells.get_mut(id.index()).ok_or(MazeError::NullArgument {
            argument: "cell identifier",
        })?;
        cell.visited = visited;
        Ok(())
    }

    /// Clears the visited flag of every cell.
    pub fn clear_visited(&mut self) {
        for cell in &mut self.cells {
            cell.visited = false;
        }
    }

    /// Opens the walls of spanning-tree edges and wires their out-edges in both directions.
    fn carve(&mut self) -> Result<(), MazeError> {
        let chosen: HashSet<EdgeId> = self.spanning.iter().copied().collect();

        for index in 0..self.cells.len() {
            let (right, bottom) = {
                let cell = self.cell(CellId::new(index))?;
                (cell.right, cell.bottom)
            };

            for (edge, is_right) in [(right, true), (bottom, false)] {
                let Some(edge) = edge.filter(|edge| chosen.contains(edge)) else {
                    continue;
                };
                let Edge {
                    from, to, weight, ..
                } = *self.edge(edge)?;

                let from_cell = self.cell_mut(from)?;
                if is_right {
                    from_cell.right_wall = false;
                } else {
                    from_cell.bottom_wall = false;
                }
                from_cell.out_edges.push(OutEdge { edge, to, weight });
                self.cell_mut(to)?.out_edges.push(OutEdge {
                    edge,
                    to: from,
                    weight,
                });
            }
        }

        Ok(())
    }

    /// Exclusive access to the cell identified by `id`.
    fn cell_mut(&mut self, id: CellId) -> Result<&mut Cell, MazeError> {
        self.cells.get_mut(id.index()).ok_or(MazeError::NullArgument {
            argument: "cell identifier",
        })
    }
}

/// Selects a minimum spanning tree over `cell_count` cells with Kruskal's algorithm.
///
/// Edges are visited by ascending weight; an edge is kept unless its ends are already in the same
/// group. Selection stops once `cell_count - 1` edges are kept or the edges run out.
pub fn spanning_tree(cell_count: usize, edges: &[Edge]) -> Vec<EdgeId> {
    let worklist = sort::sort_edges(edges);
    let target = cell_count.saturating_sub(1);
    let mut groups = UnionFind::with_elements((0..cell_count).map(CellId::new));
    let mut tree = Vec::with_capacity(target);

    for edge in &worklist {
        if tree.len() >= target {
            break;
        }
        if groups.connected(edge.to, edge.from) {
            trace!(edge = edge.id.index(), "skipping edge that closes a cycle");
            continue;
        }
        tree.push(edge.id);
        let _ = groups.union(edge.to, edge.from);
    }

    tree
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::weights::SeededWeights;

    /// Returns a weight source yielding `weights` in order, then zeros.
    fn fixed(weights: Vec<u32>) -> impl FnMut() -> u32 {
        let mut weights = weights.into_iter();
        move || weights.next().unwrap_or(0)
    }

    /// Cells reachable from the start through out-edges, found with a plain flood fill.
    fn reachable(maze: &Maze) -> HashSet<CellId> {
        let mut seen = HashSet::from([maze.start()]);
        let mut pending = VecDeque::from([maze.start()]);
        while let Some(id) = pending.pop_front() {
            let cell = maze.cell(id).expect("reachable cell should exist");
            for out in cell.out_edges() {
                if seen.insert(out.to()) {
                    pending.push_back(out.to());
                }
            }
        }
        seen
    }

    #[test]
    fn test_two_by_two_with_forced_weights() {
        let mut weights = fixed(vec![5, 2, 10, 3]);
        let maze = Maze::build(2, 2, &mut weights).expect("maze should build");

        let chosen: Vec<(usize, usize, u32)> = maze
            .spanning_tree()
            .iter()
            .map(|id| {
                let edge = maze.edge(*id).expect("spanning edge should exist");
                (edge.from().index(), edge.to().index(), edge.weight())
            })
            .collect();

        assert_eq!(chosen, vec![(0, 2, 2), (2, 3, 3), (0, 1, 5)]);
    }

    #[test]
    fn test_two_by_two_walls_and_out_edges() {
        let mut weights = fixed(vec![5, 2, 10, 3]);
        let maze = Maze::build(2, 2, &mut weights).expect("maze should build");
        let cell = |index| maze.cell(CellId::new(index)).expect("cell should exist");

        assert!(!cell(0).right_wall());
        assert!(!cell(0).bottom_wall());
        assert!(cell(1).bottom_wall(), "edge 1-3 is not in the tree");
        assert!(!cell(2).right_wall());
        assert!(cell(3).right_wall());
        assert!(cell(3).bottom_wall());

        let targets = |index| {
            cell(index)
                .out_edges()
                .iter()
                .map(|out| out.to().index())
                .collect::<Vec<_>>()
        };
        assert_eq!(targets(0), vec![1, 2]);
        assert_eq!(targets(1), vec![0]);
        assert_eq!(targets(2), vec![0, 3]);
        assert_eq!(targets(3), vec![2]);
    }

    #[test]
    fn test_reverse_out_edges_share_weight() {
        let mut weights = fixed(vec![5, 2, 10, 3]);
        let maze = Maze::build(2, 2, &mut weights).expect("maze should build");

        let back = maze
            .cell(CellId::new(1))
            .expect("cell should exist")
            .out_edges()
            .first()
            .copied()
            .expect("cell 1 should have an out-edge");
        assert_eq!(back.to(), CellId::new(0));
        assert_eq!(back.weight(), 5);
    }

    #[test]
    fn test_spanning_tree_properties_over_many_sizes() {
        for (width, height) in [(1, 1), (1, 7), (7, 1), (2, 2), (3, 4), (10, 5), (27, 14)] {
            for seed in 0..5 {
                let mut weights = SeededWeights::new(seed);
                let maze = Maze::build(width, height, &mut weights).expect("maze should build");
                let cells = width * height;

                assert_eq!(maze.cells().len(), cells);
                assert_eq!(maze.spanning_tree().len(), cells - 1);
                let unique: HashSet<EdgeId> = maze.spanning_tree().iter().copied().collect();
                assert_eq!(unique.len(), cells - 1, "no edge is chosen twice");
                assert_eq!(
                    reachable(&maze).len(),
                    cells,
                    "{width}x{height} seed {seed} is not connected"
                );

                let out_edges: usize = maze.cells().iter().map(|c| c.out_edges().len()).sum();
                assert_eq!(out_edges, 2 * (cells - 1));
            }
        }
    }

    #[test]
    fn test_large_maze_spans_every_cell() {
        let (width, height) = (200, 200);
        let mut weights = SeededWeights::new(2);
        let maze = Maze::build(width, height, &mut weights).expect("maze should build");

        assert_eq!(maze.spanning_tree().len(), width * height - 1);
        assert_eq!(reachable(&maze).len(), width * height);
    }

    #[test]
    fn test_walls_match_spanning_membership() {
        let mut weights = SeededWeights::new(9);
        let maze = Maze::build(6, 5, &mut weights).expect("maze should build");

        for cell in maze.cells() {
            let open = |direction| {
                cell.edge(direction)
                    .is_some_and(|edge| maze.is_spanning(edge))
            };
            assert_eq!(cell.right_wall(), !open(Direction::Right));
            assert_eq!(cell.bottom_wall(), !open(Direction::Down));
        }
    }

    #[test]
    fn test_spanning_tree_is_minimal() {
        // Brute-force minimum over a 2x3 grid's spanning trees.
        let mut weights = SeededWeights::new(3);
        let maze = Maze::build(2, 3, &mut weights).expect("maze should build");
        let edges = maze.edges();
        let total = |ids: &[EdgeId]| -> u32 {
            ids.iter()
                .map(|id| maze.edge(*id).expect("edge should exist").weight())
                .sum()
        };

        let mut best = u32::MAX;
        for mask in 0_u32..(1 << edges.len()) {
            if mask.count_ones() != 5 {
                continue;
            }
            let subset: Vec<Edge> = edges
                .iter()
                .filter(|edge| mask & (1 << edge.id().index()) != 0)
                .copied()
                .collect();
            let mut groups = UnionFind::new();
            if subset.iter().all(|edge| groups.union(edge.from(), edge.to())) {
                best = best.min(subset.iter().map(Edge::weight).sum());
            }
        }

        assert_eq!(total(maze.spanning_tree()), best);
    }

    #[test]
    fn test_single_cell_maze() {
        let mut weights = SeededWeights::new(1);
        let maze = Maze::build(1, 1, &mut weights).expect("maze should build");

        assert_eq!(maze.cells().len(), 1);
        assert!(maze.edges().is_empty());
        assert!(maze.spanning_tree().is_empty());
        assert_eq!(maze.start(), maze.goal());
    }

    #[test]
    fn test_invalid_dimensions() {
        let mut weights = SeededWeights::new(1);

        assert_eq!(
            Maze::build(0, 4, &mut weights),
            Err(MazeError::InvalidDimensions {
                width: 0,
                height: 4
            })
        );
        assert!(Maze::build(4, 0, &mut weights).is_err());
    }

    #[test]
    fn test_same_seed_same_maze() {
        let first = Maze::build(8, 8, &mut SeededWeights::new(77)).expect("maze should build");
        let second = Maze::build(8, 8, &mut SeededWeights::new(77)).expect("maze should build");

        assert_eq!(first, second);
    }

    #[test]
    fn test_passage_follows_open_walls() {
        let mut weights = fixed(vec![5, 2, 10, 3]);
        let maze = Maze::build(2, 2, &mut weights).expect("maze should build");

        assert_eq!(
            maze.passage(CellId::new(0), Direction::Right),
            Ok(Some(CellId::new(1)))
        );
        assert_eq!(
            maze.passage(CellId::new(1), Direction::Left),
            Ok(Some(CellId::new(0)))
        );
        assert_eq!(maze.passage(CellId::new(1), Direction::Down), Ok(None));
        assert_eq!(maze.passage(CellId::new(3), Direction::Up), Ok(None));
        assert_eq!(maze.passage(CellId::new(0), Direction::Up), Ok(None));
        assert!(maze.passage(CellId::new(4), Direction::Up).is_err());
    }

    #[test]
    fn test_visited_flags() {
        let mut weights = SeededWeights::new(2);
        let mut maze = Maze::build(3, 3, &mut weights).expect("maze should build");

        maze.set_visited(CellId::new(4), true)
            .expect("cell should exist");
        assert!(maze.cell(CellId::new(4)).expect("cell should exist").is_visited());
        assert!(maze.set_visited(CellId::new(9), true).is_err());

        maze.clear_visited();
        assert!(maze.cells().iter().all(|cell| !cell.is_visited()));
    }

    #[test]
    fn test_cell_lookup() {
        let mut weights = SeededWeights::new(2);
        let maze = Maze::build(4, 3, &mut weights).expect("maze should build");

        assert_eq!(maze.cell_at(3, 2), Some(CellId::new(11)));
        assert_eq!(maze.cell_at(4, 0), None);
        assert_eq!(maze.cell_at(0, 3), None);
        assert_eq!(maze.goal(), CellId::new(11));
        assert!(maze.cell(CellId::new(12)).is_err());
    }
}
