//! Breadth-first and depth-first discovery over a maze's out-edges.
//!
//! Both orders come from the same driver; only the worklist handed to it differs.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::{
    collection::{Collection, Queue, Stack},
    error::MazeError,
    grid::CellId,
    maze::Maze,
};

/// Frontier discipline of a discovery search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchMode {
    /// Breadth-first: the worklist is a [`Queue`].
    Bfs,
    /// Depth-first: the worklist is a [`Stack`].
    Dfs,
}

impl SearchMode {
    /// Short human-readable name of the mode.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bfs => "breadth-first",
            Self::Dfs => "depth-first",
        }
    }
}

/// Result of a discovery search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Traversal {
    /// Cells in the order they were expanded, ending with the goal when it was reached.
    order: Vec<CellId>,
    /// For each discovered cell, the cell it was first discovered from.
    came_from: HashMap<CellId, CellId>,
}

impl Traversal {
    /// Cells in discovery order.
    pub fn order(&self) -> &[CellId] {
        &self.order
    }

    /// Consumes the traversal, keeping only the discovery order.
    pub fn into_order(self) -> Vec<CellId> {
        self.order
    }

    /// Whether `cell` was reached by the search.
    pub fn reached(&self, cell: CellId) -> bool {
        self.order.contains(&cell)
    }

    /// Route from the search's start to `cell` along discovery links.
    ///
    /// Empty if `cell` was never reached.
    pub fn route_to(&self, cell: CellId) -> Vec<CellId> {
        if !self.reached(cell) {
            return Vec::new();
        }

        let mut route = vec![cell];
        let mut step = cell;
        while let Some(previous) = self.came_from.get(&step) {
            route.push(*previous);
            step = *previous;
        }
        route.reverse();
        route
    }
}

/// Explores the maze from `start` until `end` is taken off `worklist` or the worklist runs dry.
///
/// Each cell is expanded at most once: cells already seen are discarded when they come off the
/// worklist. The maze itself is only read.
///
/// # Errors
///
/// Returns [`MazeError::NullArgument`] if `start` or `end` is not a cell of `maze`, and propagates
/// worklist failures.
pub fn search_path<C>(
    maze: &Maze,
    start: CellId,
    end: CellId,
    worklist: &mut C,
) -> Result<Traversal, MazeError>
where
    C: Collection<CellId> + ?Sized,
{
    let _ = maze.cell(start)?;
    let _ = maze.cell(end)?;

    let mut traversal = Traversal::default();
    let mut seen = HashSet::new();
    worklist.add(start)?;

    while !worklist.is_empty() {
        let next = worklist.remove()?;
        if seen.contains(&next) {
            continue;
        }
        if next == end {
            traversal.order.push(next);
            break;
        }

        for out in maze.cell(next)?.out_edges() {
            if !seen.contains(&out.to()) && out.to() != start {
                let _ = traversal.came_from.entry(out.to()).or_insert(next);
            }
            worklist.add(out.to())?;
        }
        let _ = seen.insert(next);
        traversal.order.push(next);
    }

    Ok(traversal)
}

/// Discovery order from `start` towards `end` in the given mode.
///
/// The goal is the last element if and only if it is reachable from `start`.
///
/// # Errors
///
/// Returns [`MazeError::NullArgument`] if `start` or `end` is not a cell of `maze`.
pub fn find_path(
    maze: &Maze,
    start: CellId,
    end: CellId,
    mode: SearchMode,
) -> Result<Vec<CellId>, MazeError> {
    let traversal = match mode {
        SearchMode::Bfs => search_path(maze, start, end, &mut Queue::new())?,
        SearchMode::Dfs => search_path(maze, start, end, &mut Stack::new())?,
    };

    debug!(
        mode = mode.label(),
        visited = traversal.order().len(),
        reached = traversal.reached(end),
        "finished discovery search"
    );

    Ok(traversal.into_order())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weights::SeededWeights;

    /// Returns a weight source yielding `weights` in order, then zeros.
    fn fixed(weights: Vec<u32>) -> impl FnMut() -> u32 {
        let mut weights = weights.into_iter();
        move || weights.next().unwrap_or(0)
    }

    /// A 3x1 corridor maze: 0 - 1 - 2.
    fn corridor() -> Maze {
        Maze::build(3, 1, &mut fixed(vec![1, 1])).expect("maze should build")
    }

    #[test]
    fn test_corridor_orders() {
        let maze = corridor();
        let ids = |indices: &[usize]| indices.iter().copied().map(CellId::new).collect::<Vec<_>>();

        for mode in [SearchMode::Bfs, SearchMode::Dfs] {
            assert_eq!(
                find_path(&maze, CellId::new(0), CellId::new(2), mode),
                Ok(ids(&[0, 1, 2]))
            );
        }
        assert_eq!(
            find_path(&maze, CellId::new(1), CellId::new(0), SearchMode::Bfs),
            Ok(ids(&[1, 0]))
        );
    }

    #[test]
    fn test_bfs_and_dfs_differ_on_branches() {
        // 2x2 with tree 0-1, 0-2, 2-3: BFS sees 1 before 3, DFS dives through 2 first.
        let maze = Maze::build(2, 2, &mut fixed(vec![5, 2, 10, 3])).expect("maze should build");
        let ids = |indices: &[usize]| indices.iter().copied().map(CellId::new).collect::<Vec<_>>();

        assert_eq!(
            find_path(&maze, CellId::new(0), CellId::new(3), SearchMode::Bfs),
            Ok(ids(&[0, 1, 2, 3]))
        );
        assert_eq!(
            find_path(&maze, CellId::new(0), CellId::new(3), SearchMode::Dfs),
            Ok(ids(&[0, 2, 3]))
        );
    }

    #[test]
    fn test_every_cell_at_most_once_and_goal_reached() {
        for seed in 0..10 {
            let maze =
                Maze::build(9, 7, &mut SeededWeights::new(seed)).expect("maze should build");
            for mode in [SearchMode::Bfs, SearchMode::Dfs] {
                let order = find_path(&maze, maze.start(), maze.goal(), mode)
                    .expect("search should succeed");
                let unique: HashSet<CellId> = order.iter().copied().collect();

                assert_eq!(unique.len(), order.len(), "seed {seed} {mode:?} repeats");
                assert_eq!(order.first(), Some(&maze.start()));
                assert_eq!(order.last(), Some(&maze.goal()));
            }
        }
    }

    #[test]
    fn test_single_cell_search() {
        let maze = Maze::build(1, 1, &mut SeededWeights::new(0)).expect("maze should build");

        for mode in [SearchMode::Bfs, SearchMode::Dfs] {
            assert_eq!(
                find_path(&maze, maze.start(), maze.goal(), mode),
                Ok(vec![maze.start()])
            );
        }
    }

    #[test]
    fn test_search_with_custom_worklist() {
        let maze = corridor();
        let mut queue = Queue::new();
        let traversal = search_path(&maze, CellId::new(0), CellId::new(2), &mut queue)
            .expect("search should succeed");

        assert!(traversal.reached(CellId::new(2)));
        assert_eq!(
            traversal.route_to(CellId::new(2)),
            vec![CellId::new(0), CellId::new(1), CellId::new(2)]
        );
        assert!(traversal.route_to(CellId::new(5)).is_empty());
    }

    #[test]
    fn test_route_matches_tree_path() {
        let maze = Maze::build(2, 2, &mut fixed(vec![5, 2, 10, 3])).expect("maze should build");
        let traversal = search_path(&maze, CellId::new(1), CellId::new(3), &mut Stack::new())
            .expect("search should succeed");

        assert_eq!(
            traversal.route_to(CellId::new(3)),
            vec![
                CellId::new(1),
                CellId::new(0),
                CellId::new(2),
                CellId::new(3)
            ]
        );
    }

    #[test]
    fn test_unknown_cells_are_rejected() {
        let maze = corridor();

        assert_eq!(
            find_path(&maze, CellId::new(0), CellId::new(3), SearchMode::Bfs),
            Err(MazeError::NullArgument {
                argument: "cell identifier"
            })
        );
        assert!(find_path(&maze, CellId::new(7), CellId::new(0), SearchMode::Dfs).is_err());
    }

    #[test]
    fn test_search_does_not_touch_maze() {
        let maze = Maze::build(5, 5, &mut SeededWeights::new(4)).expect("maze should build");
        let before = maze.clone();
        let _ = find_path(&maze, maze.start(), maze.goal(), SearchMode::Dfs)
            .expect("search should succeed");

        assert_eq!(maze, before);
    }
}
