//! Cheapest route between two cells by repeated edge relaxation.

use std::collections::HashMap;

use tracing::debug;

use crate::{
    collection::{Collection, Queue},
    error::MazeError,
    grid::CellId,
    maze::Maze,
};

/// Cheapest route from `start` to `end`, both included, following out-edges.
///
/// Cells are relaxed from a first-in first-out frontier: whenever a neighbor gets a strictly
/// smaller distance it is queued again. With non-negative weights the distances settle on the
/// minimum once the frontier empties. An unreachable `end` yields an empty route, and a route from
/// a cell to itself is that single cell.
///
/// # Errors
///
/// Returns [`MazeError::NullArgument`] if `start` or `end` is not a cell of `maze`.
pub fn shortest_path(maze: &Maze, start: CellId, end: CellId) -> Result<Vec<CellId>, MazeError> {
    let _ = maze.cell(start)?;
    let _ = maze.cell(end)?;

    let mut frontier = Queue::new();
    let mut distances: HashMap<CellId, u64> = HashMap::from([(start, 0)]);
    let mut predecessors: HashMap<CellId, CellId> = HashMap::new();
    frontier.add(start)?;

    while !frontier.is_empty() {
        let current = frontier.remove()?;
        let Some(&base) = distances.get(&current) else {
            continue;
        };

        for out in maze.cell(current)?.out_edges() {
            let candidate = base + u64::from(out.weight());
            let improves = distances
                .get(&out.to())
                .is_none_or(|known| candidate < *known);
            if improves {
                let _ = distances.insert(out.to(), candidate);
                let _ = predecessors.insert(out.to(), current);
                frontier.add(out.to())?;
            }
        }
    }

    let route = reconstruct(&predecessors, start, end);
    debug!(
        length = route.len(),
        cost = distances.get(&end).copied(),
        "finished shortest path"
    );

    Ok(route)
}

/// Walks predecessor links back from `end` and returns the route in forward order.
fn reconstruct(predecessors: &HashMap<CellId, CellId>, start: CellId, end: CellId) -> Vec<CellId> {
    if start == end {
        return vec![start];
    }
    if !predecessors.contains_key(&end) {
        return Vec::new();
    }

    let mut route = vec![end];
    let mut step = end;
    while step != start {
        let Some(previous) = predecessors.get(&step) else {
            return Vec::new();
        };
        step = *previous;
        route.push(step);
    }
    route.reverse();
    route
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::weights::SeededWeights;

    /// Returns a weight source yielding `weights` in order, then zeros.
    fn fixed(weights: Vec<u32>) -> impl FnMut() -> u32 {
        let mut weights = weights.into_iter();
        move || weights.next().unwrap_or(0)
    }

    /// Sum of the weights along consecutive cells of `route`.
    fn cost(maze: &Maze, route: &[CellId]) -> u64 {
        route
            .windows(2)
            .map(|pair| {
                maze.cell(pair[0])
                    .expect("route cell should exist")
                    .out_edges()
                    .iter()
                    .find(|out| out.to() == pair[1])
                    .map(|out| u64::from(out.weight()))
                    .expect("consecutive route cells should be joined by an out-edge")
            })
            .sum()
    }

    /// Cost of every simple route from `from` to `to`, by exhaustive depth-first enumeration.
    fn all_route_costs(maze: &Maze, from: CellId, to: CellId) -> Vec<u64> {
        fn walk(
            maze: &Maze,
            at: CellId,
            to: CellId,
            spent: u64,
            on_route: &mut HashSet<CellId>,
            costs: &mut Vec<u64>,
        ) {
            if at == to {
                costs.push(spent);
                return;
            }
            let cell = maze.cell(at).expect("cell should exist");
            for out in cell.out_edges() {
                let next = out.to();
                if on_route.insert(next) {
                    walk(maze, next, to, spent + u64::from(out.weight()), on_route, costs);
                    let _ = on_route.remove(&next);
                }
            }
        }

        let mut costs = Vec::new();
        let mut on_route = HashSet::from([from]);
        walk(maze, from, to, 0, &mut on_route, &mut costs);
        costs
    }

    #[test]
    fn test_two_by_two_route() {
        let maze = Maze::build(2, 2, &mut fixed(vec![5, 2, 10, 3])).expect("maze should build");

        assert_eq!(
            shortest_path(&maze, CellId::new(0), CellId::new(3)),
            Ok(vec![CellId::new(0), CellId::new(2), CellId::new(3)])
        );
        assert_eq!(
            shortest_path(&maze, CellId::new(1), CellId::new(3)),
            Ok(vec![
                CellId::new(1),
                CellId::new(0),
                CellId::new(2),
                CellId::new(3)
            ])
        );
    }

    #[test]
    fn test_route_endpoints_and_optimality() {
        for seed in 0..10 {
            let maze =
                Maze::build(6, 5, &mut SeededWeights::new(seed)).expect("maze should build");
            let route = shortest_path(&maze, maze.start(), maze.goal())
                .expect("shortest path should succeed");

            assert_eq!(route.first(), Some(&maze.start()));
            assert_eq!(route.last(), Some(&maze.goal()));

            let best = all_route_costs(&maze, maze.start(), maze.goal())
                .into_iter()
                .min()
                .expect("a perfect maze has a route between any two cells");
            assert_eq!(cost(&maze, &route), best, "seed {seed}");
        }
    }

    #[test]
    fn test_route_to_self() {
        let maze = Maze::build(1, 1, &mut SeededWeights::new(0)).expect("maze should build");

        assert_eq!(
            shortest_path(&maze, maze.start(), maze.goal()),
            Ok(vec![maze.start()])
        );
    }

    #[test]
    fn test_unreachable_is_empty() {
        let mut predecessors = HashMap::new();
        let _ = predecessors.insert(CellId::new(1), CellId::new(0));

        assert!(reconstruct(&predecessors, CellId::new(0), CellId::new(2)).is_empty());
        assert_eq!(
            reconstruct(&predecessors, CellId::new(0), CellId::new(1)),
            vec![CellId::new(0), CellId::new(1)]
        );
    }

    #[test]
    fn test_broken_chain_is_empty() {
        let mut predecessors = HashMap::new();
        let _ = predecessors.insert(CellId::new(3), CellId::new(2));

        assert!(reconstruct(&predecessors, CellId::new(0), CellId::new(3)).is_empty());
    }

    #[test]
    fn test_unknown_cells_are_rejected() {
        let maze = Maze::build(2, 2, &mut SeededWeights::new(0)).expect("maze should build");

        assert!(shortest_path(&maze, CellId::new(0), CellId::new(4)).is_err());
        assert!(shortest_path(&maze, CellId::new(9), CellId::new(0)).is_err());
    }

    #[test]
    fn test_shortest_path_does_not_touch_maze() {
        let maze = Maze::build(4, 4, &mut SeededWeights::new(8)).expect("maze should build");
        let before = maze.clone();
        let _ = shortest_path(&maze, maze.start(), maze.goal())
            .expect("shortest path should succeed");

        assert_eq!(maze, before);
    }
}
