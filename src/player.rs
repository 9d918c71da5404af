//! The player's position in the maze and the trail left behind it.

use color_eyre::eyre::Result;

use crate::{
    grid::{CellId, Direction},
    maze::Maze,
};

/// Player state for a single maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Player {
    /// Cell the player currently stands on.
    pub(crate) current: CellId,
    /// Cells stepped on before the current one, without repetitions, oldest first.
    pub(crate) trail: Vec<CellId>,
}

impl Player {
    /// Places a player on the start cell of `maze` and marks that cell visited.
    pub(crate) fn spawn(maze: &mut Maze) -> Result<Self> {
        let start = maze.start();
        maze.set_visited(start, true)?;

        Ok(Self {
            current: start,
            trail: Vec::new(),
        })
    }

    /// Moves one cell in `direction` if the maze has a passage there.
    ///
    /// Returns whether the player moved. Walls and the grid boundary leave the player in place.
    pub(crate) fn step(&mut self, maze: &mut Maze, direction: Direction) -> Result<bool> {
        let Some(next) = maze.passage(self.current, direction)? else {
            return Ok(false);
        };

        if !self.trail.contains(&self.current) {
            self.trail.push(self.current);
        }
        self.current = next;
        maze.set_visited(next, true)?;

        Ok(true)
    }
}
