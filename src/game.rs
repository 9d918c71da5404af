//! A single round of play: one generated maze, its player and the current replay.

use std::time::Duration;

use color_eyre::eyre::Result;

use crate::{
    grid::{CellId, Direction},
    maze::Maze,
    player::Player,
    replay::Replay,
    search,
    shortest_path::shortest_path,
    types::Reveal,
    weights::SeededWeights,
};

/// State of the maze being played.
#[derive(Debug, Clone)]
pub(crate) struct Game {
    /// The generated maze.
    pub(crate) maze: Maze,
    /// Seed the maze's weights were drawn from.
    pub(crate) seed: u64,
    /// The player walking the maze.
    pub(crate) player: Player,
    /// Path list currently revealed over the maze.
    pub(crate) replay: Replay,
}

impl Game {
    /// Generates a `width` by `height` maze from `seed` and places the player at its start.
    ///
    /// # Errors
    ///
    /// This function may return errors if the dimensions are rejected by the maze builder.
    pub(crate) fn new(width: usize, height: usize, seed: u64, tick: Duration) -> Result<Self> {
        let mut maze = Maze::build(width, height, &mut SeededWeights::new(seed))?;
        let player = Player::spawn(&mut maze)?;

        Ok(Self {
            maze,
            seed,
            player,
            replay: Replay::new(tick),
        })
    }

    /// Whether the player stands on the goal.
    pub(crate) fn is_solved(&self) -> bool {
        self.player.current == self.maze.goal()
    }

    /// Moves the player one cell, unless the maze is already solved.
    pub(crate) fn move_player(&mut self, direction: Direction) -> Result<()> {
        if !self.is_solved() {
            let _ = self.player.step(&mut self.maze, direction)?;
        }

        Ok(())
    }

    /// The path list of the given kind, from the start of the maze to its goal.
    pub(crate) fn path(&self, kind: Reveal) -> Result<Vec<CellId>> {
        let (start, goal) = (self.maze.start(), self.maze.goal());
        let path = match kind {
            Reveal::Answer => shortest_path(&self.maze, start, goal)?,
            Reveal::Search(mode) => search::find_path(&self.maze, start, goal, mode)?,
        };

        Ok(path)
    }

    /// Starts revealing the path list of the given kind, one cell per tick.
    pub(crate) fn reveal(&mut self, kind: Reveal) -> Result<()> {
        let path = self.path(kind)?;
        self.replay.start(kind, path);

        Ok(())
    }

    /// Shows the answer path in full, as done once the maze is solved.
    pub(crate) fn show_answer(&mut self) -> Result<()> {
        let path = self.path(Reveal::Answer)?;
        self.replay.show(Reveal::Answer, path);

        Ok(())
    }
}
