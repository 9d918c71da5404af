//! Tick-driven replay of path lists returned by the maze core.
//!
//! The core hands back complete, ordered lists of cells. This module reveals them one cell per
//! tick so the user can follow the order in which a search discovered the maze.

use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

use crate::{grid::CellId, types::Reveal};

/// Replay state for the path currently being revealed.
#[derive(Debug, Clone)]
pub(crate) struct Replay {
    /// Which list is being replayed, `None` when idle.
    ///
    /// This field tells the renderer how to color the revealed cells and is reset when the replay
    /// is cleared.
    pub(crate) kind: Option<Reveal>,
    /// Cells still waiting to be revealed, head first.
    pub(crate) pending: VecDeque<CellId>,
    /// Cells revealed so far, in reveal order.
    pub(crate) revealed: Vec<CellId>,
    /// Timestamp of the last revealed cell.
    pub(crate) last_update_time: Instant,
    /// Delay between two revealed cells.
    pub(crate) delay: Duration,
}

impl Replay {
    /// Creates an idle replay revealing one cell every `delay`.
    pub(crate) fn new(delay: Duration) -> Self {
        Self {
            kind: None,
            pending: VecDeque::new(),
            revealed: Vec::new(),
            last_update_time: Instant::now(),
            delay,
        }
    }

    /// Starts revealing `path`, dropping whatever was shown before.
    pub(crate) fn start(&mut self, kind: Reveal, path: Vec<CellId>) {
        self.kind = Some(kind);
        self.pending = path.into();
        self.revealed.clear();
        self.last_update_time = Instant::now();
    }

    /// Shows `path` in full at once.
    pub(crate) fn show(&mut self, kind: Reveal, path: Vec<CellId>) {
        self.kind = Some(kind);
        self.pending.clear();
        self.revealed = path;
    }

    /// Stops the replay and forgets every revealed cell.
    pub(crate) fn clear(&mut self) {
        self.kind = None;
        self.pending.clear();
        self.revealed.clear();
        self.last_update_time = Instant::now();
    }

    /// Whether cells are still waiting to be revealed.
    pub(crate) fn is_running(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Reveals the next cell, regardless of timing.
    ///
    /// Returns the revealed cell, or `None` once the list is exhausted.
    pub(crate) fn advance(&mut self) -> Option<CellId> {
        let cell = self.pending.pop_front()?;
        self.revealed.push(cell);
        Some(cell)
    }

    /// Reveals the next cell if the tick delay has elapsed since the last one.
    pub(crate) fn update(&mut self) {
        if self.is_running() && self.last_update_time.elapsed() >= self.delay {
            self.last_update_time = Instant::now();
            let _ = self.advance();
        }
    }
}
