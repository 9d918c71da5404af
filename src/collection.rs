//! Stack and queue adapters over [`Deque`] sharing one add/remove contract.
//!
//! Traversals are written once against [`Collection`] and pick their frontier discipline by the
//! adapter they are handed.

use crate::{deque::Deque, error::MazeError};

/// Uniform worklist contract used by graph traversals.
pub trait Collection<T> {
    /// Whether the collection holds no items.
    fn is_empty(&self) -> bool;

    /// Number of items in the collection.
    fn size(&self) -> usize;

    /// Adds an item to the collection.
    ///
    /// # Errors
    ///
    /// Propagates link failures from the underlying [`Deque`].
    fn add(&mut self, item: T) -> Result<(), MazeError>;

    /// Removes the next item according to the collection's discipline.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::EmptyCollection`] when there is nothing to remove.
    fn remove(&mut self) -> Result<T, MazeError>;
}

/// First-in first-out adapter: adds at the tail, removes from the head.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    /// Backing storage.
    items: Deque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::from_deque(Deque::new())
    }

    /// Wraps an existing deque, whose head becomes the front of the queue.
    pub const fn from_deque(items: Deque<T>) -> Self {
        Self { items }
    }
}

impl<T> Collection<T> for Queue<T> {
    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn size(&self) -> usize {
        self.items.size()
    }

    fn add(&mut self, item: T) -> Result<(), MazeError> {
        self.items.add_at_tail(item)
    }

    fn remove(&mut self) -> Result<T, MazeError> {
        self.items.remove_from_head()
    }
}

/// Last-in first-out adapter: adds and removes at the head.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    /// Backing storage.
    items: Deque<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self::from_deque(Deque::new())
    }

    /// Wraps an existing deque, whose head becomes the top of the stack.
    pub const fn from_deque(items: Deque<T>) -> Self {
        Self { items }
    }
}

impl<T> Collection<T> for Stack<T> {
    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn size(&self) -> usize {
        self.items.size()
    }

    fn add(&mut self, item: T) -> Result<(), MazeError> {
        self.items.add_at_head(item)
    }

    fn remove(&mut self) -> Result<T, MazeError> {
        self.items.remove_from_head()
    }
}
