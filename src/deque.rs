//! Double-ended queue backed by a circular, sentinel-headed list of links.
//!
//! Links live in an arena and refer to each other by slot index. Slot `0` always holds the
//! sentinel, whose `next` is the head of the deque and whose `prev` is the tail. Removed slots are
//! recycled by later insertions.

use std::mem;

use crate::error::MazeError;

/// Arena index of the sentinel slot.
const SENTINEL: usize = 0;

/// Content of a single arena slot.
#[derive(Debug, Clone)]
enum Slot<T> {
    /// The list header; carries no data.
    Sentinel,
    /// A live element of the deque.
    Node(T),
    /// A removed slot waiting to be reused.
    Vacant,
}

/// Arena slot together with its two neighbor indices.
#[derive(Debug, Clone)]
struct Link<T> {
    /// What the slot holds.
    slot: Slot<T>,
    /// Index of the following slot, towards the tail.
    next: usize,
    /// Index of the preceding slot, towards the head.
    prev: usize,
}

/// Generic double-ended queue with constant-time insertion and removal at both ends.
///
/// Removing from an empty deque is an error rather than a silent default, see
/// [`MazeError::EmptyCollection`].
#[derive(Debug, Clone)]
pub struct Deque<T> {
    /// Arena of slots; index [`SENTINEL`] is the header.
    links: Vec<Link<T>>,
    /// Indices of vacant slots available for reuse.
    vacant: Vec<usize>,
    /// Number of live nodes, the sentinel excluded.
    len: usize,
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deque<T> {
    /// Creates an empty deque whose sentinel points at itself.
    pub fn new() -> Self {
        Self {
            links: vec![Link {
                slot: Slot::Sentinel,
                next: SENTINEL,
                prev: SENTINEL,
            }],
            vacant: Vec::new(),
            len: 0,
        }
    }

    /// Number of elements currently stored.
    pub const fn size(&self) -> usize {
        self.len
    }

    /// Whether the deque holds no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts `value` in front of the current head.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::NullArgument`] if the sentinel's links are corrupted.
    pub fn add_at_head(&mut self, value: T) -> Result<(), MazeError> {
        let head = self.link(SENTINEL)?.next;
        self.insert_between(SENTINEL, head, value)
    }

    /// Inserts `value` after the current tail.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::NullArgument`] if the sentinel's links are corrupted.
    pub fn add_at_tail(&mut self, value: T) -> Result<(), MazeError> {
        let tail = self.link(SENTINEL)?.prev;
        self.insert_between(tail, SENTINEL, value)
    }

    /// Removes and returns the head element.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::EmptyCollection`] when the deque is empty.
    pub fn remove_from_head(&mut self) -> Result<T, MazeError> {
        if self.is_empty() {
            return Err(MazeError::EmptyCollection {
                operation: "remove from head",
            });
        }
        let head = self.link(SENTINEL)?.next;
        self.unlink(head)
    }

    /// Removes and returns the tail element.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::EmptyCollection`] when the deque is empty.
    pub fn remove_from_tail(&mut self) -> Result<T, MazeError> {
        if self.is_empty() {
            return Err(MazeError::EmptyCollection {
                operation: "remove from tail",
            });
        }
        let tail = self.link(SENTINEL)?.prev;
        self.unlink(tail)
    }

    /// Returns the first element, walking from head to tail, for which `predicate` holds.
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|value| predicate(*value))
    }

    /// Iterates over the elements from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            deque: self,
            cursor: self.links.first().map_or(SENTINEL, |sentinel| sentinel.next),
            remaining: self.len,
        }
    }

    /// Shared access to the slot at `index`.
    fn link(&self, index: usize) -> Result<&Link<T>, MazeError> {
        self.links.get(index).ok_or(MazeError::NullArgument {
            argument: "deque link",
        })
    }

    /// Exclusive access to the slot at `index`.
    fn link_mut(&mut self, index: usize) -> Result<&mut Link<T>, MazeError> {
        self.links.get_mut(index).ok_or(MazeError::NullArgument {
            argument: "deque link",
        })
    }

    /// Whether `index` points at the sentinel or at a live node.
    fn is_live(&self, index: usize) -> bool {
        self.links
            .get(index)
            .is_some_and(|link| !matches!(link.slot, Slot::Vacant))
    }

    /// Builds a node holding `value` between the two given neighbors and splices it in.
    ///
    /// Both neighbors must be live; a node is never left with a half-initialized link.
    fn insert_between(&mut self, prev: usize, next: usize, value: T) -> Result<(), MazeError> {
        if !self.is_live(prev) || !self.is_live(next) {
            return Err(MazeError::NullArgument {
                argument: "deque neighbor link",
            });
        }

        let link = Link {
            slot: Slot::Node(value),
            next,
            prev,
        };
        let index = if let Some(index) = self.vacant.pop() {
            *self.link_mut(index)? = link;
            index
        } else {
            self.links.push(link);
            self.links.len() - 1
        };

        self.link_mut(prev)?.next = index;
        self.link_mut(next)?.prev = index;
        self.len += 1;

        Ok(())
    }

    /// Detaches the node at `index`, joins its former neighbors and returns its data.
    fn unlink(&mut self, index: usize) -> Result<T, MazeError> {
        let link = self.link_mut(index)?;
        if !matches!(link.slot, Slot::Node(_)) {
            return Err(MazeError::NullArgument {
                argument: "deque node",
            });
        }
        let (prev, next) = (link.prev, link.next);
        let slot = mem::replace(&mut link.slot, Slot::Vacant);

        self.link_mut(prev)?.next = next;
        self.link_mut(next)?.prev = prev;
        self.vacant.push(index);
        self.len = self.len.saturating_sub(1);

        match slot {
            Slot::Node(value) => Ok(value),
            Slot::Sentinel | Slot::Vacant => Err(MazeError::NullArgument {
                argument: "deque node",
            }),
        }
    }
}

/// Head-to-tail iterator over a [`Deque`].
#[derive(Debug)]
pub struct Iter<'deque, T> {
    /// Deque being walked.
    deque: &'deque Deque<T>,
    /// Slot to yield next.
    cursor: usize,
    /// Live nodes not yet yielded.
    remaining: usize,
}

impl<'deque, T> Iterator for Iter<'deque, T> {
    type Item = &'deque T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let link = self.deque.links.get(self.cursor)?;
        self.cursor = link.next;
        self.remaining -= 1;

        match &link.slot {
            Slot::Node(value) => Some(value),
            Slot::Sentinel | Slot::Vacant => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

impl<'deque, T> IntoIterator for &'deque Deque<T> {
    type Item = &'deque T;
    type IntoIter = Iter<'deque, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
