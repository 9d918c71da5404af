//! Weight-ordered quicksort over candidate edges.

use std::mem;

use crate::grid::Edge;

/// Returns a copy of `edges` sorted by ascending weight, leaving the input untouched.
///
/// The relative order of edges of equal weight is whatever the partition scheme produces; it is
/// reproducible for a given input order but not stable.
pub fn sort_edges(edges: &[Edge]) -> Vec<Edge> {
    let mut sorted = edges.to_vec();
    quicksort(&mut sorted);
    sorted
}

/// Sorts `edges` in place by weight.
///
/// Recurses into the smaller partition and loops over the larger one, which keeps the stack depth
/// logarithmic even on runs of equal weights.
fn quicksort(mut edges: &mut [Edge]) {
    while edges.len() > 1 {
        let pivot = partition(edges);
        let (lower, upper) = mem::take(&mut edges).split_at_mut(pivot);
        let upper = upper.get_mut(1..).unwrap_or_default();

        if lower.len() < upper.len() {
            quicksort(lower);
            edges = upper;
        } else {
            quicksort(upper);
            edges = lower;
        }
    }
}

/// Partitions `edges` around its first element and returns where that pivot ends up.
///
/// Afterwards every edge before the pivot is no heavier than it and every edge after it is
/// strictly heavier.
fn partition(edges: &mut [Edge]) -> usize {
    let Some(pivot) = edges.first().map(Edge::weight) else {
        return 0;
    };
    let weight_at = |edges: &[Edge], index: usize| edges.get(index).map(Edge::weight);

    let high = edges.len();
    let mut low_cursor = 0;
    let mut high_cursor = high - 1;

    while low_cursor < high_cursor {
        while low_cursor < high && weight_at(edges, low_cursor).is_some_and(|w| w <= pivot) {
            low_cursor += 1;
        }
        // The pivot itself stops this scan at index zero.
        while high_cursor > 0 && weight_at(edges, high_cursor).is_some_and(|w| w > pivot) {
            high_cursor -= 1;
        }
        if low_cursor < high_cursor {
            edges.swap(low_cursor, high_cursor);
        }
    }

    edges.swap(0, high_cursor);
    high_cursor
}
