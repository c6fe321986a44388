use grid_util::point::Point;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A discovered cell waiting to be expanded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    pub point: Point,
    /// Number of unit steps taken from the start.
    pub g: u32,
    /// Heuristic estimate of the remaining steps to the goal.
    pub h: u32,
}

impl Node {
    pub fn new(point: Point, g: u32, h: u32) -> Node {
        Node { point, g, h }
    }
    /// Estimated total cost of a path through this node.
    pub fn f(&self) -> u32 {
        self.g.saturating_add(self.h)
    }
}

struct SmallestCostHolder {
    node: Node,
    seq: usize,
}

impl Eq for SmallestCostHolder {}

impl PartialEq for SmallestCostHolder {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for SmallestCostHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestCostHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed comparisons turn the max-heap into a min-heap on f. Ties go to the node
        // closest to the goal (lowest h) and then to the one queued first.
        other
            .node
            .f()
            .cmp(&self.node.f())
            .then_with(|| other.node.h.cmp(&self.node.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Frontier of the search, ordered by ascending f-value.
///
/// Among nodes with equal f the one with the lower h is extracted first, and among nodes
/// equal on both the one inserted earliest. Uniqueness of the queued points is not enforced
/// here; callers mark points as closed when they queue them.
#[derive(Default)]
pub struct OpenSet {
    heap: BinaryHeap<SmallestCostHolder>,
    next_seq: usize,
}

impl OpenSet {
    pub fn new() -> OpenSet {
        OpenSet::default()
    }
    pub fn push(&mut self, node: Node) {
        self.heap.push(SmallestCostHolder {
            node,
            seq: self.next_seq,
        });
        self.next_seq += 1;
    }
    /// Removes and returns the best node, or [None] once the frontier is exhausted.
    pub fn pop(&mut self) -> Option<Node> {
        self.heap.pop().map(|holder| holder.node)
    }
    pub fn peek(&self) -> Option<&Node> {
        self.heap.peek().map(|holder| &holder.node)
    }
    pub fn len(&self) -> usize {
        self.heap.len()
    }
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
