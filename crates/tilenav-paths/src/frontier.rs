use std::collections::BinaryHeap;

use tilenav_core::{Point, Range};

// ---------------------------------------------------------------------------
// Search nodes
// ---------------------------------------------------------------------------

/// One entry pushed during a search. Never modified once pushed; a better
/// route to the same position pushes a fresh node instead.
#[derive(Clone, Debug)]
pub(crate) struct SearchNode {
    pub(crate) pos: Point,
    /// Flat index of `pos` in the frontier's range.
    cell: usize,
    /// Arena index of the predecessor, `None` for the start node.
    pub(crate) parent: Option<usize>,
    pub(crate) g: f64,
    pub(crate) h: f64,
}

impl SearchNode {
    #[inline]
    pub(crate) fn f(&self) -> f64 {
        self.g + self.h
    }
}

/// Heap entry ordered by `f`, then by arena index.
///
/// The arena is append-only, so the index doubles as the insertion sequence:
/// among equal `f`, the earliest pushed node pops first and no two entries
/// ever compare equal.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NodeRef {
    pub(crate) node: usize,
    pub(crate) f: f64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for NodeRef {}

// ---------------------------------------------------------------------------
// Frontier
// ---------------------------------------------------------------------------

/// Per-call search state: node arena, open heap, best-known-cost table and
/// closed set, all indexed by flat position within `rng`.
///
/// Created at the start of a query and dropped when it returns.
pub(crate) struct Frontier {
    rng: Range,
    nodes: Vec<SearchNode>,
    open: BinaryHeap<NodeRef>,
    best: Vec<f64>,
    closed: Vec<bool>,
    pub(crate) expanded: usize,
    pub(crate) stale: usize,
}

impl Frontier {
    pub(crate) fn new(rng: Range) -> Self {
        let len = rng.len();
        Self {
            rng,
            nodes: Vec::new(),
            open: BinaryHeap::new(),
            best: vec![f64::INFINITY; len],
            closed: vec![false; len],
            expanded: 0,
            stale: 0,
        }
    }

    /// Push a new node for `pos` if `g` beats the best cost recorded for it.
    /// Returns whether a node was pushed. Positions outside the range are
    /// ignored.
    pub(crate) fn relax(&mut self, pos: Point, parent: Option<usize>, g: f64, h: f64) -> bool {
        let Some(i) = self.rng.index_of(pos) else {
            return false;
        };
        if g >= self.best[i] {
            return false;
        }
        self.best[i] = g;
        let node = self.nodes.len();
        let entry = SearchNode {
            pos,
            cell: i,
            parent,
            g,
            h,
        };
        self.open.push(NodeRef {
            node,
            f: entry.f(),
        });
        self.nodes.push(entry);
        true
    }

    /// Pop the open node with the smallest `f` whose position is not yet
    /// closed, discarding stale duplicates on the way.
    pub(crate) fn pop(&mut self) -> Option<usize> {
        while let Some(NodeRef { node, .. }) = self.open.pop() {
            if self.closed[self.nodes[node].cell] {
                self.stale += 1;
                continue;
            }
            return Some(node);
        }
        None
    }

    /// Mark the position of `node` as finalized.
    pub(crate) fn close(&mut self, node: usize) {
        self.closed[self.nodes[node].cell] = true;
        self.expanded += 1;
    }

    #[inline]
    pub(crate) fn node(&self, node: usize) -> &SearchNode {
        &self.nodes[node]
    }

    /// Positions from the start node to `node`, inclusive.
    pub(crate) fn path_to(&self, node: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut cur = Some(node);
        while let Some(n) = cur {
            path.push(self.nodes[n].pos);
            cur = self.nodes[n].parent;
        }
        path.reverse();
        path
    }

    /// Every position with a recorded cost, paired with its best cost.
    pub(crate) fn recorded(&self) -> impl Iterator<Item = (Point, f64)> + '_ {
        self.best
            .iter()
            .enumerate()
            .filter(|(_, g)| g.is_finite())
            .map(|(i, &g)| (self.rng.point_at(i), g))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_lowest_f_then_earliest() {
        let mut fr = Frontier::new(Range::new(0, 0, 4, 1));
        fr.relax(Point::new(0, 0), None, 0.0, 3.0);
        fr.relax(Point::new(1, 0), None, 1.0, 1.0);
        fr.relax(Point::new(2, 0), None, 2.0, 0.0);
        fr.relax(Point::new(3, 0), None, 0.5, 0.5);
        let order: Vec<Point> = std::iter::from_fn(|| {
            let n = fr.pop()?;
            fr.close(n);
            Some(fr.node(n).pos)
        })
        .collect();
        assert_eq!(
            order,
            vec![Point::new(3, 0), Point::new(1, 0), Point::new(2, 0), Point::new(0, 0)]
        );
    }

    #[test]
    fn equal_f_keeps_both_entries() {
        let mut fr = Frontier::new(Range::new(0, 0, 2, 1));
        assert!(fr.relax(Point::new(0, 0), None, 1.0, 1.0));
        assert!(fr.relax(Point::new(1, 0), None, 1.0, 1.0));
        let a = fr.pop().unwrap();
        fr.close(a);
        let b = fr.pop().unwrap();
        assert_ne!(fr.node(a).pos, fr.node(b).pos);
    }

    #[test]
    fn relax_requires_strict_improvement() {
        let mut fr = Frontier::new(Range::new(0, 0, 2, 2));
        let p = Point::new(1, 1);
        assert!(fr.relax(p, None, 5.0, 0.0));
        assert!(!fr.relax(p, None, 5.0, 0.0));
        assert!(!fr.relax(p, None, 6.0, 0.0));
        assert!(fr.relax(p, None, 4.0, 0.0));
        assert!(!fr.relax(Point::new(5, 5), None, 0.0, 0.0));
    }

    #[test]
    fn stale_entries_are_skipped() {
        let mut fr = Frontier::new(Range::new(0, 0, 2, 1));
        let p = Point::new(1, 0);
        fr.relax(p, None, 5.0, 0.0);
        fr.relax(p, None, 2.0, 0.0);
        let n = fr.pop().unwrap();
        assert_eq!(fr.node(n).g, 2.0);
        fr.close(n);
        assert!(fr.pop().is_none());
        assert_eq!(fr.stale, 1);
        assert_eq!(fr.expanded, 1);
    }

    #[test]
    fn path_follows_parents() {
        let mut fr = Frontier::new(Range::new(0, 0, 3, 1));
        fr.relax(Point::new(0, 0), None, 0.0, 0.0);
        fr.relax(Point::new(1, 0), Some(0), 1.0, 0.0);
        fr.relax(Point::new(2, 0), Some(1), 2.0, 0.0);
        assert_eq!(
            fr.path_to(2),
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]
        );
        let recorded: Vec<_> = fr.recorded().collect();
        assert_eq!(recorded.len(), 3);
        assert_eq!(recorded[2], (Point::new(2, 0), 2.0));
    }
}
