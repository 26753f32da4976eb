use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// An entry of the node queue: the distance the node had when it was queued,
/// its tie-break rank and its arena index
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct QueueEntry<P> {
    pub priority: P,
    pub rank: usize,
    pub node: usize,
}

/// A min-queue of graph nodes used by a single shortest path computation.
///
/// Entries are ordered by priority first and by `rank` second, where the rank
/// encodes the case-insensitive order of node ids. The queue never removes or
/// updates an entry in place: improving a node pushes a fresh entry, and the
/// caller discards stale ones when they surface.
#[derive(Debug)]
pub struct NodeQueue<P>
where
    P: Ord + Copy + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<QueueEntry<P>>>,
    /// Tie-break rank for every node index
    ranks: Vec<usize>,
}

impl<P> NodeQueue<P>
where
    P: Ord + Copy + Debug,
{
    /// Creates a new empty queue for nodes ranked by `ranks[node]`
    pub fn new(ranks: Vec<usize>) -> Self {
        NodeQueue {
            heap: BinaryHeap::new(),
            ranks,
        }
    }

    /// Returns true if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Queues a node with the given priority
    pub fn push(&mut self, node: usize, priority: P) {
        let rank = self.ranks[node];
        self.heap.push(Reverse(QueueEntry {
            priority,
            rank,
            node,
        }));
    }

    /// Removes the entry with the lowest (priority, rank)
    pub fn pop(&mut self) -> Option<QueueEntry<P>> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_by_priority_then_rank() {
        // node 0 ranks last, node 2 first
        let mut queue = NodeQueue::new(vec![2, 1, 0]);
        queue.push(0, 5u64);
        queue.push(1, 3);
        queue.push(2, 5);
        queue.push(0, 3);

        let order: Vec<(usize, u64)> = std::iter::from_fn(|| queue.pop())
            .map(|entry| (entry.node, entry.priority))
            .collect();
        assert_eq!(order, vec![(1, 3), (0, 3), (2, 5), (0, 5)]);
    }
}
