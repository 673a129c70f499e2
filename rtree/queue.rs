//! Binary min-heap used by the nearest-neighbour traversal.
//!
//! Unlike `std::collections::BinaryHeap` the ordering comes from the
//! item itself through [`Priority::less`], so float distances need no
//! `Ord` wrapper. The backing vector is never shrunk, which keeps
//! steady-state push/pop cycles allocation free.

/// Ordering used by [`PriorityQueue`]: the smallest item is popped first.
pub trait Priority {
    fn less(&self, other: &Self) -> bool;
}

#[derive(Debug, Clone)]
pub struct PriorityQueue<I> {
    items: Vec<I>,
}

impl<I: Priority> Default for PriorityQueue<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Priority> PriorityQueue<I> {
    pub fn new() -> Self {
        PriorityQueue { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        PriorityQueue {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Capacity of the backing storage.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Removes every item but keeps the allocation.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn push(&mut self, item: I) {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Removes and returns the smallest item.
    pub fn pop(&mut self) -> Option<I> {
        let last = self.items.len().checked_sub(1)?;
        self.items.swap(0, last);
        let item = self.items.pop();
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        item
    }

    /// Returns the smallest item without removing it.
    pub fn peek(&self) -> Option<&I> {
        self.items.first()
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.items[index].less(&self.items[parent]) {
                break;
            }
            self.items.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smallest = left;
            if right < len && self.items[right].less(&self.items[left]) {
                smallest = right;
            }
            if !self.items[smallest].less(&self.items[index]) {
                break;
            }
            self.items.swap(index, smallest);
            index = smallest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    impl Priority for f64 {
        fn less(&self, other: &Self) -> bool {
            self < other
        }
    }

    #[test]
    fn test_pops_in_ascending_order() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut queue = PriorityQueue::new();
        let mut expected = Vec::new();
        for _ in 0..1000 {
            let value: f64 = rng.gen_range(-100.0..100.0);
            queue.push(value);
            expected.push(value);
        }
        expected.sort_by(|a, b| a.partial_cmp(b).unwrap());

        assert_eq!(queue.len(), 1000);
        assert_eq!(queue.peek(), Some(&expected[0]));

        let mut popped = Vec::new();
        while let Some(value) = queue.pop() {
            popped.push(value);
        }
        assert_eq!(popped, expected);
        assert!(queue.is_empty());
        assert_eq!(queue.pop(), None);
        assert_eq!(queue.peek(), None);
    }

    #[test]
    fn test_interleaved_push_pop() {
        let mut queue = PriorityQueue::new();
        queue.push(5.0);
        queue.push(1.0);
        queue.push(3.0);
        assert_eq!(queue.pop(), Some(1.0));
        queue.push(0.5);
        queue.push(4.0);
        assert_eq!(queue.pop(), Some(0.5));
        assert_eq!(queue.pop(), Some(3.0));
        assert_eq!(queue.pop(), Some(4.0));
        assert_eq!(queue.pop(), Some(5.0));
    }

    #[test]
    fn test_capacity_is_reused() {
        let mut queue = PriorityQueue::with_capacity(64);
        let capacity = queue.capacity();
        for round in 0..10 {
            for i in 0..64 {
                queue.push(((i * 37 + round) % 64) as f64);
            }
            assert_eq!(queue.capacity(), capacity);
            while queue.pop().is_some() {}
            assert_eq!(queue.capacity(), capacity);
        }
        queue.push(1.0);
        queue.clear();
        assert_eq!(queue.capacity(), capacity);
    }
}
