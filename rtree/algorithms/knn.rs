//! K-Nearest Neighbors (KNN) traversal for the R-tree
//!
//! Best-first search driven by a binary min-heap ([`PriorityQueue`]).
//! Every candidate is keyed by its box distance to the target: the sum over
//! both axes of the squared gap between the two boxes, zero when they
//! overlap. A child box always lies inside its parent box, so a child's key
//! is never smaller than its parent's and leaves pop in non-decreasing order.
//!
//! ## Algorithm Overview
//!
//! 1. Push every child of the current node into the heap
//! 2. Pop while the smallest entry is a data item and report it
//! 3. The first popped node becomes the current node; repeat
//! 4. Stop when the heap is empty or the callback returns `false`
//!
//! Nothing is sorted up front, so stopping after K results touches only the
//! nodes needed to prove those K.

use super::super::node::{Entry, Node};
use super::super::queue::{Priority, PriorityQueue};
use super::super::rectangle::Rectangle;
use super::super::rtree::RTree;

/// Candidate in the KNN queue: a whole subtree or a single data item.
enum Candidate<'a, T> {
    Node(&'a Node<T>),
    Item(&'a T),
}

struct QueueEntry<'a, T> {
    dist: f64,
    mbr: &'a Rectangle,
    candidate: Candidate<'a, T>,
}

impl<T> Priority for QueueEntry<'_, T> {
    fn less(&self, other: &Self) -> bool {
        self.dist < other.dist
    }
}

impl<T> RTree<T> {
    /// Visits data items nearest-first from the target box `(min, max)`.
    ///
    /// A point target is a box with `min == max`. `iter` receives the item's
    /// box, the item and its box distance; returning `false` stops the walk.
    pub fn knn<F>(&self, min: [f64; 2], max: [f64; 2], mut iter: F)
    where
        F: FnMut([f64; 2], [f64; 2], &T, f64) -> bool,
    {
        let target = Rectangle::from_corners(min, max);
        self.walk_nearest(&target, |mbr, data, dist| iter(mbr.min, mbr.max, data, dist));
    }

    /// Collects the `k` items nearest to the target together with their box distances.
    pub fn nearby(&self, min: [f64; 2], max: [f64; 2], k: usize) -> Vec<(&T, f64)> {
        let mut results = Vec::with_capacity(k.min(self.count));
        if k == 0 {
            return results;
        }
        let target = Rectangle::from_corners(min, max);
        self.walk_nearest(&target, |_, data, dist| {
            results.push((data, dist));
            results.len() < k
        });
        results
    }

    fn walk_nearest<'a, F>(&'a self, target: &Rectangle, mut iter: F)
    where
        F: FnMut(&'a Rectangle, &'a T, f64) -> bool,
    {
        if self.count == 0 {
            return;
        }
        let mut queue = PriorityQueue::with_capacity(self.max_entries * (self.height + 1));
        let mut current = Some(&self.root);

        while let Some(node) = current.take() {
            for entry in &node.entries {
                let (mbr, candidate) = match entry {
                    Entry::Data { mbr, data } => (mbr, Candidate::Item(data)),
                    Entry::Node { mbr, node } => (mbr, Candidate::Node(node.as_ref())),
                };
                queue.push(QueueEntry {
                    dist: target.box_dist(mbr),
                    mbr,
                    candidate,
                });
            }

            while let Some(next) = queue.pop() {
                match next.candidate {
                    Candidate::Item(data) => {
                        if !iter(next.mbr, data, next.dist) {
                            return;
                        }
                    }
                    Candidate::Node(child) => {
                        current = Some(child);
                        break;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_knn_empty_tree() {
        let tree: RTree<u32> = RTree::new();
        let mut called = false;
        tree.knn([0.0, 0.0], [0.0, 0.0], |_, _, _, _| {
            called = true;
            true
        });
        assert!(!called);
        assert!(tree.nearby([0.0, 0.0], [0.0, 0.0], 5).is_empty());
    }

    #[test]
    fn test_knn_order_small() {
        let mut tree = RTree::with_max_entries(4);
        for i in 0..20 {
            let x = i as f64;
            tree.insert([x, 0.0], [x, 0.0], i);
        }
        let results = tree.nearby([7.2, 0.0], [7.2, 0.0], 4);
        let ids: Vec<i32> = results.iter().map(|(id, _)| **id).collect();
        assert_eq!(ids, vec![7, 8, 6, 9]);
        assert!((results[0].1 - 0.04).abs() < 1e-9);
    }

    #[test]
    fn test_knn_box_target_overlap_is_zero() {
        let mut tree = RTree::new();
        tree.insert([0.0, 0.0], [2.0, 2.0], "a");
        tree.insert([5.0, 5.0], [6.0, 6.0], "b");
        let mut seen = Vec::new();
        tree.knn([1.0, 1.0], [5.5, 1.5], |_, _, item, dist| {
            seen.push((*item, dist));
            true
        });
        assert_eq!(seen[0], ("a", 0.0));
        assert_eq!(seen[1], ("b", 3.5 * 3.5));
    }

    #[test]
    fn test_knn_non_decreasing_random() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut tree = RTree::new();
        for i in 0..5000 {
            let x: f64 = rng.gen_range(-180.0..180.0);
            let y: f64 = rng.gen_range(-90.0..90.0);
            let w: f64 = rng.gen_range(0.0..2.0);
            tree.insert([x, y], [x + w, y + w], i);
        }
        let mut last = 0.0;
        let mut count = 0;
        tree.knn([10.0, 10.0], [10.0, 10.0], |_, _, _, dist| {
            assert!(dist >= last, "{} < {}", dist, last);
            last = dist;
            count += 1;
            true
        });
        assert_eq!(count, 5000);
    }
}
