//! Frontier queue for shortest-path search
//!
//! A sorted list of `(element, priority)` pairs. Insertion places the new entry
//! after every entry whose priority is less than or equal to it, so equal
//! priorities come out in insertion order. There is no decrease-key: callers push
//! an element again with its improved priority and skip the stale copy on pop.

use std::collections::VecDeque;

#[derive(Debug, Clone)]
struct QueueEntry<T> {
    element: T,
    priority: f64,
}

/// Min-priority queue backed by a sorted `VecDeque`
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    items: VecDeque<QueueEntry<T>>,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `element` in ascending-priority position (FIFO among ties)
    pub fn enqueue(&mut self, element: T, priority: f64) {
        let index = self.items.partition_point(|entry| entry.priority <= priority);
        self.items.insert(index, QueueEntry { element, priority });
    }

    /// Remove and return the minimum-priority element
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front().map(|entry| entry.element)
    }

    /// Priority of the element `dequeue` would return next
    pub fn peek_priority(&self) -> Option<f64> {
        self.items.front().map(|entry| entry.priority)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
