// src/model/queues.rs

use std::fmt;

use crate::model::list::{DoublyLinkedList, Iter};
use crate::model::traits::Queue;

/// A FIFO line backed by a `DoublyLinkedList`.
#[derive(Debug, Clone)]
pub struct LinkedQueue<T> {
    data: DoublyLinkedList<T>,
}

impl<T> LinkedQueue<T> {
    pub fn new() -> Self {
        Self {
            data: DoublyLinkedList::new(),
        }
    }

    /// Head-to-tail iteration without consuming the queue.
    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for LinkedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> Queue<T> for LinkedQueue<T> {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn offer(&mut self, element: T) {
        self.data.add_last(element);
    }

    fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    fn poll(&mut self) -> Option<T> {
        self.data.remove_first()
    }

    fn reverse(&mut self) {
        // Each pass takes the current head and drops it at its reversed rank.
        for rank in (0..self.data.len()).rev() {
            if let Some(element) = self.data.remove_first() {
                self.data.insert(element, rank);
            }
        }
    }

    fn transfer(&mut self, into: Option<&mut dyn Queue<T>>) -> bool {
        let Some(into) = into else {
            return false;
        };

        while let Some(element) = self.data.remove_last() {
            into.offer(element);
        }
        true
    }

    fn merge(&mut self, from: Option<&mut dyn Queue<T>>) -> bool
    where
        T: Clone,
    {
        let Some(from) = from else {
            return false;
        };

        let mut buffer = LinkedQueue::new();
        while let Some(element) = from.poll() {
            self.offer(element.clone());
            buffer.offer(element);
        }
        while let Some(element) = buffer.poll() {
            from.offer(element);
        }
        true
    }
}

impl<T: fmt::Display> fmt::Display for LinkedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents<T: Clone>(queue: &LinkedQueue<T>) -> Vec<T> {
        queue.iter().cloned().collect()
    }

    #[test]
    fn polls_in_arrival_order() {
        let mut queue = LinkedQueue::new();
        for minute in 0..5u32 {
            queue.offer(minute);
        }
        assert_eq!(queue.len(), 5);
        assert_eq!(queue.peek(), Some(&0));

        let drained: Vec<u32> = std::iter::from_fn(|| queue.poll()).collect();
        assert_eq!(drained, vec![0, 1, 2, 3, 4]);
        assert!(queue.is_empty());
        assert_eq!(queue.poll(), None);
        assert_eq!(queue.peek(), None);
    }

    #[test]
    fn reverse_inverts_order() {
        let mut queue: LinkedQueue<char> = "abc".chars().collect();
        queue.reverse();
        assert_eq!(contents(&queue), vec!['c', 'b', 'a']);
        queue.data.assert_consistent();
    }

    #[test]
    fn reverse_twice_restores_order() {
        for n in 0..7u32 {
            let original: Vec<u32> = (0..n).collect();
            let mut queue: LinkedQueue<u32> = original.iter().copied().collect();
            queue.reverse();
            queue.reverse();
            assert_eq!(contents(&queue), original);
        }
    }

    #[test]
    fn transfer_appends_reversed_and_empties_source() {
        let mut source: LinkedQueue<u32> = [1, 2, 3].into_iter().collect();
        let mut target: LinkedQueue<u32> = [9].into_iter().collect();

        assert!(source.transfer(Some(&mut target)));

        assert!(source.is_empty());
        assert_eq!(contents(&target), vec![9, 3, 2, 1]);
        source.data.assert_consistent();
        target.data.assert_consistent();
    }

    #[test]
    fn transfer_without_target_is_a_no_op() {
        let mut source: LinkedQueue<u32> = [1, 2, 3].into_iter().collect();
        assert!(!source.transfer(None));
        assert_eq!(contents(&source), vec![1, 2, 3]);
    }

    #[test]
    fn merge_copies_without_disturbing_the_source() {
        let mut queue: LinkedQueue<u32> = [1, 2].into_iter().collect();
        let mut from: LinkedQueue<u32> = [3, 4, 5].into_iter().collect();

        assert!(queue.merge(Some(&mut from)));

        assert_eq!(contents(&queue), vec![1, 2, 3, 4, 5]);
        assert_eq!(contents(&from), vec![3, 4, 5]);
    }

    #[test]
    fn merge_of_empty_queue_changes_nothing() {
        let mut queue: LinkedQueue<u32> = [1, 2].into_iter().collect();
        let mut from = LinkedQueue::new();

        assert!(queue.merge(Some(&mut from)));
        assert_eq!(contents(&queue), vec![1, 2]);
        assert!(from.is_empty());

        assert!(!queue.merge(None));
        assert_eq!(contents(&queue), vec![1, 2]);
    }

    #[test]
    fn displays_head_to_tail() {
        let queue: LinkedQueue<u32> = [4, 5].into_iter().collect();
        assert_eq!(queue.to_string(), "[4, 5]");
    }
}
