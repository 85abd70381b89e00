// src/model/deque.rs

use std::fmt;

use crate::model::list::{DoublyLinkedList, Iter};
use crate::model::queues::LinkedQueue;
use crate::model::traits::{Deque, Queue};

/// A double-ended queue backed by a `DoublyLinkedList`.
#[derive(Debug, Clone)]
pub struct LinkedDeque<T> {
    data: DoublyLinkedList<T>,
}

impl<T> LinkedDeque<T> {
    pub fn new() -> Self {
        Self {
            data: DoublyLinkedList::new(),
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> Default for LinkedDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for LinkedDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> Queue<T> for LinkedDeque<T> {
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
        for rank in (0..self.data.len()).rev() {
            if let Some(element) = self.poll() {
                self.data.insert(element, rank);
            }
        }
    }

    fn transfer(&mut self, into: Option<&mut dyn Queue<T>>) -> bool {
        let Some(into) = into else {
            return false;
        };

        self.reverse();
        while let Some(element) = self.poll() {
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

impl<T> Deque<T> for LinkedDeque<T> {
    fn peek_last(&self) -> Option<&T> {
        self.data.last()
    }

    fn offer_first(&mut self, element: T) {
        self.data.add_first(element);
    }

    fn poll_last(&mut self) -> Option<T> {
        self.data.remove_last()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents<T: Clone>(deque: &LinkedDeque<T>) -> Vec<T> {
        deque.iter().cloned().collect()
    }

    #[test]
    fn works_from_both_ends() {
        let mut deque = LinkedDeque::new();
        deque.offer(2u32);
        deque.offer_first(1);
        deque.offer(3);

        assert_eq!(deque.peek(), Some(&1));
        assert_eq!(deque.peek_last(), Some(&3));
        assert_eq!(deque.poll_last(), Some(3));
        assert_eq!(deque.poll(), Some(1));
        assert_eq!(deque.poll_last(), Some(2));
        assert_eq!(deque.poll_last(), None);
        assert!(deque.is_empty());
    }

    #[test]
    fn fifo_through_offer_and_poll() {
        let mut deque: LinkedDeque<u32> = (0..4).collect();
        let drained: Vec<u32> = std::iter::from_fn(|| deque.poll()).collect();
        assert_eq!(drained, vec![0, 1, 2, 3]);
    }

    #[test]
    fn reverse_is_an_involution() {
        let mut deque: LinkedDeque<u32> = (1..=5).collect();
        deque.reverse();
        assert_eq!(contents(&deque), vec![5, 4, 3, 2, 1]);
        deque.reverse();
        assert_eq!(contents(&deque), vec![1, 2, 3, 4, 5]);
        deque.data.assert_consistent();
    }

    #[test]
    fn transfer_matches_queue_ordering() {
        let mut deque: LinkedDeque<u32> = [1, 2, 3].into_iter().collect();
        let mut target: LinkedQueue<u32> = [7].into_iter().collect();

        assert!(deque.transfer(Some(&mut target)));

        assert!(deque.is_empty());
        assert_eq!(target.iter().copied().collect::<Vec<_>>(), vec![7, 3, 2, 1]);
        assert!(!deque.transfer(None));
    }

    #[test]
    fn merge_from_a_plain_queue() {
        let mut deque: LinkedDeque<u32> = [1].into_iter().collect();
        let mut from: LinkedQueue<u32> = [2, 3].into_iter().collect();

        assert!(deque.merge(Some(&mut from)));

        assert_eq!(contents(&deque), vec![1, 2, 3]);
        assert_eq!(from.iter().copied().collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn merge_without_source_is_a_no_op() {
        let mut deque: LinkedDeque<u32> = [1, 2].into_iter().collect();
        assert!(!deque.merge(None));
        assert_eq!(contents(&deque), vec![1, 2]);
    }
}
