// src/model/stack.rs

use std::fmt;

use crate::model::list::{DoublyLinkedList, Iter};
use crate::model::traits::Stack;

/// A LIFO stack whose top is the head of a `DoublyLinkedList`.
#[derive(Debug, Clone)]
pub struct LinkedStack<T> {
    data: DoublyLinkedList<T>,
}

impl<T> LinkedStack<T> {
    pub fn new() -> Self {
        Self {
            data: DoublyLinkedList::new(),
        }
    }

    /// Top-to-bottom iteration.
    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Pushes in iteration order, so the last item yielded is on top.
impl<T> FromIterator<T> for LinkedStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        for element in iter {
            stack.push(element);
        }
        stack
    }
}

impl<T> Stack<T> for LinkedStack<T> {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, element: T) {
        self.data.add_first(element);
    }

    fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    fn pop(&mut self) -> Option<T> {
        self.data.remove_first()
    }

    fn reverse(&mut self) {
        for rank in (0..self.data.len()).rev() {
            if let Some(element) = self.pop() {
                self.data.insert(element, rank);
            }
        }
    }

    fn transfer(&mut self, to: Option<&mut dyn Stack<T>>) -> bool {
        let Some(to) = to else {
            return false;
        };

        while let Some(element) = self.pop() {
            to.push(element);
        }
        true
    }

    fn merge(&mut self, other: Option<&mut dyn Stack<T>>) -> bool
    where
        T: Clone,
    {
        let Some(other) = other else {
            return false;
        };

        // Popping into the buffer leaves other's bottom on the buffer's top.
        let mut buffer = LinkedStack::new();
        while let Some(element) = other.pop() {
            self.data.add_last(element.clone());
            buffer.push(element);
        }
        while let Some(element) = buffer.pop() {
            other.push(element);
        }
        true
    }
}

impl<T: fmt::Display> fmt::Display for LinkedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Top first.
    fn contents<T: Clone>(stack: &LinkedStack<T>) -> Vec<T> {
        stack.iter().cloned().collect()
    }

    #[test]
    fn pops_in_reverse_push_order() {
        let mut stack = LinkedStack::new();
        for value in 1..=4u32 {
            stack.push(value);
        }
        assert_eq!(stack.peek(), Some(&4));

        let drained: Vec<u32> = std::iter::from_fn(|| stack.pop()).collect();
        assert_eq!(drained, vec![4, 3, 2, 1]);
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn reverse_flips_top_and_bottom() {
        let mut stack: LinkedStack<u32> = [1, 2, 3].into_iter().collect();
        assert_eq!(contents(&stack), vec![3, 2, 1]);

        stack.reverse();
        assert_eq!(contents(&stack), vec![1, 2, 3]);
        assert_eq!(stack.peek(), Some(&1));

        stack.reverse();
        assert_eq!(contents(&stack), vec![3, 2, 1]);
        stack.data.assert_consistent();
    }

    #[test]
    fn reverse_of_empty_stack_is_empty() {
        let mut stack: LinkedStack<u32> = LinkedStack::new();
        stack.reverse();
        assert!(stack.is_empty());
    }

    #[test]
    fn transfer_buries_the_old_top() {
        // top: x, then y, then z
        let mut source: LinkedStack<char> = ['z', 'y', 'x'].into_iter().collect();
        let mut target: LinkedStack<char> = ['a'].into_iter().collect();

        assert!(source.transfer(Some(&mut target)));

        assert!(source.is_empty());
        assert_eq!(contents(&target), vec!['z', 'y', 'x', 'a']);
        assert_eq!(source.len() + target.len(), 4);
    }

    #[test]
    fn transfer_without_target_is_a_no_op() {
        let mut source: LinkedStack<u32> = [1, 2].into_iter().collect();
        assert!(!source.transfer(None));
        assert_eq!(contents(&source), vec![2, 1]);
    }

    #[test]
    fn merge_places_copy_underneath() {
        // this: top p, q; other: top x, y, z
        let mut stack: LinkedStack<char> = ['q', 'p'].into_iter().collect();
        let mut other: LinkedStack<char> = ['z', 'y', 'x'].into_iter().collect();

        assert!(stack.merge(Some(&mut other)));

        assert_eq!(contents(&stack), vec!['p', 'q', 'x', 'y', 'z']);
        assert_eq!(contents(&other), vec!['x', 'y', 'z']);
        stack.data.assert_consistent();
        other.data.assert_consistent();
    }

    #[test]
    fn merge_with_absent_or_empty_other() {
        let mut stack: LinkedStack<u32> = [1, 2].into_iter().collect();
        let mut other = LinkedStack::new();

        assert!(stack.merge(Some(&mut other)));
        assert!(!stack.merge(None));
        assert_eq!(contents(&stack), vec![2, 1]);
        assert!(other.is_empty());
    }
}
