// src/model/list.rs

use std::fmt;

// Slot index of a node inside the arena.
type Link = Option<usize>;

#[derive(Debug, Clone)]
struct Node<T> {
    element: T,
    prev: Link,
    next: Link,
}

/// An ordered sequence with O(1) access to both ends and O(n) indexed access.
///
/// Nodes live in an arena owned by the list and are linked by slot index, so a
/// node is never reachable from outside the list that created it. Freed slots
/// are recycled by later insertions.
#[derive(Debug, Clone)]
pub struct DoublyLinkedList<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Link,
    tail: Link,
    len: usize,
}

impl<T> DoublyLinkedList<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Element at the head, or `None` if the list is empty.
    pub fn first(&self) -> Option<&T> {
        self.head.and_then(|idx| self.node(idx)).map(|node| &node.element)
    }

    /// Element at the tail, or `None` if the list is empty.
    pub fn last(&self) -> Option<&T> {
        self.tail.and_then(|idx| self.node(idx)).map(|node| &node.element)
    }

    pub fn add_first(&mut self, element: T) {
        let idx = self.alloc(Node {
            element,
            prev: None,
            next: self.head,
        });

        match self.head {
            Some(old_head) => {
                if let Some(node) = self.node_mut(old_head) {
                    node.prev = Some(idx);
                }
            }
            None => self.tail = Some(idx),
        }

        self.head = Some(idx);
        self.len += 1;
    }

    pub fn add_last(&mut self, element: T) {
        let idx = self.alloc(Node {
            element,
            prev: self.tail,
            next: None,
        });

        match self.tail {
            Some(old_tail) => {
                if let Some(node) = self.node_mut(old_tail) {
                    node.next = Some(idx);
                }
            }
            None => self.head = Some(idx),
        }

        self.tail = Some(idx);
        self.len += 1;
    }

    pub fn remove_first(&mut self) -> Option<T> {
        let idx = self.head?;
        let node = self.release(idx)?;

        self.head = node.next;
        match node.next {
            Some(next) => {
                if let Some(next) = self.node_mut(next) {
                    next.prev = None;
                }
            }
            None => self.tail = None,
        }

        self.shrink_len();
        Some(node.element)
    }

    pub fn remove_last(&mut self) -> Option<T> {
        let idx = self.tail?;
        let node = self.release(idx)?;

        self.tail = node.prev;
        match node.prev {
            Some(prev) => {
                if let Some(prev) = self.node_mut(prev) {
                    prev.next = None;
                }
            }
            None => self.head = None,
        }

        self.shrink_len();
        Some(node.element)
    }

    /// Inserts `element` immediately before the element currently at `index`.
    ///
    /// An index at or past the end appends to the tail.
    pub fn insert(&mut self, element: T, index: usize) {
        if index >= self.len {
            self.add_last(element);
            return;
        }
        if index == 0 {
            self.add_first(element);
            return;
        }

        let Some(at) = self.locate(index) else {
            return;
        };
        let prev = self.node(at).and_then(|node| node.prev);
        let idx = self.alloc(Node {
            element,
            prev,
            next: Some(at),
        });

        if let Some(prev) = prev.and_then(|p| self.node_mut(p)) {
            prev.next = Some(idx);
        }
        if let Some(at) = self.node_mut(at) {
            at.prev = Some(idx);
        }
        self.len += 1;
    }

    /// Removes and returns the element at `index`, or `None` if `index` is out
    /// of range.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        if index == 0 {
            return self.remove_first();
        }
        if index == self.len - 1 {
            return self.remove_last();
        }

        let at = self.locate(index)?;
        let node = self.release(at)?;

        if let Some(prev) = node.prev.and_then(|p| self.node_mut(p)) {
            prev.next = node.next;
        }
        if let Some(next) = node.next.and_then(|n| self.node_mut(n)) {
            next.prev = node.prev;
        }

        self.shrink_len();
        Some(node.element)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.locate(index)
            .and_then(|idx| self.node(idx))
            .map(|node| &node.element)
    }

    /// Front-to-back iteration.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    // Walks from whichever end is closer to `index`.
    fn locate(&self, index: usize) -> Link {
        if index >= self.len {
            return None;
        }

        if index <= self.len / 2 {
            let mut cursor = self.head;
            for _ in 0..index {
                cursor = cursor.and_then(|idx| self.node(idx)).and_then(|n| n.next);
            }
            cursor
        } else {
            let mut cursor = self.tail;
            for _ in 0..(self.len - 1 - index) {
                cursor = cursor.and_then(|idx| self.node(idx)).and_then(|n| n.prev);
            }
            cursor
        }
    }

    fn node(&self, idx: usize) -> Option<&Node<T>> {
        self.slots.get(idx).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, idx: usize) -> Option<&mut Node<T>> {
        self.slots.get_mut(idx).and_then(Option::as_mut)
    }

    fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, idx: usize) -> Option<Node<T>> {
        let node = self.slots.get_mut(idx)?.take()?;
        self.free.push(idx);
        Some(node)
    }

    fn shrink_len(&mut self) {
        self.len -= 1;
        // An empty list drops its arena so slot indices start over.
        if self.len == 0 {
            self.slots.clear();
            self.free.clear();
        }
    }

    /// Walks the chain both ways and checks every link against the count.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        assert_eq!(self.len == 0, self.head.is_none());
        assert_eq!(self.len == 0, self.tail.is_none());

        let mut forward = 0;
        let mut prev: Link = None;
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            let node = self.node(idx).expect("linked slot must be occupied");
            assert_eq!(node.prev, prev, "prev link mismatch at slot {}", idx);
            prev = Some(idx);
            cursor = node.next;
            forward += 1;
        }
        assert_eq!(prev, self.tail);
        assert_eq!(forward, self.len);

        let mut backward = 0;
        let mut cursor = self.tail;
        while let Some(idx) = cursor {
            cursor = self.node(idx).expect("linked slot must be occupied").prev;
            backward += 1;
        }
        assert_eq!(backward, self.len);
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for element in iter {
            list.add_last(element);
        }
        list
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", element)?;
        }
        write!(f, "]")
    }
}

pub struct Iter<'a, T> {
    list: &'a DoublyLinkedList<T>,
    cursor: Link,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.cursor?;
        let node = self.list.node(idx)?;
        self.cursor = node.next;
        self.remaining -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
