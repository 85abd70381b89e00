// src/model/traits.rs

//! Capability sets for the linear containers.
//!
//! Each discipline exposes only the end-operations it allows. The structural
//! operations take their partner as an `Option`; `None` stands for an absent
//! partner and leaves both containers untouched. They report `true` when they
//! ran and `false` when they were a no-op.

/// First-in, first-out access: insert at the tail, remove from the head.
pub trait Queue<T> {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts an element at the tail.
    fn offer(&mut self, element: T);

    /// The head element, without removing it.
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the head element.
    fn poll(&mut self) -> Option<T>;

    /// Inverts the front-to-back order in place.
    fn reverse(&mut self);

    /// Moves every element into `into`, appended in reverse order, leaving
    /// this queue empty.
    fn transfer(&mut self, into: Option<&mut dyn Queue<T>>) -> bool;

    /// Appends a copy of `from` onto the tail of this queue. `from` keeps its
    /// original contents and order.
    fn merge(&mut self, from: Option<&mut dyn Queue<T>>) -> bool
    where
        T: Clone;
}

/// Last-in, first-out access at the top.
pub trait Stack<T> {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&mut self, element: T);

    fn peek(&self) -> Option<&T>;

    fn pop(&mut self) -> Option<T>;

    /// Inverts the top-to-bottom order in place.
    fn reverse(&mut self);

    /// Pops every element onto `to`, so this stack's top ends up deepest in
    /// the pushed run. This stack is left empty.
    fn transfer(&mut self, to: Option<&mut dyn Stack<T>>) -> bool;

    /// Places a copy of `other` beneath the current contents of this stack.
    /// Both keep their top-to-bottom order and `other` is restored.
    fn merge(&mut self, other: Option<&mut dyn Stack<T>>) -> bool
    where
        T: Clone;
}

/// Double-ended access. The `Queue` operations work on the head for removal
/// and the tail for insertion; these add the opposite ends.
pub trait Deque<T>: Queue<T> {
    fn peek_last(&self) -> Option<&T>;

    fn offer_first(&mut self, element: T);

    fn poll_last(&mut self) -> Option<T>;
}
