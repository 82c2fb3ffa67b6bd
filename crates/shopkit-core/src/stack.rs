//! # Stack
//!
//! A LIFO container backed by a `Vec` whose top is the last element.
//!
//! ```text
//!   push(a) push(b) push(c)          pop() -> c
//!   ┌───┬───┬───┐                    ┌───┬───┐
//!   │ a │ b │ c │ ◄── top            │ a │ b │ ◄── top
//!   └───┴───┴───┘                    └───┴───┘
//! ```
//!
//! The backing storage is private; callers only see the operations below.

use crate::error::{CoreError, CoreResult};

/// Last-in, first-out collection.
///
/// ## Example
/// ```rust
/// use shopkit_core::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
///
/// assert_eq!(stack.peek(), Ok(&2));
/// assert_eq!(stack.pop(), Ok(2));
/// assert_eq!(stack.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub const fn new() -> Self {
        Stack { items: Vec::new() }
    }

    /// Puts an item on top of the stack.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the top item.
    ///
    /// Fails with [`CoreError::EmptyCollection`] when the stack is empty.
    pub fn pop(&mut self) -> CoreResult<T> {
        self.items
            .pop()
            .ok_or(CoreError::EmptyCollection { operation: "pop" })
    }

    /// Returns the top item without removing it.
    ///
    /// Fails with [`CoreError::EmptyCollection`] when the stack is empty.
    pub fn peek(&self) -> CoreResult<&T> {
        self.items
            .last()
            .ok_or(CoreError::EmptyCollection { operation: "peek" })
    }

    /// Removes every item. Calling it on an empty stack is a no-op.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns true if the stack holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items currently on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack::new()
    }
}

/// Pushes items in iteration order, so the last one ends up on top.
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_push_adds_to_top() {
        let mut stack = Stack::new();
        stack.push(1);

        assert_eq!(stack.len(), 1);
        assert_eq!(stack.peek(), Ok(&1));
    }

    #[test]
    fn test_pop_returns_and_removes_top() {
        let mut stack: Stack<i32> = [1, 2].into_iter().collect();

        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.peek(), Ok(&1));
    }

    #[test]
    fn test_pop_on_empty_stack_fails() {
        let mut stack: Stack<i32> = Stack::new();
        assert_eq!(
            stack.pop(),
            Err(CoreError::EmptyCollection { operation: "pop" })
        );
    }

    #[test]
    fn test_peek_does_not_remove() {
        let stack: Stack<&str> = ["a", "b"].into_iter().collect();

        assert_eq!(stack.peek(), Ok(&"b"));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_peek_on_empty_stack_fails() {
        let stack: Stack<i32> = Stack::default();
        assert!(matches!(
            stack.peek(),
            Err(CoreError::EmptyCollection { operation: "peek" })
        ));
    }

    #[test]
    fn test_is_empty() {
        let mut stack = Stack::new();
        assert!(stack.is_empty());

        stack.push('x');
        assert!(!stack.is_empty());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut stack: Stack<i32> = (1..=3).collect();

        stack.clear();
        assert_eq!(stack.len(), 0);
        stack.clear();
        assert!(stack.is_empty());
    }

    #[test]
    fn test_extend_pushes_in_order() {
        let mut stack = Stack::new();
        stack.push(0);
        stack.extend([1, 2]);

        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.pop(), Ok(1));
        assert_eq!(stack.pop(), Ok(0));
    }

    proptest! {
        #[test]
        fn prop_pops_reverse_pushes(items in prop::collection::vec(any::<i64>(), 0..64)) {
            let mut stack = Stack::new();
            for item in &items {
                stack.push(*item);
            }

            let mut popped = Vec::with_capacity(items.len());
            while let Ok(item) = stack.pop() {
                popped.push(item);
            }
            popped.reverse();

            prop_assert_eq!(popped, items);
            prop_assert!(stack.is_empty());
        }

        #[test]
        fn prop_push_then_pop_restores_len(
            items in prop::collection::vec(any::<u8>(), 0..32),
            extra in any::<u8>(),
        ) {
            let mut stack: Stack<u8> = items.into_iter().collect();
            let before = stack.len();

            stack.push(extra);
            prop_assert_eq!(stack.peek(), Ok(&extra));
            prop_assert_eq!(stack.len(), before + 1);
            prop_assert_eq!(stack.pop(), Ok(extra));
            prop_assert_eq!(stack.len(), before);
        }
    }
}
