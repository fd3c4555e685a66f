use crate::error::{Result, RoutingError};
use std::fmt;

/// Last-in-first-out container
///
/// Used to replay a line's coordinates in reverse order and to turn a
/// predecessor walk (target back to source) into a forward route.
#[derive(Debug, Clone, PartialEq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the most recently pushed item
    ///
    /// # Errors
    /// Returns `RoutingError::EmptyContainer` if the stack is empty
    pub fn pop(&mut self) -> Result<T> {
        self.items.pop().ok_or(RoutingError::EmptyContainer)
    }

    /// Get the top item without removing it
    ///
    /// # Errors
    /// Returns `RoutingError::EmptyContainer` if the stack is empty
    pub fn peek(&self) -> Result<&T> {
        self.items.last().ok_or(RoutingError::EmptyContainer)
    }

    /// Overwrite the top item
    ///
    /// # Errors
    /// Returns `RoutingError::EmptyContainer` if the stack is empty
    pub fn replace_top(&mut self, item: T) -> Result<()> {
        let top = self.items.last_mut().ok_or(RoutingError::EmptyContainer)?;
        *top = item;
        Ok(())
    }

    /// Pop items until the stack is empty, most recent first
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        std::iter::from_fn(move || self.items.pop())
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

// Bottom to top
impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stack: ")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}
