use super::CartLine;
use std::sync::{Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    #[error("Invalid price {0}, must be a finite non-negative number")]
    InvalidPrice(f64),

    #[error("Cart line {index} is out of range, the cart has {len} lines")]
    LineOutOfRange { index: usize, len: usize },
}

fn validate_line(line: &CartLine) -> Result<(), CartError> {
    if !line.price.is_finite() || line.price < 0.0 {
        return Err(CartError::InvalidPrice(line.price));
    }
    Ok(())
}

/// Ordered shopping cart shared by the whole application.
///
/// Lines keep their insertion order, and several lines may reference the
/// same item. Writers are serialized by an internal lock.
#[derive(Debug, Default)]
pub struct CartStore {
    lines: Mutex<Vec<CartLine>>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn locked(&self) -> MutexGuard<'_, Vec<CartLine>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends a line, returning its position.
    pub fn add(&self, line: CartLine) -> Result<usize, CartError> {
        validate_line(&line)?;
        let mut lines = self.locked();
        debug!("Adding {} x{} to cart", line.item_id, line.quantity);
        lines.push(line);
        Ok(lines.len() - 1)
    }

    pub fn insert(&self, index: usize, line: CartLine) -> Result<(), CartError> {
        validate_line(&line)?;
        let mut lines = self.locked();
        if index > lines.len() {
            return Err(CartError::LineOutOfRange {
                index,
                len: lines.len(),
            });
        }
        debug!("Inserting {} into cart at {}", line.item_id, index);
        lines.insert(index, line);
        Ok(())
    }

    pub fn remove(&self, index: usize) -> Result<CartLine, CartError> {
        let mut lines = self.locked();
        if index >= lines.len() {
            return Err(CartError::LineOutOfRange {
                index,
                len: lines.len(),
            });
        }
        let removed = lines.remove(index);
        debug!("Removed {} from cart", removed.item_id);
        Ok(removed)
    }

    /// Removes the first line referencing `item_id`.
    pub fn remove_item(&self, item_id: &str) -> Option<CartLine> {
        let mut lines = self.locked();
        let index = lines.iter().position(|l| l.item_id == item_id)?;
        debug!("Removed {} from cart", item_id);
        Some(lines.remove(index))
    }

    /// Mutates the line at `index` in place. The line must still be valid
    /// afterwards, otherwise it is restored and the error returned.
    pub fn update<F>(&self, index: usize, f: F) -> Result<(), CartError>
    where
        F: FnOnce(&mut CartLine),
    {
        let mut lines = self.locked();
        let len = lines.len();
        let line = lines
            .get_mut(index)
            .ok_or(CartError::LineOutOfRange { index, len })?;
        let previous = line.clone();
        f(line);
        if let Err(err) = validate_line(line) {
            *line = previous;
            return Err(err);
        }
        Ok(())
    }

    /// Snapshot of the current lines.
    pub fn lines(&self) -> Vec<CartLine> {
        self.locked().clone()
    }

    pub fn len(&self) -> usize {
        self.locked().len()
    }

    pub fn is_empty(&self) -> bool {
        self.locked().is_empty()
    }

    pub fn clear(&self) {
        self.locked().clear();
    }
}
