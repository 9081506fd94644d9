//! One-slot undo buffer for deletions.
//!
//! Only the most recent deletion is recoverable: remembering a new record
//! discards whatever was held before.

use std::sync::{Arc, Mutex, PoisonError};

/// Shared single-slot buffer holding the last deleted record
#[derive(Debug)]
pub struct UndoBuffer<T> {
    slot: Arc<Mutex<Option<T>>>,
}

impl<T> Clone for UndoBuffer<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<T> Default for UndoBuffer<T> {
    fn default() -> Self {
        Self {
            slot: Arc::new(Mutex::new(None)),
        }
    }
}

impl<T: Clone> UndoBuffer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a snapshot, replacing any previous one
    pub fn remember(&self, record: T) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(record);
    }

    /// Remove and return the snapshot
    pub fn take(&self) -> Option<T> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).take()
    }

    /// Copy of the snapshot without consuming it
    pub fn peek(&self) -> Option<T> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}
