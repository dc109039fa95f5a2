//! The story store port.
//!
//! The catalog persists one opaque payload in a shared key/value slot that
//! other actors (another window, another process) may also write. The engine
//! only needs `read` and `write`; change notification stays host-side, and a
//! host reacts to it by calling [`crate::Adventure::handle_external_change`].

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::StoreError;

/// Backing storage for the story catalog.
pub trait StoryStore {
    /// Read the raw payload. `None` means the slot has never been written.
    fn read(&self) -> Result<Option<Vec<u8>>, StoreError>;

    /// Replace the raw payload.
    fn write(&mut self, bytes: &[u8]) -> Result<(), StoreError>;
}

/// In-memory store over a shared cell.
///
/// Clones share one slot, so a cloned handle can stand in for an external
/// actor mutating the store out-of-band. Used by tests and headless hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<Vec<u8>>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with a payload.
    pub fn with_payload(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(bytes.into()))),
        }
    }
}

impl StoryStore for MemoryStore {
    fn read(&self) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.slot.borrow().clone())
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), StoreError> {
        *self.slot.borrow_mut() = Some(bytes.to_vec());
        Ok(())
    }
}
