use super::backend::StorageBackend;
use crate::error::{AbookError, Result};
use std::cell::{Cell, RefCell};

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since abook is single-threaded,
/// letting the `StorageBackend` trait keep `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    bytes: RefCell<Option<Vec<u8>>>,
    save_count: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with something already "on disk".
    pub fn with_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        let backend = Self::new();
        *backend.bytes.borrow_mut() = Some(bytes.into());
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    pub fn snapshot(&self) -> Option<Vec<u8>> {
        self.bytes.borrow().clone()
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.save_count.get()
    }
}

impl StorageBackend for MemBackend {
    fn load(&self) -> Result<Option<Vec<u8>>> {
        Ok(self.bytes.borrow().clone())
    }

    fn save(&self, bytes: &[u8]) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(AbookError::Execution("Simulated write error".to_string()));
        }
        *self.bytes.borrow_mut() = Some(bytes.to_vec());
        self.save_count.set(self.save_count.get() + 1);
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
