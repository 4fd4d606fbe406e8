//! In-memory store for service tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::traits::RecordStore;
use crate::error::{Result, TpkitError};

/// Shared in-memory collection with a switch to make saves fail.
///
/// Clones share state, so a test can keep a handle while the service owns
/// another.
#[derive(Debug, Clone)]
pub struct MemoryStore<T> {
    records: Rc<RefCell<Vec<T>>>,
    fail_saves: Rc<Cell<bool>>,
    saves: Rc<Cell<usize>>,
}

impl<T: Clone> MemoryStore<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records: Rc::new(RefCell::new(records)),
            fail_saves: Rc::new(Cell::new(false)),
            saves: Rc::new(Cell::new(0)),
        }
    }

    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }

    /// Number of successful saves so far
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    pub fn snapshot(&self) -> Vec<T> {
        self.records.borrow().clone()
    }

    /// Replace the stored records, as another process would
    pub fn replace(&self, records: Vec<T>) {
        *self.records.borrow_mut() = records;
    }
}

impl<T: Clone> RecordStore<T> for MemoryStore<T> {
    fn load(&self) -> Result<Vec<T>> {
        Ok(self.snapshot())
    }

    fn save(&self, records: &[T]) -> Result<()> {
        if self.fail_saves.get() {
            return Err(TpkitError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only store",
            )));
        }
        *self.records.borrow_mut() = records.to_vec();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
