//! Task service
//!
//! Holds the task list in memory and writes the whole list back to its store
//! after every mutation. A mutation only takes effect in memory once the
//! write succeeded.

use std::path::Path;

use log::{debug, info};

use crate::config::Config;
use crate::domain::Task;
use crate::error::{Result, TpkitError};
use crate::storage::{JsonFileStore, RecordStore, max_id};

/// CRUD operations over a persisted task list
#[derive(Debug)]
pub struct TaskService<S: RecordStore<Task> = JsonFileStore<Task>> {
    store: S,
    tasks: Vec<Task>,
    /// Next id to hand out; never moves backwards. `None` once `u64::MAX`
    /// has been used.
    next_id: Option<u64>,
}

impl TaskService<JsonFileStore<Task>> {
    /// Open the task file named by the configuration
    pub fn open(config: &Config) -> Result<Self> {
        Self::with_store(JsonFileStore::new(&config.storage.tasks_file))
    }

    pub fn path(&self) -> &Path {
        self.store.path()
    }
}

impl<S: RecordStore<Task>> TaskService<S> {
    /// Wrap a store and load its current contents
    pub fn with_store(store: S) -> Result<Self> {
        let tasks = store.load()?;
        let next_id = max_id(&tasks).checked_add(1);
        debug!("Task service opened with {} tasks, next id {:?}", tasks.len(), next_id);
        Ok(Self { store, tasks, next_id })
    }

    /// Create a task from a non-blank title
    pub fn add(&mut self, title: &str) -> Result<Task> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TpkitError::EmptyTitle);
        }

        let id = self.next_id.ok_or(TpkitError::IdsExhausted)?;
        let task = Task::new(id, title);
        let mut updated = self.tasks.clone();
        updated.push(task.clone());
        self.commit(updated)?;
        self.next_id = id.checked_add(1);

        info!("Added task {}", task.id);
        Ok(task)
    }

    /// All tasks in insertion order, re-read from the store first
    pub fn list(&mut self) -> Result<&[Task]> {
        self.reload()?;
        Ok(&self.tasks)
    }

    /// Look up a single task
    pub fn get(&self, id: u64) -> Result<&Task> {
        self.tasks
            .iter()
            .find(|t| t.id == id)
            .ok_or(TpkitError::TaskNotFound(id))
    }

    /// Flip a task's completion flag and return the updated task
    pub fn toggle(&mut self, id: u64) -> Result<Task> {
        let index = self.position(id)?;
        let mut updated = self.tasks.clone();
        updated[index].toggle();
        let task = updated[index].clone();
        self.commit(updated)?;

        info!("Toggled task {} (done: {})", id, task.done);
        Ok(task)
    }

    /// Remove a task and return it
    pub fn delete(&mut self, id: u64) -> Result<Task> {
        let index = self.position(id)?;
        let mut updated = self.tasks.clone();
        let removed = updated.remove(index);
        self.commit(updated)?;

        info!("Deleted task {}", id);
        Ok(removed)
    }

    /// Replace the in-memory list with the store's contents
    pub fn reload(&mut self) -> Result<()> {
        self.tasks = self.store.load()?;
        self.next_id = match (self.next_id, max_id(&self.tasks).checked_add(1)) {
            (Some(current), Some(loaded)) => Some(current.max(loaded)),
            _ => None,
        };
        Ok(())
    }

    fn position(&self, id: u64) -> Result<usize> {
        self.tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(TpkitError::TaskNotFound(id))
    }

    fn commit(&mut self, updated: Vec<Task>) -> Result<()> {
        self.store.save(&updated)?;
        self.tasks = updated;
        Ok(())
    }
}
