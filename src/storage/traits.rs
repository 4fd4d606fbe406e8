//! Storage trait definitions.

use crate::domain::Task;
use crate::error::Result;

/// Trait for records that have an integer ID field.
pub trait HasId {
    /// Get the record's unique identifier.
    fn id(&self) -> u64;
}

impl HasId for Task {
    fn id(&self) -> u64 {
        self.id
    }
}

/// Whole-collection persistence for an ordered sequence of records.
///
/// There is no partial update or append: every save replaces the stored
/// collection.
pub trait RecordStore<T> {
    /// Load every record. A store that was never written yields an empty vector.
    fn load(&self) -> Result<Vec<T>>;

    /// Replace the stored collection with `records`.
    fn save(&self, records: &[T]) -> Result<()>;
}

/// Highest id present, or 0 for an empty collection.
pub fn max_id<T: HasId>(records: &[T]) -> u64 {
    records.iter().map(HasId::id).max().unwrap_or(0)
}
