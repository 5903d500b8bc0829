use std::sync::Arc;

use tracing::{error, warn};

use crate::domain::{EntityKind, Record};
use crate::storage::{JsonFileStore, RecordStore};

/// Rejections raised by the record managers. None of them change stored state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("{entity} '{id}' already exists")]
    Duplicate { entity: EntityKind, id: String },
    #[error("{entity} '{id}' not found")]
    NotFound { entity: EntityKind, id: String },
    #[error("{entity} has no field named '{field}'")]
    UnknownField { entity: EntityKind, field: String },
    #[error("invalid value '{value}' for field '{field}': {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
    #[error("hotel '{hotel_id}' has no rooms available")]
    NoRoomsAvailable { hotel_id: String },
}

impl RecordError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, RecordError::NotFound { .. })
    }
}

fn reported(err: RecordError) -> RecordError {
    warn!(error = %err, "record operation rejected");
    err
}

/// One entity store driven as load, mutate in memory, save everything back.
///
/// Nothing is cached between calls; each operation reloads the full collection.
pub struct Collection<T> {
    store: Arc<dyn RecordStore<T>>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<T: Record + 'static> Collection<T> {
    pub fn new(store: Arc<dyn RecordStore<T>>) -> Self {
        Self { store }
    }

    pub fn from_path(path: impl Into<std::path::PathBuf>) -> Self {
        Self::new(Arc::new(JsonFileStore::<T>::new(path)))
    }

    pub fn list(&self) -> Vec<T> {
        self.store.load()
    }

    pub fn create(&self, record: T) -> Result<(), RecordError> {
        let mut records = self.store.load();
        if records.iter().any(|existing| existing.key() == record.key()) {
            return Err(reported(RecordError::Duplicate {
                entity: T::KIND,
                id: record.key().to_string(),
            }));
        }

        records.push(record);
        self.persist(&records);
        Ok(())
    }

    /// Remove the record stored under `id`, returning it.
    pub fn delete(&self, id: &str) -> Result<T, RecordError> {
        let mut records = self.store.load();
        let position = records
            .iter()
            .position(|record| record.key() == id)
            .ok_or_else(|| reported(not_found::<T>(id)))?;

        let removed = records.remove(position);
        self.persist(&records);
        Ok(removed)
    }

    pub fn find(&self, id: &str) -> Result<T, RecordError> {
        self.store
            .load()
            .into_iter()
            .find(|record| record.key() == id)
            .ok_or_else(|| reported(not_found::<T>(id)))
    }

    /// Overwrite one named attribute, returning the updated record.
    pub fn modify(&self, id: &str, field: &str, raw: &str) -> Result<T, RecordError> {
        if !T::FIELDS.contains(&field) {
            // An absent id still reports as not found first.
            self.find(id)?;
            return Err(reported(RecordError::UnknownField {
                entity: T::KIND,
                field: field.to_string(),
            }));
        }

        let mut records = self.store.load();
        let position = records
            .iter()
            .position(|record| record.key() == id)
            .ok_or_else(|| reported(not_found::<T>(id)))?;

        let mut updated = records[position].clone();
        updated.set_field(field, raw).map_err(reported)?;

        let collides = records
            .iter()
            .enumerate()
            .any(|(index, other)| index != position && other.key() == updated.key());
        if collides {
            return Err(reported(RecordError::Duplicate {
                entity: T::KIND,
                id: updated.key().to_string(),
            }));
        }

        records[position] = updated.clone();
        self.persist(&records);
        Ok(updated)
    }

    /// Apply `change` to the record under `id` and persist only when it succeeds.
    pub fn update<O, F>(&self, id: &str, change: F) -> Result<O, RecordError>
    where
        F: FnOnce(&mut T) -> Result<O, RecordError>,
    {
        let mut records = self.store.load();
        let record = records
            .iter_mut()
            .find(|record| record.key() == id)
            .ok_or_else(|| reported(not_found::<T>(id)))?;

        let outcome = change(record).map_err(reported)?;
        self.persist(&records);
        Ok(outcome)
    }

    fn persist(&self, records: &[T]) {
        if let Err(err) = self.store.save(records) {
            error!(
                entity = %T::KIND,
                location = %self.store.location(),
                error = %err,
                "failed to persist records"
            );
        }
    }
}

fn not_found<T: Record>(id: &str) -> RecordError {
    RecordError::NotFound {
        entity: T::KIND,
        id: id.to_string(),
    }
}
