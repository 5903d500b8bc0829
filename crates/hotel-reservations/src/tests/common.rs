use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tempfile::TempDir;

use crate::config::StoreConfig;
use crate::domain::{Customer, Hotel, Reservation};
use crate::managers::{CustomerManager, HotelManager, ReservationManager};
use crate::service::ReservationService;
use crate::storage::{RecordStore, StoreError};

pub(super) fn hotel() -> Hotel {
    Hotel::new("H1", "Hotel Tequendama", "Bogota", 2)
}

pub(super) fn customer() -> Customer {
    Customer::new("C1", "Daniel", "dan@test.com")
}

pub(super) fn reservation() -> Reservation {
    Reservation::new("R1", "C1", "H1")
}

/// Store directory that disappears with the test.
pub(super) struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub(super) fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("temp dir"),
        }
    }

    pub(super) fn config(&self) -> StoreConfig {
        StoreConfig::in_dir(self.dir.path())
    }

    pub(super) fn hotels_path(&self) -> PathBuf {
        self.config().hotels_path()
    }

    pub(super) fn hotels(&self) -> HotelManager {
        HotelManager::from_path(self.config().hotels_path())
    }

    pub(super) fn customers(&self) -> CustomerManager {
        CustomerManager::from_path(self.config().customers_path())
    }

    pub(super) fn reservations(&self) -> ReservationManager {
        ReservationManager::from_path(self.config().reservations_path())
    }

    pub(super) fn service(&self) -> ReservationService {
        ReservationService::from_config(&self.config())
    }
}

/// In-memory store that can be told to refuse writes.
pub(super) struct MemoryStore<T> {
    records: Mutex<Vec<T>>,
    fail_writes: bool,
}

impl<T> MemoryStore<T> {
    pub(super) fn seeded(records: Vec<T>) -> Arc<Self> {
        Arc::new(Self {
            records: Mutex::new(records),
            fail_writes: false,
        })
    }

    pub(super) fn read_only(records: Vec<T>) -> Arc<Self> {
        Arc::new(Self {
            records: Mutex::new(records),
            fail_writes: true,
        })
    }
}

impl<T: Clone + Send> RecordStore<T> for MemoryStore<T> {
    fn load(&self) -> Vec<T> {
        self.records.lock().expect("store mutex poisoned").clone()
    }

    fn save(&self, records: &[T]) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Io {
                path: PathBuf::from("memory"),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        *self.records.lock().expect("store mutex poisoned") = records.to_vec();
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
