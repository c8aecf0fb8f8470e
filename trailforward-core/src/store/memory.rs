use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::{ImageStore, RecordStore};
use crate::error::{CoreError, CoreResult};
use crate::event::{EventRecord, NewEvent};

/// Record store kept in memory. Ids are assigned sequentially from 1.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<EventRecord>>,
    list_calls: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<EventRecord>) -> Self {
        MemoryStore {
            records: Mutex::new(records),
            list_calls: AtomicUsize::new(0),
        }
    }

    /// How many times `list` has been called.
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    fn lock(&self) -> CoreResult<std::sync::MutexGuard<'_, Vec<EventRecord>>> {
        self.records
            .lock()
            .map_err(|_| CoreError::Store("Memory store lock poisoned".into()))
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn list(&self) -> CoreResult<Vec<EventRecord>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.lock()?.clone())
    }

    async fn create(&self, event: &NewEvent) -> CoreResult<()> {
        let mut records = self.lock()?;
        let id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        records.push(EventRecord::from_new(id, event.clone()));
        Ok(())
    }

    async fn delete(&self, id: i64) -> CoreResult<()> {
        let mut records = self.lock()?;
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(CoreError::NotFound(id));
        }
        Ok(())
    }
}

/// Fixed list of image references.
#[derive(Debug, Clone, Default)]
pub struct StaticImages {
    images: Vec<String>,
}

impl StaticImages {
    pub fn new(images: Vec<String>) -> Self {
        StaticImages { images }
    }
}

#[async_trait]
impl ImageStore for StaticImages {
    async fn list(&self) -> CoreResult<Vec<String>> {
        if self.images.is_empty() {
            return Err(CoreError::ImagesNotFound);
        }
        Ok(self.images.clone())
    }
}
