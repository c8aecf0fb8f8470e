//! Interfaces of the record and image collaborators.

mod memory;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::event::{EventRecord, NewEvent};

pub use memory::{MemoryStore, StaticImages};

/// Persistence for event records.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn list(&self) -> CoreResult<Vec<EventRecord>>;

    async fn create(&self, event: &NewEvent) -> CoreResult<()>;

    /// Fails with [`CoreError::NotFound`](crate::CoreError::NotFound) when
    /// no record has `id`.
    async fn delete(&self, id: i64) -> CoreResult<()>;
}

/// Source of gallery image references.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Fails with [`CoreError::ImagesNotFound`](crate::CoreError::ImagesNotFound)
    /// when the collection is empty and
    /// [`CoreError::ImagesUnreadable`](crate::CoreError::ImagesUnreadable)
    /// when it cannot be read.
    async fn list(&self) -> CoreResult<Vec<String>>;
}

#[async_trait]
impl<T: RecordStore + ?Sized> RecordStore for Arc<T> {
    async fn list(&self) -> CoreResult<Vec<EventRecord>> {
        (**self).list().await
    }

    async fn create(&self, event: &NewEvent) -> CoreResult<()> {
        (**self).create(event).await
    }

    async fn delete(&self, id: i64) -> CoreResult<()> {
        (**self).delete(id).await
    }
}

#[async_trait]
impl<T: ImageStore + ?Sized> ImageStore for Arc<T> {
    async fn list(&self) -> CoreResult<Vec<String>> {
        (**self).list().await
    }
}
