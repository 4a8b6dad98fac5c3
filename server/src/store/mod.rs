//! Persistence boundary for todos.
//!
//! Handlers only see [`TaskStore`]; the concrete backend is picked once at
//! startup by [`open`].

mod memory;
mod mongo;

use std::sync::Arc;

use async_trait::async_trait;
use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use todo_shared::Task;

use crate::config::{Config, StorageMode};

pub use memory::InMemoryTaskStore;
pub use mongo::MongoTaskStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("failed to decode stored todo: {0}")]
    Decode(String),
}

/// A todo document as laid out in the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredTask {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub completed: bool,
    #[serde(rename = "createAt")]
    pub created_at: bson::DateTime,
}

impl StoredTask {
    /// A fresh, not yet completed todo with a new identifier stamped now.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ObjectId::new(),
            title: title.into(),
            completed: false,
            created_at: bson::DateTime::now(),
        }
    }
}

impl From<StoredTask> for Task {
    fn from(stored: StoredTask) -> Self {
        Self {
            id: stored.id.to_hex(),
            title: stored.title,
            completed: stored.completed,
            created_at: stored.created_at.to_chrono(),
        }
    }
}

/// Fields an update overwrites. `id` and `created_at` are never touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskChanges {
    pub title: String,
    pub completed: bool,
}

#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Every stored todo, in whatever order the backend yields them.
    async fn list(&self) -> Result<Vec<StoredTask>, StoreError>;

    async fn insert(&self, task: &StoredTask) -> Result<(), StoreError>;

    /// Overwrites `title` and `completed`. Returns whether a todo matched `id`.
    async fn update(&self, id: &ObjectId, changes: &TaskChanges) -> Result<bool, StoreError>;

    /// Removes at most one todo. Returns whether one was removed.
    async fn delete(&self, id: &ObjectId) -> Result<bool, StoreError>;
}

/// Opens the backend selected by `config`.
pub async fn open(config: &Config) -> Result<Arc<dyn TaskStore>, StoreError> {
    match config.storage {
        StorageMode::Mongo => {
            let store =
                MongoTaskStore::connect(&config.mongodb_uri, &config.database, &config.collection)
                    .await?;
            Ok(Arc::new(store))
        }
        StorageMode::Memory => Ok(Arc::new(InMemoryTaskStore::new())),
    }
}
