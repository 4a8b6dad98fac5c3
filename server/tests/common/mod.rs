//! Shared fixtures for the endpoint tests.

#![allow(dead_code)]

use std::io;
use std::sync::Arc;

use async_trait::async_trait;
use bson::oid::ObjectId;
use todo_server::store::{InMemoryTaskStore, StoreError, StoredTask, TaskChanges, TaskStore};

/// Builds the full application around `$store` and starts it as a test service.
macro_rules! test_app {
    ($store:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new(todo_server::AppState::new($store)))
                .configure(todo_server::routes),
        )
        .await
    };
}

pub fn memory_store() -> Arc<InMemoryTaskStore> {
    Arc::new(InMemoryTaskStore::new())
}

pub async fn seed(store: &InMemoryTaskStore, title: &str) -> StoredTask {
    let task = StoredTask::new(title);
    store.insert(&task).await.expect("in-memory insert");
    task
}

/// A store whose every call fails.
pub enum FailingStore {
    /// The database cannot be reached.
    Unreachable,
    /// Documents come back but cannot be decoded.
    Corrupt,
}

impl FailingStore {
    fn failure(&self) -> StoreError {
        match self {
            Self::Unreachable => StoreError::Database(mongodb::error::Error::from(
                io::Error::new(io::ErrorKind::ConnectionReset, "connection reset"),
            )),
            Self::Corrupt => StoreError::Decode("missing field `title`".to_string()),
        }
    }
}

#[async_trait]
impl TaskStore for FailingStore {
    async fn list(&self) -> Result<Vec<StoredTask>, StoreError> {
        Err(self.failure())
    }

    async fn insert(&self, _task: &StoredTask) -> Result<(), StoreError> {
        Err(self.failure())
    }

    async fn update(&self, _id: &ObjectId, _changes: &TaskChanges) -> Result<bool, StoreError> {
        Err(self.failure())
    }

    async fn delete(&self, _id: &ObjectId) -> Result<bool, StoreError> {
        Err(self.failure())
    }
}
