use async_trait::async_trait;
use bson::oid::ObjectId;
use tokio::sync::RwLock;

use super::{StoreError, StoredTask, TaskChanges, TaskStore};

/// Process-local store. Contents are lost on exit; todos are listed in
/// insertion order.
#[derive(Debug, Default)]
pub struct InMemoryTaskStore {
    tasks: RwLock<Vec<StoredTask>>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn list(&self) -> Result<Vec<StoredTask>, StoreError> {
        Ok(self.tasks.read().await.clone())
    }

    async fn insert(&self, task: &StoredTask) -> Result<(), StoreError> {
        self.tasks.write().await.push(task.clone());
        Ok(())
    }

    async fn update(&self, id: &ObjectId, changes: &TaskChanges) -> Result<bool, StoreError> {
        let mut tasks = self.tasks.write().await;
        match tasks.iter_mut().find(|task| task.id == *id) {
            Some(task) => {
                task.title = changes.title.clone();
                task.completed = changes.completed;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &ObjectId) -> Result<bool, StoreError> {
        let mut tasks = self.tasks.write().await;
        match tasks.iter().position(|task| task.id == *id) {
            Some(index) => {
                tasks.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
