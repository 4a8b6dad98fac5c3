use async_trait::async_trait;
use bson::doc;
use bson::oid::ObjectId;
use futures::TryStreamExt;
use mongodb::error::ErrorKind;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};

use super::{StoreError, StoredTask, TaskChanges, TaskStore};

pub struct MongoTaskStore {
    collection: Collection<StoredTask>,
}

impl MongoTaskStore {
    /// Connects and pings the server so an unreachable store fails at boot.
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(uri).await?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        let client = Client::with_options(options)?;

        let database = client.database(database);
        database.run_command(doc! { "ping": 1 }, None).await?;
        log::info!("connected to {} ({}.{})", uri, database.name(), collection);

        Ok(Self {
            collection: database.collection(collection),
        })
    }
}

#[async_trait]
impl TaskStore for MongoTaskStore {
    async fn list(&self) -> Result<Vec<StoredTask>, StoreError> {
        let cursor = self.collection.find(doc! {}, None).await?;
        cursor.try_collect().await.map_err(classify_read_error)
    }

    async fn insert(&self, task: &StoredTask) -> Result<(), StoreError> {
        self.collection.insert_one(task, None).await?;
        Ok(())
    }

    async fn update(&self, id: &ObjectId, changes: &TaskChanges) -> Result<bool, StoreError> {
        let result = self
            .collection
            .update_one(
                doc! { "_id": *id },
                doc! { "$set": { "title": changes.title.as_str(), "completed": changes.completed } },
                None,
            )
            .await?;
        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: &ObjectId) -> Result<bool, StoreError> {
        let result = self.collection.delete_one(doc! { "_id": *id }, None).await?;
        Ok(result.deleted_count > 0)
    }
}

fn classify_read_error(err: mongodb::error::Error) -> StoreError {
    let decode_failure = match err.kind.as_ref() {
        ErrorKind::BsonDeserialization(cause) => Some(cause.to_string()),
        _ => None,
    };
    match decode_failure {
        Some(cause) => StoreError::Decode(cause),
        None => StoreError::Database(err),
    }
}
