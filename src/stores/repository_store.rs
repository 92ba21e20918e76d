//! Repository record persistence.

use async_trait::async_trait;
use futures::TryStreamExt;
use log::debug;
use mongodb::bson::{doc, oid::ObjectId, DateTime};
use mongodb::{Collection, Database};

use crate::constants::COLLECTION_REPOSITORIES;
use crate::errors::AppError;
use crate::models::Repository;

/// Persistence seam for repository records.
#[async_trait]
pub trait RepositoryStore: Send + Sync {
    async fn insert(&self, repository: &Repository) -> Result<ObjectId, AppError>;
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Repository>, AppError>;
    /// All repositories owned by the given user, newest first. Never
    /// returns records owned by anyone else.
    async fn find_by_owner(&self, user_id: ObjectId) -> Result<Vec<Repository>, AppError>;
    async fn update(&self, id: ObjectId, url: &str, description: &str) -> Result<(), AppError>;
    async fn delete(&self, id: ObjectId) -> Result<(), AppError>;
}

/// MongoDB-backed repository store.
pub struct MongoRepositoryStore {
    collection: Collection<Repository>,
}

impl MongoRepositoryStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_REPOSITORIES),
        }
    }
}

#[async_trait]
impl RepositoryStore for MongoRepositoryStore {
    async fn insert(&self, repository: &Repository) -> Result<ObjectId, AppError> {
        let result = self.collection.insert_one(repository).await?;
        result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::Internal("inserted repository id was not an ObjectId".to_string())
        })
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Repository>, AppError> {
        debug!("Store: finding repository by id: {}", id);
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn find_by_owner(&self, user_id: ObjectId) -> Result<Vec<Repository>, AppError> {
        debug!("Store: finding repositories owned by: {}", user_id);
        let cursor = self
            .collection
            .find(doc! { "user_id": user_id })
            .sort(doc! { "created_at": -1 })
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn update(&self, id: ObjectId, url: &str, description: &str) -> Result<(), AppError> {
        self.collection
            .update_one(
                doc! { "_id": id },
                doc! {
                    "$set": {
                        "url": url,
                        "description": description,
                        "updated_at": DateTime::now()
                    }
                },
            )
            .await?;
        Ok(())
    }

    async fn delete(&self, id: ObjectId) -> Result<(), AppError> {
        self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(())
    }
}
