//! User persistence.

use async_trait::async_trait;
use log::debug;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};

use crate::constants::COLLECTION_USERS;
use crate::errors::AppError;
use crate::models::User;

/// Persistence seam for user accounts.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert(&self, user: &User) -> Result<ObjectId, AppError>;
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<User>, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
}

/// MongoDB-backed user store.
pub struct MongoUserStore {
    collection: Collection<User>,
}

impl MongoUserStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_USERS),
        }
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn insert(&self, user: &User) -> Result<ObjectId, AppError> {
        let result = self.collection.insert_one(user).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::Internal("inserted user id was not an ObjectId".to_string()))
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<User>, AppError> {
        debug!("Store: finding user by id: {}", id);
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .collection
            .find_one(doc! { "email": email.to_lowercase() })
            .await?)
    }
}
