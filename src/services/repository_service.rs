//! Repository service: CRUD over the repository store.

use std::sync::Arc;

use log::debug;
use mongodb::bson::oid::ObjectId;
use mongodb::Database;

use crate::constants::ERR_REPOSITORY_NOT_FOUND;
use crate::errors::AppError;
use crate::models::{Repository, RepositoryForm};
use crate::stores::{MongoRepositoryStore, RepositoryStore};

pub struct RepositoryService {
    store: Arc<dyn RepositoryStore>,
}

impl RepositoryService {
    pub fn new(db: &Database) -> Self {
        Self {
            store: Arc::new(MongoRepositoryStore::new(db)),
        }
    }

    /// Create a RepositoryService over any store (dependency injection).
    pub fn with_store(store: Arc<dyn RepositoryStore>) -> Self {
        Self { store }
    }

    /// Get the underlying store (for sharing and seeding in tests).
    pub fn store(&self) -> Arc<dyn RepositoryStore> {
        Arc::clone(&self.store)
    }

    pub async fn list_for_owner(&self, owner: ObjectId) -> Result<Vec<Repository>, AppError> {
        self.store.find_by_owner(owner).await
    }

    /// Fetch by hex id; unknown or malformed ids are a 404.
    pub async fn get(&self, id: &str) -> Result<Repository, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::NotFound(ERR_REPOSITORY_NOT_FOUND.to_string()))?;

        self.store
            .find_by_id(object_id)
            .await?
            .ok_or_else(|| AppError::NotFound(ERR_REPOSITORY_NOT_FOUND.to_string()))
    }

    pub async fn create(
        &self,
        owner: ObjectId,
        form: RepositoryForm,
    ) -> Result<Repository, AppError> {
        let now = mongodb::bson::DateTime::now();
        let repository = Repository {
            id: None,
            url: form.url,
            description: form.description,
            user_id: owner,
            created_at: now,
            updated_at: now,
        };

        let id = self.store.insert(&repository).await?;
        debug!(
            "Created repository {} for user {}",
            id.to_hex(),
            owner.to_hex()
        );

        Ok(Repository {
            id: Some(id),
            ..repository
        })
    }

    pub async fn update(
        &self,
        repository: &Repository,
        form: RepositoryForm,
    ) -> Result<(), AppError> {
        let id = repository
            .id
            .ok_or_else(|| AppError::Internal("repository is missing an id".to_string()))?;
        self.store.update(id, &form.url, &form.description).await
    }

    pub async fn delete(&self, repository: &Repository) -> Result<(), AppError> {
        let id = repository
            .id
            .ok_or_else(|| AppError::Internal("repository is missing an id".to_string()))?;
        self.store.delete(id).await
    }
}
