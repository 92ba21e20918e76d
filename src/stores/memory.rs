//! In-memory store backends.
//!
//! Thread-safe maps keyed by ObjectId, used by the integration tests
//! and available as a database-free backend for local experiments.

use async_trait::async_trait;
use dashmap::DashMap;
use mongodb::bson::oid::ObjectId;

use crate::errors::AppError;
use crate::models::{Repository, User};
use crate::stores::{RepositoryStore, UserStore};

#[derive(Default)]
pub struct InMemoryUserStore {
    users: DashMap<ObjectId, User>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert(&self, user: &User) -> Result<ObjectId, AppError> {
        let id = user.id.unwrap_or_else(ObjectId::new);
        let mut stored = user.clone();
        stored.id = Some(id);
        self.users.insert(id, stored);
        Ok(id)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<User>, AppError> {
        Ok(self.users.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let email = email.to_lowercase();
        Ok(self
            .users
            .iter()
            .find(|entry| entry.value().email == email)
            .map(|entry| entry.value().clone()))
    }
}

#[derive(Default)]
pub struct InMemoryRepositoryStore {
    repositories: DashMap<ObjectId, Repository>,
}

impl InMemoryRepositoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RepositoryStore for InMemoryRepositoryStore {
    async fn insert(&self, repository: &Repository) -> Result<ObjectId, AppError> {
        let id = repository.id.unwrap_or_else(ObjectId::new);
        let mut stored = repository.clone();
        stored.id = Some(id);
        self.repositories.insert(id, stored);
        Ok(id)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Repository>, AppError> {
        Ok(self
            .repositories
            .get(&id)
            .map(|entry| entry.value().clone()))
    }

    async fn find_by_owner(&self, user_id: ObjectId) -> Result<Vec<Repository>, AppError> {
        let mut owned: Vec<Repository> = self
            .repositories
            .iter()
            .filter(|entry| entry.value().user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    async fn update(&self, id: ObjectId, url: &str, description: &str) -> Result<(), AppError> {
        if let Some(mut entry) = self.repositories.get_mut(&id) {
            let repository = entry.value_mut();
            repository.url = url.to_string();
            repository.description = description.to_string();
            repository.updated_at = mongodb::bson::DateTime::now();
        }
        Ok(())
    }

    async fn delete(&self, id: ObjectId) -> Result<(), AppError> {
        self.repositories.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::DateTime;

    fn repository(owner: ObjectId, url: &str) -> Repository {
        let now = DateTime::now();
        Repository {
            id: None,
            url: url.to_string(),
            description: "demo".to_string(),
            user_id: owner,
            created_at: now,
            updated_at: now,
        }
    }

    #[actix_web::test]
    async fn find_by_owner_is_scoped_to_the_owner() {
        let store = InMemoryRepositoryStore::new();
        let alice = ObjectId::new();
        let bob = ObjectId::new();

        store
            .insert(&repository(alice, "https://alice.example"))
            .await
            .unwrap();
        store
            .insert(&repository(bob, "https://bob.example"))
            .await
            .unwrap();

        let owned = store.find_by_owner(alice).await.unwrap();
        assert_eq!(owned.len(), 1);
        assert_eq!(owned[0].url, "https://alice.example");

        // A user with no records sees nothing, even though the store
        // is not empty.
        let nobody = store.find_by_owner(ObjectId::new()).await.unwrap();
        assert!(nobody.is_empty());
    }

    #[actix_web::test]
    async fn update_rewrites_fields_in_place() {
        let store = InMemoryRepositoryStore::new();
        let owner = ObjectId::new();
        let id = store
            .insert(&repository(owner, "https://old.example"))
            .await
            .unwrap();

        store
            .update(id, "https://new.example", "updated")
            .await
            .unwrap();

        let found = store.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.url, "https://new.example");
        assert_eq!(found.description, "updated");
        assert_eq!(found.user_id, owner);
    }

    #[actix_web::test]
    async fn delete_removes_the_record() {
        let store = InMemoryRepositoryStore::new();
        let id = store
            .insert(&repository(ObjectId::new(), "https://example.com"))
            .await
            .unwrap();

        store.delete(id).await.unwrap();
        assert!(store.find_by_id(id).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn user_lookup_by_email_is_case_insensitive() {
        let store = InMemoryUserStore::new();
        let now = DateTime::now();
        store
            .insert(&User {
                id: None,
                name: "Test User".to_string(),
                email: "user@example.com".to_string(),
                password_hash: "hash".to_string(),
                created_at: now,
                updated_at: now,
            })
            .await
            .unwrap();

        assert!(store
            .find_by_email("USER@example.com")
            .await
            .unwrap()
            .is_some());
    }
}
