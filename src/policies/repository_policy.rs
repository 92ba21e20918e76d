//! Ownership policy for repository records.

use mongodb::bson::oid::ObjectId;

use crate::models::Repository;

/// A user may view, update, or delete a repository iff they own it.
///
/// Handlers evaluate this before validation or mutation for every
/// action that touches an existing record.
pub fn can_manage(user_id: &ObjectId, repository: &Repository) -> bool {
    repository.user_id == *user_id
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::DateTime;

    fn repository_owned_by(user_id: ObjectId) -> Repository {
        let now = DateTime::now();
        Repository {
            id: Some(ObjectId::new()),
            url: "https://example.com".to_string(),
            description: "demo".to_string(),
            user_id,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn owner_can_manage() {
        let owner = ObjectId::new();
        let repository = repository_owned_by(owner);
        assert!(can_manage(&owner, &repository));
    }

    #[test]
    fn non_owner_cannot_manage() {
        let repository = repository_owned_by(ObjectId::new());
        let stranger = ObjectId::new();
        assert!(!can_manage(&stranger, &repository));
    }
}
