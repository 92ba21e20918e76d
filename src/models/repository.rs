//! Repository record document.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A repository record. `user_id` is the owning user; every record has
/// exactly one owner for its whole lifetime.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Repository {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub url: String,
    pub description: String,
    pub user_id: ObjectId,
    pub created_at: mongodb::bson::DateTime,
    pub updated_at: mongodb::bson::DateTime,
}

impl Repository {
    /// Hex form of the id, as used in routes and views.
    pub fn id_hex(&self) -> String {
        self.id.map(|id| id.to_hex()).unwrap_or_default()
    }
}
