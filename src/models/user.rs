//! User account document.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// User account stored in MongoDB. A user owns zero or more
/// repositories, linked through `Repository::user_id`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: mongodb::bson::DateTime,
    pub updated_at: mongodb::bson::DateTime,
}

impl User {
    /// Hex form of the id, as carried in session claims.
    pub fn id_hex(&self) -> String {
        self.id.map(|id| id.to_hex()).unwrap_or_default()
    }
}
