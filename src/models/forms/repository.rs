//! Repository create/update form.

use serde::Deserialize;
use validator::Validate;

/// Fields submitted by the create and edit forms. Missing fields
/// deserialize to empty strings so an empty submission reaches
/// validation instead of failing extraction.
#[derive(Debug, Deserialize, Validate)]
pub struct RepositoryForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "The url field is required."))]
    pub url: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "The description field is required."))]
    pub description: String,
}
