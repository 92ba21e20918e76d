//! Flash status message constants.

pub const MSG_REPOSITORY_CREATED: &str = "Repository created";
pub const MSG_REPOSITORY_UPDATED: &str = "Repository updated";
pub const MSG_REPOSITORY_DELETED: &str = "Repository deleted";

pub const MSG_NO_REPOSITORIES: &str = "No repositories created";
