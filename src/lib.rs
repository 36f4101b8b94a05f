pub mod error;
pub mod models;

pub use error::{RepoRecordError, Result};
pub use models::{RepoOwner, RepoPermissions, RepoRecord};
