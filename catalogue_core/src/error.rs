use std::{io, path::PathBuf};

use thiserror::Error;

use crate::data::{category::CategoryId, user::UserId};

#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("failed to read fixture file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse the {collection} fixture")]
    Json {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("no user with ID {0}")]
    UnknownUser(UserId),
    #[error("no category with ID {0}")]
    UnknownCategory(CategoryId),
}

pub type CatalogueResult<T> = Result<T, CatalogueError>;
