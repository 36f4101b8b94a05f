use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepoRecordError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Repository document is not a JSON object")]
    NotAnObject,

    #[error("Invalid value for field '{key}': {source}")]
    FieldType {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, RepoRecordError>;
