use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpawnError {
    #[error("spawn search exhausted after {attempts} candidates")]
    SearchExhausted { attempts: u32 },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("malformed attempt document: {reason}")]
    MalformedDoc { reason: String },

    #[error("invalid search config: {reason}")]
    InvalidConfig { reason: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type SpawnResult<T> = Result<T, SpawnError>;
