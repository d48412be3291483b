use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Hustings error: {0}")]
    Hustings(#[from] hustings::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Project error: {0}")]
    Project(String),
}

pub type Result<T> = std::result::Result<T, Error>;
