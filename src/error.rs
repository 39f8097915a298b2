use std::io;

use thiserror::Error;

/// Library-wide error type for nbsetup operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// No git repository at the setup root.
    #[error(".git subdirectory not found; run nbsetup inside a git repository")]
    NotARepository,

    /// Repository has no remote named `origin`.
    #[error("No 'origin' remote configured; the pages URL cannot be derived without one")]
    MissingOriginRemote,

    /// Origin remote URL does not follow the `<host>/<user>/<repo>` convention.
    #[error("Cannot derive user and repository from remote URL '{0}'")]
    MalformedRemoteUrl(String),

    /// Post-creation existence check for a scaffold directory failed.
    #[error("Failed to create directory '{0}'")]
    DirectoryCreationFailed(String),

    /// Configuration serialization failed.
    #[error("Failed to encode configuration: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Configuration parse error.
    #[error("Failed to parse configuration: {0}")]
    TomlParse(#[from] toml::de::Error),
}
