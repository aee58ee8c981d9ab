use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeyupError {
    // Resolution Errors
    #[error("could not determine home directory")]
    HomeDir,

    #[error("ssh-keygen not found on PATH")]
    KeygenNotFound,

    // Generation Errors
    #[error("refusing to overwrite file {}", .0.display())]
    KeyAlreadyExists(PathBuf),

    #[error("ssh-keygen failed: {0}")]
    KeyGeneration(String),

    #[error("could not prompt: {0}")]
    Prompt(#[from] dialoguer::Error),

    // Upload Errors
    #[error("cannot open key file {}: {source}", .path.display())]
    KeyFileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("GitHub API error: {0}")]
    Api(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // File/IO Errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, KeyupError>;
