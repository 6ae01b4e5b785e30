// src/error.rs
use thiserror::Error;

/// Problems with the user's input that stop a run before any file is touched.
///
/// The `Display` text is exactly what the console shows.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    #[error("Directory does not exist")]
    MissingDirectory,
    #[error("Input is empty")]
    EmptySearchTerm,
    #[error("Input is empty")]
    EmptyReplacement,
}
