use thiserror::Error;

/// Main error type for the findomain dispatcher
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The external tool could not be located or spawned
    #[error("Failed to launch '{binary}': {source}")]
    LaunchFailure {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DispatchError {
    /// Wrap an I/O error raised while spawning `binary`
    pub fn launch_failure(binary: &str, source: std::io::Error) -> Self {
        DispatchError::LaunchFailure {
            binary: binary.to_string(),
            source,
        }
    }
}

/// Result type alias for dispatcher operations
pub type DispatchResult<T> = Result<T, DispatchError>;
