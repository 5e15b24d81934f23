//! Error types for the tmux boundary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TmuxError {
    #[error("{0}: command not found")]
    NotFound(String),

    /// `output` is the combined output exactly as the process wrote it.
    #[error("{command} failed ({status}): {}", String::from_utf8_lossy(.output).trim())]
    CommandFailed {
        command: String,
        status: String,
        output: Vec<u8>,
    },

    #[error("invalid options scope: {0:?}")]
    InvalidScope(String),

    #[error("tmux io error: {0}")]
    Io(#[from] std::io::Error),
}
