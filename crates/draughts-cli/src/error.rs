//! Terminal front-end errors.

/// Errors that can occur while running the interactive game loop.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The input stream closed before the game finished.
    #[error("input stream closed before the game finished")]
    InputClosed,

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
