use thiserror::Error;

/** errors raised by the outer layers (instance reading, configuration, exports).
The search procedures themselves never fail: blocked states are repaired in place and
internal inconsistencies abort through assertions.
*/
#[derive(Error, Debug)]
pub enum Error {
    /// file could not be read or written
    #[error("IO error on {path}: {source}")]
    Io {
        /// file involved
        path: String,
        /// underlying error
        source: std::io::Error,
    },

    /// malformed DIMACS instance
    #[error("parse error (line {line}): {reason}")]
    Parse {
        /// 1-based line number (0 if unknown)
        line: usize,
        /// what went wrong
        reason: String,
    },

    /// malformed JSON (configuration or statistics)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// command line value that cannot be parsed
    #[error("invalid value '{value}' for --{name}")]
    InvalidArgument {
        /// argument name
        name: &'static str,
        /// value given by the user
        value: String,
    },

    /// algorithm or expansion policy name not recognized
    #[error("unknown {kind} '{name}' (valid: {valid})")]
    UnknownName {
        /// "algorithm" or "expansion policy"
        kind: &'static str,
        /// name given by the user
        name: String,
        /// accepted names
        valid: &'static str,
    },
}

/// result type of the crate
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// wraps an IO error with the file it concerns
    pub fn io(path:&str, source:std::io::Error) -> Self {
        Self::Io { path: path.to_string(), source }
    }
}
