//! Error types for metric collection and frame rendering

use std::time::Duration;
use thiserror::Error;

/// Why a single metric could not be collected
///
/// These never leave the collector boundary: they are logged and the metric
/// shows the placeholder for that frame.
#[derive(Debug, Error)]
pub enum CollectionError {
    #[error("failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` exited with {status}")]
    CommandFailed { program: String, status: String },

    #[error("`{program}` did not finish within {timeout:?}")]
    Timeout { program: String, timeout: Duration },

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("field `{0}` missing from response")]
    MissingField(&'static str),

    #[error("could not resolve {host}: {reason}")]
    Resolve { host: String, reason: String },

    #[error("no logical CPU cores reported")]
    NoCores,

    #[error("{0} reported zero capacity")]
    ZeroTotal(&'static str),

    #[error("no filesystem mounted at {0}")]
    NoMount(String),

    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unexpected value {value:?}: {reason}")]
    Parse { value: String, reason: String },

    #[error("{0} is not available on this system")]
    Unsupported(&'static str),
}

/// Why a frame could not be produced
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to acquire frame: {0}")]
    Acquire(String),

    #[error("failed to draw {text:?} at ({x}, {y}): {reason}")]
    Draw {
        x: i32,
        y: i32,
        text: String,
        reason: String,
    },

    #[error("failed to commit frame: {0}")]
    Commit(#[source] anyhow::Error),
}
