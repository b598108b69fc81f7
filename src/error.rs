//! Error taxonomy and the error-to-exit-code mapping.

use std::io;

use thiserror::Error;

/// Everything that can stop a run.
#[derive(Debug, Error)]
pub enum Error {
    /// `--debug` and `--release` were both requested.
    #[error("select only one of '--debug' or '--release'")]
    BuildTypeConflict,

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// A tool could not be found on the search path, before any spawn.
    #[error("{tool} not found in path")]
    ToolNotFound { tool: String },

    /// A spawned tool finished with a non-zero status.
    #[error("{tool} exited with status {}", status_label(.code))]
    ToolFailed { tool: String, code: Option<i32> },
}

impl Error {
    /// Process exit code to report for this error.
    ///
    /// A failed tool's own exit code is propagated; everything else,
    /// including a tool killed by a signal, exits 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::ToolFailed {
                code: Some(code), ..
            } => *code,
            _ => 1,
        }
    }
}

fn status_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => String::from("none (killed by signal?)"),
    }
}
