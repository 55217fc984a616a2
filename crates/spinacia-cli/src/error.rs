// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Error types for command dispatch.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while dispatching a command.
///
/// These propagate to the binary boundary and crash the process with a
/// non-zero status. An unknown verb is not an error: it is reported as a
/// diagnostic and the process exits normally.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A known verb has no script file in any searched location.
    #[error("no script for '{verb}' found in {}", searched.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", "))]
    ScriptNotFound {
        /// The verb being dispatched.
        verb: String,
        /// Directories that were searched.
        searched: Vec<PathBuf>,
    },

    /// An I/O error occurred while spawning or waiting on the child.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for dispatch operations.
pub type DispatchResult<T> = Result<T, DispatchError>;
