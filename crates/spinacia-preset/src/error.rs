// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Error types for preset resolution.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving preset options.
///
/// These are configuration errors: they abort payload assembly and are never
/// retried or downgraded.
#[derive(Debug, Error)]
pub enum PresetError {
    /// An explicitly supplied option was not a boolean.
    #[error("Preset spinacia-app: '{name}' option must be a boolean (got {found})")]
    InvalidOption {
        /// Name of the offending option.
        name: String,
        /// The value that was supplied instead of a boolean.
        found: serde_json::Value,
    },

    /// The `@babel/runtime` helper package could not be located.
    #[error("could not locate @babel/runtime under node_modules starting from {start}")]
    RuntimeNotFound {
        /// Directory the search started from.
        start: PathBuf,
    },

    /// An I/O error occurred while reading a package descriptor.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for preset operations.
pub type PresetResult<T> = Result<T, PresetError>;
