// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Location of the `@babel/runtime` helper package.
//!
//! When the preset references the runtime helper package by absolute path it
//! needs the directory holding that package's `package.json`. Node resolves
//! this by walking `node_modules` directories upward from the requiring file;
//! this module does the same walk from the project root.

use crate::error::{PresetError, PresetResult};
use std::path::{Path, PathBuf};

/// Relative location of the runtime helper descriptor inside `node_modules`.
const RUNTIME_DESCRIPTOR: &str = "node_modules/@babel/runtime/package.json";

/// Returns the directory containing the `@babel/runtime` package.
///
/// Walks from `start` through its ancestors, checking each for
/// `node_modules/@babel/runtime/package.json`. Failing to find it is fatal:
/// helper injection cannot proceed without a resolvable runtime package.
pub fn locate_runtime_dir(start: &Path) -> PresetResult<PathBuf> {
    for dir in start.ancestors() {
        let descriptor = dir.join(RUNTIME_DESCRIPTOR);
        if descriptor.is_file() {
            // package.json always has a parent here by construction
            let package_dir = descriptor.parent().map(Path::to_path_buf);
            if let Some(package_dir) = package_dir {
                tracing::debug!(path = %package_dir.display(), "located @babel/runtime");
                return Ok(package_dir);
            }
        }
    }

    Err(PresetError::RuntimeNotFound {
        start: start.to_path_buf(),
    })
}
