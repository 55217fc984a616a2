// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Target script path resolution.
//!
//! The build scripts ship in a `scripts/` directory next to the installed
//! binary (or one level up, the package-layout equivalent of `bin/../scripts`).
//! `SPINACIA_SCRIPTS_DIR` overrides the search entirely, which is also what
//! the tests use.

use crate::error::{DispatchError, DispatchResult};
use std::env;
use std::path::PathBuf;

/// Environment variable overriding the scripts directory.
pub const SCRIPTS_DIR_ENV: &str = "SPINACIA_SCRIPTS_DIR";

/// Maps a verb to its script file name.
///
/// Colons are normalized to hyphens, so `build:prod` and `build-prod`
/// resolve to the same `build-prod.js`.
pub fn script_file_name(verb: &str) -> String {
    format!("{}.js", verb.replace(':', "-"))
}

/// Resolves the script path for a known verb.
///
/// A verb without a script file is a hard error: it propagates to the binary
/// boundary and the process fails loud, like an unresolvable module path in
/// the runtime this wrapper drives.
pub fn resolve_script(verb: &str) -> DispatchResult<PathBuf> {
    resolve_script_in(&search_dirs(), verb)
}

/// Resolves the script path for `verb` within explicit directories.
pub fn resolve_script_in(dirs: &[PathBuf], verb: &str) -> DispatchResult<PathBuf> {
    let file_name = script_file_name(verb);
    for dir in dirs {
        let candidate = dir.join(&file_name);
        if candidate.is_file() {
            tracing::debug!(script = %candidate.display(), "resolved target script");
            return Ok(candidate);
        }
    }

    Err(DispatchError::ScriptNotFound {
        verb: verb.to_string(),
        searched: dirs.to_vec(),
    })
}

fn search_dirs() -> Vec<PathBuf> {
    if let Ok(dir) = env::var(SCRIPTS_DIR_ENV) {
        if !dir.is_empty() {
            return vec![PathBuf::from(dir)];
        }
    }

    let mut dirs = Vec::new();
    if let Ok(exe) = env::current_exe() {
        if let Some(exe_dir) = exe.parent() {
            dirs.push(exe_dir.join("scripts"));
            if let Some(install_root) = exe_dir.parent() {
                dirs.push(install_root.join("scripts"));
            }
        }
    }
    // Development fallback: scripts in the working directory
    dirs.push(PathBuf::from("scripts"));
    dirs
}
