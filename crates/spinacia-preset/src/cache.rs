// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Cache identifiers for loader-level transpilation caches.
//!
//! The external loader keys its on-disk cache by environment plus the
//! versions of the packages that influence output. A version bump in any of
//! them must invalidate the cache, so the identifier embeds each version.

use serde_json::Value;
use std::fs;
use std::path::Path;

/// Builds a cache identifier from the environment name and package versions.
///
/// Each package contributes `:{name}@{version}`, with the version read from
/// `node_modules/<name>/package.json` under `project_root`. A package that is
/// missing or unreadable contributes an empty version rather than failing;
/// an overly broad identifier only costs a cache miss.
pub fn cache_identifier(environment: &str, packages: &[&str], project_root: &Path) -> String {
    let mut identifier = environment.to_string();
    for package in packages {
        let version = package_version(project_root, package).unwrap_or_default();
        identifier.push_str(&format!(":{package}@{version}"));
    }
    identifier
}

fn package_version(project_root: &Path, package: &str) -> Option<String> {
    let descriptor = project_root
        .join("node_modules")
        .join(package)
        .join("package.json");
    let raw = fs::read_to_string(&descriptor).ok()?;
    let parsed: Value = serde_json::from_str(&raw).ok()?;
    let version = parsed.get("version")?.as_str()?.to_string();
    Some(version)
}
