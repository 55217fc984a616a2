// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Run mode classification.
//!
//! The run mode is decided once per process from `BABEL_ENV` and `NODE_ENV`
//! (first non-empty wins) and then passed around as a plain value. Resolution
//! code never reads the environment itself, which keeps it a pure function of
//! its inputs and trivially testable.

use std::env;

/// Classification of the current execution context.
///
/// Drives default configuration choices in the option resolver. A value
/// outside the three known names behaves like `Unset`: every `is_*`
/// predicate answers `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunMode {
    /// Development build (dev server, hot reload).
    Development,
    /// Production build (minified bundle).
    Production,
    /// Test run (expects synchronous CommonJS resolution).
    Test,
    /// No environment was declared, or an unrecognized name was given.
    Unset,
}

impl RunMode {
    /// Derives the run mode from `BABEL_ENV` / `NODE_ENV`.
    pub fn from_env() -> Self {
        Self::from_env_pair(
            env::var("BABEL_ENV").ok().as_deref(),
            env::var("NODE_ENV").ok().as_deref(),
        )
    }

    /// Derives the run mode from explicit variable values.
    ///
    /// `babel_env` takes priority over `node_env`; empty strings count as
    /// absent.
    pub fn from_env_pair(babel_env: Option<&str>, node_env: Option<&str>) -> Self {
        let picked = [babel_env, node_env]
            .into_iter()
            .flatten()
            .find(|v| !v.is_empty());
        Self::from_name(picked)
    }

    /// Maps an environment name onto a run mode.
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("development") => RunMode::Development,
            Some("production") => RunMode::Production,
            Some("test") => RunMode::Test,
            _ => RunMode::Unset,
        }
    }

    /// `true` for development builds.
    pub fn is_development(self) -> bool {
        self == RunMode::Development
    }

    /// `true` for production builds.
    pub fn is_production(self) -> bool {
        self == RunMode::Production
    }

    /// `true` for test runs.
    pub fn is_test(self) -> bool {
        self == RunMode::Test
    }
}
