// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

// Warn on missing documentation for public items
#![warn(missing_docs)]

//! Spinacia transpiler preset library.
//!
//! This crate resolves the boolean options of the Spinacia transpiler preset
//! and assembles the configuration payload handed to the external transpiler.
//! It mirrors a zero-config setup: callers supply at most a handful of
//! overrides, everything else is defaulted from the run mode.
//!
//! # Usage
//!
//! ```no_run
//! use spinacia_preset::{babel_config, PresetOptions, ResolvedOptions, RunMode};
//!
//! let mode = RunMode::from_env();
//! let resolved = ResolvedOptions::resolve(mode, &PresetOptions::default(), ".".as_ref())?;
//! let payload = babel_config(mode, &resolved);
//! let json = serde_json::to_string_pretty(&payload)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Run modes
//!
//! The run mode is derived once from `BABEL_ENV` / `NODE_ENV` (first
//! non-empty wins) and threaded through as an immutable value; nothing in
//! this crate re-reads the process environment during resolution.

/// Cache identifier for loader-level transpilation caches.
pub mod cache;
/// Run mode derivation from the process environment.
pub mod env;
/// Preset error types.
pub mod error;
/// Boolean option resolution and validation.
pub mod options;
/// Transpiler configuration payload assembly.
pub mod preset;
/// Runtime helper package location.
pub mod runtime;

pub use cache::cache_identifier;
pub use env::RunMode;
pub use error::{PresetError, PresetResult};
pub use options::{OptionValue, PresetOptions, ResolvedOptions};
pub use preset::{babel_config, BabelConfig, ConfigEntry, OverrideEntry};
pub use runtime::locate_runtime_dir;
