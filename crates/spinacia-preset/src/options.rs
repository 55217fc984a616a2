// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Boolean preset option resolution.
//!
//! Callers may override four boolean options; anything not supplied is
//! defaulted from the run mode. A supplied non-boolean is a fatal
//! configuration error naming the offending option. Each option is validated
//! independently at the point it is needed, so one bad override never masks
//! the validation of another.

use crate::env::RunMode;
use crate::error::{PresetError, PresetResult};
use crate::runtime::locate_runtime_dir;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// A caller-supplied option value before validation.
///
/// Supplied values arrive as loosely typed JSON, so the three cases are kept
/// explicit instead of being inferred from runtime type inspection.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    /// The option was not provided; the default applies.
    Unset,
    /// A boolean was provided.
    Bool(bool),
    /// Something other than a boolean was provided.
    Invalid(Value),
}

impl OptionValue {
    /// Classifies an optional JSON value.
    pub fn from_json(value: Option<&Value>) -> Self {
        match value {
            None => OptionValue::Unset,
            Some(Value::Bool(b)) => OptionValue::Bool(*b),
            // An explicit null is still an explicit non-boolean.
            Some(other) => OptionValue::Invalid(other.clone()),
        }
    }
}

impl Default for OptionValue {
    fn default() -> Self {
        OptionValue::Unset
    }
}

/// Resolves one option against its default.
///
/// Returns the supplied boolean, the default when nothing was supplied, or
/// a [`PresetError::InvalidOption`] naming `name` when the supplied value is
/// not a boolean.
pub fn resolve_flag(name: &str, value: &OptionValue, default: bool) -> PresetResult<bool> {
    match value {
        OptionValue::Unset => Ok(default),
        OptionValue::Bool(b) => Ok(*b),
        OptionValue::Invalid(found) => Err(PresetError::InvalidOption {
            name: name.to_string(),
            found: found.clone(),
        }),
    }
}

/// Caller-supplied preset overrides, all optional.
#[derive(Debug, Clone, Default)]
pub struct PresetOptions {
    /// Emit ES module output instead of CommonJS (`useESModules`).
    pub use_es_modules: OptionValue,
    /// Enable TypeScript syntax stripping (`typescript`).
    pub typescript: OptionValue,
    /// Enable shared runtime helper injection (`helpers`).
    pub helpers: OptionValue,
    /// Reference the runtime helper package by absolute path
    /// (`absoluteRuntime`).
    pub absolute_runtime: OptionValue,
}

impl PresetOptions {
    /// Builds overrides from a JSON options object, using the original
    /// preset's key names. Unknown keys are ignored.
    pub fn from_json(opts: &Value) -> Self {
        Self {
            use_es_modules: OptionValue::from_json(opts.get("useESModules")),
            typescript: OptionValue::from_json(opts.get("typescript")),
            helpers: OptionValue::from_json(opts.get("helpers")),
            absolute_runtime: OptionValue::from_json(opts.get("absoluteRuntime")),
        }
    }
}

/// Fully resolved preset options; every flag is a concrete boolean.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOptions {
    /// Emit ES module output.
    pub use_es_modules: bool,
    /// TypeScript syntax stripping enabled.
    pub typescript: bool,
    /// Runtime helper injection enabled.
    pub helpers: bool,
    /// Reference the runtime helper package by absolute path.
    pub absolute_runtime: bool,
    /// Directory of the runtime helper package, computed only when
    /// `absolute_runtime` is on.
    pub absolute_runtime_path: Option<PathBuf>,
}

impl ResolvedOptions {
    /// Resolves all options for `mode`, locating the runtime helper package
    /// under `project_root` when required.
    ///
    /// ES module output defaults on for development and production builds;
    /// test runs expect CommonJS-style synchronous module resolution.
    pub fn resolve(mode: RunMode, opts: &PresetOptions, project_root: &Path) -> PresetResult<Self> {
        let use_es_modules = resolve_flag(
            "useESModules",
            &opts.use_es_modules,
            mode.is_development() || mode.is_production(),
        )?;
        let typescript = resolve_flag("typescript", &opts.typescript, true)?;
        let helpers = resolve_flag("helpers", &opts.helpers, true)?;
        let absolute_runtime = resolve_flag("absoluteRuntime", &opts.absolute_runtime, true)?;

        let absolute_runtime_path = if absolute_runtime {
            Some(locate_runtime_dir(project_root)?)
        } else {
            None
        };

        tracing::debug!(
            ?mode,
            use_es_modules,
            typescript,
            helpers,
            absolute_runtime,
            "resolved preset options"
        );

        Ok(Self {
            use_es_modules,
            typescript,
            helpers,
            absolute_runtime,
            absolute_runtime_path,
        })
    }
}
