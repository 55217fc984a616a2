// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Transpiler configuration payload assembly.
//!
//! The payload is three ordered lists (presets, plugins, overrides) handed
//! verbatim to the external transpiler. Entries are appended under explicit
//! boolean guards so the final order is visible in the code, instead of
//! building a mixed list and filtering falsy members afterwards.

use crate::env::RunMode;
use crate::options::ResolvedOptions;
use serde::ser::{Serialize, SerializeSeq, Serializer};
use serde_json::{json, Value};

/// One preset or plugin entry: a bare reference, or a reference paired with
/// an options value.
///
/// Serializes as a plain string for bare entries and as a two-element
/// `[reference, options]` array otherwise, matching the shape the external
/// transpiler consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigEntry {
    /// Package reference of the preset or plugin.
    pub name: String,
    /// Options value, when the entry carries one.
    pub options: Option<Value>,
}

impl ConfigEntry {
    /// A bare entry with no options.
    pub fn bare(name: &str) -> Self {
        Self {
            name: name.to_string(),
            options: None,
        }
    }

    /// An entry with an options value.
    pub fn with_options(name: &str, options: Value) -> Self {
        Self {
            name: name.to_string(),
            options: Some(options),
        }
    }
}

impl Serialize for ConfigEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.options {
            None => serializer.serialize_str(&self.name),
            Some(options) => {
                let mut seq = serializer.serialize_seq(Some(2))?;
                seq.serialize_element(&self.name)?;
                seq.serialize_element(options)?;
                seq.end()
            }
        }
    }
}

/// An override block applying extra plugins to files matching a pattern.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct OverrideEntry {
    /// File pattern the override applies to.
    pub test: String,
    /// Plugins enabled for matching files.
    pub plugins: Vec<ConfigEntry>,
}

/// The assembled configuration payload for the external transpiler.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct BabelConfig {
    /// Ordered preset entries.
    pub presets: Vec<ConfigEntry>,
    /// Ordered plugin entries.
    pub plugins: Vec<ConfigEntry>,
    /// Override blocks keyed by file-extension pattern.
    pub overrides: Vec<OverrideEntry>,
}

/// Assembles the transpiler payload for `mode` and the resolved options.
///
/// Pure data assembly: which entries appear, and in which order, is fully
/// determined by the inputs.
pub fn babel_config(mode: RunMode, resolved: &ResolvedOptions) -> BabelConfig {
    let mut presets = Vec::new();

    if mode.is_production() || mode.is_development() {
        // Latest stable ECMAScript features, polyfills selected via
        // browserslist; module transforms are left to the bundler.
        presets.push(ConfigEntry::with_options(
            "@babel/preset-env",
            json!({
                "useBuiltIns": "entry",
                "corejs": 3,
                "modules": false,
                "exclude": ["transform-typeof-symbol"],
            }),
        ));
    }

    presets.push(ConfigEntry::with_options(
        "@babel/preset-react",
        json!({
            "debug": false,
            // Adds component stacks and __self attributes for warnings
            "development": mode.is_development() || mode.is_test(),
            "useBuiltIns": true,
        }),
    ));

    if resolved.typescript {
        presets.push(ConfigEntry::bare("@babel/preset-typescript"));
    }

    let mut plugins = Vec::new();

    plugins.push(ConfigEntry::bare("babel-plugin-macros"));

    plugins.push(ConfigEntry::with_options(
        "@babel/plugin-transform-destructuring",
        json!({
            "loose": false,
            "selectiveLoose": [
                "useState",
                "useEffect",
                "useContext",
                "useReducer",
                "useCallback",
                "useMemo",
                "useRef",
                "useImperativeHandle",
                "useLayoutEffect",
                "useDebugValue",
            ],
        }),
    ));

    if resolved.typescript {
        // Legacy decorators for TypeScript files; the literal `false` is the
        // option value the transpiler expects here.
        plugins.push(ConfigEntry::with_options(
            "@babel/plugin-proposal-decorators",
            Value::Bool(false),
        ));
    }

    plugins.push(ConfigEntry::with_options(
        "@babel/plugin-proposal-class-properties",
        json!({ "loose": true }),
    ));

    plugins.push(ConfigEntry::with_options(
        "@babel/plugin-proposal-object-rest-spread",
        json!({ "useBuiltIns": true }),
    ));

    let mut runtime_options = json!({
        "corejs": false,
        "helpers": resolved.helpers,
        "regenerator": true,
        "useESModules": resolved.use_es_modules,
    });
    if let Some(path) = &resolved.absolute_runtime_path {
        runtime_options["absoluteRuntime"] = json!(path.display().to_string());
    }
    plugins.push(ConfigEntry::with_options(
        "@babel/plugin-transform-runtime",
        runtime_options,
    ));

    if mode.is_production() {
        plugins.push(ConfigEntry::with_options(
            "babel-plugin-transform-react-remove-prop-types",
            json!({ "removeImport": true }),
        ));
    }

    plugins.push(ConfigEntry::bare("@babel/plugin-syntax-dynamic-import"));

    if mode.is_test() {
        // Test runners resolve modules synchronously
        plugins.push(ConfigEntry::bare("babel-plugin-dynamic-import-node"));
    }

    let mut overrides = Vec::new();
    if resolved.typescript {
        overrides.push(OverrideEntry {
            test: r"\.tsx?$".to_string(),
            plugins: vec![ConfigEntry::with_options(
                "@babel/plugin-proposal-decorators",
                json!({ "legacy": true }),
            )],
        });
    }

    BabelConfig {
        presets,
        plugins,
        overrides,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;

    fn resolved(typescript: bool, helpers: bool, es_modules: bool) -> ResolvedOptions {
        ResolvedOptions {
            use_es_modules: es_modules,
            typescript,
            helpers,
            absolute_runtime: false,
            absolute_runtime_path: None,
        }
    }

    fn names(entries: &[ConfigEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_preset_env_only_for_dev_and_prod() {
        for (mode, expected) in [
            (RunMode::Development, true),
            (RunMode::Production, true),
            (RunMode::Test, false),
            (RunMode::Unset, false),
        ] {
            let config = babel_config(mode, &resolved(true, true, false));
            assert_eq!(
                names(&config.presets).contains(&"@babel/preset-env"),
                expected,
                "mode {mode:?}"
            );
        }
    }

    #[test]
    fn test_development_preset_order() {
        let config = babel_config(RunMode::Development, &resolved(true, true, true));
        assert_eq!(
            names(&config.presets),
            vec![
                "@babel/preset-env",
                "@babel/preset-react",
                "@babel/preset-typescript"
            ]
        );
    }

    #[test]
    fn test_typescript_off_drops_its_entries() {
        let config = babel_config(RunMode::Development, &resolved(false, true, true));
        assert!(!names(&config.presets).contains(&"@babel/preset-typescript"));
        assert!(!names(&config.plugins).contains(&"@babel/plugin-proposal-decorators"));
        assert!(config.overrides.is_empty());
    }

    #[test]
    fn test_production_adds_prop_type_removal() {
        let prod = babel_config(RunMode::Production, &resolved(true, true, true));
        assert!(names(&prod.plugins).contains(&"babel-plugin-transform-react-remove-prop-types"));

        let dev = babel_config(RunMode::Development, &resolved(true, true, true));
        assert!(!names(&dev.plugins).contains(&"babel-plugin-transform-react-remove-prop-types"));
    }

    #[test]
    fn test_test_mode_rewrites_dynamic_import() {
        let config = babel_config(RunMode::Test, &resolved(true, true, false));
        let plugin_names = names(&config.plugins);
        let syntax = plugin_names
            .iter()
            .position(|n| *n == "@babel/plugin-syntax-dynamic-import")
            .unwrap();
        let rewrite = plugin_names
            .iter()
            .position(|n| *n == "babel-plugin-dynamic-import-node")
            .unwrap();
        assert!(syntax < rewrite);
    }

    #[test]
    fn test_runtime_plugin_reflects_resolved_options() {
        let mut options = resolved(true, false, true);
        options.absolute_runtime = true;
        options.absolute_runtime_path = Some(PathBuf::from("/srv/app/node_modules/@babel/runtime"));

        let config = babel_config(RunMode::Production, &options);
        let runtime = config
            .plugins
            .iter()
            .find(|e| e.name == "@babel/plugin-transform-runtime")
            .unwrap();
        let opts = runtime.options.as_ref().unwrap();
        assert_eq!(opts["helpers"], json!(false));
        assert_eq!(opts["useESModules"], json!(true));
        assert_eq!(
            opts["absoluteRuntime"],
            json!("/srv/app/node_modules/@babel/runtime")
        );
    }

    #[test]
    fn test_runtime_path_omitted_when_not_computed() {
        let config = babel_config(RunMode::Test, &resolved(true, true, false));
        let runtime = config
            .plugins
            .iter()
            .find(|e| e.name == "@babel/plugin-transform-runtime")
            .unwrap();
        assert!(runtime.options.as_ref().unwrap().get("absoluteRuntime").is_none());
    }

    #[test]
    fn test_serialized_entry_shapes() {
        let config = babel_config(RunMode::Test, &resolved(true, true, false));
        let value = serde_json::to_value(&config).unwrap();

        // Bare entries serialize as strings, optioned entries as pairs.
        assert_eq!(value["plugins"][0], json!("babel-plugin-macros"));
        assert_eq!(
            value["plugins"][1][0],
            json!("@babel/plugin-transform-destructuring")
        );
        // The decorators plugin carries a literal `false` options value.
        assert_eq!(
            value["plugins"][2],
            json!(["@babel/plugin-proposal-decorators", false])
        );
        assert_eq!(value["overrides"][0]["test"], json!(r"\.tsx?$"));
    }
}
