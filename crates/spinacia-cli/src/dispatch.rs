// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Verb recognition and argument partitioning.
//!
//! The wrapper forwards arbitrary runtime flags verbatim, so the argument
//! vector is scanned by hand: the first element matching a known verb splits
//! the vector into runtime prefix arguments (before it) and forwarded
//! arguments (after it). Order is preserved throughout, so
//! `prefix ++ [script] ++ forwarded` reconstructs the effective invocation.

/// The closed set of recognized verbs.
///
/// `build:prod` and `build-prod` are distinct verbs that resolve to the same
/// script (see [`crate::scripts::script_file_name`]).
pub const KNOWN_VERBS: [&str; 5] = ["build", "build-prod", "build:prod", "start", "test"];

/// Returns `true` if `name` is a recognized verb.
pub fn is_known_verb(name: &str) -> bool {
    KNOWN_VERBS.contains(&name)
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    /// The target script name. When no known verb was found this is the
    /// first argument verbatim, which the caller then reports as unknown.
    pub script: String,
    /// Arguments before the verb, forwarded to the `node` runtime itself
    /// (inspector flags, memory limits, and the like).
    pub runtime_args: Vec<String>,
    /// Arguments after the verb, forwarded to the target script unchanged.
    pub forwarded_args: Vec<String>,
}

/// Partitions the argument vector around the first known verb.
///
/// `args` excludes the program name. With no known verb present the first
/// argument is taken as the target verbatim; it will fail the
/// unknown-command check unless it coincidentally matches, and no arguments
/// are forwarded either way.
pub fn parse(args: &[String]) -> CommandInvocation {
    let script_index = args.iter().position(|arg| is_known_verb(arg));

    match script_index {
        Some(index) => CommandInvocation {
            script: args[index].clone(),
            runtime_args: args[..index].to_vec(),
            forwarded_args: args[index + 1..].to_vec(),
        },
        None => CommandInvocation {
            script: args.first().cloned().unwrap_or_default(),
            runtime_args: Vec::new(),
            forwarded_args: Vec::new(),
        },
    }
}
