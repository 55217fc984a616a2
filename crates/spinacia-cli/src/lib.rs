// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

// Warn on missing documentation for public items
#![warn(missing_docs)]

//! Spinacia CLI library.
//!
//! This crate provides the `spinacia-script` binary: a thin dispatcher that
//! maps a command-line verb to a build script executed in a child `node`
//! process and forwards the child's outcome as the parent's exit code.
//!
//! # Usage
//!
//! ```bash
//! spinacia-script build                                # production build
//! spinacia-script start                                # dev server
//! spinacia-script test --watch                         # forwarded args
//! spinacia-script --max-old-space-size=4096 build      # runtime flags
//! ```
//!
//! Arguments before the verb are passed to the `node` runtime itself;
//! arguments after it are forwarded to the target script unchanged.

/// Verb recognition and argument partitioning.
pub mod dispatch;
/// Dispatch error types.
pub mod error;
/// Child process execution and outcome translation.
pub mod runner;
/// Target script path resolution.
pub mod scripts;
