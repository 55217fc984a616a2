// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

use console::style;
use spinacia_cli::dispatch::{self, KNOWN_VERBS};
use spinacia_cli::runner::{self, NODE_PROGRAM};
use spinacia_cli::scripts;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize tracing from RUST_LOG, defaulting to warnings only
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() {
        print_usage();
        return Ok(());
    }

    let invocation = dispatch::parse(&args);

    if !dispatch::is_known_verb(&invocation.script) {
        // Soft failure: report and exit normally, distinct from crash paths
        println!("Unknown script \"{}\".", invocation.script);
        println!("Perhaps you need to update spinacia-script?");
        return Ok(());
    }

    let script_path = scripts::resolve_script(&invocation.script)?;
    let outcome = runner::run(NODE_PROGRAM, &invocation, &script_path)?;

    let (code, diagnostic) = runner::exit_disposition(&outcome);
    if let Some(message) = diagnostic {
        println!("{message}");
    }
    std::process::exit(code);
}

fn print_usage() {
    println!("Usage: spinacia-script [runtime-flags...] <script> [script-args...]");
    println!();
    println!("Available scripts:");
    for verb in KNOWN_VERBS {
        println!("  {}", style(verb).cyan());
    }
}
