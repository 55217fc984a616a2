// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Child process execution and outcome translation.
//!
//! The dispatcher performs exactly one blocking spawn per invocation: the
//! runtime with `prefix-args ++ [script] ++ forwarded-args`, standard I/O
//! inherited so interactive output passes through unmodified. The child's
//! termination is classified into an exhaustive sum type and translated into
//! the parent's exit code plus an optional diagnostic.

use crate::dispatch::CommandInvocation;
use crate::error::DispatchResult;
use std::path::Path;
use std::process::{Command, ExitStatus};

/// The host runtime that executes the target scripts.
pub const NODE_PROGRAM: &str = "node";

/// Diagnostic for a child killed by the kill signal.
const KILLED_DIAGNOSTIC: &str = "The build failed because the process exited too early. \
This probably means the system ran out of memory or someone called \
`kill -9` on the process.";

/// Diagnostic for a child ended by the terminate signal.
const TERMINATED_DIAGNOSTIC: &str = "The build failed because the process exited too early. \
Someone might have called `kill` or `killall`, or the system could \
be shutting down.";

/// The signal that ended a child process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    /// Forceful kill (`SIGKILL`): resource exhaustion or `kill -9`.
    Kill,
    /// Termination request (`SIGTERM`): `kill`, `killall`, or shutdown.
    Terminate,
    /// Any other signal, carried by raw number.
    Other(i32),
}

#[cfg(unix)]
impl SignalKind {
    fn from_raw(signal: i32) -> Self {
        match signal {
            libc::SIGKILL => SignalKind::Kill,
            libc::SIGTERM => SignalKind::Terminate,
            other => SignalKind::Other(other),
        }
    }
}

/// How a child process ended. Exit code and signal are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildOutcome {
    /// The child exited normally with a status code.
    Exited(i32),
    /// The child was terminated by a signal.
    Signaled(SignalKind),
}

/// Runs `program` with the invocation's argument partition and waits for it.
///
/// Spawn failures (program not found, permissions) are not handled here;
/// they propagate to the binary boundary and crash the parent with a
/// non-zero status.
pub fn run(
    program: &str,
    invocation: &CommandInvocation,
    script_path: &Path,
) -> DispatchResult<ChildOutcome> {
    tracing::debug!(
        program,
        script = %script_path.display(),
        runtime_args = invocation.runtime_args.len(),
        forwarded_args = invocation.forwarded_args.len(),
        "spawning target script"
    );

    let status = Command::new(program)
        .args(&invocation.runtime_args)
        .arg(script_path)
        .args(&invocation.forwarded_args)
        .status()?;

    Ok(classify(status))
}

/// Classifies an exit status into the outcome sum type.
///
/// Signal termination takes precedence over the exit code in reporting.
#[cfg(unix)]
fn classify(status: ExitStatus) -> ChildOutcome {
    use std::os::unix::process::ExitStatusExt;

    if let Some(signal) = status.signal() {
        return ChildOutcome::Signaled(SignalKind::from_raw(signal));
    }
    ChildOutcome::Exited(status.code().unwrap_or(1))
}

#[cfg(not(unix))]
fn classify(status: ExitStatus) -> ChildOutcome {
    ChildOutcome::Exited(status.code().unwrap_or(1))
}

/// Translates a child outcome into the parent's exit code and diagnostic.
///
/// Any signal termination exits 1; only the kill and terminate signals carry
/// a diagnostic. A normal exit forwards the child's own code with no
/// diagnostic, whatever that code is.
pub fn exit_disposition(outcome: &ChildOutcome) -> (i32, Option<&'static str>) {
    match outcome {
        ChildOutcome::Exited(code) => (*code, None),
        ChildOutcome::Signaled(SignalKind::Kill) => (1, Some(KILLED_DIAGNOSTIC)),
        ChildOutcome::Signaled(SignalKind::Terminate) => (1, Some(TERMINATED_DIAGNOSTIC)),
        ChildOutcome::Signaled(SignalKind::Other(_)) => (1, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kill_signal_diagnoses_oom() {
        let (code, diagnostic) = exit_disposition(&ChildOutcome::Signaled(SignalKind::Kill));
        assert_eq!(code, 1);
        let message = diagnostic.unwrap();
        assert!(message.contains("ran out of memory"));
        assert!(message.contains("kill -9"));
    }

    #[test]
    fn test_terminate_signal_diagnoses_shutdown() {
        let (code, diagnostic) = exit_disposition(&ChildOutcome::Signaled(SignalKind::Terminate));
        assert_eq!(code, 1);
        assert!(diagnostic.unwrap().contains("shutting down"));
    }

    #[test]
    fn test_other_signal_exits_one_silently() {
        let (code, diagnostic) = exit_disposition(&ChildOutcome::Signaled(SignalKind::Other(6)));
        assert_eq!(code, 1);
        assert_eq!(diagnostic, None);
    }

    #[test]
    fn test_normal_exit_forwards_code() {
        assert_eq!(exit_disposition(&ChildOutcome::Exited(0)), (0, None));
        assert_eq!(exit_disposition(&ChildOutcome::Exited(2)), (2, None));
    }

    #[cfg(unix)]
    mod unix {
        use super::super::*;
        use std::path::Path;

        fn shell_invocation() -> CommandInvocation {
            CommandInvocation {
                script: "test".to_string(),
                runtime_args: vec!["-c".to_string()],
                forwarded_args: Vec::new(),
            }
        }

        #[test]
        fn test_run_observes_exit_code() {
            let outcome = run("/bin/sh", &shell_invocation(), Path::new("exit 7")).unwrap();
            assert_eq!(outcome, ChildOutcome::Exited(7));
        }

        #[test]
        fn test_run_observes_success() {
            let outcome = run("/bin/sh", &shell_invocation(), Path::new("exit 0")).unwrap();
            assert_eq!(outcome, ChildOutcome::Exited(0));
        }

        #[test]
        fn test_run_classifies_terminate_signal() {
            let outcome = run("/bin/sh", &shell_invocation(), Path::new("kill -TERM $$")).unwrap();
            assert_eq!(outcome, ChildOutcome::Signaled(SignalKind::Terminate));
        }

        #[test]
        fn test_run_classifies_kill_signal() {
            let outcome = run("/bin/sh", &shell_invocation(), Path::new("kill -9 $$")).unwrap();
            assert_eq!(outcome, ChildOutcome::Signaled(SignalKind::Kill));
        }

        #[test]
        fn test_missing_program_fails_loud() {
            let invocation = CommandInvocation {
                script: "build".to_string(),
                runtime_args: Vec::new(),
                forwarded_args: Vec::new(),
            };
            let result = run("/nonexistent/spinacia-runtime", &invocation, Path::new("build.js"));
            assert!(result.is_err());
        }
    }
}
