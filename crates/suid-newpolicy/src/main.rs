//! Setuid/setgid wrapper for `newpolicy.pl`.
//!
//! Installed setuid and setgid. The target takes no positional arguments,
//! so the caller's argv is dropped entirely; it reads its configuration
//! from `CVSROOT` and `LANG`, which are the only variables copied (bounded)
//! from the caller's environment.

use std::process::ExitCode;

use tracing_subscriber::fmt::SubscriberBuilder;
use wrapenv::{failure_exit_code, ArgPolicy, EnvPolicy, Wrapper};

/// Target program. Fixed at build time; set the `NEWPOLICY_PROGRAM` build
/// environment variable for deployment-specific installs. Never
/// configurable at runtime.
const PROGRAM: &str = match option_env!("NEWPOLICY_PROGRAM") {
    Some(program) => program,
    None => "/usr/local/bin/newpolicy.pl",
};

const ALLOWLIST: &[&str] = &["CVSROOT", "LANG"];

const WRAPPER: Wrapper = Wrapper {
    program: PROGRAM,
    env: EnvPolicy::Allowlist(ALLOWLIST),
    args: ArgPolicy::Suppressed,
};

fn main() -> ExitCode {
    let err = WRAPPER.exec();
    // Only reached when the exec failed; on success the process image is
    // already gone.
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    tracing::error!(program = PROGRAM, error = %err, "exec failed");
    ExitCode::from(failure_exit_code(&err))
}
