//! Setuid/setgid wrapper for `approve.pl`.
//!
//! Installed setuid and setgid to a dedicated user and group. Forwards the
//! caller's argument vector untouched, replaces the inherited environment
//! with a single hardcoded PATH, and execs the target.

use std::process::ExitCode;

use tracing_subscriber::fmt::SubscriberBuilder;
use wrapenv::{failure_exit_code, ArgPolicy, EnvPolicy, Wrapper};

/// Target program. Fixed at build time; set the `APPROVE_PROGRAM` build
/// environment variable for deployment-specific installs. Never
/// configurable at runtime.
const PROGRAM: &str = match option_env!("APPROVE_PROGRAM") {
    Some(program) => program,
    None => "/usr/local/bin/approve.pl",
};

const ENV: &[(&str, &str)] = &[("PATH", "/usr/local/bin:/usr/bin:/bin")];

const WRAPPER: Wrapper = Wrapper {
    program: PROGRAM,
    env: EnvPolicy::Fixed(ENV),
    args: ArgPolicy::Transparent,
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
