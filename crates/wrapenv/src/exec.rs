//! Terminal exec: replace the process image with the target program.
//!
//! `execve` only returns on error, so the happy path of [`Wrapper::exec`]
//! is unobservable from inside the process. There is exactly one failure
//! class and no recovery: the binaries map the error straight to an exit
//! status via [`failure_exit_code`].

use std::convert::Infallible;
use std::ffi::{CString, OsString};
use std::os::unix::ffi::OsStrExt;

use nix::errno::Errno;
use nix::unistd::execve;
use thiserror::Error;

use crate::entry::EnvEntry;
use crate::policy::{ArgPolicy, EnvPolicy};

/// Process replacement failed: target missing, not executable, exec-format
/// error, or resource exhaustion. No retry, no fallback program.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("execve failed: {0}")]
    Exec(#[from] Errno),
    /// A constructed argv/envp string contained an interior NUL. Cannot
    /// happen for strings inherited from the kernel; kept as an error
    /// rather than a panic.
    #[error("interior NUL in constructed exec string")]
    InteriorNul,
}

/// A compiled-in wrapper deployment: target path plus the two policies.
///
/// `program` must be an absolute path owned by a trusted administrator and
/// not writable by the invoking user (an operational invariant, not
/// verified at runtime). It is a compile-time constant, never influenced
/// by any argument or environment variable value.
#[derive(Clone, Copy, Debug)]
pub struct Wrapper {
    pub program: &'static str,
    pub env: EnvPolicy,
    pub args: ArgPolicy,
}

impl Wrapper {
    /// Replace the current process image with `self.program`.
    ///
    /// Does not return on success. On failure, returns the error for the
    /// caller to surface via [`failure_exit_code`].
    pub fn exec(&self) -> ExecError {
        match replace_image(self.program, self.args.build(), self.env.build()) {
            Ok(never) => match never {},
            Err(err) => err,
        }
    }
}

/// Build the C-string vectors and call `execve`.
///
/// Split out from [`Wrapper::exec`] so the failure paths are testable with
/// non-constant paths.
fn replace_image(
    program: &str,
    args: Vec<OsString>,
    env: Vec<EnvEntry>,
) -> Result<Infallible, ExecError> {
    let program = CString::new(program.as_bytes()).map_err(|_| ExecError::InteriorNul)?;
    let argv = args
        .into_iter()
        .map(|a| CString::new(a.as_bytes()).map_err(|_| ExecError::InteriorNul))
        .collect::<Result<Vec<_>, _>>()?;
    let envp = env
        .into_iter()
        .map(EnvEntry::into_cstring)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(execve(&program, &argv, &envp)?)
}

/// Exit status for a failed exec: the raw errno value, clamped into the
/// 1..=255 range a process exit status can carry.
pub fn failure_exit_code(err: &ExecError) -> u8 {
    match err {
        ExecError::Exec(errno) => {
            let raw = *errno as i32;
            if (1..=255).contains(&raw) {
                raw as u8
            } else {
                1
            }
        }
        ExecError::InteriorNul => 1,
    }
}
