//! Privilege-dropping exec wrappers.
//!
//! Purpose
//! - Build a short, attacker-uncontrolled environment and argument vector,
//!   then replace the process image with a fixed target program.
//! - The wrapper binaries are installed setuid/setgid, so everything
//!   inherited from the caller is untrusted: the environment is rebuilt
//!   from scratch and the argument vector is either forwarded opaque for
//!   the target to validate or dropped entirely.
//!
//! The binaries in this workspace (`suid-approve`, `suid-newpolicy`) are
//! thin deployments of [`Wrapper`] with compiled-in constants; all policy
//! logic lives here so it can be tested without elevated privileges.

pub mod entry;
pub mod exec;
pub mod policy;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use entry::{EnvEntry, ENTRY_CAP};
pub use exec::{failure_exit_code, ExecError, Wrapper};
pub use policy::{ArgPolicy, EnvPolicy};
