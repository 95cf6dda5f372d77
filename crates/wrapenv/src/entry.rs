//! Bounded `KEY=VALUE` environment entries.
//!
//! Each entry owns at most [`ENTRY_CAP`] bytes. Values copied from the
//! caller's environment are truncated to fit, silently: truncation is the
//! documented behavior for oversized input, not an error. Keys are always
//! compiled-in constants and short.

use std::ffi::{CString, OsString};
use std::os::unix::ffi::OsStrExt;

use crate::exec::ExecError;

/// Fixed byte capacity of one `KEY=VALUE` entry, terminating NUL excluded.
pub const ENTRY_CAP: usize = 100;

/// An owned `KEY=VALUE` byte string, never longer than [`ENTRY_CAP`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvEntry {
    bytes: Vec<u8>,
}

impl EnvEntry {
    /// Entry with a compiled-in value. Bounded like every other entry.
    pub fn fixed(key: &str, value: &str) -> Self {
        Self::bounded(key.as_bytes(), value.as_bytes())
    }

    /// Copy `key` from the caller's environment via `lookup`.
    ///
    /// Returns `None` when the variable is absent. The lookup indirection
    /// keeps filtering and truncation testable without touching the real
    /// process environment.
    pub fn from_lookup<F>(key: &str, lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let value = lookup(key)?;
        Some(Self::bounded(key.as_bytes(), value.as_bytes()))
    }

    /// Entry bytes, `KEY=VALUE`, without terminating NUL.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    fn bounded(key: &[u8], value: &[u8]) -> Self {
        debug_assert!(key.len() + 1 <= ENTRY_CAP, "key does not fit the entry");
        let mut bytes = Vec::with_capacity(ENTRY_CAP);
        bytes.extend_from_slice(key);
        bytes.push(b'=');
        let room = ENTRY_CAP.saturating_sub(bytes.len());
        bytes.extend_from_slice(&value[..value.len().min(room)]);
        Self { bytes }
    }

    pub(crate) fn into_cstring(self) -> Result<CString, ExecError> {
        CString::new(self.bytes).map_err(|_| ExecError::InteriorNul)
    }
}
