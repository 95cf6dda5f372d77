//! Outbound environment and argument policies.
//!
//! A wrapper chooses exactly one policy of each kind at compile time.
//! The environment is always rebuilt from scratch: either a hardcoded list
//! or an allow-listed copy of the caller's variables. Anything not named
//! by the policy (dynamic linker knobs, PATH overrides, the lot) is
//! discarded before the exec.

use std::ffi::OsString;

use crate::entry::EnvEntry;

/// How the outbound environment is constructed.
#[derive(Clone, Copy, Debug)]
pub enum EnvPolicy {
    /// Hardcoded outbound environment, independent of the caller's.
    Fixed(&'static [(&'static str, &'static str)]),
    /// Copy only the named variables from the caller's environment, each
    /// bounded to [`crate::ENTRY_CAP`]. Absent variables are simply omitted.
    Allowlist(&'static [&'static str]),
}

impl EnvPolicy {
    /// Build the outbound entries from an injected caller-environment lookup.
    pub fn build_from<F>(&self, lookup: F) -> Vec<EnvEntry>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        match self {
            EnvPolicy::Fixed(pairs) => {
                pairs.iter().map(|(k, v)| EnvEntry::fixed(k, v)).collect()
            }
            EnvPolicy::Allowlist(keys) => keys
                .iter()
                .filter_map(|key| EnvEntry::from_lookup(key, &lookup))
                .collect(),
        }
    }

    /// Build the outbound entries from the real process environment.
    pub fn build(&self) -> Vec<EnvEntry> {
        self.build_from(|key| std::env::var_os(key))
    }
}

/// How the outbound argument vector is constructed.
#[derive(Clone, Copy, Debug)]
pub enum ArgPolicy {
    /// Forward the caller's argv byte-for-byte, `argv[0]` included. The
    /// vector stays opaque; validating it is the target program's job.
    Transparent,
    /// Always pass an empty vector, whatever the caller supplied. Used when
    /// the target reads everything from the constructed environment.
    Suppressed,
}

impl ArgPolicy {
    /// Build the outbound argv from an injected caller argv.
    pub fn build_from<I>(&self, caller: I) -> Vec<OsString>
    where
        I: IntoIterator<Item = OsString>,
    {
        match self {
            ArgPolicy::Transparent => caller.into_iter().collect(),
            ArgPolicy::Suppressed => Vec::new(),
        }
    }

    /// Build the outbound argv from the real process arguments.
    pub fn build(&self) -> Vec<OsString> {
        self.build_from(std::env::args_os())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn caller_env(key: &str) -> Option<OsString> {
        match key {
            "CVSROOT" => Some(OsString::from("/srv/repo")),
            "LANG" => Some(OsString::from("en_US.UTF-8")),
            // Hostile extras that must never leak through.
            "LD_PRELOAD" => Some(OsString::from("/tmp/evil.so")),
            "PATH" => Some(OsString::from("/tmp/bin")),
            _ => None,
        }
    }

    #[test]
    fn allowlist_copies_exactly_the_listed_variables() {
        let policy = EnvPolicy::Allowlist(&["CVSROOT", "LANG"]);
        let env = policy.build_from(caller_env);
        let bytes: Vec<&[u8]> = env.iter().map(|e| e.as_bytes()).collect();
        assert_eq!(
            bytes,
            vec![b"CVSROOT=/srv/repo".as_slice(), b"LANG=en_US.UTF-8".as_slice()]
        );
    }

    #[test]
    fn allowlist_omits_absent_variables() {
        let policy = EnvPolicy::Allowlist(&["CVSROOT", "NO_SUCH_VAR"]);
        let env = policy.build_from(caller_env);
        assert_eq!(env.len(), 1);
        assert_eq!(env[0].as_bytes(), b"CVSROOT=/srv/repo");
    }

    #[test]
    fn fixed_ignores_the_caller_environment() {
        let policy = EnvPolicy::Fixed(&[("PATH", "/usr/local/bin:/usr/bin:/bin")]);
        let env = policy.build_from(|_| panic!("fixed policy must not consult the caller"));
        assert_eq!(env.len(), 1);
        assert_eq!(env[0].as_bytes(), b"PATH=/usr/local/bin:/usr/bin:/bin");
    }

    #[test]
    fn transparent_forwards_argv_byte_for_byte() {
        let caller = vec![
            OsString::from("wrapper"),
            OsString::from("--weird= stuff"),
            OsString::from("päth"),
        ];
        let argv = ArgPolicy::Transparent.build_from(caller.clone());
        assert_eq!(argv, caller);
    }

    proptest! {
        #[test]
        fn suppressed_always_passes_an_empty_vector(
            caller in proptest::collection::vec(any::<String>(), 0..8)
        ) {
            let caller: Vec<OsString> = caller.into_iter().map(OsString::from).collect();
            prop_assert!(ArgPolicy::Suppressed.build_from(caller).is_empty());
        }
    }
}
