//! Ordered uevent environment.
//!
//! Entries keep the order they were appended in and keys may repeat;
//! lookups return the first match. Some keys derive an extra entry from
//! their value (see [`SYNTHESIZERS`]), which is appended right behind the
//! entry that triggered it.

use std::ffi::{OsStr, OsString};
use std::os::unix::ffi::OsStrExt;

use tracing::{debug, trace};

use crate::{Error, Result};

/// A single `KEY=VALUE` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVar {
    key: OsString,
    value: OsString,
}

impl EnvVar {
    pub(crate) fn new(key: &[u8], value: &[u8]) -> Self {
        Self {
            key: OsStr::from_bytes(key).to_os_string(),
            value: OsStr::from_bytes(value).to_os_string(),
        }
    }

    pub fn key(&self) -> &OsStr {
        &self.key
    }

    pub fn value(&self) -> &OsStr {
        &self.value
    }
}

/// Derives a value from the value of its trigger key.
pub type Derive = fn(&[u8]) -> &[u8];

/// A field that is not sent by the kernel but computed from one that is.
#[derive(Debug, Clone, Copy)]
pub struct Synthesizer {
    pub trigger: &'static [u8],
    pub key: &'static [u8],
    pub derive: Derive,
}

pub const SYNTHESIZERS: &[Synthesizer] = &[Synthesizer {
    trigger: b"DEVPATH",
    key: b"DEVICENAME",
    derive: basename,
}];

/// Last component of `path`, following POSIX `basename(3)`.
pub fn basename(path: &[u8]) -> &[u8] {
    if path.is_empty() {
        return b".";
    }

    let end = path
        .iter()
        .rposition(|&ch| ch != b'/')
        .map_or(0, |pos| pos + 1);
    if end == 0 {
        return b"/";
    }

    let trimmed = &path[..end];
    match trimmed.iter().rposition(|&ch| ch == b'/') {
        Some(pos) => &trimmed[pos + 1..],
        None => trimmed,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvVars {
    vars: Vec<EnvVar>,
}

impl EnvVars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits `item` on its first `=` and appends the pair, followed by any
    /// synthesized entries. Leaves the store untouched on error.
    pub fn append(&mut self, item: &[u8]) -> Result<()> {
        let Some((key, value)) = item
            .iter()
            .position(|&ch| ch == b'=')
            .map(|pos| (&item[..pos], &item[pos + 1..]))
        else {
            return Err(Error::malformed_entry(item));
        };

        trace!(
            key = %String::from_utf8_lossy(key),
            value = %String::from_utf8_lossy(value),
            "env entry"
        );
        self.vars.push(EnvVar::new(key, value));
        self.synthesize(key, value);
        Ok(())
    }

    fn synthesize(&mut self, key: &[u8], value: &[u8]) {
        for synth in SYNTHESIZERS.iter().filter(|synth| synth.trigger == key) {
            let derived = (synth.derive)(value);
            debug!(
                key = %String::from_utf8_lossy(synth.key),
                value = %String::from_utf8_lossy(derived),
                "synthesized env entry"
            );
            self.vars.push(EnvVar::new(synth.key, derived));
        }
    }

    pub fn get<K: AsRef<OsStr>>(&self, key: K) -> Option<&OsStr> {
        let key = key.as_ref();
        self.vars
            .iter()
            .find(|var| var.key() == key)
            .map(|var| var.value())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        self.vars.iter().map(|var| (var.key(), var.value()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<'a> IntoIterator for &'a EnvVars {
    type Item = &'a EnvVar;
    type IntoIter = std::slice::Iter<'a, EnvVar>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.iter()
    }
}
