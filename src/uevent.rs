use std::ffi::{OsStr, OsString};
use std::os::unix::ffi::OsStrExt;

use tracing::{trace, warn};

use crate::action::Action;
use crate::config::ParseOptions;
use crate::env::EnvVars;
use crate::{Error, Result, seqnum};

/// A kernel hotplug event, fully parsed.
///
/// Wire format, `N` bytes in total:
///
/// ```text
/// <ACTION>@<DEVPATH>\0KEY1=VALUE1\0 ... KEYn=VALUEn\0
/// ```
///
/// A `Uevent` only exists once every field, including the sequence number,
/// has been parsed. It owns all of its data; [`Uevent::duplicate`] yields a
/// record sharing nothing with the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Uevent {
    action: Action,
    action_str: OsString,
    devpath: OsString,
    plain: Box<[u8]>,
    env: EnvVars,
    seqnum: u64,
}

impl Uevent {
    /// Parses `buf` with default [`ParseOptions`]. The slice length is the
    /// event length; the buffer need not be NUL terminated.
    pub fn deserialize(buf: &[u8]) -> Result<Self> {
        Self::deserialize_with(buf, &ParseOptions::default())
    }

    pub fn deserialize_with(buf: &[u8], opts: &ParseOptions) -> Result<Self> {
        if let Some(limit) = opts.max_size().filter(|&limit| buf.len() > limit) {
            warn!(size = buf.len(), limit, "uevent buffer too large");
            return Err(Error::BufferTooLarge {
                size: buf.len(),
                limit,
            });
        }

        // the header line is the first NUL terminated segment
        let header_end = buf
            .iter()
            .position(|&ch| ch == b'\0')
            .unwrap_or(buf.len());
        let Some(at) = buf[..header_end].iter().position(|&ch| ch == b'@') else {
            warn!("dropping uevent without '@' in its header");
            return Err(Error::MalformedHeader);
        };

        let action_str = &buf[..at];
        let devpath = &buf[at + 1..header_end];
        let payload = buf.get(header_end + 1..).unwrap_or_default();

        let mut env = EnvVars::new();
        for token in payload.split(|&ch| ch == b'\0') {
            if token.is_empty() {
                continue;
            }
            if let Err(err) = env.append(token) {
                warn!(%err, "dropping uevent");
                return Err(err);
            }
        }

        // needed by consumers to detect races with the kernel
        let Some(value) = env.get("SEQNUM") else {
            warn!("dropping uevent without SEQNUM");
            return Err(Error::MissingSequenceNumber);
        };
        let seqnum = seqnum::parse_with(value.as_bytes(), opts.strict_seqnum())
            .inspect_err(|err| warn!(%err, "dropping uevent"))?;

        let action = Action::new(action_str);
        trace!(%action, seqnum, entries = env.len(), "parsed uevent");

        Ok(Self {
            action,
            action_str: OsStr::from_bytes(action_str).to_os_string(),
            devpath: OsStr::from_bytes(devpath).to_os_string(),
            plain: buf.into(),
            env,
            seqnum,
        })
    }

    pub fn action(&self) -> Action {
        self.action
    }

    /// The action token exactly as received.
    pub fn action_str(&self) -> &OsStr {
        &self.action_str
    }

    /// The devpath from the header line, which need not match `DEVPATH`.
    ///
    /// It is kept apart from the environment: a header such as
    /// `add@/devices/a=b` does not produce an env entry named `/devices/a`.
    pub fn devpath(&self) -> &OsStr {
        &self.devpath
    }

    /// The original buffer, byte for byte.
    pub fn plain(&self) -> &[u8] {
        &self.plain
    }

    pub fn plain_size(&self) -> usize {
        self.plain.len()
    }

    pub fn seqnum(&self) -> u64 {
        self.seqnum
    }

    pub fn env_vars(&self) -> &EnvVars {
        &self.env
    }

    /// Value of the first entry named `key`.
    pub fn get_value<K: AsRef<OsStr>>(&self, key: K) -> Option<&OsStr> {
        self.env.get(key)
    }

    /// Appends a `key=value` entry. The sequence number is fixed at parse
    /// time and is not affected by appending another `SEQNUM`.
    pub fn append_env<I: AsRef<OsStr>>(&mut self, item: I) -> Result<()> {
        self.env.append(item.as_ref().as_bytes())
    }

    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    /// Releases the record and everything it owns.
    pub fn release(self) {
        drop(self)
    }

    pub fn subsystem(&self) -> Option<&OsStr> {
        self.get_value("SUBSYSTEM")
    }

    pub fn devtype(&self) -> Option<&OsStr> {
        self.get_value("DEVTYPE")
    }

    pub fn devname(&self) -> Option<&OsStr> {
        self.get_value("DEVNAME")
    }

    pub fn driver(&self) -> Option<&OsStr> {
        self.get_value("DRIVER")
    }

    pub fn devicename(&self) -> Option<&OsStr> {
        self.get_value("DEVICENAME")
    }
}

impl TryFrom<&[u8]> for Uevent {
    type Error = Error;

    fn try_from(buf: &[u8]) -> Result<Self> {
        Self::deserialize(buf)
    }
}
