//! Parsing of raw kernel hotplug events, as read from a
//! `NETLINK_KOBJECT_UEVENT` socket or a sysfs `uevent` file, into owned
//! [`Uevent`] records.

mod action;
pub use action::Action;
mod config;
pub use config::ParseOptions;
pub mod env;
pub use env::{EnvVar, EnvVars};
mod error;
pub use error::{Error, Result};
pub mod seqnum;
mod uevent;
pub use uevent::Uevent;
