//! Status input abstraction.
//!
//! This module provides a trait-based abstraction for obtaining a Tailscale
//! status report, either by running the `tailscale` CLI or by reading a
//! saved capture from disk.

mod command;
mod file;
mod status;

pub use command::CommandSource;
pub use file::FileSource;
pub use status::{TailscaleHost, TailscaleStatus};

use std::fmt::Debug;

use crate::error::Result;

/// Trait for obtaining a status report from some backend.
///
/// Each invocation of the tool fetches exactly one report; sources do not
/// poll or cache.
///
/// # Example
///
/// ```no_run
/// use tailscale_inventory::{FileSource, StatusSource};
///
/// let source = FileSource::new("status.json");
/// let status = source.fetch()?;
/// println!("self host: {}", status.self_host.host_name);
/// # Ok::<(), tailscale_inventory::Error>(())
/// ```
pub trait StatusSource: Debug {
    /// Fetch and parse the status report.
    fn fetch(&self) -> Result<TailscaleStatus>;

    /// Returns a human-readable description of the source.
    ///
    /// Used in log output.
    fn description(&self) -> &str;
}
