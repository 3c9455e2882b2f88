//! CLI-based status source.
//!
//! Runs `tailscale status --self --json` and parses its output.

use std::process::Command;

use tracing::debug;

use super::{StatusSource, TailscaleStatus};
use crate::error::{Error, Result};

/// Install path of the Tailscale binary on macOS.
const MACOS_TAILSCALE_BIN: &str = "/Applications/Tailscale.app/Contents/MacOS/Tailscale";

/// A status source that invokes the Tailscale CLI.
#[derive(Debug)]
pub struct CommandSource {
    binary: String,
    description: String,
}

impl CommandSource {
    /// Create a source using the Tailscale binary for the current platform.
    ///
    /// Linux resolves `tailscale` from the PATH; macOS uses the app-bundle
    /// binary. Any other platform yields [`Error::UnsupportedPlatform`].
    pub fn for_current_platform() -> Result<Self> {
        Self::for_platform(std::env::consts::OS)
    }

    fn for_platform(os: &str) -> Result<Self> {
        let binary = match os {
            "linux" => "tailscale",
            "macos" => MACOS_TAILSCALE_BIN,
            other => {
                return Err(Error::UnsupportedPlatform {
                    os: other.to_string(),
                })
            }
        };
        Ok(Self::with_binary(binary))
    }

    /// Create a source that runs a specific binary.
    pub fn with_binary(binary: impl Into<String>) -> Self {
        let binary = binary.into();
        let description = format!("command: {binary} status --self --json");
        Self {
            binary,
            description,
        }
    }

    fn run(&self) -> Result<Vec<u8>> {
        debug!(binary = %self.binary, "running tailscale status");
        let output = Command::new(&self.binary)
            .args(["status", "--self", "--json"])
            .output()
            .map_err(|e| Error::SourceUnavailable {
                reason: format!("could not run {}: {e}", self.binary),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::SourceUnavailable {
                reason: format!(
                    "{} exited with {}; is tailscale running? {}",
                    self.binary,
                    output.status,
                    stderr.trim()
                ),
            });
        }

        Ok(output.stdout)
    }
}

impl StatusSource for CommandSource {
    fn fetch(&self) -> Result<TailscaleStatus> {
        let stdout = self.run()?;
        let content = String::from_utf8_lossy(&stdout);
        TailscaleStatus::parse(&content)
    }

    fn description(&self) -> &str {
        &self.description
    }
}
