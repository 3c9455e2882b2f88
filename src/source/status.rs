//! Raw Tailscale status schema.
//!
//! These types match the JSON emitted by `tailscale status --self --json`.
//! Only the fields the inventory needs are modeled; everything else in the
//! status report is ignored. Deserialization failures surface as
//! [`Error::MalformedInput`](crate::Error::MalformedInput).

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::Result;

/// One host record within the status report, either the local node or a peer.
#[derive(Debug, Clone, Deserialize)]
pub struct TailscaleHost {
    /// Machine hostname, used as the inventory identifier.
    #[serde(rename = "HostName")]
    pub host_name: String,

    /// MagicDNS name of the host.
    #[serde(rename = "DNSName")]
    pub dns_name: String,

    /// Operating system as reported by the control plane. Empty for
    /// endpoints that are not real machines, e.g. Mullvad exit nodes.
    #[serde(rename = "OS")]
    pub os: String,

    /// Whether the host is currently connected to the tailnet.
    #[serde(rename = "Online")]
    pub online: bool,

    /// ACL tags in raw `tag:name` form. Absent for untagged hosts.
    #[serde(rename = "Tags")]
    pub tags: Option<Vec<String>>,

    /// Tailscale-assigned IPs, in the order the control plane reports them.
    #[serde(rename = "TailscaleIPs")]
    pub tailscale_ips: Option<Vec<String>>,
}

/// Top-level status report from `tailscale status --self --json`.
///
/// Peers are keyed by node public key. A `BTreeMap` keeps iteration order
/// stable across runs, which keeps the generated inventory deterministic.
#[derive(Debug, Clone, Deserialize)]
pub struct TailscaleStatus {
    /// The local node.
    #[serde(rename = "Self")]
    pub self_host: TailscaleHost,

    /// Peer nodes keyed by public key. Absent when the tailnet has no peers.
    #[serde(rename = "Peer")]
    pub peers: Option<BTreeMap<String, TailscaleHost>>,
}

impl TailscaleStatus {
    /// Parse a status report from its JSON form.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}
