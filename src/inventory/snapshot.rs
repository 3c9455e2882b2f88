//! Domain model for one point-in-time view of the tailnet.
//!
//! [`Snapshot::from_status`] flattens the raw status report (self plus
//! peers) into an ordered host list and applies the record filters. After
//! construction a snapshot is never mutated; everything downstream derives
//! from it.

use crate::source::{TailscaleHost, TailscaleStatus};

/// Funnel ingress machines are not manageable hosts and are excluded.
const FUNNEL_INGRESS_HOSTNAME: &str = "funnel-ingress-node";

/// A single host as seen by the inventory.
#[derive(Debug, Clone)]
pub struct Host {
    /// Inventory identifier (the machine hostname).
    pub name: String,
    /// Operating system, verbatim as reported.
    pub os: String,
    /// Whether the host is currently connected.
    pub online: bool,
    /// Whether this is the host the status report was taken from.
    pub is_self: bool,
    /// Raw ACL tags (`tag:name` form). Empty for untagged hosts.
    pub tags: Vec<String>,
    /// Tailscale-assigned IPs, order preserved.
    pub addresses: Vec<String>,
    /// MagicDNS name.
    pub dns_name: String,
}

impl Host {
    /// Convert a raw record, or `None` when the record is filtered out.
    fn from_record(record: TailscaleHost, is_self: bool) -> Option<Self> {
        // Funnel ingress nodes can't be managed over SSH
        if record.host_name == FUNNEL_INGRESS_HOSTNAME {
            return None;
        }
        // Endpoints with no OS (e.g. Mullvad exit nodes) are not machines
        if record.os.is_empty() {
            return None;
        }
        Some(Self {
            name: record.host_name,
            os: record.os,
            online: record.online,
            is_self,
            tags: record.tags.unwrap_or_default(),
            addresses: record.tailscale_ips.unwrap_or_default(),
            dns_name: record.dns_name,
        })
    }
}

/// All hosts from one status report.
///
/// Order is stable for a given input: peers in public-key order, then the
/// local host last.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub hosts: Vec<Host>,
}

impl Snapshot {
    /// Build a snapshot from a parsed status report.
    pub fn from_status(status: TailscaleStatus) -> Self {
        let mut hosts = Vec::new();
        if let Some(peers) = status.peers {
            for (_, peer) in peers {
                if let Some(host) = Host::from_record(peer, false) {
                    hosts.push(host);
                }
            }
        }
        if let Some(host) = Host::from_record(status.self_host, true) {
            hosts.push(host);
        }
        Self { hosts }
    }

    /// Number of hosts in the snapshot.
    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    /// Whether the snapshot has no hosts.
    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}
