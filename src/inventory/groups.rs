//! Group derivation.
//!
//! Pure rules mapping a snapshot onto named groups. Each group carries its
//! category as a tagged variant so the derivation rules stay independently
//! testable; group names are computed from the variant.

use std::collections::BTreeMap;

use super::snapshot::Snapshot;

/// The category a derived group belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupKind {
    /// One group per distinct operating system, named verbatim.
    Os(String),
    /// Hosts currently connected to the tailnet.
    Online,
    /// Hosts currently disconnected.
    Offline,
    /// The host(s) the status report was taken from.
    SelfHost,
    /// One group per distinct ACL tag, carrying the raw tag.
    Tag(String),
}

impl GroupKind {
    /// Inventory group name for this kind.
    pub fn name(&self) -> String {
        match self {
            GroupKind::Os(os) => os.clone(),
            GroupKind::Online => "online".to_string(),
            GroupKind::Offline => "offline".to_string(),
            GroupKind::SelfHost => "self".to_string(),
            GroupKind::Tag(raw) => sanitize_tag(raw),
        }
    }
}

/// A derived group with its member host names.
#[derive(Debug, Clone)]
pub struct Group {
    pub kind: GroupKind,
    pub hosts: Vec<String>,
}

/// Map a raw tag to an Ansible-safe group name.
///
/// Tailscale reports tags as `tag:name`; `:` and `-` are replaced with `_`
/// so the result is usable in host patterns (`tag:prod-db` →
/// `tag_prod_db`). A bare tag without the `tag:` prefix still gets the
/// `tag_` prefix.
pub fn sanitize_tag(raw: &str) -> String {
    let sanitized: String = raw
        .chars()
        .map(|c| if c == ':' || c == '-' { '_' } else { c })
        .collect();
    if raw.starts_with("tag:") {
        sanitized
    } else {
        format!("tag_{sanitized}")
    }
}

/// Compute every group for a snapshot.
///
/// Returns only non-empty groups, in a deterministic order: state groups,
/// self, then OS and tag groups each sorted by key. An empty snapshot
/// yields no groups at all.
pub fn derive_groups(snapshot: &Snapshot) -> Vec<Group> {
    let mut online: Vec<String> = Vec::new();
    let mut offline: Vec<String> = Vec::new();
    let mut self_hosts: Vec<String> = Vec::new();
    let mut by_os: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut by_tag: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for host in &snapshot.hosts {
        if host.online {
            online.push(host.name.clone());
        } else {
            offline.push(host.name.clone());
        }
        if host.is_self {
            self_hosts.push(host.name.clone());
        }
        by_os.entry(host.os.clone()).or_default().push(host.name.clone());
        for tag in &host.tags {
            by_tag.entry(tag.clone()).or_default().push(host.name.clone());
        }
    }

    let mut groups = Vec::new();
    if !online.is_empty() {
        groups.push(Group {
            kind: GroupKind::Online,
            hosts: online,
        });
    }
    if !offline.is_empty() {
        groups.push(Group {
            kind: GroupKind::Offline,
            hosts: offline,
        });
    }
    if !self_hosts.is_empty() {
        groups.push(Group {
            kind: GroupKind::SelfHost,
            hosts: self_hosts,
        });
    }
    for (os, hosts) in by_os {
        groups.push(Group {
            kind: GroupKind::Os(os),
            hosts,
        });
    }
    for (tag, hosts) in by_tag {
        groups.push(Group {
            kind: GroupKind::Tag(tag),
            hosts,
        });
    }
    groups
}
