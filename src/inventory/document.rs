//! Inventory document assembly and Ansible serialization.
//!
//! [`InventoryDocument::from_snapshot`] is the final step of the pipeline:
//! it folds the derived groups into a name-keyed mapping, builds per-host
//! facts, and can serialize the result into the shape Ansible's
//! dynamic-inventory protocol expects.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{json, Value};

use super::groups::derive_groups;
use super::snapshot::Snapshot;

/// Facts attached to a single host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostFacts {
    /// Address Ansible should connect to (the MagicDNS name).
    pub ansible_host: String,
    /// Tailscale-assigned IPs, in reported order.
    pub tailscale_ips: Vec<String>,
}

/// The assembled inventory: every host, every non-empty group, per-host
/// facts.
#[derive(Debug, Clone, Default)]
pub struct InventoryDocument {
    /// Every host name, in snapshot order.
    pub all: Vec<String>,
    /// Non-empty groups keyed by name.
    pub groups: BTreeMap<String, Vec<String>>,
    /// Facts keyed by host name.
    pub hostvars: BTreeMap<String, HostFacts>,
}

impl InventoryDocument {
    /// Assemble the document for a snapshot.
    ///
    /// Pure function of its input; running it twice on the same snapshot
    /// yields identical documents.
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let all = snapshot.hosts.iter().map(|h| h.name.clone()).collect();

        let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for group in derive_groups(snapshot) {
            let members = groups.entry(group.kind.name()).or_default();
            // Same-name groups merge; membership stays unique
            for host in group.hosts {
                if !members.contains(&host) {
                    members.push(host);
                }
            }
        }

        let hostvars = snapshot
            .hosts
            .iter()
            .map(|h| {
                (
                    h.name.clone(),
                    HostFacts {
                        ansible_host: h.dns_name.clone(),
                        tailscale_ips: h.addresses.clone(),
                    },
                )
            })
            .collect();

        Self {
            all,
            groups,
            hostvars,
        }
    }

    /// Facts for one host, or `None` if the host is unknown.
    pub fn host_facts(&self, name: &str) -> Option<&HostFacts> {
        self.hostvars.get(name)
    }

    /// Serialize to the Ansible dynamic-inventory shape.
    ///
    /// A single top-level object with `_meta.hostvars`, an `all` group
    /// (always present, even when empty), and one `{"hosts": [...]}` object
    /// per non-empty group. The underlying map is a `BTreeMap`, so keys
    /// serialize in sorted order and output is stable for a given input.
    pub fn to_ansible(&self) -> Value {
        let mut doc = serde_json::Map::new();
        doc.insert("_meta".to_string(), json!({ "hostvars": self.hostvars }));
        doc.insert("all".to_string(), json!({ "hosts": self.all }));
        for (name, hosts) in &self.groups {
            doc.insert(name.clone(), json!({ "hosts": hosts }));
        }
        Value::Object(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::snapshot::Host;
    use crate::source::TailscaleStatus;

    fn host(
        name: &str,
        os: &str,
        online: bool,
        is_self: bool,
        tags: &[&str],
        addresses: &[&str],
    ) -> Host {
        Host {
            name: name.to_string(),
            os: os.to_string(),
            online,
            is_self,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            addresses: addresses.iter().map(|a| a.to_string()).collect(),
            dns_name: format!("{name}.example.ts.net."),
        }
    }

    #[test]
    fn test_two_host_inventory() {
        // One online linux self host, one offline tagged macOS peer
        let snapshot = Snapshot {
            hosts: vec![
                host("a", "linux", true, true, &[], &["100.1.1.1"]),
                host("b", "macOS", false, false, &["prod-db"], &["100.1.1.2"]),
            ],
        };

        let doc = InventoryDocument::from_snapshot(&snapshot);
        assert_eq!(doc.all, ["a", "b"]);

        let expected: Vec<(&str, Vec<&str>)> = vec![
            ("linux", vec!["a"]),
            ("macOS", vec!["b"]),
            ("offline", vec!["b"]),
            ("online", vec!["a"]),
            ("self", vec!["a"]),
            ("tag_prod_db", vec!["b"]),
        ];
        let actual: Vec<(&str, Vec<&str>)> = doc
            .groups
            .iter()
            .map(|(n, hs)| (n.as_str(), hs.iter().map(String::as_str).collect()))
            .collect();
        assert_eq!(actual, expected);

        assert_eq!(
            doc.host_facts("a").unwrap().tailscale_ips,
            ["100.1.1.1"]
        );
        assert_eq!(
            doc.host_facts("b").unwrap().tailscale_ips,
            ["100.1.1.2"]
        );
    }

    #[test]
    fn test_every_host_in_one_os_and_one_state_group() {
        let snapshot = Snapshot {
            hosts: vec![
                host("a", "linux", true, true, &["tag:web"], &[]),
                host("b", "macOS", false, false, &[], &[]),
                host("c", "windows", true, false, &["tag:web", "tag:db"], &[]),
            ],
        };

        let doc = InventoryDocument::from_snapshot(&snapshot);
        let os_groups = ["linux", "macOS", "windows"];
        for name in &doc.all {
            let os_memberships = os_groups
                .iter()
                .filter(|g| doc.groups.get(**g).is_some_and(|hs| hs.contains(name)))
                .count();
            assert_eq!(os_memberships, 1, "{name} must be in exactly one OS group");

            let in_online = doc.groups["online"].contains(name);
            let in_offline = doc.groups["offline"].contains(name);
            assert!(in_online != in_offline, "{name} must be online xor offline");
        }
    }

    #[test]
    fn test_empty_snapshot() {
        let doc = InventoryDocument::from_snapshot(&Snapshot::default());
        assert!(doc.all.is_empty());
        assert!(doc.groups.is_empty());
        assert!(doc.hostvars.is_empty());

        let ansible = doc.to_ansible();
        assert_eq!(
            ansible,
            serde_json::json!({
                "_meta": { "hostvars": {} },
                "all": { "hosts": [] }
            })
        );
    }

    #[test]
    fn test_idempotent_rendering() {
        let snapshot = Snapshot {
            hosts: vec![
                host("a", "linux", true, true, &["tag:web"], &["100.64.0.1"]),
                host("b", "linux", false, false, &[], &["100.64.0.2"]),
            ],
        };

        let first =
            serde_json::to_string_pretty(&InventoryDocument::from_snapshot(&snapshot).to_ansible())
                .unwrap();
        let second =
            serde_json::to_string_pretty(&InventoryDocument::from_snapshot(&snapshot).to_ansible())
                .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_colliding_group_names_merge() {
        // An OS literally named "online" collides with the state group;
        // membership merges under the single key without duplicates
        let snapshot = Snapshot {
            hosts: vec![
                host("a", "online", true, false, &[], &[]),
                host("b", "linux", true, false, &[], &[]),
            ],
        };

        let doc = InventoryDocument::from_snapshot(&snapshot);
        assert_eq!(doc.groups["online"], ["a", "b"]);
    }

    #[test]
    fn test_ansible_wire_shape() {
        let snapshot = Snapshot {
            hosts: vec![host("a", "linux", true, true, &[], &["100.64.0.1"])],
        };

        let doc = InventoryDocument::from_snapshot(&snapshot);
        assert_eq!(
            doc.to_ansible(),
            serde_json::json!({
                "_meta": {
                    "hostvars": {
                        "a": {
                            "ansible_host": "a.example.ts.net.",
                            "tailscale_ips": ["100.64.0.1"]
                        }
                    }
                },
                "all": { "hosts": ["a"] },
                "linux": { "hosts": ["a"] },
                "online": { "hosts": ["a"] },
                "self": { "hosts": ["a"] }
            })
        );
    }

    #[test]
    fn test_end_to_end_from_status_json() {
        let status = TailscaleStatus::parse(
            r#"{
                "Version": "1.82.0",
                "Self": {
                    "HostName": "workstation",
                    "DNSName": "workstation.example.ts.net.",
                    "OS": "linux",
                    "Online": true,
                    "TailscaleIPs": ["100.64.0.1"]
                },
                "Peer": {
                    "nodekey:aaaa": {
                        "HostName": "nas",
                        "DNSName": "nas.example.ts.net.",
                        "OS": "linux",
                        "Online": true,
                        "Tags": ["tag:storage"],
                        "TailscaleIPs": ["100.64.0.2"]
                    },
                    "nodekey:bbbb": {
                        "HostName": "phone",
                        "DNSName": "phone.example.ts.net.",
                        "OS": "android",
                        "Online": false,
                        "TailscaleIPs": ["100.64.0.3"]
                    },
                    "nodekey:cccc": {
                        "HostName": "funnel-ingress-node",
                        "DNSName": "funnel-ingress-node.example.ts.net.",
                        "OS": "linux",
                        "Online": true,
                        "TailscaleIPs": []
                    },
                    "nodekey:dddd": {
                        "HostName": "mullvad-exit",
                        "DNSName": "mullvad-exit.example.ts.net.",
                        "OS": "",
                        "Online": true,
                        "TailscaleIPs": []
                    }
                }
            }"#,
        )
        .unwrap();

        let doc = InventoryDocument::from_snapshot(&Snapshot::from_status(status));
        assert_eq!(doc.all, ["nas", "phone", "workstation"]);
        assert_eq!(doc.groups["online"], ["nas", "workstation"]);
        assert_eq!(doc.groups["offline"], ["phone"]);
        assert_eq!(doc.groups["self"], ["workstation"]);
        assert_eq!(doc.groups["linux"], ["nas", "workstation"]);
        assert_eq!(doc.groups["android"], ["phone"]);
        assert_eq!(doc.groups["tag_storage"], ["nas"]);
        assert_eq!(
            doc.host_facts("nas").unwrap().ansible_host,
            "nas.example.ts.net."
        );
        assert!(doc.host_facts("funnel-ingress-node").is_none());
        assert!(doc.host_facts("mullvad-exit").is_none());
    }
}
