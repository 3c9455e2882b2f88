//! # tailscale-inventory
//!
//! Ansible dynamic inventory for Tailscale tailnets.
//!
//! This crate turns the output of `tailscale status --self --json` into the
//! JSON document Ansible's dynamic-inventory protocol expects: hosts grouped
//! by operating system, online state, `self` membership, and ACL tags, with
//! per-host facts (`ansible_host`, `tailscale_ips`) under `_meta.hostvars`.
//!
//! ## Architecture
//!
//! The crate is organized into two main modules:
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                       Binary                           │
//! │  ┌──────────┐     ┌─────────────┐     ┌────────────┐  │
//! │  │  source  │────▶│  inventory  │────▶│   stdout   │  │
//! │  │ (input)  │     │ (derivation)│     │   (JSON)   │  │
//! │  └──────────┘     └─────────────┘     └────────────┘  │
//! │   CommandSource | FileSource                           │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`source`]**: status input — the [`StatusSource`] trait with CLI and
//!   file backends, plus the raw status schema
//! - **[`inventory`]**: pure derivation — snapshot model, group rules,
//!   document assembly
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Full inventory (what Ansible calls with --list)
//! tailscale-inventory --list
//!
//! # Facts for a single host
//! tailscale-inventory --host workstation
//!
//! # From a saved status capture instead of the live CLI
//! tailscale-inventory --list --file status.json
//! ```
//!
//! ### As a library
//!
//! ```
//! use tailscale_inventory::{InventoryDocument, Snapshot, TailscaleStatus};
//!
//! let status = TailscaleStatus::parse(r#"{
//!     "Self": {
//!         "HostName": "workstation",
//!         "DNSName": "workstation.example.ts.net.",
//!         "OS": "linux",
//!         "Online": true,
//!         "TailscaleIPs": ["100.64.0.1"]
//!     }
//! }"#)?;
//!
//! let snapshot = Snapshot::from_status(status);
//! let document = InventoryDocument::from_snapshot(&snapshot);
//! assert_eq!(document.all, ["workstation"]);
//! assert_eq!(document.groups["online"], ["workstation"]);
//! # Ok::<(), tailscale_inventory::Error>(())
//! ```

pub mod error;
pub mod inventory;
pub mod source;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use inventory::{
    derive_groups, Group, GroupKind, Host, HostFacts, InventoryDocument, Snapshot,
};
pub use source::{CommandSource, FileSource, StatusSource, TailscaleHost, TailscaleStatus};
