//! Inventory derivation from a tailnet snapshot.
//!
//! This module holds the pure half of the tool: everything from a parsed
//! status report to the finished inventory document, with no I/O anywhere.
//!
//! ## Submodules
//!
//! - [`snapshot`]: the domain model ([`Snapshot`], [`Host`]) built from a
//!   raw status report, with record filtering
//! - [`groups`]: group derivation rules ([`derive_groups`], [`GroupKind`])
//! - [`document`]: document assembly and Ansible serialization
//!   ([`InventoryDocument`], [`HostFacts`])
//!
//! ## Data Flow
//!
//! ```text
//! TailscaleStatus (raw JSON)
//!        │
//!        ▼
//! Snapshot::from_status()     filters + ordering
//!        │
//!        ▼
//! derive_groups()             os / state / self / tag variants
//!        │
//!        ▼
//! InventoryDocument::from_snapshot()
//!        │
//!        ▼
//! to_ansible()                `_meta` + group keys, sorted
//! ```

pub mod document;
pub mod groups;
pub mod snapshot;

pub use document::{HostFacts, InventoryDocument};
pub use groups::{derive_groups, sanitize_tag, Group, GroupKind};
pub use snapshot::{Host, Snapshot};
