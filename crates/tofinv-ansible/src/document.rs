//! Inventory document types
//!
//! The JSON shape Ansible expects from `--list`: named groups at the top
//! level plus a `_meta` block carrying per-host variables.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Full inventory document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryDocument {
    /// Host groups, keyed by group name
    #[serde(flatten)]
    pub groups: BTreeMap<String, HostGroup>,
    /// Per-host variables, delivered up front so Ansible skips `--host` calls
    #[serde(rename = "_meta")]
    pub meta: Meta,
}

/// One host group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostGroup {
    /// Host identifiers in this group
    pub hosts: Vec<String>,
    /// Variables shared by the group
    pub vars: GroupVars,
}

/// Group-level connection variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupVars {
    /// SSH login user
    pub ansible_user: String,
    /// Private key file used for the connection
    pub ansible_ssh_private_key_file: String,
}

/// Metadata block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meta {
    /// Variables per host, keyed by host identifier
    pub hostvars: BTreeMap<String, HostVars>,
}

/// Per-host connection variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostVars {
    /// Address Ansible connects to
    pub ansible_host: String,
    /// SSH login user
    pub ansible_user: String,
}
