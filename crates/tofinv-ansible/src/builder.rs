//! Inventory construction from state outputs

use std::collections::BTreeMap;

use tracing::debug;

use tofinv_state::outputs::StateOutputs;

use crate::document::{GroupVars, HostGroup, HostVars, InventoryDocument, Meta};
use crate::error::BuildError;
use crate::settings::InventorySettings;

/// State output holding the instance address
const PUBLIC_IP_OUTPUT: &str = "instance_public_ip";
/// State output holding the SSH login user
const SSH_USER_OUTPUT: &str = "ssh_user";

/// Builds the inventory document from parsed state outputs
///
/// Pure given its inputs, no I/O.
pub struct InventoryBuilder {
    settings: InventorySettings,
}

impl InventoryBuilder {
    /// Create a new builder
    pub fn new(settings: InventorySettings) -> Self {
        Self { settings }
    }

    /// Build the inventory document
    ///
    /// The metadata block is keyed by the same address that appears in the
    /// group's host list, so the host is addressable both ways.
    ///
    /// # Errors
    /// Returns `MissingRequiredField` when the public address output is
    /// absent or empty.
    pub fn build(&self, outputs: &StateOutputs) -> Result<InventoryDocument, BuildError> {
        let public_ip = outputs
            .string_value(PUBLIC_IP_OUTPUT)
            .filter(|ip| !ip.is_empty())
            .ok_or_else(|| BuildError::MissingRequiredField(PUBLIC_IP_OUTPUT.to_string()))?;

        // Absent means the default; present-but-empty is taken as-is
        let ssh_user = outputs
            .string_value(SSH_USER_OUTPUT)
            .unwrap_or(&self.settings.default_user);

        debug!(host = public_ip, user = ssh_user, "building inventory");

        let group = HostGroup {
            hosts: vec![public_ip.to_string()],
            vars: GroupVars {
                ansible_user: ssh_user.to_string(),
                ansible_ssh_private_key_file: self.settings.private_key_file.clone(),
            },
        };

        let mut groups = BTreeMap::new();
        groups.insert(self.settings.group.clone(), group);

        let mut hostvars = BTreeMap::new();
        hostvars.insert(
            public_ip.to_string(),
            HostVars {
                ansible_host: public_ip.to_string(),
                ansible_user: ssh_user.to_string(),
            },
        );

        Ok(InventoryDocument {
            groups,
            meta: Meta { hostvars },
        })
    }
}
