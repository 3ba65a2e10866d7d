//! Inventory shape settings

use serde::{Deserialize, Serialize};

/// Settings for the produced inventory document
///
/// The defaults match the provisioning demo this inventory feeds: one group,
/// one key file next to the playbook, EC2's stock login user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventorySettings {
    /// Group the provisioned host is placed in
    #[serde(default = "default_group")]
    pub group: String,
    /// Private key path handed to Ansible, relative to the playbook directory
    #[serde(default = "default_private_key_file")]
    pub private_key_file: String,
    /// Login user used when the state exposes none
    #[serde(default = "default_user")]
    pub default_user: String,
}

fn default_group() -> String {
    "web_servers".to_string()
}

fn default_private_key_file() -> String {
    "./demo-key".to_string()
}

fn default_user() -> String {
    "ec2-user".to_string()
}

impl Default for InventorySettings {
    fn default() -> Self {
        Self {
            group: default_group(),
            private_key_file: default_private_key_file(),
            default_user: default_user(),
        }
    }
}
