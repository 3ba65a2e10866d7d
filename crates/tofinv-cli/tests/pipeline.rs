//! End-to-end pipeline tests with a mocked tofu binary

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use tofinv_ansible::{InventoryBuilder, InventorySettings};
use tofinv_exec::error::ExecError;
use tofinv_exec::result::CommandResult;
use tofinv_exec::traits::CommandRunner;
use tofinv_state::client::TofuClient;
use tofinv_state::error::StateError;

/// Runner that plays back a canned `tofu output -json` run
struct CannedRunner {
    status: i32,
    stdout: String,
    stderr: String,
}

#[async_trait]
impl CommandRunner for CannedRunner {
    async fn run(&self, _program: &str, _args: &[&str]) -> Result<CommandResult, ExecError> {
        Ok(CommandResult {
            status: self.status,
            stdout: self.stdout.clone(),
            stderr: self.stderr.clone(),
            duration: Duration::from_millis(1),
        })
    }

    fn runner_type(&self) -> &'static str {
        "canned"
    }
}

fn canned_ok(payload: serde_json::Value) -> Arc<CannedRunner> {
    Arc::new(CannedRunner {
        status: 0,
        stdout: payload.to_string(),
        stderr: String::new(),
    })
}

#[tokio::test]
async fn test_list_pipeline_produces_inventory() {
    let runner = canned_ok(json!({
        "instance_public_ip": {"sensitive": false, "type": "string", "value": "203.0.113.5"},
        "ssh_user": {"sensitive": false, "type": "string", "value": "ubuntu"}
    }));

    let outputs = TofuClient::new(runner).fetch_outputs().await.unwrap();
    let document = InventoryBuilder::new(InventorySettings::default())
        .build(&outputs)
        .unwrap();

    let rendered = serde_json::to_value(&document).unwrap();
    assert_eq!(
        rendered,
        json!({
            "web_servers": {
                "hosts": ["203.0.113.5"],
                "vars": {
                    "ansible_user": "ubuntu",
                    "ansible_ssh_private_key_file": "./demo-key"
                }
            },
            "_meta": {
                "hostvars": {
                    "203.0.113.5": {
                        "ansible_host": "203.0.113.5",
                        "ansible_user": "ubuntu"
                    }
                }
            }
        })
    );
}

#[tokio::test]
async fn test_pipeline_defaults_the_ssh_user() {
    let runner = canned_ok(json!({
        "instance_public_ip": {"sensitive": false, "type": "string", "value": "198.51.100.7"}
    }));

    let outputs = TofuClient::new(runner).fetch_outputs().await.unwrap();
    let document = InventoryBuilder::new(InventorySettings::default())
        .build(&outputs)
        .unwrap();

    assert_eq!(document.groups["web_servers"].vars.ansible_user, "ec2-user");
    assert_eq!(
        document.meta.hostvars["198.51.100.7"].ansible_user,
        "ec2-user"
    );
}

#[tokio::test]
async fn test_failed_tofu_run_stops_the_pipeline() {
    let runner = Arc::new(CannedRunner {
        status: 1,
        stdout: String::new(),
        stderr: "Error: no outputs defined\n".to_string(),
    });

    let err = TofuClient::new(runner).fetch_outputs().await.unwrap_err();

    match err {
        StateError::CommandFailed(msg) => assert!(msg.contains("no outputs defined")),
        other => panic!("expected CommandFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_state_without_address_yields_no_document() {
    let runner = canned_ok(json!({
        "ssh_user": {"sensitive": false, "type": "string", "value": "ubuntu"}
    }));

    let outputs = TofuClient::new(runner).fetch_outputs().await.unwrap();
    let result = InventoryBuilder::new(InventorySettings::default()).build(&outputs);

    assert!(result.is_err());
}
