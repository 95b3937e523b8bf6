//! Console commands against the servers it can select

use crate::test_utils::*;
use assert_matches::assert_matches;
use serde_json::Value;
use std::io::Write;
use webmcp_cli::commands::{build_client, execute};
use webmcp_cli::{CliConfig, CliError, Command, ServerConfig, ServerHandle, run};

#[test]
fn test_connect_without_command_uses_demo_server() {
    let handle = ServerHandle::connect(&ServerConfig::default()).unwrap();
    assert_matches!(handle, ServerHandle::Demo(_));
}

#[test]
fn test_call_through_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[client]\nname = \"integration\"\n\n[logging]\nlevel = \"warn\"").unwrap();
    let config = CliConfig::load(file.path()).unwrap();

    let mut out = Vec::new();
    run(
        &Command::Call {
            tool: "add".to_string(),
            params: vec!["2".to_string(), "40".to_string()],
        },
        &config,
        std::io::empty(),
        &mut out,
    )
    .unwrap();

    let response: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(response["result"]["content"][0]["text"], "2.00 + 40.00 = 42.00");
}

#[test]
fn test_console_shell_over_recording_handler() {
    let client = build_client(RecordingHandler::new(), &CliConfig::default());
    let script = "init\nlist\ncall formatJSON [1,2]\ncall add 1\nquit\ninit\n";
    let mut out = Vec::new();

    execute(&Command::Shell, client, script.as_bytes(), &mut out).unwrap();

    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("\"protocolVersion\": \"2024-11-05\""));
    assert!(out.contains("Parameter 'b' must be a number"));
    // nothing after quit is run
    assert_eq!(out.matches("\"serverInfo\"").count(), 1);
}

#[test]
fn test_unlaunchable_server() {
    let config = CliConfig {
        server: ServerConfig {
            command: Some(vec!["/definitely/not/a/server".to_string()]),
        },
        ..CliConfig::default()
    };

    let err = run(&Command::Tools, &config, std::io::empty(), Vec::new()).unwrap_err();
    assert_matches!(err, CliError::ServerSetup(msg) if msg.contains("Error loading server"));
}
