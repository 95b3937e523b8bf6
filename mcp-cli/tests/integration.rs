//! Integration tests for the webmcp console

use clap::Parser;
use serde_json::Value;
use webmcp_cli::commands::{build_client, execute};
use webmcp_cli::{Cli, CliConfig, Command, LogFormat};
use webmcp_server::DemoServer;

#[test]
fn test_parse_call_with_negative_numbers() {
    let cli = Cli::try_parse_from(["webmcp", "call", "add", "-5", "2.5"]).unwrap();

    assert_eq!(
        cli.command,
        Command::Call {
            tool: "add".to_string(),
            params: vec!["-5".to_string(), "2.5".to_string()],
        }
    );
}

#[test]
fn test_parse_requires_subcommand() {
    assert!(Cli::try_parse_from(["webmcp"]).is_err());
}

#[test]
fn test_server_flags_override_config() {
    let cli = Cli::try_parse_from([
        "webmcp",
        "--server",
        "my-server",
        "--server-arg",
        "--stdio",
        "--log-level",
        "debug",
        "--log-format",
        "json",
        "tools",
    ])
    .unwrap();

    let mut config = CliConfig::default();
    cli.apply(&mut config);

    assert_eq!(
        config.server.command,
        Some(vec!["my-server".to_string(), "--stdio".to_string()])
    );
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
fn test_resolve_config_without_file() {
    let cli = Cli::try_parse_from(["webmcp", "initialize"]).unwrap();
    if cli.config.is_none() {
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.server.command, None);
    }
}

#[test]
fn test_parsed_call_end_to_end() {
    let cli = Cli::try_parse_from(["webmcp", "call", "formatJSON", "{\"b\":1,\"a\":[true]}"]).unwrap();
    let server = DemoServer::new();
    let client = build_client(|request: &str| server.handle(request), &CliConfig::default());

    let mut out = Vec::new();
    execute(&cli.command, client, std::io::empty(), &mut out).unwrap();

    let response: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(
        response["result"]["content"][0]["text"],
        "{\n  \"b\": 1,\n  \"a\": [\n    true\n  ]\n}"
    );
}
