//! Unit tests for crate-level constants and helpers

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn test_mcp_version_is_supported() {
        assert!(is_protocol_version_supported(MCP_VERSION));
    }

    #[test]
    fn test_unknown_version_not_supported() {
        assert!(!is_protocol_version_supported("2023-01-01"));
        assert!(!is_protocol_version_supported(""));
    }

    #[test]
    fn test_jsonrpc_version() {
        assert_eq!(JSONRPC_VERSION, "2.0");
    }
}
