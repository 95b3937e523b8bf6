//! Error types for the MCP protocol

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result type alias for protocol operations
pub type McpResult<T> = std::result::Result<T, Error>;

/// JSON-RPC error object carried in the `error` member of a response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub struct Error {
    /// Error code following JSON-RPC 2.0
    pub code: ErrorCode,
    /// Human-readable error message
    #[serde(default)]
    pub message: String,
    /// Optional additional error data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl Error {
    /// Create a new error with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Create an error with additional data
    pub fn with_data(code: ErrorCode, message: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            code,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Create a parse error
    pub fn parse_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ParseError, message)
    }

    /// Create an invalid request error
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Create a method not found error
    pub fn method_not_found() -> Self {
        Self::new(ErrorCode::MethodNotFound, "Method not found")
    }

    /// Create an invalid params error
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidParams, message)
    }

    /// Create an internal error
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

/// JSON-RPC 2.0 error codes
///
/// Serialized as the bare integer. Codes outside the reserved set are kept
/// verbatim in [`ErrorCode::Other`] so server-defined errors survive a
/// decode/encode pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum ErrorCode {
    /// Invalid JSON was received (-32700)
    ParseError,
    /// The JSON sent is not a valid request object (-32600)
    InvalidRequest,
    /// The method does not exist (-32601)
    MethodNotFound,
    /// Invalid method parameters (-32602)
    InvalidParams,
    /// Internal JSON-RPC error (-32603)
    InternalError,
    /// Any other server-defined code
    Other(i32),
}

impl ErrorCode {
    /// Numeric value of the code
    pub fn as_i32(self) -> i32 {
        self.into()
    }
}

impl From<i32> for ErrorCode {
    fn from(code: i32) -> Self {
        match code {
            -32700 => ErrorCode::ParseError,
            -32600 => ErrorCode::InvalidRequest,
            -32601 => ErrorCode::MethodNotFound,
            -32602 => ErrorCode::InvalidParams,
            -32603 => ErrorCode::InternalError,
            other => ErrorCode::Other(other),
        }
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        match code {
            ErrorCode::ParseError => -32700,
            ErrorCode::InvalidRequest => -32600,
            ErrorCode::MethodNotFound => -32601,
            ErrorCode::InvalidParams => -32602,
            ErrorCode::InternalError => -32603,
            ErrorCode::Other(code) => code,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::ParseError => write!(f, "ParseError"),
            ErrorCode::InvalidRequest => write!(f, "InvalidRequest"),
            ErrorCode::MethodNotFound => write!(f, "MethodNotFound"),
            ErrorCode::InvalidParams => write!(f, "InvalidParams"),
            ErrorCode::InternalError => write!(f, "InternalError"),
            ErrorCode::Other(code) => write!(f, "Error({code})"),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::parse_error(err.to_string())
    }
}
