//! Request envelope builder
//!
//! A [`Session`] owns the request-id counter for one conversation with a
//! server. Ids start at 1 and grow by one per envelope; the counter is never
//! reset or persisted.

use serde_json::Value;
use tracing::trace;
use webmcp_protocol::{Request, Response};

/// Owner of the next request id
#[derive(Debug)]
pub struct Session {
    next_id: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create a session whose first request gets id 1
    pub fn new() -> Self {
        Self { next_id: 1 }
    }

    /// Build the next request envelope
    ///
    /// `params` of `None` or JSON `null` leaves the member out entirely.
    pub fn request(&mut self, method: impl Into<String>, params: Option<Value>) -> Request {
        let id = self.next_id;
        self.next_id += 1;

        let request = Request::new(id, method, params);
        trace!(id, method = %request.method, "built request envelope");
        request
    }

    /// Id the next call to [`Session::request`] will use
    pub fn peek_next_id(&self) -> u64 {
        self.next_id
    }

    /// Number of envelopes built so far
    pub fn issued(&self) -> u64 {
        self.next_id - 1
    }

    /// Serialize a request envelope to JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the params value cannot be serialized.
    pub fn encode(request: &Request) -> Result<String, serde_json::Error> {
        serde_json::to_string(request)
    }

    /// Parse response text
    ///
    /// Only JSON syntax is checked. A response missing `result`, `id` or
    /// anything else still decodes, as does an `error` member that is not a
    /// JSON-RPC error object; the document is kept as received.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not JSON.
    pub fn decode(response_json: &str) -> Result<Response, serde_json::Error> {
        serde_json::from_str(response_json)
    }
}
