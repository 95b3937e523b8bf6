//! Positional tool-argument coercion
//!
//! A raw input line is split on runs of whitespace and zipped against the
//! tool's declared parameters in schema order: the i-th token fills the
//! i-th parameter. There is no quoting, no escaping and no `name=value`
//! syntax, so a string parameter can never contain whitespace.
//!
//! Numeric parameters are parsed when possible. A token that does not parse
//! is kept as the raw string and flagged as [`CoercedValue::RawFallback`]
//! rather than rejected. Only decimal notation parses: `0x10`, `0b1`,
//! `Infinity` and `NaN` are not numbers here and fall back.

use serde_json::{Map, Number, Value};
use webmcp_protocol::Tool;

/// Largest integer an f64 holds exactly
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A single coerced argument value
#[derive(Debug, Clone, PartialEq)]
pub enum CoercedValue {
    /// Numeric parameter whose token parsed as a number
    Number(Number),
    /// Numeric parameter whose token did not parse; the token is kept as-is
    RawFallback(String),
    /// Non-numeric parameter, passed through unchanged
    Text(String),
}

impl CoercedValue {
    /// Whether numeric parsing failed for this value
    pub fn is_fallback(&self) -> bool {
        matches!(self, CoercedValue::RawFallback(_))
    }

    /// JSON form sent to the server
    pub fn to_json(&self) -> Value {
        match self {
            CoercedValue::Number(n) => Value::Number(n.clone()),
            CoercedValue::RawFallback(s) | CoercedValue::Text(s) => Value::String(s.clone()),
        }
    }
}

impl From<CoercedValue> for Value {
    fn from(value: CoercedValue) -> Self {
        match value {
            CoercedValue::Number(n) => Value::Number(n),
            CoercedValue::RawFallback(s) | CoercedValue::Text(s) => Value::String(s),
        }
    }
}

/// Arguments built for one tool call, in declaration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolArguments {
    entries: Vec<(String, CoercedValue)>,
    dropped: Vec<String>,
}

impl ToolArguments {
    /// Number of parameters that received a token
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a parameter by name
    pub fn get(&self, name: &str) -> Option<&CoercedValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Parameters in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CoercedValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Parameters whose numeric parse fell back to the raw token
    pub fn fallbacks(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().filter_map(|(key, value)| match value {
            CoercedValue::RawFallback(raw) => Some((key.as_str(), raw.as_str())),
            _ => None,
        })
    }

    /// Tokens past the last declared parameter
    pub fn dropped_tokens(&self) -> &[String] {
        &self.dropped
    }

    /// JSON object for the `arguments` member of a `tools/call`
    pub fn to_json(&self) -> Map<String, Value> {
        self.entries
            .iter()
            .map(|(key, value)| (key.clone(), value.to_json()))
            .collect()
    }

    /// Consume into the JSON object for the `arguments` member
    pub fn into_json(self) -> Map<String, Value> {
        self.entries
            .into_iter()
            .map(|(key, value)| (key, value.into()))
            .collect()
    }
}

/// Map a whitespace-delimited input line onto a tool's parameters
///
/// Parameters without a token are left out; surplus tokens are recorded in
/// [`ToolArguments::dropped_tokens`] and not sent.
pub fn coerce_arguments(tool: &Tool, raw: &str) -> ToolArguments {
    let params = tool.parameters();
    let mut tokens = raw.split_whitespace();

    let entries = params
        .iter()
        .zip(tokens.by_ref())
        .map(|(param, token)| {
            let value = if param.is_numeric() {
                match parse_number(token) {
                    Some(number) => CoercedValue::Number(number),
                    None => CoercedValue::RawFallback(token.to_string()),
                }
            } else {
                CoercedValue::Text(token.to_string())
            };
            (param.name.to_string(), value)
        })
        .collect();

    ToolArguments {
        entries,
        dropped: tokens.map(str::to_string).collect(),
    }
}

/// Parse a decimal token into a JSON number
///
/// Integral values come out as JSON integers, so `5` and `5.0` both give
/// `5`. Non-finite values (`inf`, `NaN`) have no JSON form and do not parse,
/// and neither do radix prefixes such as `0x`.
fn parse_number(token: &str) -> Option<Number> {
    if let Ok(int) = token.parse::<i64>() {
        return Some(Number::from(int));
    }
    if let Ok(uint) = token.parse::<u64>() {
        return Some(Number::from(uint));
    }

    let float = token.parse::<f64>().ok().filter(|f| f.is_finite())?;
    if float.fract() == 0.0 && float.abs() <= MAX_SAFE_INTEGER {
        return Some(Number::from(float as i64));
    }
    Number::from_f64(float)
}
