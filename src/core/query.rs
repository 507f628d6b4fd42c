//! Query string parsing.
//!
//! Splits an ampersand-delimited query string into name/value pairs on the
//! first `=` of each segment. Duplicate names keep the last value seen.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Parsed query string parameters.
#[derive(Debug, Clone)]
pub struct QueryString {
    parameters: HashMap<String, String>,
}

impl QueryString {
    /// Parse a full query string (without a leading `?`).
    ///
    /// Every `&`-separated segment must contain an `=`; the name is the part
    /// before the first `=`, the value everything after it (possibly empty).
    /// A segment with no `=` — including the empty segment produced by an
    /// empty input or a dangling `&` — is rejected.
    pub fn parse(input: &str) -> Result<Self> {
        let mut parameters = HashMap::new();

        for (index, segment) in input.split('&').enumerate() {
            let Some((name, value)) = segment.split_once('=') else {
                return Err(Error::query_malformed_segment(segment, index));
            };
            parameters.insert(name.to_string(), value.to_string());
        }

        Ok(Self { parameters })
    }

    /// Value of parameter `name`, or `None` if it never appeared.
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name).map(String::as_str)
    }

    /// Number of distinct parameter names.
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}
