//! Request replay.
//!
//! Drives an [`OrderApiPort`] from a newline-delimited JSON script:
//!
//! ```text
//! {"method": "POST", "url": "https://api.example.com/data", "body": {"volume": 10, ...}}
//! {"method": "GET", "url": "https://api.example.com/data?id=1"}
//! {"method": "DELETE", "url": "https://api.example.com/data", "body": {"id": 1}}
//! ```
//!
//! and writes one `{"status": <code>, "body": <json>}` line per request.

use std::io::{BufRead, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::application::ports::OrderApiPort;
use crate::config::ReplayConfig;
use crate::infrastructure::http::ResponseEnvelope;

/// Replay errors.
#[derive(Debug, Error)]
pub enum ReplayError {
    /// Reading the script or writing a response failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A script line is not a valid request.
    #[error("line {line}: malformed request: {source}")]
    MalformedRequest {
        /// 1-based line number.
        line: usize,
        /// The underlying parse error.
        source: serde_json::Error,
    },

    /// Serializing a response failed.
    #[error("failed to encode response: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Supported HTTP methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RequestMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `DELETE`
    Delete,
}

impl RequestMethod {
    /// Get the canonical method name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl FromStr for RequestMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "DELETE" => Ok(Self::Delete),
            _ => Err(format!("unsupported method '{s}'")),
        }
    }
}

impl TryFrom<String> for RequestMethod {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RequestMethod> for String {
    fn from(method: RequestMethod) -> Self {
        method.as_str().to_string()
    }
}

/// One scripted request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayRequest {
    /// HTTP method (case-insensitive).
    pub method: RequestMethod,
    /// Target URL.
    pub url: String,
    /// JSON body; ignored for `GET`.
    #[serde(default)]
    pub body: Option<Value>,
}

/// One response line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayResponse {
    /// HTTP status code.
    pub status: u16,
    /// Effective response body.
    pub body: Value,
}

impl From<&ResponseEnvelope> for ReplayResponse {
    fn from(envelope: &ResponseEnvelope) -> Self {
        Self {
            status: envelope.status_code(),
            body: envelope.json(),
        }
    }
}

/// Counts from a finished replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Requests dispatched.
    pub processed: usize,
    /// Malformed lines skipped.
    pub skipped: usize,
}

/// Runs scripted requests against an API implementation.
#[derive(Debug)]
pub struct Replayer<A: OrderApiPort> {
    api: A,
    config: ReplayConfig,
}

impl<A: OrderApiPort> Replayer<A> {
    /// Create a replayer over `api`.
    pub const fn new(api: A, config: ReplayConfig) -> Self {
        Self { api, config }
    }

    /// Borrow the underlying API.
    pub const fn api(&self) -> &A {
        &self.api
    }

    /// Consume the replayer, returning the API with its accumulated state.
    pub fn into_inner(self) -> A {
        self.api
    }

    /// Dispatch a single request.
    pub fn dispatch(&mut self, request: &ReplayRequest) -> ResponseEnvelope {
        match request.method {
            RequestMethod::Get => self.api.get(&request.url),
            RequestMethod::Post => self.api.post(&request.url, request.body.as_ref()),
            RequestMethod::Delete => self.api.delete(&request.url, request.body.as_ref()),
        }
    }

    /// Replay every line of `input`, writing responses to `output`.
    ///
    /// Blank lines are ignored. Malformed lines are skipped with a warning
    /// unless `stop_on_error` is set.
    ///
    /// # Errors
    ///
    /// Returns error on I/O failure, or on a malformed line when
    /// `stop_on_error` is set.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
    ) -> Result<ReplaySummary, ReplayError> {
        let mut summary = ReplaySummary::default();

        for (index, line) in input.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let request = match serde_json::from_str::<ReplayRequest>(&line) {
                Ok(request) => request,
                Err(source) => {
                    let error = ReplayError::MalformedRequest {
                        line: index + 1,
                        source,
                    };
                    if self.config.stop_on_error {
                        return Err(error);
                    }
                    tracing::warn!(error = %error, "Skipping request");
                    summary.skipped += 1;
                    continue;
                }
            };

            let envelope = self.dispatch(&request);
            tracing::debug!(
                method = request.method.as_str(),
                url = %request.url,
                status = envelope.status_code(),
                "Replayed request"
            );

            let response = ReplayResponse::from(&envelope);
            let encoded = if self.config.pretty {
                serde_json::to_string_pretty(&response)
            } else {
                serde_json::to_string(&response)
            }
            .map_err(ReplayError::Encode)?;
            writeln!(output, "{encoded}")?;
            summary.processed += 1;
        }

        output.flush()?;
        Ok(summary)
    }
}
