use crate::error::DappError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Status reported to the host when a request has been handled.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinishStatus {
    #[default]
    Accept,
    Reject,
}

impl fmt::Display for FinishStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FinishStatus::Accept => f.write_str("accept"),
            FinishStatus::Reject => f.write_str("reject"),
        }
    }
}

/// Envelope returned by `/finish` when there is pending work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRollupRequest {
    pub request_type: String,
    pub data: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Advance,
    Inspect,
}

impl RequestKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestKind::Advance => "advance_state",
            RequestKind::Inspect => "inspect_state",
        }
    }
}

impl FromStr for RequestKind {
    type Err = DappError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "advance_state" => Ok(RequestKind::Advance),
            "inspect_state" => Ok(RequestKind::Inspect),
            other => Err(DappError::UnknownRequestKind(other.to_string())),
        }
    }
}

/// Input metadata attached by the rollup to every advance request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub msg_sender: String,
    #[serde(default)]
    pub epoch_index: Option<u64>,
    #[serde(default)]
    pub input_index: Option<u64>,
    #[serde(default)]
    pub block_number: Option<u64>,
    #[serde(default)]
    pub timestamp: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvanceRequest {
    pub metadata: Metadata,
    pub payload: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectRequest {
    pub payload: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RollupRequest {
    Advance(AdvanceRequest),
    Inspect(InspectRequest),
}

impl TryFrom<RawRollupRequest> for RollupRequest {
    type Error = DappError;

    fn try_from(raw: RawRollupRequest) -> Result<Self, Self::Error> {
        let kind: RequestKind = raw.request_type.parse()?;
        let malformed = |e: serde_json::Error| DappError::MalformedRequest {
            kind: kind.as_str(),
            reason: e.to_string(),
        };

        match kind {
            RequestKind::Advance => serde_json::from_value(raw.data)
                .map(RollupRequest::Advance)
                .map_err(malformed),
            RequestKind::Inspect => serde_json::from_value(raw.data)
                .map(RollupRequest::Inspect)
                .map_err(malformed),
        }
    }
}

/// A decoded advance payload that has the shape of a payroll command.
///
/// Accepted shapes are a JSON string or an object `{"payload": "<string>"}`.
/// Numbers and numeric strings are not commands; any other text is, even
/// when its verb turns out to be unknown.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandPayload(String);

impl CommandPayload {
    pub fn from_json(value: Value) -> Option<Self> {
        let text = match value {
            Value::String(text) => text,
            Value::Object(mut fields) => match fields.remove("payload") {
                Some(Value::String(text)) => text,
                _ => return None,
            },
            _ => return None,
        };

        if is_numeric(&text) {
            return None;
        }
        Some(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// True for text that reads as a finite number, such as `"42"` or `" -1.5e3 "`.
fn is_numeric(text: &str) -> bool {
    text.trim()
        .parse::<f64>()
        .is_ok_and(|n| n.is_finite())
}

/// Read-only query names understood by the inspect handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InspectRoute {
    List,
    Total,
    Unknown(String),
}

impl From<&str> for InspectRoute {
    fn from(route: &str) -> Self {
        match route {
            "List" => InspectRoute::List,
            "total" => InspectRoute::Total,
            other => InspectRoute::Unknown(other.to_string()),
        }
    }
}
