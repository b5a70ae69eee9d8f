use thiserror::Error;

/// Failures of the hex ⇄ UTF-8 ⇄ JSON pipeline.
///
/// These are recoverable: the advance handler turns them into a rejection
/// report and the poll loop keeps going.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("invalid hex payload: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("payload is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    #[error("payload is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum DappError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Rollup host answered {status} on /{endpoint}")]
    HostStatus { endpoint: &'static str, status: u16 },
    #[error("Unknown request kind: {0}")]
    UnknownRequestKind(String),
    #[error("Malformed {kind} request: {reason}")]
    MalformedRequest { kind: &'static str, reason: String },
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DappError>;
