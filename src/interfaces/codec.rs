//! Hex wire codec.
//!
//! Every payload exchanged with the rollup host is a `0x`-prefixed hex string
//! of UTF-8 bytes. Structured values travel as JSON text, plain answers as raw
//! text. All four directions share the same hex ⇄ UTF-8 step, so
//! `decode_payload(encode_object(v)) == v` and `decode_text(encode_text(s)) == s`.

use crate::error::DecodeError;
use serde::Serialize;
use serde_json::Value;

const HEX_PREFIX: &str = "0x";

fn to_hex(bytes: &[u8]) -> String {
    format!("{HEX_PREFIX}{}", hex::encode(bytes))
}

fn from_hex(payload: &str) -> Result<Vec<u8>, DecodeError> {
    let digits = payload
        .strip_prefix(HEX_PREFIX)
        .or_else(|| payload.strip_prefix("0X"))
        .unwrap_or(payload);
    Ok(hex::decode(digits)?)
}

/// Decodes a hex payload into the JSON value it carries.
pub fn decode_payload(payload: &str) -> Result<Value, DecodeError> {
    let text = decode_text(payload)?;
    Ok(serde_json::from_str(&text)?)
}

/// Serializes `value` as JSON and hex-encodes the UTF-8 text.
pub fn encode_object<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(value)?;
    Ok(encode_text(&json))
}

/// Hex-encodes a plain string without any JSON quoting.
pub fn encode_text(text: &str) -> String {
    to_hex(text.as_bytes())
}

/// Decodes a hex payload into the plain string it carries.
pub fn decode_text(payload: &str) -> Result<String, DecodeError> {
    let bytes = from_hex(payload)?;
    Ok(String::from_utf8(bytes)?)
}
