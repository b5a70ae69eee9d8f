#![allow(dead_code)]

use chrono::NaiveDate;
use rollup_payroll::application::engine::DappEngine;
use rollup_payroll::domain::ledger::PayrollLedger;
use rollup_payroll::domain::request::RawRollupRequest;
use rollup_payroll::infrastructure::clock::FixedClock;
use rollup_payroll::infrastructure::in_memory::InMemoryRollupHost;
use rollup_payroll::interfaces::codec::{encode_object, encode_text};
use serde_json::{Value, json};

pub const ALICE: &str = "0x70997970c51812dc3a010c7d01b50e0d17dc79c8";
pub const BOB: &str = "0x3c44cdddb6a900fa2b585dd299e03d12fa4293bc";

pub fn end_of_month() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
}

pub fn mid_month() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, 14).unwrap()
}

pub fn engine_with(ledger: PayrollLedger, today: NaiveDate) -> (DappEngine, InMemoryRollupHost) {
    let host = InMemoryRollupHost::new();
    let engine = DappEngine::new(Box::new(host.clone()), Box::new(FixedClock(today)), ledger);
    (engine, host)
}

pub fn advance_raw(sender: &str, payload: String) -> RawRollupRequest {
    RawRollupRequest {
        request_type: "advance_state".to_string(),
        data: json!({
            "metadata": {
                "msg_sender": sender,
                "epoch_index": 0,
                "input_index": 0,
                "block_number": 1,
                "timestamp": 1_700_000_000u64
            },
            "payload": payload
        }),
    }
}

/// Advance request carrying `command` the way clients send it: a JSON string.
pub fn command(sender: &str, command: &str) -> RawRollupRequest {
    advance_raw(sender, encode_object(command).unwrap())
}

pub fn inspect(route: &str) -> RawRollupRequest {
    RawRollupRequest {
        request_type: "inspect_state".to_string(),
        data: json!({ "payload": encode_text(route) }),
    }
}

/// Drains every queued request through the engine.
pub async fn run_until_idle(engine: &mut DappEngine) {
    use rollup_payroll::application::engine::Step;
    while engine.step().await.unwrap() != Step::Idle {}
}

pub fn decoded(payloads: &[String]) -> Vec<Value> {
    payloads
        .iter()
        .map(|p| rollup_payroll::interfaces::codec::decode_payload(p).unwrap())
        .collect()
}
