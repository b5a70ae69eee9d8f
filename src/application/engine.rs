use crate::domain::audit::AuditLog;
use crate::domain::command::interpret_command;
use crate::domain::ledger::PayrollLedger;
use crate::domain::ports::{ClockBox, RollupHostBox};
use crate::domain::request::{
    AdvanceRequest, CommandPayload, FinishStatus, InspectRequest, InspectRoute, RawRollupRequest,
    RollupRequest,
};
use crate::error::Result;
use crate::interfaces::codec::{decode_payload, decode_text, encode_object, encode_text};
use serde_json::{Value, json};
use tracing::{debug, info, warn};

/// Reported when an advance payload is not a payroll command.
pub const NOT_A_COMMAND: &str = "Object is not in hex format";
/// Answer to inspect routes that do not exist.
pub const ROUTE_NOT_IMPLEMENTED: &str = "route not implemented";

/// Answer computed for an inspect route, before encoding.
#[derive(Debug, Clone, PartialEq)]
pub enum InspectResponse {
    Json(Value),
    Text(&'static str),
}

impl InspectResponse {
    pub fn encode(&self) -> Result<String> {
        match self {
            InspectResponse::Json(value) => Ok(encode_object(value)?),
            InspectResponse::Text(text) => Ok(encode_text(text)),
        }
    }
}

/// What a single poll cycle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The host had nothing pending.
    Idle,
    /// A request was handled and will be finished with this status.
    Handled(FinishStatus),
}

/// Drives the dapp: polls the host, routes requests and reports outcomes.
///
/// The engine owns all mutable state (ledger and audit log). Requests are
/// handled one at a time, start to finish, before the host is polled again,
/// so no locking is needed around that state.
pub struct DappEngine {
    host: RollupHostBox,
    clock: ClockBox,
    ledger: PayrollLedger,
    audit: AuditLog,
    next_status: FinishStatus,
}

impl DappEngine {
    /// Creates a new `DappEngine`.
    ///
    /// # Arguments
    ///
    /// * `host` - The rollup host to poll and report to.
    /// * `clock` - Calendar used by the end-of-month salary rule.
    /// * `ledger` - Initial payroll state.
    pub fn new(host: RollupHostBox, clock: ClockBox, ledger: PayrollLedger) -> Self {
        Self {
            host,
            clock,
            ledger,
            audit: AuditLog::new(),
            next_status: FinishStatus::Accept,
        }
    }

    pub fn ledger(&self) -> &PayrollLedger {
        &self.ledger
    }

    pub fn audit(&self) -> &AuditLog {
        &self.audit
    }

    /// Status that will be sent with the next `/finish` call.
    pub fn next_status(&self) -> FinishStatus {
        self.next_status
    }

    /// Dispatches a request envelope to the handler for its kind.
    ///
    /// Unknown kinds and envelopes that do not fit their kind are fatal.
    pub async fn route(&mut self, raw: RawRollupRequest) -> Result<FinishStatus> {
        match RollupRequest::try_from(raw)? {
            RollupRequest::Advance(request) => self.handle_advance(request).await,
            RollupRequest::Inspect(request) => self.handle_inspect(request).await,
        }
    }

    /// Applies a payroll command and emits a notice with its outcome.
    ///
    /// Payloads that are not a command are reported and rejected without
    /// touching the audit log or the ledger.
    pub async fn handle_advance(&mut self, request: AdvanceRequest) -> Result<FinishStatus> {
        let AdvanceRequest { metadata, payload } = request;
        info!(
            sender = %metadata.msg_sender,
            input_index = ?metadata.input_index,
            "received advance request"
        );

        let command = match decode_payload(&payload) {
            Ok(value) => CommandPayload::from_json(value),
            Err(e) => {
                debug!(error = %e, "advance payload could not be decoded");
                None
            }
        };

        let Some(command) = command else {
            warn!(%payload, "advance payload is not a payroll command, rejecting");
            self.host.report(encode_object(NOT_A_COMMAND)?).await?;
            return Ok(FinishStatus::Reject);
        };

        self.audit.record(metadata.msg_sender);

        let outcome = interpret_command(command.as_str(), &mut self.ledger, self.clock.today());
        info!(command = command.as_str(), %outcome, "payroll command applied");

        self.host.notice(encode_object(&outcome.to_string())?).await?;
        Ok(FinishStatus::Accept)
    }

    /// Computes the answer for an inspect route. Never mutates state.
    pub fn inspect(&self, route: &InspectRoute) -> InspectResponse {
        match route {
            InspectRoute::List => InspectResponse::Json(json!({ "user": self.audit.senders() })),
            InspectRoute::Total => {
                InspectResponse::Json(json!({ "totalPaid": self.audit.total_processed() }))
            }
            InspectRoute::Unknown(_) => InspectResponse::Text(ROUTE_NOT_IMPLEMENTED),
        }
    }

    /// Answers a read-only query through a report. Always accepted.
    pub async fn handle_inspect(&self, request: InspectRequest) -> Result<FinishStatus> {
        let route = match decode_text(&request.payload) {
            Ok(name) => InspectRoute::from(name.as_str()),
            Err(e) => {
                warn!(error = %e, payload = %request.payload, "undecodable inspect route");
                InspectRoute::Unknown(request.payload.clone())
            }
        };
        info!(?route, "received inspect request");

        let response = self.inspect(&route);
        self.host.report(response.encode()?).await?;
        Ok(FinishStatus::Accept)
    }

    /// Runs one poll cycle: finish the previous request, handle the next one.
    ///
    /// Idle cycles leave the pending status as is, so `/finish` repeats it
    /// until another request has been handled.
    pub async fn step(&mut self) -> Result<Step> {
        let Some(raw) = self.host.finish(self.next_status).await? else {
            debug!("no pending rollup request, trying again");
            return Ok(Step::Idle);
        };

        info!(request_type = %raw.request_type, "received rollup request");
        let status = self.route(raw).await?;
        self.next_status = status;
        info!(%status, "request handled");
        Ok(Step::Handled(status))
    }

    /// Polls the host forever. Returns only when a cycle fails.
    pub async fn run(mut self) -> Result<()> {
        info!("polling rollup host for requests");
        loop {
            self.step().await?;
        }
    }
}
