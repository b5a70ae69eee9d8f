use serde::Serialize;

/// Process-wide record of accepted advance requests.
///
/// Append-only and never persisted: a restart starts from an empty log.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct AuditLog {
    senders: Vec<String>,
    total_processed: u64,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one accepted advance request from `sender`.
    pub fn record(&mut self, sender: impl Into<String>) {
        self.senders.push(sender.into());
        self.total_processed += 1;
    }

    /// Senders in arrival order, duplicates included.
    pub fn senders(&self) -> &[String] {
        &self.senders
    }

    pub fn total_processed(&self) -> u64 {
        self.total_processed
    }
}
