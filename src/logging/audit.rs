// src/logging/audit.rs

use std::io::Write;
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::{self, Receiver, Sender};
use tokio::task;
use tokio::time::{self, Duration};
use tracing_appender::rolling::{self, RollingFileAppender};
use tracing_subscriber::fmt::MakeWriter;

/// One purchase audit record, written as a JSON line.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseAudit {
    pub timestamp: String,
    /// "dooh" or "ssp".
    pub channel: String,
    pub purchase_id: String,
    pub screen_id: String,
    pub bundle_id: String,
    pub total_cost: f64,
    pub currency: String,
    pub status: String,
}

impl PurchaseAudit {
    pub fn new(channel: &str, purchase_id: &str, screen_id: &str, bundle_id: &str) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            channel: channel.to_string(),
            purchase_id: purchase_id.to_string(),
            screen_id: screen_id.to_string(),
            bundle_id: bundle_id.to_string(),
            total_cost: 0.0,
            currency: String::new(),
            status: "failed".to_string(),
        }
    }

    pub fn settled(mut self, total_cost: f64, currency: &str) -> Self {
        self.total_cost = total_cost;
        self.currency = currency.to_string();
        self.status = "active".to_string();
        self
    }
}

/// Batched purchase audit trail: records flow through a channel into a
/// rolling file, flushed on batch size or interval.
pub struct AuditLogger {
    sender: Sender<PurchaseAudit>,
}

impl AuditLogger {
    pub fn new(log_dir: &str, buffer_size: usize, batch_size: usize, flush_interval: u64) -> Arc<Self> {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let log_file = Arc::new(rolling::daily(log_dir, "purchase_audit.json"));

        let logger = Arc::new(Self { sender });
        tokio::spawn(Self::background_writer(log_file, receiver, batch_size, flush_interval));
        logger
    }

    pub async fn record(&self, audit: PurchaseAudit) {
        if let Err(e) = self.sender.send(audit).await {
            eprintln!("Failed to enqueue purchase audit record: {}", e);
        }
    }

    async fn background_writer(
        log_file: Arc<RollingFileAppender>,
        mut receiver: Receiver<PurchaseAudit>,
        batch_size: usize,
        flush_interval: u64,
    ) {
        let mut buffer: Vec<String> = Vec::new();
        let mut interval = time::interval(Duration::from_millis(flush_interval));

        loop {
            tokio::select! {
                entry = receiver.recv() => {
                    match entry {
                        Some(audit) => {
                            match serde_json::to_string(&audit) {
                                Ok(line) => buffer.push(line),
                                Err(e) => eprintln!("Failed to serialize audit record: {}", e),
                            }
                            if buffer.len() >= batch_size {
                                Self::flush(log_file.clone(), &mut buffer).await;
                            }
                        }
                        // Channel closed: final flush, then stop.
                        None => {
                            if !buffer.is_empty() {
                                Self::flush(log_file.clone(), &mut buffer).await;
                            }
                            break;
                        }
                    }
                }
                _ = interval.tick() => {
                    if !buffer.is_empty() {
                        Self::flush(log_file.clone(), &mut buffer).await;
                    }
                }
            }
        }
    }

    async fn flush(file: Arc<RollingFileAppender>, buffer: &mut Vec<String>) {
        let content = buffer.join("\n") + "\n";
        buffer.clear();

        let result = task::spawn_blocking(move || {
            let mut writer = file.make_writer();
            writer.write_all(content.as_bytes())
        })
        .await;

        match result {
            Ok(Err(e)) => eprintln!("Failed to write purchase audit records: {}", e),
            Err(e) => eprintln!("Audit writer task failed: {}", e),
            Ok(Ok(())) => {}
        }
    }

    /// Lets the background writer drain before the process exits.
    pub async fn shutdown(&self) {
        tokio::time::sleep(Duration::from_secs(1)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audit_record_settles_into_active() {
        let audit = PurchaseAudit::new("dooh", "purchase-scr-1-123", "scr-1", "daily-standard")
            .settled(180_000.0, "COP");
        assert_eq!(audit.status, "active");
        assert_eq!(audit.total_cost, 180_000.0);

        let line = serde_json::to_string(&audit).unwrap();
        assert!(line.contains("\"channel\":\"dooh\""));
        assert!(line.contains("\"purchaseId\":\"purchase-scr-1-123\""));
    }
}
