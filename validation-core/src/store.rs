//! Validation record store
//!
//! The engines hand every outcome to a [`ResultSink`] and read prior
//! rejection counts from a [`HistoryStore`]. The in-memory store here is
//! the reference implementation and the test double; production deployments
//! back these traits with a database.

use crate::types::{BoletoResult, PixInput, PixKeyType, PixResult};
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Raw input recorded when the caller supplied no barcode at all
const MISSING_INPUT: &str = "N/A";

/// Stored row for a boleto validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoletoRecord {
    /// Record ID
    pub id: Uuid,

    /// Raw typable line as submitted
    pub barcode: String,

    /// Verdict
    pub valid: bool,

    /// Resolved bank name
    pub bank_name: String,

    /// Verdict message
    pub message: String,

    /// When the validation ran
    pub recorded_at: DateTime<Utc>,
}

/// Stored row for a PIX validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PixRecord {
    /// Record ID
    pub id: Uuid,

    /// PIX key as submitted
    pub pix_key: String,

    /// Detected key type
    pub key_type: PixKeyType,

    /// Declared recipient name
    pub recipient_name: String,

    /// Declared recipient document
    pub recipient_document: String,

    /// Transaction amount
    pub amount: Option<Decimal>,

    /// Declared bank code
    pub bank_code: String,

    /// Resolved bank name
    pub bank_name: String,

    /// Verdict
    pub valid: bool,

    /// Verdict message
    pub message: String,

    /// When the validation ran
    pub recorded_at: DateTime<Utc>,
}

/// Read side: how often a PIX key was previously rejected
pub trait HistoryStore: Send + Sync {
    /// Count of stored validations for this key with `valid == false`
    fn rejected_count(&self, pix_key: &str) -> u64;
}

/// Write side: durable recording of every validation outcome
///
/// Fire-and-forget from the engine's perspective; a sink must not surface
/// failures to the validation caller.
pub trait ResultSink: Send + Sync {
    /// Record a boleto outcome together with the raw input
    fn record_boleto(&self, barcode: Option<&str>, result: &BoletoResult);

    /// Record a PIX outcome together with the request that produced it
    fn record_pix(&self, input: &PixInput, result: &PixResult);
}

/// Concurrent in-memory store implementing both collaborator traits
#[derive(Default)]
pub struct InMemoryValidationStore {
    boletos: DashMap<Uuid, BoletoRecord>,
    pix: DashMap<Uuid, PixRecord>,
}

impl InMemoryValidationStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored boleto records
    pub fn boleto_count(&self) -> usize {
        self.boletos.len()
    }

    /// Number of stored PIX records
    pub fn pix_count(&self) -> usize {
        self.pix.len()
    }

    /// Insert a pre-built PIX record, used to seed history
    pub fn insert_pix_record(&self, record: PixRecord) {
        self.pix.insert(record.id, record);
    }
}

impl ResultSink for InMemoryValidationStore {
    fn record_boleto(&self, barcode: Option<&str>, result: &BoletoResult) {
        let record = BoletoRecord {
            id: Uuid::new_v4(),
            barcode: barcode.unwrap_or(MISSING_INPUT).to_string(),
            valid: result.valid,
            bank_name: result.bank_name.clone(),
            message: result.message.clone(),
            recorded_at: Utc::now(),
        };
        debug!(id = %record.id, valid = record.valid, "boleto validation recorded");
        self.boletos.insert(record.id, record);
    }

    fn record_pix(&self, input: &PixInput, result: &PixResult) {
        let record = PixRecord {
            id: Uuid::new_v4(),
            pix_key: result.pix_key.clone(),
            key_type: result.key_type,
            recipient_name: input.recipient_name.clone(),
            recipient_document: input.recipient_document.clone(),
            amount: input.amount,
            bank_code: input.bank_code.clone(),
            bank_name: result.bank_name.clone(),
            valid: result.valid,
            message: result.message.clone(),
            recorded_at: Utc::now(),
        };
        debug!(id = %record.id, valid = record.valid, score = result.risk_score.score(), "pix validation recorded");
        self.pix.insert(record.id, record);
    }
}

impl HistoryStore for InMemoryValidationStore {
    fn rejected_count(&self, pix_key: &str) -> u64 {
        self.pix
            .iter()
            .filter(|entry| !entry.valid && entry.pix_key == pix_key)
            .count() as u64
    }
}
