//! PIX validation engine

use crate::keys::classify;
use crate::scoring::RiskScorer;
use std::sync::Arc;
use tracing::{debug, warn};
use validation_core::{
    BankRegistry, FraudLists, HistoryStore, PixInput, PixKeyType, PixResult, ResultSink,
    RiskScore, UNKNOWN_BANK_NAME,
};

/// Scores at or above this flag the transaction as suspected fraud
pub const FRAUD_SCORE_THRESHOLD: u8 = 35;

/// Verdict message for a key that matches no known format
pub const INVALID_KEY_MESSAGE: &str = "Invalid PIX key format. Check the key type.";

/// PIX validation engine
///
/// Classifies the key, runs the risk scorer against the collaborators, and
/// turns the score into a verdict. Never fails; every outcome is recorded.
pub struct PixValidator {
    registry: Arc<dyn BankRegistry>,
    history: Arc<dyn HistoryStore>,
    sink: Arc<dyn ResultSink>,
    scorer: RiskScorer,
}

impl PixValidator {
    /// Create a validator over the given collaborators and fraud lists
    pub fn new(
        registry: Arc<dyn BankRegistry>,
        history: Arc<dyn HistoryStore>,
        sink: Arc<dyn ResultSink>,
        lists: FraudLists,
    ) -> Self {
        Self {
            registry,
            history,
            sink,
            scorer: RiskScorer::new(lists),
        }
    }

    /// Validate a PIX transaction, record the outcome, and return the verdict
    pub fn validate(&self, input: &PixInput) -> PixResult {
        let key_type = classify(&input.pix_key);
        let bank_name = self.registry.lookup(&input.bank_code);
        let bank_known = bank_name.is_some();
        let bank_name = bank_name.unwrap_or_else(|| UNKNOWN_BANK_NAME.to_string());

        // Malformed keys are terminal: none of the heuristics run.
        if key_type == PixKeyType::Unknown {
            warn!(pix_key = %input.pix_key, "pix key matches no known format");
            let result = PixResult {
                valid: false,
                pix_key: input.pix_key.clone(),
                key_type,
                recipient_name: input.recipient_name.clone(),
                bank_code: input.bank_code.clone(),
                bank_name,
                message: INVALID_KEY_MESSAGE.to_string(),
                risk_score: RiskScore::MAX,
            };
            self.sink.record_pix(input, &result);
            return result;
        }

        // The history read is advisory: it sees whatever prior calls have
        // recorded by now, with no isolation against concurrent validations
        // of the same key.
        let prior_rejections = self.history.rejected_count(&input.pix_key);
        let assessment = self
            .scorer
            .assess(input, key_type, bank_known, prior_rejections);

        let score = assessment.score;
        let valid = score.score() < FRAUD_SCORE_THRESHOLD;
        let message = if valid {
            let mut message =
                format!("PIX transaction valid and secure. Risk score: {score}/100");
            if score.score() > 0 {
                message.push_str(&format!(
                    " (Low risk detected: {})",
                    assessment.reason_text()
                ));
            }
            message
        } else {
            format!(
                "SUSPECTED FRAUD TRANSACTION! Reasons: {}",
                assessment.reason_text()
            )
        };

        if valid {
            debug!(pix_key = %input.pix_key, %score, "pix transaction cleared");
        } else {
            warn!(pix_key = %input.pix_key, %score, "pix transaction flagged as suspected fraud");
        }

        let result = PixResult {
            valid,
            pix_key: input.pix_key.clone(),
            key_type,
            recipient_name: input.recipient_name.clone(),
            bank_code: input.bank_code.clone(),
            bank_name,
            message,
            risk_score: score,
        };
        self.sink.record_pix(input, &result);
        result
    }
}
