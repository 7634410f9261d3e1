//! PIX risk scoring engine
//!
//! Accumulates a 0-100 score from independent heuristics. Every check runs
//! on every call (no short-circuiting) and each triggered check appends one
//! human-readable clause to the reason list. The sum is clamped on
//! construction of [`RiskScore`].

use crate::documents::{is_valid_cnpj, is_valid_cpf};
use rust_decimal::Decimal;
use validation_core::{FraudLists, PixInput, PixKeyType, RiskScore};

// Point values per triggered check.
const KEY_BLACKLIST_POINTS: u16 = 100;
const DOCUMENT_BLACKLIST_POINTS: u16 = 100;
const UNTRUSTED_BANK_POINTS: u16 = 40;
const KEY_DOCUMENT_MISMATCH_POINTS: u16 = 60;
const SUSPICIOUS_AMOUNT_POINTS: u16 = 30;
const SUSPICIOUS_NAME_POINTS: u16 = 50;
const FRAUD_HISTORY_POINTS: u16 = 40;
const INVALID_DOCUMENT_KEY_POINTS: u16 = 70;

// Rejection count above which a key is considered to have a fraud history.
const FRAUD_HISTORY_THRESHOLD: u64 = 2;

// Amounts above the PIX nighttime limit or below one real are suspicious.
const AMOUNT_UPPER_LIMIT: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);
const AMOUNT_LOWER_LIMIT: Decimal = Decimal::ONE;

// More digit characters than this in a recipient name is suspicious.
const NAME_DIGIT_LIMIT: usize = 3;

/// Accumulated score plus the clauses of every triggered check
#[derive(Debug, Clone)]
pub struct RiskAssessment {
    /// Clamped total score
    pub score: RiskScore,

    /// One clause per triggered check, in evaluation order
    pub reasons: Vec<String>,
}

impl RiskAssessment {
    /// Joined clause text for the verdict message
    pub fn reason_text(&self) -> String {
        self.reasons.join(" ")
    }
}

/// Risk scorer over immutable fraud lists
///
/// Pure: collaborator lookups (bank trust, prior rejections) are resolved
/// by the caller and passed in, so the scorer is a function of its inputs.
pub struct RiskScorer {
    lists: FraudLists,
}

impl RiskScorer {
    /// Create a scorer over the given fraud lists
    pub fn new(lists: FraudLists) -> Self {
        Self { lists }
    }

    /// Evaluate every heuristic for an already-classified key
    pub fn assess(
        &self,
        input: &PixInput,
        key_type: PixKeyType,
        bank_known: bool,
        prior_rejections: u64,
    ) -> RiskAssessment {
        let mut points = 0u16;
        let mut reasons = Vec::new();
        let key = input.pix_key.trim();

        if self.lists.is_blacklisted_key(&input.pix_key) {
            points += KEY_BLACKLIST_POINTS;
            reasons.push("PIX key is on the known-fraud blacklist.".to_string());
        }

        if self.lists.is_blacklisted_document(&input.recipient_document) {
            points += DOCUMENT_BLACKLIST_POINTS;
            reasons.push("Recipient document is on the known-fraud blacklist.".to_string());
        }

        if !bank_known {
            points += UNTRUSTED_BANK_POINTS;
            reasons.push("Issuer bank is not recognized or not trusted.".to_string());
        }

        // Document-type keys must match the declared document exactly; there
        // is no cross-check for email, phone, or EVP keys.
        if matches!(key_type, PixKeyType::Cpf | PixKeyType::Cnpj)
            && input.pix_key != input.recipient_document
        {
            points += KEY_DOCUMENT_MISMATCH_POINTS;
            reasons.push("PIX key does not match the recipient document.".to_string());
        }

        if let Some(clause) = suspicious_amount(input.amount) {
            points += SUSPICIOUS_AMOUNT_POINTS;
            reasons.push(clause);
        }

        if let Some(clause) = self.suspicious_name(&input.recipient_name) {
            points += SUSPICIOUS_NAME_POINTS;
            reasons.push(clause);
        }

        if prior_rejections > FRAUD_HISTORY_THRESHOLD {
            points += FRAUD_HISTORY_POINTS;
            reasons.push(format!(
                "PIX key has a history of rejected validations ({prior_rejections} attempts)."
            ));
        }

        if key_type == PixKeyType::Cpf && !is_valid_cpf(key) {
            points += INVALID_DOCUMENT_KEY_POINTS;
            reasons.push("CPF check digits are invalid.".to_string());
        }

        if key_type == PixKeyType::Cnpj && !is_valid_cnpj(key) {
            points += INVALID_DOCUMENT_KEY_POINTS;
            reasons.push("CNPJ check digits are invalid.".to_string());
        }

        RiskAssessment {
            score: RiskScore::new(points),
            reasons,
        }
    }

    // First matching sub-rule provides the single name clause.
    fn suspicious_name(&self, name: &str) -> Option<String> {
        let name = name.trim().to_lowercase();

        if name.is_empty() {
            return Some("Recipient name not provided.".to_string());
        }
        if name.chars().count() < 3 {
            return Some("Recipient name is too short.".to_string());
        }
        if let Some(keyword) = self.lists.matching_keyword(&name) {
            return Some(format!(
                "Recipient name contains a suspicious keyword: '{keyword}'."
            ));
        }
        let digit_count = name.chars().filter(char::is_ascii_digit).count();
        if digit_count > NAME_DIGIT_LIMIT {
            return Some(format!(
                "Recipient name contains too many digits ({digit_count})."
            ));
        }
        if name.chars().all(|c| c.is_ascii_digit()) {
            return Some("Recipient name is all digits.".to_string());
        }
        None
    }
}

// First matching sub-rule provides the single amount clause.
fn suspicious_amount(amount: Option<Decimal>) -> Option<String> {
    let amount = match amount {
        Some(amount) => amount,
        None => return Some("Transaction amount not provided.".to_string()),
    };

    if amount > AMOUNT_UPPER_LIMIT {
        return Some("Amount above the PIX nighttime limit (R$ 1000.00).".to_string());
    }
    if amount < AMOUNT_LOWER_LIMIT {
        return Some(format!(
            "Amount too low, typical of a fraud probe (R$ {amount})."
        ));
    }
    None
}
