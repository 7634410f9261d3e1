//! Core types shared by the boleto and PIX validation engines

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Bank name reported when a bank code does not resolve in the registry
pub const UNKNOWN_BANK_NAME: &str = "Unknown";

/// Risk score (0-100)
///
/// Construction clamps, so a score outside the range cannot exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RiskScore(u8);

impl RiskScore {
    /// Maximum score, assigned to malformed keys and blacklist hits
    pub const MAX: RiskScore = RiskScore(100);

    /// Create a new risk score, clamping accumulated points to 0-100
    pub fn new(points: u16) -> Self {
        Self(points.min(100) as u8)
    }

    /// Get raw score
    pub fn score(&self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for RiskScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// PIX key type, detected by pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PixKeyType {
    /// Individual taxpayer ID (11 digits)
    Cpf,
    /// Corporate taxpayer ID (14 digits)
    Cnpj,
    /// E-mail address
    Email,
    /// E.164-like phone number
    Phone,
    /// Random UUID-shaped key
    Evp,
    /// Blank key or no pattern matched
    Unknown,
}

impl PixKeyType {
    /// Uppercase name as exposed by the API layer
    pub fn as_str(&self) -> &'static str {
        match self {
            PixKeyType::Cpf => "CPF",
            PixKeyType::Cnpj => "CNPJ",
            PixKeyType::Email => "EMAIL",
            PixKeyType::Phone => "PHONE",
            PixKeyType::Evp => "EVP",
            PixKeyType::Unknown => "UNKNOWN",
        }
    }
}

/// Outcome of a boleto validation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoletoResult {
    /// Whether the typable line passed every check
    pub valid: bool,

    /// Resolved issuer bank name, or [`UNKNOWN_BANK_NAME`]
    pub bank_name: String,

    /// Human-readable verdict
    pub message: String,
}

/// Input to a PIX validation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixInput {
    /// PIX key identifying the recipient account
    pub pix_key: String,

    /// Declared recipient name
    pub recipient_name: String,

    /// Declared recipient document (CPF or CNPJ digits)
    pub recipient_document: String,

    /// Transaction amount; absent amounts are themselves suspicious
    pub amount: Option<Decimal>,

    /// 3-digit code of the recipient bank
    pub bank_code: String,
}

/// Outcome of a PIX validation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixResult {
    /// Whether the transaction cleared the fraud threshold
    pub valid: bool,

    /// Echo of the validated key
    pub pix_key: String,

    /// Detected key type
    pub key_type: PixKeyType,

    /// Echo of the declared recipient name
    pub recipient_name: String,

    /// Echo of the declared bank code
    pub bank_code: String,

    /// Resolved bank name, or [`UNKNOWN_BANK_NAME`]
    pub bank_name: String,

    /// Human-readable verdict with the triggered heuristic clauses
    pub message: String,

    /// Accumulated risk score
    pub risk_score: RiskScore,
}

/// Static reference entry mapping a 3-digit bank code to a bank name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrustedBank {
    /// 3-digit bank code
    pub code: String,

    /// Display name
    pub name: String,
}

impl TrustedBank {
    /// Convenience constructor
    pub fn new(code: &str, name: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_score_clamped() {
        assert_eq!(RiskScore::new(0).score(), 0);
        assert_eq!(RiskScore::new(100).score(), 100);
        assert_eq!(RiskScore::new(490).score(), 100);
        assert_eq!(RiskScore::MAX.score(), 100);
    }

    #[test]
    fn test_key_type_serializes_uppercase() {
        assert_eq!(
            serde_json::to_value(PixKeyType::Cpf).unwrap(),
            serde_json::json!("CPF")
        );
        assert_eq!(
            serde_json::to_value(PixKeyType::Unknown).unwrap(),
            serde_json::json!("UNKNOWN")
        );
        assert_eq!(PixKeyType::Evp.as_str(), "EVP");
    }

    #[test]
    fn test_result_json_field_names() {
        // The API layer depends on these exact field names.
        let result = PixResult {
            valid: true,
            pix_key: "52998224725".to_string(),
            key_type: PixKeyType::Cpf,
            recipient_name: "Maria Silva".to_string(),
            bank_code: "237".to_string(),
            bank_name: "Bradesco".to_string(),
            message: "ok".to_string(),
            risk_score: RiskScore::new(0),
        };
        let value = serde_json::to_value(&result).unwrap();
        for field in [
            "valid",
            "pixKey",
            "keyType",
            "recipientName",
            "bankCode",
            "bankName",
            "message",
            "riskScore",
        ] {
            assert!(value.get(field).is_some(), "missing field {field}");
        }

        let boleto = BoletoResult {
            valid: false,
            bank_name: UNKNOWN_BANK_NAME.to_string(),
            message: "rejected".to_string(),
        };
        let value = serde_json::to_value(&boleto).unwrap();
        assert!(value.get("bankName").is_some());
    }
}
