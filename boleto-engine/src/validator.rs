//! Boleto validation engine

use crate::checksum::{mod10, mod11};
use regex::Regex;
use std::sync::{Arc, LazyLock};
use tracing::debug;
use validation_core::{BankRegistry, BoletoResult, ResultSink, UNKNOWN_BANK_NAME};

/// Verdict message for a typable line that fails the format gate or a
/// field check digit
pub const INVALID_BARCODE_MESSAGE: &str = "Invalid barcode. Check the digits.";

/// Verdict message for an issuer bank absent from the registry
pub const UNTRUSTED_BANK_MESSAGE: &str = "Issuer bank is not trusted or not found.";

/// Verdict message for a general check-digit mismatch
pub const INVALID_CHECKSUM_MESSAGE: &str = "Invalid boleto. The check digit does not match.";

/// Verdict message for a boleto that passes every check
pub const LEGITIMATE_BOLETO_MESSAGE: &str = "Legitimate boleto.";

// Any further checksum processing requires exactly 47 numeric characters.
static TYPABLE_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{47}$").expect("typable-line pattern is valid")
});

/// Boleto validation engine
///
/// Orchestrates the format gate, the bank-registry lookup, and the two
/// checksum passes into a single verdict. Never fails: malformed input
/// becomes a negative verdict, and every outcome is handed to the sink.
pub struct BoletoValidator {
    registry: Arc<dyn BankRegistry>,
    sink: Arc<dyn ResultSink>,
}

impl BoletoValidator {
    /// Create a validator over the given collaborators
    pub fn new(registry: Arc<dyn BankRegistry>, sink: Arc<dyn ResultSink>) -> Self {
        Self { registry, sink }
    }

    /// Validate a typable line, record the outcome, and return the verdict
    pub fn validate(&self, barcode: Option<&str>) -> BoletoResult {
        let result = self.run_checks(barcode);
        self.sink.record_boleto(barcode, &result);
        result
    }

    // Checks run in strict order, short-circuiting at the first failure.
    fn run_checks(&self, barcode: Option<&str>) -> BoletoResult {
        let line = match barcode {
            Some(line) if TYPABLE_LINE_RE.is_match(line) => line,
            _ => {
                debug!("typable line failed the 47-digit format gate");
                return rejected(UNKNOWN_BANK_NAME, INVALID_BARCODE_MESSAGE);
            }
        };

        let bank_code = &line[0..3];
        let Some(bank_name) = self.registry.lookup(bank_code) else {
            debug!(bank_code, "issuer bank not found in registry");
            return rejected(UNKNOWN_BANK_NAME, UNTRUSTED_BANK_MESSAGE);
        };

        if !field_digits_match(line) {
            debug!(bank_code, "typable-line field check digit mismatch");
            return rejected(&bank_name, INVALID_BARCODE_MESSAGE);
        }

        if !general_digit_matches(line) {
            debug!(bank_code, "general check digit mismatch");
            return rejected(&bank_name, INVALID_CHECKSUM_MESSAGE);
        }

        BoletoResult {
            valid: true,
            bank_name,
            message: LEGITIMATE_BOLETO_MESSAGE.to_string(),
        }
    }
}

fn rejected(bank_name: &str, message: &str) -> BoletoResult {
    BoletoResult {
        valid: false,
        bank_name: bank_name.to_string(),
        message: message.to_string(),
    }
}

fn declared_digit(line: &str, index: usize) -> u32 {
    u32::from(line.as_bytes()[index] - b'0')
}

// The three typable-line fields each carry their own Mod10 check digit.
fn field_digits_match(line: &str) -> bool {
    mod10(&line[0..9]) == declared_digit(line, 9)
        && mod10(&line[10..20]) == declared_digit(line, 20)
        && mod10(&line[21..31]) == declared_digit(line, 31)
}

// The general check digit at index 32 covers the 44-digit barcode, which is
// reassembled from the typable line: bank+currency, due factor+amount, then
// the three free-field segments in original order (field DVs excluded).
fn general_digit_matches(line: &str) -> bool {
    let block = format!(
        "{}{}{}{}{}",
        &line[0..4],
        &line[33..47],
        &line[4..9],
        &line[10..20],
        &line[21..31],
    );
    mod11(&block) == declared_digit(line, 32)
}
