//! PIX key classification
//!
//! A key is classified by the first matching pattern in a fixed priority
//! order, so an 11-digit number is always a CPF even though it would also
//! shape-match a phone number.

use regex::Regex;
use std::sync::LazyLock;
use validation_core::PixKeyType;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("email pattern is valid")
});

// E.164-like: optional '+', first digit 1-9, 11 to 15 digits total.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?[1-9][0-9]{10,14}$").expect("phone pattern is valid")
});

static EVP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
        .expect("evp pattern is valid")
});

/// Classify a PIX key by pattern. Total over all strings, never panics;
/// blank keys and unmatched shapes come back as [`PixKeyType::Unknown`].
pub fn classify(key: &str) -> PixKeyType {
    let key = key.trim();
    if key.is_empty() {
        return PixKeyType::Unknown;
    }

    if is_digits(key, 11) {
        PixKeyType::Cpf
    } else if is_digits(key, 14) {
        PixKeyType::Cnpj
    } else if EMAIL_RE.is_match(key) {
        PixKeyType::Email
    } else if PHONE_RE.is_match(key) {
        PixKeyType::Phone
    } else if EVP_RE.is_match(key) {
        PixKeyType::Evp
    } else {
        PixKeyType::Unknown
    }
}

fn is_digits(key: &str, len: usize) -> bool {
    key.len() == len && key.bytes().all(|b| b.is_ascii_digit())
}
