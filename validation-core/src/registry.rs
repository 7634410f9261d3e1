//! Trusted-bank registry
//!
//! A bank code that does not resolve is treated as untrusted; the registry
//! never fails a lookup.

use crate::config::ValidationConfig;
use crate::types::TrustedBank;
use std::collections::HashMap;

/// Resolves a 3-digit bank code to a bank name
pub trait BankRegistry: Send + Sync {
    /// Look up a bank name; `None` means untrusted/unknown
    fn lookup(&self, code: &str) -> Option<String>;
}

/// Immutable in-memory registry built from the trusted-bank table
pub struct StaticBankRegistry {
    banks: HashMap<String, String>,
}

impl StaticBankRegistry {
    /// Build a registry from a bank table
    pub fn new(banks: impl IntoIterator<Item = TrustedBank>) -> Self {
        Self {
            banks: banks
                .into_iter()
                .map(|bank| (bank.code, bank.name))
                .collect(),
        }
    }

    /// Number of registered banks
    pub fn len(&self) -> usize {
        self.banks.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.banks.is_empty()
    }
}

impl Default for StaticBankRegistry {
    fn default() -> Self {
        Self::new(ValidationConfig::default().banks)
    }
}

impl BankRegistry for StaticBankRegistry {
    fn lookup(&self, code: &str) -> Option<String> {
        self.banks.get(code).cloned()
    }
}
