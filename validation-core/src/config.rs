//! Configuration for the validation engines
//!
//! Blacklists, name keywords, and the trusted-bank table are loaded once at
//! process start and injected into the engines as read-only data. Nothing
//! here is mutated during request handling.

use crate::types::TrustedBank;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Known-fraud blacklists and suspicious-name keywords
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FraudLists {
    /// PIX keys with confirmed fraud reports (matched case-insensitively)
    pub blacklisted_keys: HashSet<String>,

    /// Recipient documents with confirmed fraud reports (matched exactly)
    pub blacklisted_documents: HashSet<String>,

    /// Substrings that make a recipient name suspicious
    pub suspicious_name_keywords: HashSet<String>,
}

impl FraudLists {
    /// Check a PIX key against the blacklist, case-insensitively
    pub fn is_blacklisted_key(&self, key: &str) -> bool {
        self.blacklisted_keys.contains(&key.to_lowercase())
    }

    /// Check a recipient document against the blacklist
    pub fn is_blacklisted_document(&self, document: &str) -> bool {
        self.blacklisted_documents.contains(document)
    }

    /// Find the first blacklisted keyword contained in an already-lowercased name
    pub fn matching_keyword(&self, name_lower: &str) -> Option<&str> {
        self.suspicious_name_keywords
            .iter()
            .find(|keyword| name_lower.contains(keyword.as_str()))
            .map(String::as_str)
    }

    // Matching is done against lowercase entries; file-loaded lists may
    // carry mixed case.
    fn normalize(&mut self) {
        self.blacklisted_keys = self
            .blacklisted_keys
            .iter()
            .map(|k| k.to_lowercase())
            .collect();
        self.suspicious_name_keywords = self
            .suspicious_name_keywords
            .iter()
            .map(|k| k.to_lowercase())
            .collect();
    }
}

impl Default for FraudLists {
    fn default() -> Self {
        Self {
            blacklisted_keys: [
                "12345678900",
                "00000000000",
                "11111111111",
                "fraudador@email.com",
                "golpe@teste.com",
                "+5511900000000",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            blacklisted_documents: [
                "00000000000",
                "11111111111",
                "22222222222",
                "12345678900",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            suspicious_name_keywords: [
                "teste", "test", "golpe", "fraude", "fake", "falso", "laranja",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

/// Top-level validation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Trusted-bank table for the registry
    pub banks: Vec<TrustedBank>,

    /// Fraud blacklists and keywords
    pub fraud: FraudLists,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            banks: vec![
                TrustedBank::new("237", "Bradesco"),
                TrustedBank::new("341", "Itaú Unibanco"),
                TrustedBank::new("001", "Banco do Brasil"),
                TrustedBank::new("104", "Caixa Econômica Federal"),
                TrustedBank::new("033", "Santander"),
                TrustedBank::new("260", "Nu Pagamentos (Nubank)"),
                TrustedBank::new("077", "Banco Inter"),
                TrustedBank::new("290", "PagBank"),
                TrustedBank::new("323", "Mercado Pago"),
                TrustedBank::new("380", "PicPay"),
            ],
            fraud: FraudLists::default(),
        }
    }
}

impl ValidationConfig {
    /// Load from a TOML file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: ValidationConfig = toml::from_str(&content)
            .map_err(|e| crate::Error::Config(format!("Failed to parse config: {}", e)))?;
        config.fraud.normalize();
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_seed_data() {
        let config = ValidationConfig::default();
        assert_eq!(config.banks.len(), 10);
        assert!(config.banks.iter().any(|b| b.code == "237" && b.name == "Bradesco"));
        assert!(config.fraud.is_blacklisted_key("12345678900"));
        assert!(config.fraud.is_blacklisted_document("22222222222"));
        assert!(!config.fraud.is_blacklisted_document("52998224725"));
    }

    #[test]
    fn test_key_blacklist_is_case_insensitive() {
        let lists = FraudLists::default();
        assert!(lists.is_blacklisted_key("FRAUDADOR@EMAIL.COM"));
        assert!(lists.is_blacklisted_key("fraudador@email.com"));
    }

    #[test]
    fn test_keyword_lookup() {
        let lists = FraudLists::default();
        assert_eq!(lists.matching_keyword("conta laranja ltda"), Some("laranja"));
        assert_eq!(lists.matching_keyword("maria silva"), None);
    }

    #[test]
    fn test_from_file_normalizes_entries() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            banks = [{{ code = "237", name = "Bradesco" }}]

            [fraud]
            blacklisted_keys = ["Fraudador@Email.com"]
            blacklisted_documents = ["00000000000"]
            suspicious_name_keywords = ["GOLPE"]
            "#
        )
        .unwrap();

        let config = ValidationConfig::from_file(file.path()).unwrap();
        assert!(config.fraud.is_blacklisted_key("fraudador@email.com"));
        assert_eq!(config.fraud.matching_keyword("golpe do pix"), Some("golpe"));
    }

    #[test]
    fn test_from_file_missing_path() {
        assert!(ValidationConfig::from_file("/nonexistent/validation.toml").is_err());
    }
}
