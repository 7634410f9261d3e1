//! Shared data model and collaborator interfaces for SafePay validation
//!
//! The boleto and PIX engines consume the types and traits defined here;
//! the surrounding service provides real implementations of the
//! collaborators (bank registry, validation store).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod registry;
pub mod store;
pub mod types;

pub use config::{FraudLists, ValidationConfig};
pub use error::{Error, Result};
pub use registry::{BankRegistry, StaticBankRegistry};
pub use store::{HistoryStore, InMemoryValidationStore, ResultSink};
pub use types::{BoletoResult, PixInput, PixKeyType, PixResult, RiskScore, TrustedBank, UNKNOWN_BANK_NAME};
