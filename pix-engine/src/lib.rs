//! PIX validation engine
//!
//! Classifies PIX keys, verifies national-ID check digits, and accumulates
//! a 0-100 fraud risk score from independent heuristics. The verdict is
//! advisory: a score at or above the fraud threshold flags the transaction,
//! it does not block settlement by itself.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod documents;
pub mod keys;
pub mod scoring;
pub mod validator;

pub use documents::{is_valid_cnpj, is_valid_cpf};
pub use keys::classify;
pub use scoring::{RiskAssessment, RiskScorer};
pub use validator::PixValidator;
