//! Boleto validation engine
//!
//! Verifies the 47-digit typable line of a Brazilian bank slip: format,
//! issuer bank trust, the three embedded Mod10 check digits, and the
//! general Mod11 check digit of the reassembled barcode block.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod checksum;
pub mod validator;

pub use checksum::{mod10, mod11};
pub use validator::BoletoValidator;
