//! Validation for basen-encoded data.
//!
//! This crate sits on top of `basen`: predicates check that a string only
//! uses a radix's alphabet, and the `must_be_*` guarantees turn a failed
//! check into an error through a replaceable handler.
//!
//! # Example
//!
//! ```
//! use basen_guards::{is_base36_url_data, must_be_base36_url_data, ErrorKind};
//!
//! assert!(is_base36_url_data("csob4hq5gmgnycenf7ezy"));
//!
//! let err = must_be_base36_url_data("csob4hq5-gmgnycenf7ezy").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidBase36UrlData);
//! assert_eq!(err.invalid_string(), "csob4hq5-gmgnycenf7ezy");
//! ```

mod error;
mod guarantees;
mod predicates;

pub use error::{raise, ErrorKind, ValidationError};
pub use guarantees::{
    must_be_base32_url_data, must_be_base32_url_data_with, must_be_base36_url_data,
    must_be_base36_url_data_with, must_be_base62_string, must_be_base62_string_with,
    must_be_base64_url_data, must_be_base64_url_data_with,
};
pub use predicates::{
    is_base32_url_data, is_base36_url_data, is_base62_string, is_base64_url_data,
};
