//! Fail-fast checks with a replaceable error handler.
//!
//! Every `must_be_*` function reports failure through [`raise`]. The
//! `*_with` forms take any handler `FnOnce(ErrorKind, &'static str, &str) ->
//! Result<(), E>`; it receives the error kind, a description and the rejected
//! input, and may return its own error type or `Ok(())` to let the caller
//! carry on.

use crate::error::{raise, ErrorKind, ValidationError};
use crate::predicates::{is_base32_url_data, is_base36_url_data, is_base62_string, is_base64_url_data};

fn guarantee<E, F>(input: &str, is_valid: fn(&str) -> bool, kind: ErrorKind, on_error: F) -> Result<(), E>
where
    F: FnOnce(ErrorKind, &'static str, &str) -> Result<(), E>,
{
    if is_valid(input) {
        return Ok(());
    }
    on_error(kind, kind.description(), input)
}

pub fn must_be_base32_url_data(input: &str) -> Result<(), ValidationError> {
    must_be_base32_url_data_with(input, raise)
}

pub fn must_be_base32_url_data_with<E, F>(input: &str, on_error: F) -> Result<(), E>
where
    F: FnOnce(ErrorKind, &'static str, &str) -> Result<(), E>,
{
    guarantee(input, is_base32_url_data, ErrorKind::InvalidBase32UrlData, on_error)
}

pub fn must_be_base36_url_data(input: &str) -> Result<(), ValidationError> {
    must_be_base36_url_data_with(input, raise)
}

pub fn must_be_base36_url_data_with<E, F>(input: &str, on_error: F) -> Result<(), E>
where
    F: FnOnce(ErrorKind, &'static str, &str) -> Result<(), E>,
{
    guarantee(input, is_base36_url_data, ErrorKind::InvalidBase36UrlData, on_error)
}

pub fn must_be_base62_string(input: &str) -> Result<(), ValidationError> {
    must_be_base62_string_with(input, raise)
}

pub fn must_be_base62_string_with<E, F>(input: &str, on_error: F) -> Result<(), E>
where
    F: FnOnce(ErrorKind, &'static str, &str) -> Result<(), E>,
{
    guarantee(input, is_base62_string, ErrorKind::InvalidBase62String, on_error)
}

pub fn must_be_base64_url_data(input: &str) -> Result<(), ValidationError> {
    must_be_base64_url_data_with(input, raise)
}

pub fn must_be_base64_url_data_with<E, F>(input: &str, on_error: F) -> Result<(), E>
where
    F: FnOnce(ErrorKind, &'static str, &str) -> Result<(), E>,
{
    guarantee(input, is_base64_url_data, ErrorKind::InvalidBase64UrlData, on_error)
}
