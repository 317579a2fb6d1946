//! Tests for the must_be_* guarantees.

use basen_guards::{
    must_be_base32_url_data, must_be_base36_url_data, must_be_base36_url_data_with,
    must_be_base62_string, must_be_base62_string_with, must_be_base64_url_data, ErrorKind,
    ValidationError,
};

#[test]
fn accepts_a_valid_base36url_string() {
    assert_eq!(must_be_base36_url_data("csob4hq5gmgnycenf7ezy"), Ok(()));
}

#[test]
fn rejects_invalid_base36url_strings() {
    let invalid_strings = [
        "-csob4hq5gmgnycenf7ezy",
        "csob4hq5-gmgnycenf7ezy",
        "csob4hq5gmgnycenf7ezy-",
        "csob4hq5gmgnycenf7ezyZ",
    ];
    for input in invalid_strings {
        let err = must_be_base36_url_data(input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidBase36UrlData, "{}", input);
        assert_eq!(err.invalid_string(), input);
    }
}

#[test]
fn accepts_a_user_defined_error_handler() {
    #[derive(Debug, PartialEq)]
    struct OurTestPassed(&'static str);

    let result = must_be_base36_url_data_with("csob4hq5gmgnycenf7ezyZ", |kind, description, input| {
        assert_eq!(kind, ErrorKind::InvalidBase36UrlData);
        assert_eq!(description, "input is not valid base36url");
        assert_eq!(input, "csob4hq5gmgnycenf7ezyZ");
        Err(OurTestPassed("our test passed"))
    });
    assert_eq!(result, Err(OurTestPassed("our test passed")));
}

#[test]
fn handler_may_swallow_the_failure() {
    let mut seen = Vec::new();
    let result: Result<(), ValidationError> = must_be_base62_string_with("not base62!", |kind, _, input| {
        seen.push((kind, input.to_string()));
        Ok(())
    });
    assert_eq!(result, Ok(()));
    assert_eq!(
        seen,
        [(ErrorKind::InvalidBase62String, "not base62!".to_string())]
    );
}

#[test]
fn handler_is_not_called_for_valid_input() {
    let result: Result<(), ()> = must_be_base36_url_data_with("2v6wzt8h82b4efcjdelmiaxuy", |_, _, _| {
        panic!("handler called for valid input")
    });
    assert_eq!(result, Ok(()));
}

#[test]
fn each_radix_reports_its_own_kind() {
    assert_eq!(
        must_be_base32_url_data("1gdbopogd49cgoashi6276o0vA")
            .unwrap_err()
            .kind(),
        ErrorKind::InvalidBase32UrlData
    );
    assert_eq!(
        must_be_base62_string("AAwf93rvy4aWQVw_").unwrap_err().kind(),
        ErrorKind::InvalidBase62String
    );
    assert_eq!(
        must_be_base64_url_data("AQIDBAX+/vz7").unwrap_err().kind(),
        ErrorKind::InvalidBase64UrlData
    );
}
