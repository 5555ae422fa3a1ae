use super::*;
use crate::mail::GENERIC_SEND_ERROR;

#[test]
fn parse_error_body_joins_structured_errors() {
    let body = r#"{"errors":[{"message":"Email is required"},{"message":"Message too short"}]}"#;
    let err = parse_error_body(body);
    assert_eq!(err.display_message(), "Email is required. Message too short");
}

#[test]
fn parse_error_body_single_error_string() {
    let err = parse_error_body(r#"{"error":"Form not found"}"#);
    assert_eq!(err.display_message(), "Form not found");
}

#[test]
fn parse_error_body_ignores_errors_without_message() {
    let err = parse_error_body(r#"{"errors":[{"code":"EMPTY"},{"message":"bad email"}]}"#);
    assert_eq!(err.display_message(), "bad email");
}

#[test]
fn parse_error_body_empty_errors_is_generic() {
    let err = parse_error_body(r#"{"errors":[]}"#);
    assert_eq!(err.display_message(), GENERIC_SEND_ERROR);
}

#[test]
fn parse_error_body_unknown_shape_is_generic() {
    let err = parse_error_body(r#"{"status":"bad"}"#);
    assert_eq!(err.display_message(), GENERIC_SEND_ERROR);
}

#[test]
fn parse_error_body_non_json_is_generic() {
    let err = parse_error_body("<html>502</html>");
    assert_eq!(err.display_message(), GENERIC_SEND_ERROR);
}

#[test]
fn transport_error_displays_generic() {
    let err = RelayError::Transport("connection refused".into());
    assert_eq!(err.display_message(), GENERIC_SEND_ERROR);
}
