//! Tests for command output and exit status.

use crate::cli::commands::{ensure_success, format_linguas, format_result};
use oparl_resolve_core::ResolveUrlResult;

#[test]
fn resolve_fails_when_not_successful() {
    let missing = ResolveUrlResult::from_response(404, "not found".to_string());
    let err = ensure_success("https://example.test/missing", &missing).unwrap_err();
    assert!(err.to_string().contains("status 404"));

    let unreachable = ResolveUrlResult::transport_failure();
    let err = ensure_success("http://nonexistent.invalid/", &unreachable).unwrap_err();
    assert!(err.to_string().contains("status -1"));
}

#[test]
fn resolve_succeeds_on_2xx() {
    let ok = ResolveUrlResult::from_response(200, "hello".to_string());
    assert!(ensure_success("https://example.test/ok", &ok).is_ok());
}

#[test]
fn format_result_with_body() {
    let ok = ResolveUrlResult::from_response(200, "hello".to_string());
    assert_eq!(format_result(&ok), "status: 200\nsuccess: true\n\nhello\n");
}

#[test]
fn format_result_without_body() {
    let r = ResolveUrlResult::transport_failure();
    assert_eq!(format_result(&r), "status: -1\nsuccess: false\n");
}

#[test]
fn linguas_printed_as_list() {
    let langs = vec!["de".to_string(), "en".to_string()];
    assert_eq!(format_linguas(&langs), r#"["de", "en"]"#);
}

#[test]
fn empty_linguas_printed_as_empty_list() {
    assert_eq!(format_linguas(&[]), "[]");
}
