use super::*;

#[test]
fn endpoint_joins_without_double_slash() {
    assert_eq!(endpoint("http://localhost:5005", STORE_PATH), "http://localhost:5005/store");
    assert_eq!(endpoint("http://localhost:5005/", LOGIN_PATH), "http://localhost:5005/admin/auth/login");
}

#[test]
fn backend_error_prefers_error_field() {
    let err = backend_error(400, r#"{"error":"Invalid input"}"#);
    assert!(matches!(&err, ApiError::Backend { status: 400, message } if message == "Invalid input"));
    assert_eq!(err.to_string(), "Invalid input");
}

#[test]
fn backend_error_falls_back_to_status() {
    let err = backend_error(502, "<html>bad gateway</html>");
    assert!(matches!(err, ApiError::Status(502)));
    assert_eq!(err.to_string(), "HTTP 502");
    assert_eq!(backend_error(403, r#"{"error":""}"#).to_string(), "HTTP 403");
}

#[test]
fn http_backend_keeps_configured_base_url() {
    let config = ClientConfig::default().with_backend_url("http://127.0.0.1:1/");
    let backend = HttpBackend::new(&config).unwrap();
    assert_eq!(backend.base_url(), "http://127.0.0.1:1");
}
