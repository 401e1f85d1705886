use super::*;

fn config() -> AppConfig {
    AppConfig {
        backend_url: "https://demo.backend.example".to_owned(),
        backend_anon_key: "anon".to_owned(),
        port: 3000,
        cookie_secure: true,
    }
}

// =============================================================================
// URL construction
// =============================================================================

#[test]
fn auth_and_rest_urls_join_base() {
    let client = BackendClient::new(&config()).unwrap();
    assert_eq!(client.auth_url("token"), "https://demo.backend.example/auth/v1/token");
    assert_eq!(client.rest_url("branches"), "https://demo.backend.example/rest/v1/branches");
}

#[test]
fn summary_query_filters_by_branch() {
    let query = summary_query("b-7");
    assert_eq!(query[0], ("branch_id", "eq.b-7".to_owned()));
    assert_eq!(query[1], ("select", "*".to_owned()));
}

// =============================================================================
// error_body
// =============================================================================

#[test]
fn error_body_parses_json() {
    let body = error_body(br#"{"message":"JWT expired","code":"PGRST301"}"#);
    assert_eq!(body["message"], "JWT expired");
}

#[test]
fn error_body_keeps_plain_text() {
    assert_eq!(error_body(b"  upstream timeout \n"), Value::String("upstream timeout".to_owned()));
}

#[test]
fn error_body_empty_is_null() {
    assert_eq!(error_body(b""), Value::Null);
    assert_eq!(error_body(b"   "), Value::Null);
}

// =============================================================================
// BackendUser -> User
// =============================================================================

#[test]
fn backend_user_takes_full_name_from_metadata() {
    let raw: BackendUser = serde_json::from_value(serde_json::json!({
        "id": "u1",
        "email": "amina@stockdesk.ug",
        "user_metadata": { "full_name": "Amina N." }
    }))
    .unwrap();
    let user = User::from(raw);
    assert_eq!(user.id, "u1");
    assert_eq!(user.email, "amina@stockdesk.ug");
    assert_eq!(user.name.as_deref(), Some("Amina N."));
}

#[test]
fn backend_user_without_metadata_has_no_name() {
    let raw: BackendUser = serde_json::from_value(serde_json::json!({ "id": "u2" })).unwrap();
    let user = User::from(raw);
    assert_eq!(user.email, "");
    assert_eq!(user.name, None);
}

// =============================================================================
// IntoResponse
// =============================================================================

#[test]
fn status_error_passes_backend_status_through() {
    let err = BackendError::Status { status: 406, body: serde_json::json!({ "code": "PGRST116" }) };
    assert_eq!(err.into_response().status(), StatusCode::NOT_ACCEPTABLE);
}

#[test]
fn status_error_with_null_body_keeps_status() {
    let err = BackendError::Status { status: 401, body: Value::Null };
    assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
}

#[test]
fn status_error_with_invalid_code_maps_to_bad_gateway() {
    let err = BackendError::Status { status: 42, body: Value::Null };
    assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
}

#[test]
fn decode_error_maps_to_bad_gateway() {
    let err = BackendError::Decode("missing field `id`".to_owned());
    assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
}

#[test]
fn only_401_status_is_unauthorized() {
    assert!(BackendError::Status { status: 401, body: Value::Null }.is_unauthorized());
    assert!(!BackendError::Status { status: 403, body: Value::Null }.is_unauthorized());
    assert!(!BackendError::Decode("bad".to_owned()).is_unauthorized());
}
