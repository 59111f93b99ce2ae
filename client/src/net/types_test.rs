use pretty_assertions::assert_eq;
use serde_json::json;

use super::*;

#[test]
fn empty_store_reads_as_default() {
    let envelope: StoreEnvelope = serde_json::from_value(json!({ "store": {} })).unwrap();
    assert_eq!(envelope, StoreEnvelope::default());
    let missing: StoreEnvelope = serde_json::from_value(json!({})).unwrap();
    assert!(missing.store.presentations.is_empty());
}

#[test]
fn store_reads_presentations_and_thumbnail() {
    let envelope: StoreEnvelope = serde_json::from_value(json!({
        "store": {
            "presentations": [{ "id": "p1", "name": "Deck", "slides": [{ "id": "s1" }] }],
            "thumbnail": "data:image/png;base64,AAAA"
        }
    }))
    .unwrap();
    assert_eq!(envelope.store.presentations.len(), 1);
    assert_eq!(envelope.store.presentation("p1").map(|p| p.name.as_str()), Some("Deck"));
    assert_eq!(envelope.store.thumbnail.as_deref(), Some("data:image/png;base64,AAAA"));
}

#[test]
fn unknown_store_keys_survive_round_trip() {
    let raw = json!({ "store": { "presentations": [], "theme": { "dark": true } } });
    let envelope: StoreEnvelope = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(envelope.store.extra.get("theme"), Some(&json!({ "dark": true })));
    assert_eq!(serde_json::to_value(&envelope).unwrap(), raw);
}

#[test]
fn put_body_omits_absent_thumbnail() {
    let envelope = StoreEnvelope::default();
    assert_eq!(serde_json::to_value(&envelope).unwrap(), json!({ "store": { "presentations": [] } }));
}

#[test]
fn auth_payloads_match_backend_shape() {
    let register = RegisterRequest {
        email: "a@b.c".to_owned(),
        password: "pw".to_owned(),
        name: "Ada".to_owned(),
    };
    assert_eq!(serde_json::to_value(&register).unwrap(), json!({ "email": "a@b.c", "password": "pw", "name": "Ada" }));
    let auth: AuthResponse = serde_json::from_value(json!({ "token": "t-1" })).unwrap();
    assert_eq!(auth.token, "t-1");
    let err: ErrorBody = serde_json::from_value(json!({ "error": "Invalid password" })).unwrap();
    assert_eq!(err.error, "Invalid password");
}
