//! End-to-end check of the reqwest transport against an in-process stub of
//! the backend REST surface.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::routing::{get, post};
use axum::{Json, Router};
use client::forms::{LoginForm, TextBoxForm};
use client::session::MemoryTokenStore;
use client::{ApiError, Backend, ClientConfig, Dashboard, Editor, Gateway, HttpBackend, TokenStore, auth};
use serde_json::{Value, json};

const TOKEN: &str = "tok-1";

#[derive(Clone)]
struct Stub {
    store: Arc<Mutex<Value>>,
}

type Reply = (StatusCode, Json<Value>);

fn authorized(headers: &HeaderMap) -> bool {
    let expected = format!("Bearer {TOKEN}");
    headers.get(header::AUTHORIZATION).is_some_and(|v| v.as_bytes() == expected.as_bytes())
}

fn unauthorized() -> Reply {
    (StatusCode::FORBIDDEN, Json(json!({"error": "Invalid token"})))
}

async fn login(Json(body): Json<Value>) -> Reply {
    if body["password"] == "secret" {
        (StatusCode::OK, Json(json!({"token": TOKEN})))
    } else {
        (StatusCode::BAD_REQUEST, Json(json!({"error": "Invalid password"})))
    }
}

async fn register(Json(body): Json<Value>) -> Reply {
    if body["name"].is_string() { (StatusCode::OK, Json(json!({"token": TOKEN}))) } else { (StatusCode::BAD_REQUEST, Json(json!({}))) }
}

async fn logout(headers: HeaderMap) -> Reply {
    if authorized(&headers) { (StatusCode::OK, Json(json!({}))) } else { unauthorized() }
}

async fn get_store(State(stub): State<Stub>, headers: HeaderMap) -> Reply {
    if !authorized(&headers) {
        return unauthorized();
    }
    let store = stub.store.lock().unwrap_or_else(PoisonError::into_inner).clone();
    (StatusCode::OK, Json(json!({"store": store})))
}

async fn put_store(State(stub): State<Stub>, headers: HeaderMap, Json(body): Json<Value>) -> Reply {
    if !authorized(&headers) {
        return unauthorized();
    }
    *stub.store.lock().unwrap_or_else(PoisonError::into_inner) = body["store"].clone();
    (StatusCode::OK, Json(json!({})))
}

async fn spawn_stub(seed: Value) -> (String, Stub) {
    let stub = Stub { store: Arc::new(Mutex::new(seed)) };
    let app = Router::new()
        .route("/admin/auth/login", post(login))
        .route("/admin/auth/register", post(register))
        .route("/admin/auth/logout", post(logout))
        .route("/store", get(get_store).put(put_store))
        .with_state(stub.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), stub)
}

fn gateway_for(base_url: &str, tokens: Arc<MemoryTokenStore>) -> Gateway {
    let config = ClientConfig::default().with_backend_url(base_url);
    Gateway::new(Arc::new(HttpBackend::new(&config).unwrap()), tokens)
}

#[tokio::test]
async fn login_surfaces_backend_message() {
    let (base_url, _stub) = spawn_stub(json!({"presentations": []})).await;
    let tokens = Arc::new(MemoryTokenStore::default());
    let gateway = gateway_for(&base_url, tokens.clone());

    let form = LoginForm { email: "ada@example.com".to_owned(), password: "wrong".to_owned() };
    let err = auth::login(&gateway, &form).await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid password");
    assert!(!tokens.is_authenticated());
}

#[tokio::test]
async fn bad_token_is_a_backend_error() {
    let (base_url, _stub) = spawn_stub(json!({"presentations": []})).await;
    let config = ClientConfig::default().with_backend_url(&base_url);
    let backend = HttpBackend::new(&config).unwrap();
    let err = backend.fetch_store("nope").await.unwrap_err();
    assert!(matches!(err, ApiError::Backend { status: 403, ref message } if message == "Invalid token"));
}

#[tokio::test]
async fn edit_session_round_trips_through_http() {
    let (base_url, stub) = spawn_stub(json!({"presentations": [], "theme": "dark"})).await;
    let tokens = Arc::new(MemoryTokenStore::default());
    let gateway = gateway_for(&base_url, tokens.clone());

    let form = LoginForm { email: "ada@example.com".to_owned(), password: "secret".to_owned() };
    auth::login(&gateway, &form).await.unwrap();
    assert_eq!(tokens.load().unwrap().as_deref(), Some(TOKEN));

    let mut dashboard = Dashboard::load(gateway.clone()).await.unwrap();
    let new = client::forms::NewPresentationForm { name: "Launch".to_owned(), ..Default::default() };
    let id = dashboard.create(&new, Instant::now()).await.unwrap();

    let mut editor = Editor::open(gateway.clone(), &id, 0).await.unwrap();
    let text = TextBoxForm { text: "Sample Text".to_owned(), width: 80.0, height: 60.0, ..TextBoxForm::default() };
    editor.add_text(&text, Instant::now()).await.unwrap();

    let stored = stub.store.lock().unwrap_or_else(PoisonError::into_inner).clone();
    assert_eq!(stored["theme"], "dark");
    let presentation = &stored["presentations"][0];
    assert_eq!(presentation["name"], "Launch");
    assert_eq!(presentation["revision"], 1);
    let text_box = &presentation["slides"][0]["textBoxes"][0];
    assert_eq!(text_box["text"], "Sample Text");
    assert_eq!(text_box["zIndex"], 1);
    assert_eq!(text_box["size"], json!({"width": 80.0, "height": 60.0}));

    auth::logout(&gateway).await.unwrap();
    assert!(!tokens.is_authenticated());
}
