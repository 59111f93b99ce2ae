use std::sync::Arc;
use std::time::Instant;

use deck::Presentation;
use pretty_assertions::assert_eq;

use super::*;
use crate::error::ValidationError;
use crate::net::mock::MockBackend;
use crate::session::MemoryTokenStore;

fn gateway(backend: &Arc<MockBackend>) -> Gateway {
    Gateway::new(backend.clone(), Arc::new(MemoryTokenStore::with_token("tok")))
}

#[test]
fn card_truncates_and_labels() {
    let mut p = Presentation::new("Distributed Systems Reading Group", "Weekly notes on consensus papers", None);
    p.create_slide();
    let card = Card::for_presentation(&p);
    assert_eq!(card.title, "Distributed Systems R...");
    assert_eq!(card.description.as_deref(), Some("Weekly notes on consensus ..."));
    assert_eq!(card.slide_count, "2 Slides");
    assert_eq!(
        card.aria_label,
        "Open presentation titled Distributed Systems Reading Group with description \
         Weekly notes on consensus papers containing 2 slides"
    );
}

#[test]
fn card_hides_empty_description() {
    let card = Card::for_presentation(&Presentation::new("Short", "", Some("data:image/png;base64,AA==".to_owned())));
    assert_eq!(card.description, None);
    assert_eq!(card.slide_count, "1 Slide");
    assert_eq!(card.thumbnail.as_deref(), Some("data:image/png;base64,AA=="));
}

#[tokio::test]
async fn load_requires_token() {
    let backend = Arc::new(MockBackend::default());
    let gw = Gateway::new(backend.clone(), Arc::new(MemoryTokenStore::default()));
    assert!(matches!(Dashboard::load(gw).await, Err(ApiError::MissingToken)));
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn create_prepends_and_closes_dialog() {
    let existing = Presentation::new("Existing", "", None);
    let backend = Arc::new(MockBackend::with_presentations(vec![existing]));
    let mut dashboard = Dashboard::load(gateway(&backend)).await.unwrap();
    dashboard.open_new();

    let form = NewPresentationForm { name: "Fresh".to_owned(), ..NewPresentationForm::default() };
    let id = dashboard.create(&form, Instant::now()).await.unwrap();

    let names: Vec<&str> = dashboard.presentations().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Fresh", "Existing"]);
    assert_eq!(dashboard.presentations()[0].slides.len(), 1);
    assert!(!dashboard.ui().is_open());
    assert_eq!(dashboard.open(&id), Route::Editor { id: id.clone(), slide: 0 });
    assert_eq!(backend.store().presentations.len(), 2);
}

#[tokio::test]
async fn create_without_name_shows_banner() {
    let backend = Arc::new(MockBackend::default());
    let mut dashboard = Dashboard::load(gateway(&backend)).await.unwrap();
    let now = Instant::now();
    let err = dashboard.create(&NewPresentationForm::default(), now).await.unwrap_err();
    assert!(matches!(err, EditorError::Validation(ValidationError::MissingPresentationName)));
    assert_eq!(dashboard.banner_message(now), Some("Presentation name is required."));
    assert_eq!(backend.put_count(), 0);
}
