use deck::Background;

use super::*;

#[test]
fn blank_name_is_rejected() {
    let form = NewPresentationForm { name: "  ".to_owned(), ..NewPresentationForm::default() };
    let err = form.submit().unwrap_err();
    assert_eq!(err.to_string(), "Presentation name is required.");
}

#[test]
fn new_presentation_has_one_slide() {
    let form = NewPresentationForm {
        name: "Quarterly".to_owned(),
        description: "numbers".to_owned(),
        thumbnail: Some(String::new()),
    };
    let p = form.submit().unwrap();
    assert_eq!(p.name, "Quarterly");
    assert_eq!(p.description, "numbers");
    assert_eq!(p.thumbnail, None);
    assert_eq!(p.slides.len(), 1);
    assert_eq!(p.default_background, Background::default());
}

#[test]
fn title_is_trimmed_and_required() {
    assert_eq!(TitleForm { title: "  Renamed ".to_owned() }.submit(), Ok("Renamed".to_owned()));
    assert_eq!(TitleForm { title: String::new() }.submit().unwrap_err().to_string(), "Title cannot be empty.");
}

#[test]
fn thumbnail_prefers_upload_then_url() {
    let upload = ThumbnailForm { url: "https://x/t.png".to_owned(), file_data: Some("data:image/png;base64,AA".to_owned()) };
    assert_eq!(upload.submit().as_deref(), Some("data:image/png;base64,AA"));
    let url = ThumbnailForm { url: " https://x/t.png ".to_owned(), file_data: None };
    assert_eq!(url.submit().as_deref(), Some("https://x/t.png"));
    assert_eq!(ThumbnailForm::default().submit(), None);
}

#[test]
fn background_form_round_trips() {
    let bg = Background::gradient("#101010", "#202020", "to bottom");
    let form = BackgroundForm::from_background(&bg, true);
    assert!(form.set_default);
    assert_eq!(form.submit(), bg);
}

#[test]
fn background_form_keeps_inactive_payloads() {
    let mut form = BackgroundForm::default();
    form.color = "#ff0000".to_owned();
    form.kind = BackgroundKind::Image;
    form.image = "https://x/bg.jpg".to_owned();
    let bg = form.submit();
    assert_eq!(bg.kind, BackgroundKind::Image);
    assert_eq!(bg.color, "#ff0000");
}
