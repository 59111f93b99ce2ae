use pretty_assertions::assert_eq;

use super::*;
use crate::model::{CodeBlock, Image, TextBox, Video};

fn text(s: &str) -> TextBox {
    Element::new(
        TextBody { text: s.to_owned(), font_size: 1.0, color: "black".to_owned(), font_family: "Arial".to_owned() },
        Size::new(50.0, 50.0),
    )
}

fn image(src: &str) -> Image {
    Element::new(ImageBody { src: src.to_owned(), description: String::new() }, Size::new(30.0, 30.0))
}

fn video(id: &str) -> Video {
    Element::new(
        VideoBody { url: format!("https://youtu.be/{id}"), video_id: id.to_owned(), autoplay: false },
        Size::new(40.0, 40.0),
    )
}

fn code(src: &str) -> CodeBlock {
    Element::new(
        CodeBody { content: src.to_owned(), language: "plaintext".to_owned(), font_size: 1.0 },
        Size::new(60.0, 20.0),
    )
}

// =============================================================
// z-index assignment
// =============================================================

#[test]
fn first_element_gets_z_one() {
    let mut slide = Slide::new();
    assert_eq!(slide.next_z_index(), 1);
    assert_eq!(slide.add(text("a")).z_index, 1);
}

#[test]
fn z_index_spans_all_kinds() {
    let mut slide = Slide::new();
    let a = slide.add(text("a")).z_index;
    let b = slide.add(image("x.png")).z_index;
    let c = slide.add(video("dQw4w9WgXcQ")).z_index;
    let d = slide.add(code("int main() {}")).z_index;
    assert_eq!((a, b, c, d), (1, 2, 3, 4));
    assert_eq!(slide.element_count(), 4);
}

#[test]
fn z_index_follows_highest_existing() {
    let mut slide = Slide::new();
    let mut high = image("x.png");
    high.z_index = 41;
    slide.images.push(high);
    assert_eq!(slide.add(text("top")).z_index, 42);
}

#[test]
fn negative_z_indices_floor_at_zero() {
    let mut slide = Slide::new();
    let mut low = text("low");
    low.z_index = -5;
    slide.text_boxes.push(low);
    assert_eq!(slide.next_z_index(), 1);
}

#[test]
fn add_fills_empty_id() {
    let mut slide = Slide::new();
    let mut element = text("a");
    element.id = String::new();
    assert!(!slide.add(element).id.is_empty());
}

// =============================================================
// Edits
// =============================================================

#[test]
fn replace_body_keeps_geometry_and_z() {
    let mut slide = Slide::new();
    slide.add(text("one"));
    let mut target = text("two");
    target.position = Position::new(10.0, 20.0);
    let id = slide.add(target).id.clone();

    let body = TextBody { text: "edited".to_owned(), font_size: 2.0, color: "red".to_owned(), font_family: "Verdana".to_owned() };
    let edited = slide.replace_body(&id, body).unwrap();
    assert_eq!(edited.body.text, "edited");
    assert_eq!(edited.z_index, 2);
    assert_eq!(edited.position, Position::new(10.0, 20.0));
    assert_eq!(edited.size, Size::new(50.0, 50.0));
}

#[test]
fn replace_body_unknown_id_errors() {
    let mut slide = Slide::new();
    let err = slide.replace_body("nope", ImageBody { src: "a".to_owned(), description: String::new() }).unwrap_err();
    assert_eq!(err, DeckError::ElementNotFound { kind: ElementKind::Image, id: "nope".to_owned() });
    assert_eq!(err.to_string(), "image not found: nope");
}

#[test]
fn patch_merges_only_present_fields() {
    let mut slide = Slide::new();
    let id = slide.add(code("x")).id.clone();
    slide
        .patch(ElementKind::Code, &id, ElementPatch { position: Some(Position::new(5.0, 6.0)), size: None })
        .unwrap();
    let block = slide.get::<CodeBody>(&id).unwrap();
    assert_eq!(block.position, Position::new(5.0, 6.0));
    assert_eq!(block.size, Size::new(60.0, 20.0));
    assert_eq!(block.z_index, 1);
}

#[test]
fn patch_from_placement_sets_both() {
    let mut slide = Slide::new();
    let id = slide.add(video("dQw4w9WgXcQ")).id.clone();
    let placement = Placement::new(Position::new(1.0, 2.0), Size::new(3.0, 4.0));
    slide.patch(ElementKind::Video, &id, placement.into()).unwrap();
    assert_eq!(slide.placement(ElementKind::Video, &id), Some(placement));
}

#[test]
fn patch_wrong_kind_errors() {
    let mut slide = Slide::new();
    let id = slide.add(text("a")).id.clone();
    let err = slide.patch(ElementKind::Image, &id, ElementPatch::default()).unwrap_err();
    assert!(matches!(err, DeckError::ElementNotFound { kind: ElementKind::Image, .. }));
}

#[test]
fn remove_deletes_only_target() {
    let mut slide = Slide::new();
    let keep = slide.add(text("keep")).id.clone();
    let gone = slide.add(text("gone")).id.clone();
    slide.remove(ElementKind::Text, &gone).unwrap();
    assert_eq!(slide.element_ids(ElementKind::Text), vec![keep]);
    assert!(slide.remove(ElementKind::Text, &gone).is_err());
}

#[test]
fn removal_does_not_renumber() {
    let mut slide = Slide::new();
    let first = slide.add(text("a")).id.clone();
    slide.add(image("b"));
    slide.remove(ElementKind::Text, &first).unwrap();
    assert_eq!(slide.z_indices().collect::<Vec<_>>(), vec![2]);
    assert_eq!(slide.next_z_index(), 3);
}
