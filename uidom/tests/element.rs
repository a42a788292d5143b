use uidom::{Content, Direction, Element};

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_generated_ids_are_unique() {
    let a = Element::box_();
    let b = Element::box_();
    assert_ne!(a.id, b.id);
    assert!(a.id.starts_with("box-"));
}

#[test]
fn test_explicit_id_overrides_generated() {
    let el = Element::text("hello").id("greeting");
    assert_eq!(el.id, "greeting");
}

#[test]
fn test_row_and_col_direction() {
    assert_eq!(Element::row().direction, Direction::Row);
    assert_eq!(Element::col().direction, Direction::Column);
    assert_eq!(Element::box_().direction, Direction::Column);
}

#[test]
fn test_text_input_content() {
    let el = Element::text_input("abc").placeholder("type here").masked('*');
    assert!(el.focusable);
    match el.content {
        Content::TextInput {
            value,
            placeholder,
            mask,
        } => {
            assert_eq!(value, "abc");
            assert_eq!(placeholder.as_deref(), Some("type here"));
            assert_eq!(mask, Some('*'));
        }
        other => panic!("expected TextInput content, got {other:?}"),
    }
}

#[test]
fn test_placeholder_ignored_on_non_input() {
    let el = Element::text("static").placeholder("nope");
    assert_eq!(el.content, Content::Text("static".into()));
}

// ============================================================================
// Classes
// ============================================================================

#[test]
fn test_class_string_preserves_insertion_order() {
    let el = Element::box_().class("card").class("has-shadow");
    assert_eq!(el.class_string(), "card has-shadow");
    assert!(el.has_class("card"));
    assert!(el.has_class("has-shadow"));
    assert!(!el.has_class("shadow"));
}

#[test]
fn test_classes_extends() {
    let el = Element::box_().class("a").classes(["b", "c"]);
    assert_eq!(el.class_string(), "a b c");
}

// ============================================================================
// Children
// ============================================================================

#[test]
fn test_child_appends() {
    let el = Element::col()
        .child(Element::text("one"))
        .child(Element::text("two"));
    assert_eq!(el.content.children().len(), 2);
}

#[test]
fn test_child_replaces_text_content() {
    let el = Element::text("old").child(Element::text("new"));
    assert_eq!(el.content.children().len(), 1);
    assert_eq!(el.texts(), vec!["new"]);
}

// ============================================================================
// Tree queries
// ============================================================================

#[test]
fn test_find_by_id() {
    let root = Element::col().id("root").child(
        Element::row()
            .id("header")
            .child(Element::text("Title").id("title")),
    );

    assert_eq!(root.find("title").map(|e| &e.id[..]), Some("title"));
    assert_eq!(root.find("root").map(|e| &e.id[..]), Some("root"));
    assert!(root.find("missing").is_none());
}

#[test]
fn test_find_class_depth_first() {
    let root = Element::col()
        .class("region")
        .child(Element::text("a").class("region"))
        .child(Element::col().child(Element::text("b").class("region")));

    let found = root.find_class("region");
    assert_eq!(found.len(), 3);
}

#[test]
fn test_texts_collects_depth_first() {
    let root = Element::col()
        .child(Element::text("first"))
        .child(Element::col().child(Element::text("second")))
        .child(Element::text("third"));

    assert_eq!(root.texts(), vec!["first", "second", "third"]);
}

#[test]
fn test_data_attributes() {
    let el = Element::box_().data("type", "submit");
    assert_eq!(el.get_data("type").map(String::as_str), Some("submit"));
    assert!(el.get_data("missing").is_none());
}
