use nectar::widgets::{Card, CardConfig};
use uidom::Element;

fn header_count(el: &uidom::Element) -> usize {
    el.find_class("card-header").len()
}

fn footer_count(el: &uidom::Element) -> usize {
    el.find_class("card-footer").len()
}

// ============================================================================
// Region visibility - all four title/footer combinations
// ============================================================================

#[test]
fn test_no_title_no_footer() {
    let el = Card::new().build();
    assert_eq!(header_count(&el), 0);
    assert_eq!(footer_count(&el), 0);
    assert_eq!(el.find_class("card-body").len(), 1);
}

#[test]
fn test_title_only() {
    let el = Card::new().title("Card Title").build();
    assert_eq!(header_count(&el), 1);
    assert_eq!(footer_count(&el), 0);

    let titles = el.find_class("card-title");
    assert_eq!(titles.len(), 1);
    assert_eq!(titles[0].texts(), vec!["Card Title"]);
}

#[test]
fn test_footer_only() {
    let el = Card::new().footer("Last updated: 2 hours ago").build();
    assert_eq!(header_count(&el), 0);
    assert_eq!(footer_count(&el), 1);
}

#[test]
fn test_title_and_footer() {
    let el = Card::new().title("Title").footer("Footer").build();
    assert_eq!(header_count(&el), 1);
    assert_eq!(footer_count(&el), 1);
}

// ============================================================================
// Empty strings count as absent
// ============================================================================

#[test]
fn test_empty_title_renders_no_header() {
    let el = Card::new().title("").footer("").build();
    assert_eq!(header_count(&el), 0);
    assert_eq!(footer_count(&el), 0);
}

// ============================================================================
// Shadow
// ============================================================================

#[test]
fn test_shadow_class() {
    assert!(Card::new().shadow(true).build().has_class("has-shadow"));
    assert!(!Card::new().shadow(false).build().has_class("has-shadow"));
    assert!(!Card::new().build().has_class("has-shadow"));
}

#[test]
fn test_card_class_always_present() {
    assert!(Card::new().build().has_class("card"));
}

// ============================================================================
// Body and children
// ============================================================================

#[test]
fn test_children_land_in_body() {
    let el = Card::new()
        .child(Element::text("one"))
        .child(Element::text("two"))
        .build();

    let bodies = el.find_class("card-body");
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0].texts(), vec!["one", "two"]);
}

#[test]
fn test_default_id() {
    assert_eq!(Card::new().build().id, "card");
    assert_eq!(Card::new().id("user-card").build().id, "user-card");
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn test_from_config() {
    let el = Card::from_config(CardConfig {
        title: Some("Configured".into()),
        footer: None,
        shadow: true,
    })
    .build();

    assert_eq!(header_count(&el), 1);
    assert_eq!(footer_count(&el), 0);
    assert!(el.has_class("has-shadow"));
}
