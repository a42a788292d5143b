use nectar::widgets::{Button, ButtonKind, ButtonSize, ButtonVariant};

// ============================================================================
// Class string
// ============================================================================

#[test]
fn test_classes_every_variant_size_pair() {
    let variants = [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Danger,
    ];
    let sizes = [ButtonSize::Sm, ButtonSize::Md, ButtonSize::Lg];

    for variant in variants {
        for size in sizes {
            let classes = Button::new().variant(variant).size(size).classes();
            let expected = format!("{} {}", variant.as_class(), size.as_class());
            assert_eq!(classes, expected);
            // Exactly two tokens, variant first, one separating space.
            let parts: Vec<&str> = classes.split(' ').collect();
            assert_eq!(parts, vec![variant.as_class(), size.as_class()]);
        }
    }
}

#[test]
fn test_default_classes() {
    assert_eq!(Button::new().classes(), "primary md");
}

// ============================================================================
// Built element
// ============================================================================

#[test]
fn test_build_carries_classes_and_label() {
    let el = Button::new()
        .label("Delete")
        .variant(ButtonVariant::Danger)
        .size(ButtonSize::Lg)
        .build();

    assert!(el.has_class("danger"));
    assert!(el.has_class("lg"));
    assert_eq!(el.class_string(), "danger lg");
    assert_eq!(el.texts(), vec!["Delete"]);
}

#[test]
fn test_build_default_id_and_kind() {
    let el = Button::new().label("Go").build();
    assert_eq!(el.id, "button");
    assert_eq!(el.get_data("type").map(String::as_str), Some("button"));
}

#[test]
fn test_build_kind_attribute() {
    let el = Button::new().kind(ButtonKind::Submit).build();
    assert_eq!(el.get_data("type").map(String::as_str), Some("submit"));

    let el = Button::new().kind(ButtonKind::Reset).build();
    assert_eq!(el.get_data("type").map(String::as_str), Some("reset"));
}

#[test]
fn test_enabled_button_is_interactive() {
    let el = Button::new().label("Go").build();
    assert!(el.focusable);
    assert!(el.clickable);
    assert!(!el.disabled);
}

#[test]
fn test_disabled_button_gates_interactivity() {
    let el = Button::new().label("Loading...").disabled().build();
    assert!(!el.focusable);
    assert!(!el.clickable);
    assert!(el.disabled);
    // Disabling leaves the class string untouched.
    assert_eq!(el.class_string(), "primary md");
}

// ============================================================================
// Enum parsing
// ============================================================================

#[test]
fn test_variant_round_trip() {
    for variant in [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Danger,
    ] {
        assert_eq!(variant.as_class().parse::<ButtonVariant>(), Ok(variant));
    }
    assert!("ghost".parse::<ButtonVariant>().is_err());
}

#[test]
fn test_size_and_kind_parse() {
    assert_eq!("lg".parse::<ButtonSize>(), Ok(ButtonSize::Lg));
    assert_eq!("submit".parse::<ButtonKind>(), Ok(ButtonKind::Submit));
    assert!("xl".parse::<ButtonSize>().is_err());
    assert!("link".parse::<ButtonKind>().is_err());
}
