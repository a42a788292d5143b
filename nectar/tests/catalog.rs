use nectar::catalog::{button_stories, card_stories, find_story, input_stories, CatalogError};
use nectar::widgets::{Card, Input};

#[test]
fn test_button_story_names() {
    let names: Vec<&str> = button_stories().iter().map(|s| s.name).collect();
    assert_eq!(
        names,
        vec!["Primary", "Secondary", "Danger", "Small", "Large", "Disabled"]
    );
}

#[test]
fn test_card_story_names() {
    let names: Vec<&str> = card_stories().iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["Basic", "WithShadow", "WithFooter", "NoTitle"]);
}

#[test]
fn test_input_story_names() {
    let names: Vec<&str> = input_stories().iter().map(|s| s.name).collect();
    assert_eq!(
        names,
        vec![
            "Default",
            "WithHint",
            "WithError",
            "Disabled",
            "NumberInput",
            "Required"
        ]
    );
}

#[test]
fn test_find_story() {
    let stories = button_stories();
    let story = find_story(&stories, "Danger").expect("Danger story exists");
    assert_eq!(story.config.classes(), "danger md");

    let err = find_story(&stories, "Ghost").unwrap_err();
    assert_eq!(err, CatalogError::UnknownStory("Ghost".into()));
}

#[test]
fn test_stories_mount() {
    // Every catalog entry must produce a valid element tree.
    for story in button_stories() {
        let el = story.config.label(story.content).build();
        assert!(!el.texts().is_empty());
    }
    for story in card_stories() {
        let el = Card::from_config(story.config)
            .child(uidom::Element::text(story.content))
            .build();
        assert_eq!(el.find_class("card-body").len(), 1);
    }
    for story in input_stories() {
        let input = Input::from_config(story.config);
        let el = input.build();
        assert_eq!(el.find_class("input-field").len(), 1);
    }
}

#[test]
fn test_with_error_story_renders_error_region() {
    let stories = input_stories();
    let story = find_story(&stories, "WithError").expect("WithError story exists");
    let el = Input::from_config(story.config.clone()).build();
    assert_eq!(el.find_class("error-text").len(), 1);
}

#[test]
fn test_stories_serialize() {
    // The component browser consumes stories as plain data.
    let json = serde_json::to_value(input_stories()).expect("stories serialize");
    let first = &json[0];
    assert_eq!(first["name"], "Default");
    assert_eq!(first["config"]["kind"], "email");
    assert_eq!(first["config"]["placeholder"], "Enter your email");
}
