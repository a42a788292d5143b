//! Showcase Example
//!
//! The library's demo shell: one card wiring the three components
//! together, with an input bound through the form adapter. Edits are
//! simulated programmatically (the hosting runtime that would normally
//! feed them is not part of this library), then the pending widget
//! events are drained and printed.

use std::fs::File;
use std::sync::{Arc, Mutex};

use log::LevelFilter;
use nectar::prelude::*;
use simplelog::{Config, WriteLogger};

fn main() {
    if let Ok(file) = File::create("showcase.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), file);
    }

    let cx = UiContext::new();

    // Input wired through the form adapter, like a form-state system would.
    let name = Input::with_placeholder("Enter your name");
    name.set_label("Name");
    name.set_required(true);

    let observed: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&observed);
    name.register_on_change(Box::new(move |value| {
        if let Ok(mut seen) = sink.lock() {
            seen.push(value.to_string());
        }
    }));
    name.register_on_touched(Box::new(|| println!("input touched")));

    // Simulate a user typing and tabbing away.
    name.commit_edit("A", &cx);
    name.commit_edit("Ad", &cx);
    name.commit_edit("Ada", &cx);
    name.blur();

    // The demo page: a card holding the input and two buttons.
    let page = Card::new()
        .id("showcase")
        .title("Sign up")
        .footer("All fields are required")
        .shadow(true)
        .child(name.build())
        .child(
            Button::new()
                .label("Submit")
                .kind(ButtonKind::Submit)
                .id("submit")
                .build(),
        )
        .child(
            Button::new()
                .label("Cancel")
                .variant(ButtonVariant::Secondary)
                .id("cancel")
                .build(),
        )
        .build();

    println!("value: {:?}", name.value());
    println!("change callback saw: {:?}", observed.lock().ok());
    println!("last change payload: {:?}", cx.input_text());
    for event in cx.drain_events() {
        println!("event: {:?} from {}", event.kind, event.widget_id);
    }

    println!("header: {:?}", page.find_class("card-title").first().map(|e| e.texts()));
    println!("footer: {:?}", page.find_class("card-footer").first().map(|e| e.texts()));

    // Catalog entries the component browser would list.
    for story in button_stories() {
        println!("button story {:<10} -> classes {:?}", story.name, story.config.classes());
    }
}
