//! Settings Panel
//!
//! This example models a settings screen with a toggle and a toggle group.
//!
//! Key concepts:
//! - Single flags with `toggle`
//! - Keyed flags with `toggle_group`
//! - Snapshots stay untouched by later changes
//!
//! Run with: RUST_LOG=switchboard=debug cargo run --example settings_panel

use std::cell::RefCell;
use std::rc::Rc;
use switchboard::{toggle, toggle_group, Toggles};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), serde_json::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Settings Panel ===\n");

    let dark_mode = toggle(false);
    let _ = dark_mode.subscribe(|on: &bool| println!("dark mode: {on}"));
    dark_mode.toggle();
    dark_mode.off();

    println!();

    let notifications = toggle_group(["email", "push", "sms"]);
    let history: Rc<RefCell<Vec<Toggles<&'static str>>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&history);
    let _ = notifications.subscribe(move |toggles: &Toggles<&'static str>| {
        sink.borrow_mut().push(toggles.clone());
    });

    notifications.on("email");
    notifications.toggle("push");
    notifications.off("email");

    for (i, snapshot) in history.borrow().iter().enumerate() {
        println!("snapshot {i}: {}", serde_json::to_string(snapshot)?);
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
