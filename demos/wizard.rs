//! Checkout Wizard
//!
//! This example walks a step machine through a checkout flow.
//!
//! Key concepts:
//! - Declaring steps with `step_enum!`
//! - Clamping at the ends versus looping
//! - Observing moves through a subscription
//!
//! Run with: RUST_LOG=switchboard=debug cargo run --example wizard

use switchboard::{step_enum, steps, StepMachine, StepOptions};
use tracing_subscriber::EnvFilter;

step_enum! {
    enum Checkout {
        Cart,
        Shipping,
        Payment,
        Review,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Checkout Wizard ===\n");

    let wizard = steps(Checkout::all(), StepOptions::default())?;
    let subscription = wizard.subscribe(|step: &Checkout| println!("  now at: {}", step.name()));

    println!("\nForward until the end (extra moves clamp):");
    for _ in 0..5 {
        wizard.next();
    }

    println!("\nOne step back, then reset:");
    wizard.prev();
    wizard.reset();

    subscription.unsubscribe();

    println!("\nA looping carousel built with the builder:");
    let carousel = StepMachine::builder(vec!["slide-1", "slide-2", "slide-3"])
        .init(2)
        .looping(true)
        .build()?;
    println!("  before: {}", carousel.current());
    carousel.next();
    println!("  after next: {}", carousel.current());
    carousel.prev();
    carousel.prev();
    println!("  after two prev: {}", carousel.current());

    println!("\n=== Example Complete ===");
    Ok(())
}
