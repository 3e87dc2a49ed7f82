//! Editable recipe cards competing for one edit slot.
//!
//! Demonstrates:
//! - Sharing one `FocusRegistry` from the application root
//! - Force-closing the open editor when another card starts editing
//! - Blur (relinquish) and unmount (deregister) handling
//! - Watching focus changes through the trace callback and `tracing` logs
//!
//! Run with: `RUST_LOG=focus_registry=debug cargo run --example editable_cards`

use focus_registry::{FocusHandle, FocusRegistry};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// A recipe card whose title can be edited in place.
struct RecipeCard {
    title: &'static str,
    editing: Arc<AtomicBool>,
    focus: FocusHandle,
}

impl RecipeCard {
    fn mount(registry: &FocusRegistry, title: &'static str) -> Self {
        let editing = Arc::new(AtomicBool::new(false));
        let flag = editing.clone();
        let focus = registry.register(move || {
            flag.store(false, Ordering::SeqCst);
            println!("   [{title}] editor force-closed");
        });
        Self {
            title,
            editing,
            focus,
        }
    }

    fn start_editing(&self) {
        self.focus.claim_focus();
        self.editing.store(true, Ordering::SeqCst);
    }

    fn blur(&self) {
        self.editing.store(false, Ordering::SeqCst);
        self.focus.relinquish_focus();
    }

    fn unmount(self) {
        self.focus.deregister();
    }

    fn is_editing(&self) -> bool {
        self.editing.load(Ordering::SeqCst)
    }
}

fn print_cards(cards: &[&RecipeCard]) {
    for card in cards {
        let state = if card.is_editing() { "editing" } else { "idle" };
        println!("   {:<16} {}", card.title, state);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== focus-registry: Editable Cards ===\n");

    let registry = FocusRegistry::new();
    registry.set_trace_callback(|event| println!("   trace: {event}"));

    // -------------------------------------------------------------------------
    // 1. Mount three cards
    // -------------------------------------------------------------------------
    println!("1. Mounting cards...");

    let pancakes = RecipeCard::mount(&registry, "Pancakes");
    let ramen = RecipeCard::mount(&registry, "Ramen");
    let salad = RecipeCard::mount(&registry, "Greek salad");

    // -------------------------------------------------------------------------
    // 2. Edit one card, then another
    // -------------------------------------------------------------------------
    println!("\n2. Editing Pancakes, then Ramen...");

    pancakes.start_editing();
    ramen.start_editing();
    print_cards(&[&pancakes, &ramen, &salad]);

    // -------------------------------------------------------------------------
    // 3. Blur the open editor
    // -------------------------------------------------------------------------
    println!("\n3. Blurring Ramen...");

    ramen.blur();
    println!("   focused: {:?}", registry.focused());

    // -------------------------------------------------------------------------
    // 4. Unmount while editing
    // -------------------------------------------------------------------------
    println!("\n4. Editing Greek salad, then unmounting it mid-edit...");

    salad.start_editing();
    salad.unmount();
    println!("   focused (stale): {:?}", registry.focused());

    pancakes.start_editing();
    print_cards(&[&pancakes, &ramen]);

    // -------------------------------------------------------------------------
    // Summary
    // -------------------------------------------------------------------------
    pancakes.unmount();
    ramen.unmount();

    println!("\n=== Example Complete ===");
    println!("Subscribers left: {}", registry.len());
}
