//! # Focus Registry
//!
//! Exclusive-focus coordination for editable UI regions.
//!
//! Each editable region registers a force-close callback and receives a
//! [`FocusHandle`]. When a region claims focus, the region currently holding
//! it is told to close first, so at most one region is editing at a time.
//!
//! ## Quick Start
//!
//! ```rust
//! use focus_registry::FocusRegistry;
//!
//! let registry = FocusRegistry::new();
//!
//! let ingredients = registry.register(|| println!("closing ingredients editor"));
//! let steps = registry.register(|| println!("closing steps editor"));
//!
//! ingredients.claim_focus();
//! steps.claim_focus(); // prints "closing ingredients editor"
//!
//! steps.relinquish_focus();
//! assert!(registry.focused().is_none());
//!
//! ingredients.deregister();
//! steps.deregister();
//! ```
//!
//! ## Features
//!
//! - **Mutual exclusion**: claiming focus force-closes the previous holder exactly once
//! - **Explicit context**: a [`FocusRegistry`] is a cheap, cloneable handle owned by the app root
//! - **Thread-safe**: claim runs under one re-entrant lock, so callbacks may call back in
//! - **Tracing support**: optional callback receiving every [`FocusEvent`], plus `tracing` logs
//!
//! ## Main Items
//!
//! - [`FocusRegistry::register`] - Add a subscriber and get its handle
//! - [`FocusHandle::claim_focus`] / [`FocusHandle::relinquish_focus`] / [`FocusHandle::deregister`]
//! - [`FocusRegistry::builder`] - Configure id length, seed and tracing
//! - [`define_focus_registry!`] - Declare a named process-wide registry

#[macro_use]
mod macros;

mod builder;
mod focus_error;
mod focus_event;
mod handle;
mod registry;
mod subscriber_id;

pub use builder::FocusRegistryBuilder;
pub use focus_error::FocusError;
pub use focus_event::FocusEvent;
pub use handle::FocusHandle;
pub use registry::{FocusRegistry, TraceCallback};
pub use subscriber_id::{SubscriberId, DEFAULT_ID_LENGTH};
