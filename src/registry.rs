//! The focus registry: a callback table plus the id of the one focused subscriber.
//!
//! Editable UI regions register a force-close callback and get back a
//! [`FocusHandle`]. Claiming focus through a handle force-closes whichever
//! other region held it, so at most one region is editing at a time.
//!
//! # Examples
//!
//! ```
//! use focus_registry::FocusRegistry;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! let registry = FocusRegistry::new();
//! let closed = Arc::new(AtomicUsize::new(0));
//!
//! let counter = closed.clone();
//! let title = registry.register(move || {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//! let steps = registry.register(|| {});
//!
//! title.claim_focus();
//! steps.claim_focus(); // force-closes `title`
//!
//! assert_eq!(closed.load(Ordering::SeqCst), 1);
//! assert_eq!(registry.focused(), Some(steps.id().clone()));
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::{Mutex, ReentrantMutex};

use crate::subscriber_id::{IdGenerator, DEFAULT_ID_LENGTH};
use crate::{FocusEvent, FocusHandle, FocusRegistryBuilder, SubscriberId};

/// Type alias for the user-supplied tracing callback.
///
/// The callback receives every [`FocusEvent`] the registry emits. It must be
/// thread-safe because a registry can be shared between threads.
pub type TraceCallback = dyn Fn(&FocusEvent) + Send + Sync + 'static;

/// Stored form of a subscriber's force-close callback.
pub(crate) type ForceClose = Arc<dyn Fn() + Send + Sync + 'static>;

struct State {
    callbacks: HashMap<SubscriberId, ForceClose>,
    focused: Option<SubscriberId>,
    ids: IdGenerator,
}

struct Inner {
    // Re-entrant so force-close and trace callbacks may call back into the
    // registry from the thread that holds the lock.
    state: ReentrantMutex<RefCell<State>>,
    trace: Mutex<Option<Arc<TraceCallback>>>,
}

/// Exclusive-focus coordinator shared by a set of editable regions.
///
/// Cloning is cheap and every clone refers to the same table, so the
/// application root can create one registry and hand clones to its components.
#[derive(Clone)]
pub struct FocusRegistry {
    inner: Arc<Inner>,
}

impl FocusRegistry {
    /// Create an empty registry with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(DEFAULT_ID_LENGTH, None, None)
    }

    /// Start configuring a registry.
    #[must_use]
    pub fn builder() -> FocusRegistryBuilder {
        FocusRegistryBuilder::default()
    }

    pub(crate) fn with_parts(
        id_length: usize,
        seed: Option<u64>,
        trace: Option<Arc<TraceCallback>>,
    ) -> Self {
        let state = State {
            callbacks: HashMap::new(),
            focused: None,
            ids: IdGenerator::new(id_length, seed),
        };
        Self {
            inner: Arc::new(Inner {
                state: ReentrantMutex::new(RefCell::new(state)),
                trace: Mutex::new(trace),
            }),
        }
    }

    // -------------------------------------------------------------------------------------------------
    // Tracing
    // -------------------------------------------------------------------------------------------------

    /// Set a tracing callback for registry mutations.
    ///
    /// Replaces any previously installed callback. The callback runs after the
    /// trace lock is released, so it may call back into this registry. Events
    /// from one thread arrive in order; events from different threads may
    /// interleave.
    pub fn set_trace_callback(&self, callback: impl Fn(&FocusEvent) + Send + Sync + 'static) {
        *self.inner.trace.lock() = Some(Arc::new(callback));
    }

    /// Clear the tracing callback.
    pub fn clear_trace_callback(&self) {
        *self.inner.trace.lock() = None;
    }

    fn emit_event(&self, event: FocusEvent) {
        tracing::debug!(event = %event, "focus registry");
        let callback = self.inner.trace.lock().clone();
        if let Some(callback) = callback {
            callback(&event);
        }
    }

    // -------------------------------------------------------------------------------------------------
    // Registry
    // -------------------------------------------------------------------------------------------------

    /// Register a force-close callback and return the subscriber's handle.
    ///
    /// The callback runs when another subscriber claims focus while this one
    /// holds it. The generated id has never been issued by this registry
    /// before, so handles of deregistered subscribers cannot touch the newcomer.
    pub fn register(&self, force_close: impl Fn() + Send + Sync + 'static) -> FocusHandle {
        let guard = self.inner.state.lock();
        let id = {
            let mut state = guard.borrow_mut();
            let id = state.ids.next_unused();
            state.callbacks.insert(id.clone(), Arc::new(force_close));
            id
        };
        drop(guard);

        self.emit_event(FocusEvent::Register { id: id.clone() });
        FocusHandle::new(id, self.clone())
    }

    pub(crate) fn claim(&self, id: &SubscriberId) {
        // Held across the callback so the displace-then-take sequence is atomic
        // with respect to other threads.
        let guard = self.inner.state.lock();

        let displaced = {
            let state = guard.borrow();
            match &state.focused {
                Some(prev) if prev != id => Some((prev.clone(), state.callbacks.get(prev).cloned())),
                _ => None,
            }
        };

        let displaced_id = match displaced {
            Some((prev, Some(force_close))) => {
                self.emit_event(FocusEvent::ForceClose { id: prev.clone() });
                force_close();
                Some(prev)
            }
            Some((prev, None)) => {
                tracing::trace!(subscriber = %prev, "focused subscriber already deregistered");
                Some(prev)
            }
            None => None,
        };

        guard.borrow_mut().focused = Some(id.clone());
        drop(guard);

        self.emit_event(FocusEvent::Claim {
            id: id.clone(),
            displaced: displaced_id,
        });
    }

    pub(crate) fn relinquish(&self, id: &SubscriberId) {
        let guard = self.inner.state.lock();
        let released = {
            let mut state = guard.borrow_mut();
            if state.focused.as_ref() == Some(id) {
                state.focused = None;
                true
            } else {
                false
            }
        };
        drop(guard);

        self.emit_event(FocusEvent::Relinquish {
            id: id.clone(),
            released,
        });
    }

    pub(crate) fn deregister(&self, id: &SubscriberId) {
        let guard = self.inner.state.lock();
        // Focus is left alone even when `id` holds it.
        let removed = guard.borrow_mut().callbacks.remove(id).is_some();
        drop(guard);

        self.emit_event(FocusEvent::Deregister {
            id: id.clone(),
            removed,
        });
    }

    /// The subscriber currently holding focus, if any.
    ///
    /// May name a subscriber that has since deregistered.
    #[must_use]
    pub fn focused(&self) -> Option<SubscriberId> {
        self.inner.state.lock().borrow().focused.clone()
    }

    /// Whether `id` currently holds focus.
    #[must_use]
    pub fn is_focused(&self, id: &SubscriberId) -> bool {
        self.inner.state.lock().borrow().focused.as_ref() == Some(id)
    }

    /// Whether `id` is registered.
    #[must_use]
    pub fn contains(&self, id: &SubscriberId) -> bool {
        self.inner.state.lock().borrow().callbacks.contains_key(id)
    }

    /// Number of registered subscribers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.state.lock().borrow().callbacks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every subscriber and the current focus without invoking callbacks.
    ///
    /// Intended for tests that share a registry. Outstanding handles keep
    /// working but act on ids the registry no longer knows; those ids are
    /// never issued again.
    #[doc(hidden)]
    pub fn clear(&self) {
        let guard = self.inner.state.lock();
        {
            let mut state = guard.borrow_mut();
            state.callbacks.clear();
            state.focused = None;
        }
        drop(guard);

        self.emit_event(FocusEvent::Clear {});
    }
}

impl Default for FocusRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FocusRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.inner.state.lock();
        let state = guard.borrow();
        f.debug_struct("FocusRegistry")
            .field("subscribers", &state.callbacks.len())
            .field("focused", &state.focused)
            .finish()
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
