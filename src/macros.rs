//! Macros for declaring named, process-wide focus registries.

/// Declares a module holding a lazily created, process-wide [`FocusRegistry`].
///
/// Prefer passing an explicit [`FocusRegistry`] down from the application root.
/// This macro is for hosts where components cannot receive one, e.g. widgets
/// instantiated by a framework that only calls a zero-argument constructor.
///
/// The macro generates a module containing:
/// - the registry static (hidden)
/// - `registry()` returning `&'static FocusRegistry`
/// - free functions `register`, `focused`, `set_trace_callback`, `clear_trace_callback`
///
/// [`FocusRegistry`]: crate::FocusRegistry
///
/// # Examples
///
/// ```rust
/// use focus_registry::define_focus_registry;
///
/// define_focus_registry!(editors);
///
/// let title = editors::register(|| {});
/// let steps = editors::register(|| {});
///
/// title.claim_focus();
/// steps.claim_focus();
///
/// assert_eq!(editors::focused().as_ref(), Some(steps.id()));
/// ```
///
/// # Multiple Registries
///
/// Each invocation is isolated from every other:
///
/// ```rust
/// use focus_registry::define_focus_registry;
///
/// define_focus_registry!(sidebar);
/// define_focus_registry!(canvas);
///
/// let note = sidebar::register(|| {});
/// note.claim_focus();
///
/// assert!(sidebar::focused().is_some());
/// assert!(canvas::focused().is_none());
/// ```
#[macro_export]
macro_rules! define_focus_registry {
    ($name:ident) => {
        pub mod $name {
            use std::sync::LazyLock;

            static REGISTRY: LazyLock<$crate::FocusRegistry> =
                LazyLock::new($crate::FocusRegistry::new);

            /// The registry behind this module's free functions.
            pub fn registry() -> &'static $crate::FocusRegistry {
                &REGISTRY
            }

            /// Register a force-close callback.
            pub fn register(
                force_close: impl Fn() + Send + Sync + 'static,
            ) -> $crate::FocusHandle {
                REGISTRY.register(force_close)
            }

            /// The subscriber currently holding focus, if any.
            pub fn focused() -> Option<$crate::SubscriberId> {
                REGISTRY.focused()
            }

            /// Set a tracing callback for registry mutations.
            pub fn set_trace_callback(
                callback: impl Fn(&$crate::FocusEvent) + Send + Sync + 'static,
            ) {
                REGISTRY.set_trace_callback(callback)
            }

            /// Clear the tracing callback.
            pub fn clear_trace_callback() {
                REGISTRY.clear_trace_callback()
            }
        }
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_define_focus_registry_macro() {
        define_focus_registry!(test_reg);

        let a = test_reg::register(|| {});
        a.claim_focus();

        assert_eq!(test_reg::focused().as_ref(), Some(a.id()));
        assert!(test_reg::registry().contains(a.id()));
    }

    #[test]
    fn test_multiple_registries() {
        define_focus_registry!(reg_a);
        define_focus_registry!(reg_b);

        let a = reg_a::register(|| {});
        let b = reg_b::register(|| {});
        a.claim_focus();
        b.claim_focus();

        // Claiming in `reg_b` did not displace `reg_a`'s holder.
        assert!(a.is_focused());
        assert!(b.is_focused());
    }

    #[test]
    fn test_tracing() {
        define_focus_registry!(trace_test);

        use parking_lot::Mutex;
        use std::sync::Arc;
        let events = Arc::new(Mutex::new(Vec::new()));
        let events_clone = events.clone();

        trace_test::set_trace_callback(move |event| {
            events_clone.lock().push(format!("{}", event));
        });

        let a = trace_test::register(|| {});
        a.claim_focus();
        a.relinquish_focus();

        let recorded = events.lock();
        assert_eq!(recorded.len(), 3);
        assert!(recorded[0].starts_with("register"));
        assert!(recorded[1].starts_with("claim"));
        assert!(recorded[2].contains("released: true"));
        drop(recorded);

        trace_test::clear_trace_callback();
    }
}
