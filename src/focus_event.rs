use std::fmt;

use crate::SubscriberId;

/// Events emitted by a focus registry as it mutates.
///
/// These events are passed to the trace callback set via
/// [`FocusRegistry::set_trace_callback`](crate::FocusRegistry::set_trace_callback).
///
/// # Examples
///
/// ```rust
/// use focus_registry::FocusEvent;
///
/// let event = FocusEvent::Register { id: "abcde".parse().unwrap() };
/// assert_eq!(event.to_string(), "register { id: abcde }");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusEvent {
    /// A subscriber was added to the callback table.
    Register { id: SubscriberId },

    /// A subscriber took focus.
    Claim {
        id: SubscriberId,
        /// The previous holder, if it was a different subscriber. Set even when
        /// that holder had already deregistered and so was not force-closed.
        displaced: Option<SubscriberId>,
    },

    /// A subscriber's force-close callback is about to run.
    ForceClose { id: SubscriberId },

    /// A subscriber asked to give up focus.
    Relinquish {
        id: SubscriberId,
        /// Whether the subscriber actually held focus.
        released: bool,
    },

    /// A subscriber asked to leave the callback table.
    Deregister {
        id: SubscriberId,
        /// Whether the subscriber was still registered.
        removed: bool,
    },

    /// The registry was cleared.
    Clear {},
}

impl fmt::Display for FocusEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FocusEvent::Register { id } => write!(f, "register {{ id: {id} }}"),
            FocusEvent::Claim { id, displaced } => match displaced {
                Some(prev) => write!(f, "claim {{ id: {id}, displaced: {prev} }}"),
                None => write!(f, "claim {{ id: {id}, displaced: none }}"),
            },
            FocusEvent::ForceClose { id } => write!(f, "force_close {{ id: {id} }}"),
            FocusEvent::Relinquish { id, released } => {
                write!(f, "relinquish {{ id: {id}, released: {released} }}")
            }
            FocusEvent::Deregister { id, removed } => {
                write!(f, "deregister {{ id: {id}, removed: {removed} }}")
            }
            FocusEvent::Clear {} => write!(f, "clear {{}}"),
        }
    }
}
