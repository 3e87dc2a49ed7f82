use std::fmt;

use crate::{FocusRegistry, SubscriberId};

/// A registered subscriber's view of its registry.
///
/// Returned by [`FocusRegistry::register`]. Every operation is bound to the
/// subscriber's id and is total: none of them fail or panic.
///
/// Dropping a handle does not deregister it; call [`deregister`](Self::deregister)
/// when the owning component is torn down.
#[derive(Clone)]
pub struct FocusHandle {
    id: SubscriberId,
    registry: FocusRegistry,
}

impl FocusHandle {
    pub(crate) fn new(id: SubscriberId, registry: FocusRegistry) -> Self {
        Self { id, registry }
    }

    /// The id this handle is bound to.
    #[must_use]
    pub fn id(&self) -> &SubscriberId {
        &self.id
    }

    /// The registry this handle belongs to.
    #[must_use]
    pub fn registry(&self) -> &FocusRegistry {
        &self.registry
    }

    /// Take focus, force-closing the current holder first if it is another
    /// registered subscriber.
    pub fn claim_focus(&self) {
        self.registry.claim(&self.id);
    }

    /// Give up focus. Does nothing unless this subscriber holds it.
    pub fn relinquish_focus(&self) {
        self.registry.relinquish(&self.id);
    }

    /// Remove this subscriber's callback from the registry.
    ///
    /// Repeated calls are no-ops. Focus is not touched: a focused subscriber
    /// that deregisters stays focused until someone else claims.
    pub fn deregister(&self) {
        self.registry.deregister(&self.id);
    }

    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.registry.is_focused(&self.id)
    }

    #[must_use]
    pub fn is_registered(&self) -> bool {
        self.registry.contains(&self.id)
    }
}

impl fmt::Debug for FocusHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FocusHandle").field("id", &self.id).finish()
    }
}
