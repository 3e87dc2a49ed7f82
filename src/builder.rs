//! Construction-time configuration for [`FocusRegistry`].

use std::fmt;
use std::sync::Arc;

use crate::registry::TraceCallback;
use crate::subscriber_id::DEFAULT_ID_LENGTH;
use crate::{FocusError, FocusEvent, FocusRegistry};

/// Builder returned by [`FocusRegistry::builder`].
///
/// ```
/// use focus_registry::FocusRegistry;
///
/// let registry = FocusRegistry::builder()
///     .id_length(8)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let handle = registry.register(|| {});
/// assert_eq!(handle.id().as_str().len(), 8);
/// ```
pub struct FocusRegistryBuilder {
    id_length: usize,
    seed: Option<u64>,
    trace: Option<Arc<TraceCallback>>,
}

impl Default for FocusRegistryBuilder {
    fn default() -> Self {
        Self {
            id_length: DEFAULT_ID_LENGTH,
            seed: None,
            trace: None,
        }
    }
}

impl FocusRegistryBuilder {
    /// Number of letters in generated subscriber ids. Defaults to 5.
    #[must_use]
    pub fn id_length(mut self, length: usize) -> Self {
        self.id_length = length;
        self
    }

    /// Seed the id generator for a reproducible id stream.
    ///
    /// Without a seed the generator is seeded from OS entropy.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Install a trace callback from the start, so registrations made right
    /// after `build` are observed too.
    #[must_use]
    pub fn trace_callback(mut self, callback: impl Fn(&FocusEvent) + Send + Sync + 'static) -> Self {
        self.trace = Some(Arc::new(callback));
        self
    }

    /// Build the registry.
    ///
    /// # Errors
    ///
    /// - [`FocusError::ZeroIdLength`] if the id length is zero
    pub fn build(self) -> Result<FocusRegistry, FocusError> {
        if self.id_length == 0 {
            return Err(FocusError::ZeroIdLength);
        }
        Ok(FocusRegistry::with_parts(self.id_length, self.seed, self.trace))
    }
}

impl fmt::Debug for FocusRegistryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FocusRegistryBuilder")
            .field("id_length", &self.id_length)
            .field("seed", &self.seed)
            .field("trace", &self.trace.is_some())
            .finish()
    }
}
