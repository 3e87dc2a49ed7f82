use thiserror::Error;

/// Errors raised at the fallible edges of the crate.
///
/// The focus operations themselves (register, claim, relinquish, deregister)
/// never fail. Errors only come from parsing ids and from building a registry
/// with an unusable configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FocusError {
    /// The string is not a valid subscriber id.
    #[error("Invalid subscriber id: {input:?}")]
    InvalidId { input: String },

    /// Subscriber ids need at least one letter.
    #[error("Subscriber id length must be at least 1")]
    ZeroIdLength,
}
