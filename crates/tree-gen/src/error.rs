use derive_more::Display;

/// Rejected generator configuration
///
/// Raised before any node is created, so no partial tree ever reaches the
/// caller. Fallible functions return it inside an `anyhow::Error`; use
/// `downcast_ref::<ConfigError>()` to match on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ConfigError {
    /// Depth was below zero
    #[display(fmt = "invalid configuration: depth must be non-negative, got {}", _0)]
    NegativeDepth(i64),

    /// Growth rate was below zero
    #[display(fmt = "invalid configuration: growth rate must be non-negative, got {}", _0)]
    NegativeGrowthRate(i64),
}

impl std::error::Error for ConfigError {}
