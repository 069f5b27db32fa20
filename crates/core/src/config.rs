//! Engine configuration
//!
//! The cache TTLs are behavioral constants of the system, exposed as
//! configuration so tests can shrink them; they are not runtime-discovered
//! tunables.

use std::time::Duration;

/// Cache windows per data class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Fused prediction lists, keyed per region
    pub prediction_ttl: Duration,
    /// Fire-detection feeds (consumed by the out-of-scope ingestion layer)
    pub detection_ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        CacheConfig {
            prediction_ttl: Duration::from_secs(10 * 60),
            detection_ttl: Duration::from_secs(5 * 60),
        }
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineConfig {
    pub cache: CacheConfig,
    /// Upper bound on concurrent per-location pipelines; `None` uses the
    /// global rayon pool unbounded.
    pub concurrency: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ttls_match_contract() {
        let config = CacheConfig::default();
        assert_eq!(config.prediction_ttl, Duration::from_secs(600));
        assert_eq!(config.detection_ttl, Duration::from_secs(300));
    }
}
