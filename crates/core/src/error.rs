//! Error taxonomy for the fusion pipeline
//!
//! Region/catalog errors propagate to the caller immediately. Sub-model and
//! sampling failures are recovered locally via documented fallbacks, but
//! fallback usage is always observable (provenance fields plus a `tracing`
//! warning) so consumers can tell real results from degraded ones.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FusionError {
    /// Region code not present in the static catalog. Fail fast: nothing in
    /// the pipeline silently substitutes a default region.
    #[error("unknown region code '{0}'")]
    UnknownRegion(String),

    /// Malformed feature vector passed to a sub-model. A caller error,
    /// never recovered by fallback.
    #[error("invalid feature vector for model '{model}': expected {expected} features, got {actual}")]
    InvalidInput {
        model: &'static str,
        expected: usize,
        actual: usize,
    },

    /// An expected sub-model was not registered. Recoverable: the fusion
    /// layer substitutes the documented closed-form fallback and tags the
    /// result, but the event must stay distinguishable from `InvalidInput`
    /// in logs.
    #[error("model '{0}' is not registered")]
    ModelUnavailable(&'static str),

    /// Catalog config could not be parsed.
    #[error("failed to parse region catalog: {0}")]
    CatalogParse(String),
}
