//! Traits describing the catalog source and navigation host, plus shared error types.

use async_trait::async_trait;
use reqwest::Error as ReqwestError;

use crate::model::{CatalogQuery, SkipId, SkipOffering};

#[derive(thiserror::Error, Debug)]
/// Errors that can occur while loading a catalog.
pub enum PortError {
    /// Network layer failed.
    #[error("Network error: {0}")]
    Network(#[from] ReqwestError),
    /// The source answered with a body that is not a valid catalog.
    #[error("Decode error: {0}")]
    Decode(String),
    /// The query cannot be served by the source.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
    /// Internal source error.
    #[error("Internal error: {0}")]
    Internal(String),
}

#[async_trait]
/// Capability that supplies the skip offerings for a location.
pub trait CatalogPort: Send + Sync {
    /// Short name of the source, used in logs.
    fn name(&self) -> &str;

    /// Fetch the complete catalog for the given location.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] when the source cannot produce the catalog.
    async fn offerings(&self, query: &CatalogQuery) -> Result<Vec<SkipOffering>, PortError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One-way signal sent to the navigation host.
pub enum NavigationSignal {
    /// Advance to the next booking step with the chosen offering.
    Advance(SkipId),
    /// Return to the previous booking step.
    Back,
}

/// Host that performs the actual routing between booking steps.
pub trait NavigationPort: Send + Sync {
    /// Advance to the next step carrying the selected offering.
    fn advance(&self, offering: SkipId);

    /// Return to the previous step.
    fn back(&self);
}
