//! Catalog source serving the bundled NR32 skip catalog.
//!
//! Stands in for the skip-hire API while no live backend is wired up: the
//! catalog is decoded from an embedded JSON file and handed out after a fixed
//! delay that mimics network latency.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use skiphire_core::{
    model::{CatalogQuery, SkipOffering},
    ports::{CatalogPort, PortError},
};

/// Latency applied before the catalog is returned.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(800);

const NR32_CATALOG: &str = include_str!("../data/nr32.json");

/// Catalog source backed by the embedded fixture.
pub struct FixtureCatalogPort {
    delay: Duration,
}

impl FixtureCatalogPort {
    /// Create a source that answers after `delay`.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for FixtureCatalogPort {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

#[async_trait]
impl CatalogPort for FixtureCatalogPort {
    fn name(&self) -> &str {
        "fixture"
    }

    async fn offerings(&self, query: &CatalogQuery) -> Result<Vec<SkipOffering>, PortError> {
        if query.is_empty() {
            return Err(PortError::InvalidQuery("postcode is required".into()));
        }

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let offerings = bundled_catalog()?;
        debug!(count = offerings.len(), %query, "serving fixture catalog");
        Ok(offerings)
    }
}

/// Decode the embedded catalog.
///
/// # Errors
///
/// Returns [`PortError::Internal`] if the bundled JSON does not match [`SkipOffering`].
pub fn bundled_catalog() -> Result<Vec<SkipOffering>, PortError> {
    decode_fixture(NR32_CATALOG)
}

// The fixture ships with the binary, so a bad file is our bug, not the source's.
fn decode_fixture(json: &str) -> Result<Vec<SkipOffering>, PortError> {
    serde_json::from_str(json)
        .map_err(|err| PortError::Internal(format!("bundled catalog is invalid: {err}")))
}

/// Build a shareable fixture source with the given latency.
#[must_use]
pub fn catalog_port(delay: Duration) -> Arc<dyn CatalogPort> {
    Arc::new(FixtureCatalogPort::new(delay))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use skiphire_core::{model::SkipId, pricing::total_price};
    use tokio::time::{Instant, timeout};

    use super::*;

    #[test]
    fn bundled_catalog_has_nine_offerings() {
        let catalog = bundled_catalog().expect("fixture should decode");

        assert_eq!(catalog.len(), 9);
        let sizes: Vec<u32> = catalog.iter().map(|offering| offering.size).collect();
        assert_eq!(sizes, [4, 6, 8, 10, 12, 14, 16, 20, 40]);
        assert!(catalog.iter().all(|offering| !offering.forbidden));
        assert!(catalog.iter().all(|offering| offering.postcode == "NR32"));
    }

    #[test]
    fn bundled_prices_include_vat() {
        let catalog = bundled_catalog().expect("fixture should decode");

        let first = catalog.first().expect("catalog is not empty");
        assert_eq!(first.id, SkipId(17933));
        assert_eq!(total_price(first), Decimal::from(334));

        let largest = catalog.last().expect("catalog is not empty");
        assert_eq!(largest.transport_cost, Some(Decimal::from(248)));
        assert_eq!(total_price(largest), Decimal::from(1190));
    }

    #[tokio::test]
    async fn serves_catalog_for_postcode() {
        let port = FixtureCatalogPort::new(Duration::ZERO);
        let offerings = port
            .offerings(&CatalogQuery::new("NR32", None::<String>))
            .await
            .expect("fixture never fails for a postcode");

        assert_eq!(offerings.len(), 9);
    }

    #[tokio::test(start_paused = true)]
    async fn waits_for_configured_delay() {
        let port = FixtureCatalogPort::new(Duration::from_millis(800));
        let query = CatalogQuery::new("NR32", None::<String>);
        let started = Instant::now();
        let mut fetch = port.offerings(&query);

        assert!(
            timeout(Duration::from_millis(799), &mut fetch).await.is_err(),
            "catalog arrived before the delay elapsed"
        );

        let offerings = fetch.await.expect("fixture never fails for a postcode");
        assert_eq!(offerings.len(), 9);
        assert!(started.elapsed() >= Duration::from_millis(800));
    }

    #[test]
    fn invalid_fixture_is_an_internal_error() {
        let result = decode_fixture(r#"[{"id":"not-a-number"}]"#);

        assert!(matches!(result, Err(PortError::Internal(_))));
    }

    #[tokio::test]
    async fn rejects_blank_postcode() {
        let port = FixtureCatalogPort::new(Duration::ZERO);
        let result = port.offerings(&CatalogQuery::new("  ", None::<String>)).await;

        assert!(matches!(result, Err(PortError::InvalidQuery(_))));
    }
}
