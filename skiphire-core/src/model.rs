//! Domain data structures for skip offerings and catalog queries.

use std::fmt;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
/// Identifier of a skip offering, unique within a catalog.
pub struct SkipId(pub u32);

impl fmt::Display for SkipId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One purchasable skip size with its pricing and eligibility attributes.
///
/// Field names follow the snake_case JSON returned by the skip-hire API, so
/// fixtures and live responses decode into the same type.
pub struct SkipOffering {
    /// Unique identifier within the catalog.
    pub id: SkipId,
    /// Capacity in cubic yards.
    pub size: u32,
    /// Rental duration in days.
    pub hire_period_days: u32,
    /// Flat transport surcharge, absent for smaller sizes.
    pub transport_cost: Option<Decimal>,
    /// Surcharge per tonne of waste, absent for smaller sizes.
    pub per_tonne_cost: Option<Decimal>,
    /// Price in pounds before VAT.
    pub price_before_vat: Decimal,
    /// VAT rate in percent, e.g. `20` for 20% or `17.5`.
    pub vat: Decimal,
    /// Postcode district the offering is priced for.
    pub postcode: String,
    /// Optional area within the postcode district; may be empty.
    #[serde(default)]
    pub area: String,
    /// Offering is excluded from sale.
    #[serde(default)]
    pub forbidden: bool,
    /// Creation timestamp reported by the source.
    pub created_at: NaiveDateTime,
    /// Last update timestamp reported by the source.
    pub updated_at: NaiveDateTime,
    /// Skip may be placed on a public road without extra restriction.
    pub allowed_on_road: bool,
    /// Heavy waste categories may be disposed in this skip.
    pub allows_heavy_waste: bool,
}

impl SkipOffering {
    /// Human-friendly title such as "4 Yard Skip".
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} Yard Skip", self.size)
    }

    /// Price and VAT rate are both non-negative.
    #[must_use]
    pub fn has_valid_pricing(&self) -> bool {
        self.price_before_vat >= Decimal::ZERO && self.vat >= Decimal::ZERO
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Location context used when requesting a catalog.
pub struct CatalogQuery {
    /// Postcode district, e.g. "NR32".
    pub postcode: String,
    /// Optional area name narrowing the postcode.
    pub area: Option<String>,
}

impl CatalogQuery {
    /// Construct a new catalog query.
    #[must_use]
    pub fn new<P: Into<String>, A: Into<String>>(postcode: P, area: Option<A>) -> Self {
        Self {
            postcode: postcode.into(),
            area: area.map(Into::into),
        }
    }

    /// Check if the query carries no postcode.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.postcode.trim().is_empty()
    }

    /// Non-empty area, trimmed.
    #[must_use]
    pub fn area(&self) -> Option<&str> {
        self.area
            .as_deref()
            .map(str::trim)
            .filter(|area| !area.is_empty())
    }
}

impl fmt::Display for CatalogQuery {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.area() {
            Some(area) => write!(formatter, "{} ({area})", self.postcode.trim()),
            None => write!(formatter, "{}", self.postcode.trim()),
        }
    }
}
