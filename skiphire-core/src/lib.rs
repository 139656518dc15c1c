//! Core types and state for the skip selection step of the skiphire booking flow.

/// Domain models and identifiers shared by all catalog sources.
pub mod model;
/// Traits describing the catalog source and navigation host.
pub mod ports;
/// VAT-inclusive price derivation.
pub mod pricing;
/// The fixed stages of the booking flow.
pub mod progress;
/// State container driving the skip selection screen.
pub mod screen;
/// Single-choice selection state.
pub mod selection;

pub use model::*;
pub use ports::*;
pub use pricing::*;
pub use progress::*;
pub use screen::*;
pub use selection::*;
