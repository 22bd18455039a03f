//! `WanderWise` - Trip carbon footprint and destination sustainability engine
//!
//! This library provides the core functionality for estimating the
//! greenhouse-gas footprint of a round trip and for scoring how
//! sustainable a destination is from already-resolved signals.

pub mod carbon;
pub mod config;
pub mod error;
pub mod models;
pub mod sustainability;

// Re-export core types for public API
pub use carbon::{
    AccommodationType, ActivityStyle, BreakdownEntry, TransportMode, TripCarbonResult,
    distance_km, estimate_trip_carbon,
};
pub use config::{DefaultsConfig, LoggingConfig, WanderwiseConfig, init_logging};
pub use error::WanderwiseError;
pub use models::{Coordinate, DestinationProfile, DestinationSignals, Place, TripRequest};
pub use sustainability::{
    SustainabilityAssessment, assess_destination, assess_destination_profile,
    score_destination_profile, score_destination_sustainability,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, WanderwiseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
