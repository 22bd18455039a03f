//! Carbon footprint estimation
//!
//! This module contains the trip carbon engine organized by concern:
//! - Distance: Great-circle distance between coordinates
//! - Factors: Emission factor tables for transport, accommodation and
//!   activities
//! - Estimator: Full-trip aggregation with offset conversion and a
//!   per-category breakdown

pub mod distance;
pub mod estimator;
pub mod factors;

// Re-export all public types for convenient access
pub use distance::distance_km;
pub use estimator::{BreakdownEntry, TripCarbonResult, estimate_trip_carbon};
pub use factors::{AccommodationType, ActivityStyle, TransportMode};
