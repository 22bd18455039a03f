//! Data models for the WanderWise engine
//!
//! This module contains the core domain models organized by concern:
//! - Coordinate: Geographic coordinates and geocoded places
//! - Trip: The trip request fed to the carbon estimator
//! - Destination: Signals fed to the sustainability heuristics

pub mod coordinate;
pub mod destination;
pub mod trip;

// Re-export all public types for convenient access
pub use coordinate::{Coordinate, Place};
pub use destination::{DestinationProfile, DestinationSignals};
pub use trip::TripRequest;
