//! Destination sustainability scoring
//!
//! Two additive heuristics built on a shared scorecard: the POI-based
//! variant weighs tourism pressure, transit access and green space; the
//! enrichment-based variant weighs population size and climate comfort
//! when POI-level signals are unavailable. Scores are advisory estimates
//! published in a bounded range, not certified metrics.

mod scorecard;
pub mod scorer;

// Re-export all public types for convenient access
pub use scorer::{
    SustainabilityAssessment, assess_destination, assess_destination_profile,
    score_destination_profile, score_destination_sustainability,
};
