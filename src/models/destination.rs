//! Destination signal models for sustainability scoring

use serde::{Deserialize, Serialize};

/// Destination signals for the POI-based sustainability heuristic
///
/// Upstream data sources are partial, so every non-boolean signal is
/// optional; an absent signal simply contributes no adjustment. The
/// all-absent default reads as "no data" and scores at the baseline.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct DestinationSignals {
    /// Tourism points of interest per square kilometre
    pub tourism_density: Option<f64>,
    /// Resident population; carried alongside the POI signals but not
    /// weighed by the density-based heuristic
    pub population: Option<u64>,
    /// Whether the destination has a public transit network
    pub has_public_transit: bool,
    /// Green space share of the urban area, in [0, 1]
    pub green_space_ratio: Option<f64>,
}

impl DestinationSignals {
    /// Create signals with every field absent
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Country and climate profile for the enrichment-based heuristic
///
/// Used when POI-level signals are unavailable and only coarse reference
/// data about the destination exists.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct DestinationProfile {
    /// Resident population
    pub population: Option<u64>,
    /// Annual mean temperature in degrees Celsius
    pub mean_temperature_c: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_signals() {
        let signals = DestinationSignals::empty();
        assert_eq!(signals.tourism_density, None);
        assert_eq!(signals.population, None);
        assert!(!signals.has_public_transit);
        assert_eq!(signals.green_space_ratio, None);
    }

    #[test]
    fn test_default_profile_is_all_absent() {
        let profile = DestinationProfile::default();
        assert_eq!(profile.population, None);
        assert_eq!(profile.mean_temperature_c, None);
    }
}
