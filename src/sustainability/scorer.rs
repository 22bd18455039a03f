//! Destination sustainability heuristics
//!
//! Both scorers start from the same base, apply independent additive
//! adjustments for the signals that are present, and clamp into the
//! published range. Absent signals contribute nothing, so a destination
//! with no data at all scores exactly the base.

use serde::{Deserialize, Serialize};

use crate::models::{DestinationProfile, DestinationSignals};
use crate::sustainability::scorecard::{BASE_SCORE, ScoreCard};

/// Sustainability score together with the adjustments that produced it
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SustainabilityAssessment {
    /// Advisory score in [20, 99]
    pub score: u8,
    /// One line per applied adjustment, for display alongside the score
    pub reasoning: Vec<String>,
}

/// Score a destination from POI-level signals
///
/// Lower tourism density reads as better, transit access and green space
/// add on top. The population field of the signals is carried for
/// consumers but not weighed here.
#[must_use]
pub fn assess_destination(signals: &DestinationSignals) -> SustainabilityAssessment {
    let mut card = ScoreCard::new(BASE_SCORE);

    if let Some(density) = signals.tourism_density {
        if density < 50.0 {
            card.adjust(15, "low tourism density");
        } else if density < 200.0 {
            card.adjust(8, "moderate tourism density");
        } else if density > 500.0 {
            card.adjust(-10, "heavily touristed area");
        }
    }

    if signals.has_public_transit {
        card.adjust(10, "public transit available");
    }

    if let Some(ratio) = signals.green_space_ratio {
        if ratio > 0.3 {
            card.adjust(10, "extensive green space");
        } else if ratio > 0.1 {
            card.adjust(5, "some green space");
        }
    }

    let (score, reasoning) = card.finish();
    SustainabilityAssessment { score, reasoning }
}

/// Score a destination from country and climate enrichment data
///
/// Fallback heuristic for destinations without POI-level signals: smaller
/// places and comfortable year-round temperatures read as better.
#[must_use]
pub fn assess_destination_profile(profile: &DestinationProfile) -> SustainabilityAssessment {
    let mut card = ScoreCard::new(BASE_SCORE);

    if let Some(population) = profile.population {
        if population < 100_000 {
            card.adjust(12, "small destination");
        } else if population < 1_000_000 {
            card.adjust(6, "mid-sized destination");
        } else if population > 5_000_000 {
            card.adjust(-8, "megacity-scale destination");
        }
    }

    if let Some(temperature) = profile.mean_temperature_c {
        if (15.0..=25.0).contains(&temperature) {
            card.adjust(10, "comfortable year-round climate");
        } else if (8.0..=30.0).contains(&temperature) {
            card.adjust(5, "mild climate");
        }
    }

    let (score, reasoning) = card.finish();
    SustainabilityAssessment { score, reasoning }
}

/// Advisory sustainability score in [20, 99] from POI-level signals
#[must_use]
pub fn score_destination_sustainability(signals: &DestinationSignals) -> u8 {
    assess_destination(signals).score
}

/// Advisory sustainability score in [20, 99] from enrichment data
#[must_use]
pub fn score_destination_profile(profile: &DestinationProfile) -> u8 {
    assess_destination_profile(profile).score
}
