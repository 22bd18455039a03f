//! Trip carbon aggregation
//!
//! Composes the distance calculator and the emission factor tables into a
//! full-trip estimate: per-category totals, the tree-offset equivalent,
//! and a percentage breakdown ready for charting.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::carbon::distance::distance_km;
use crate::carbon::factors::ActivityStyle;
use crate::models::TripRequest;

/// Annual CO2 absorption of one mature tree (kg)
const TREE_ABSORPTION_KG_PER_YEAR: f64 = 22.0;

/// Chart color hints per breakdown slice (hex)
const TRANSPORT_COLOR: &str = "#ef4444";
const ACCOMMODATION_COLOR: &str = "#f59e0b";
const ACTIVITY_COLOR: &str = "#10b981";

/// One slice of the per-category carbon breakdown
///
/// The serialized field names are the wire contract with chart consumers
/// and stay stable.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownEntry {
    /// Display label for the slice
    pub label: String,
    /// Category total in kg CO2
    pub value_kg: f64,
    /// Share of the trip total, rounded to the nearest percent
    pub percent_of_total: u8,
    /// Suggested chart color (hex)
    pub color_hint: String,
}

/// Full-trip carbon estimate
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TripCarbonResult {
    /// One-way great-circle distance, rounded to the nearest km
    pub distance_km: f64,
    /// Round-trip transport carbon in kg CO2
    pub transport_carbon_kg: f64,
    /// Accommodation carbon for the stay in kg CO2
    pub accommodation_carbon_kg: f64,
    /// Food and activity carbon for the stay in kg CO2
    pub activity_carbon_kg: f64,
    /// Trip total in kg CO2; always the sum of the three categories above
    pub total_carbon_kg: f64,
    /// Trip total in tonnes CO2
    pub total_tonnes: f64,
    /// Mature trees needed for one year to absorb the total
    pub trees_to_offset: u32,
    /// Per-category breakdown ordered transport, accommodation, activities
    pub breakdown: Vec<BreakdownEntry>,
}

/// Estimate the carbon footprint of a round trip
///
/// Pure and deterministic: no I/O, no clock, no randomness. Every modeled
/// trip is a return journey, so the one-way distance is doubled for
/// transport. A sightseeing baseline is charged for every day on top of
/// the chosen activity style. Intermediate math runs at full precision;
/// rounding happens once here at the output boundary, and the published
/// total is the sum of the published categories.
#[must_use]
pub fn estimate_trip_carbon(request: &TripRequest) -> TripCarbonResult {
    let one_way_km = distance_km(&request.origin, &request.destination);
    let round_trip_km = one_way_km * 2.0;

    let mode = request.transport_mode.normalize(one_way_km);
    let days = f64::from(request.days);

    let transport_kg = round_trip_km * mode.factor_kg_per_km();
    let accommodation_kg = request.accommodation.factor_kg_per_night() * days;
    let activity_kg = (request.activity.factor_kg_per_day()
        + ActivityStyle::Sightseeing.factor_kg_per_day())
        * days;
    let total_kg = transport_kg + accommodation_kg + activity_kg;

    debug!(
        "Trip estimate: {:.0} km one-way via {}, {} days, {:.1} kg CO2 total",
        one_way_km, mode, request.days, total_kg
    );

    let transport_out = round_to_tenth(transport_kg);
    let accommodation_out = round_to_tenth(accommodation_kg);
    let activity_out = round_to_tenth(activity_kg);
    let total_out = round_to_tenth(transport_out + accommodation_out + activity_out);

    TripCarbonResult {
        distance_km: one_way_km.round(),
        transport_carbon_kg: transport_out,
        accommodation_carbon_kg: accommodation_out,
        activity_carbon_kg: activity_out,
        total_carbon_kg: total_out,
        total_tonnes: round_to_hundredth(total_out / 1000.0),
        trees_to_offset: trees_to_offset(total_out),
        breakdown: vec![
            BreakdownEntry {
                label: "Transport".to_string(),
                value_kg: transport_out,
                percent_of_total: percent_share(transport_kg, total_kg),
                color_hint: TRANSPORT_COLOR.to_string(),
            },
            BreakdownEntry {
                label: "Accommodation".to_string(),
                value_kg: accommodation_out,
                percent_of_total: percent_share(accommodation_kg, total_kg),
                color_hint: ACCOMMODATION_COLOR.to_string(),
            },
            BreakdownEntry {
                label: "Food & Activities".to_string(),
                value_kg: activity_out,
                percent_of_total: percent_share(activity_kg, total_kg),
                color_hint: ACTIVITY_COLOR.to_string(),
            },
        ],
    }
}

/// Trees needed for one year to absorb the given mass, rounded up
fn trees_to_offset(total_kg: f64) -> u32 {
    (total_kg / TREE_ABSORPTION_KG_PER_YEAR).ceil() as u32
}

/// Full-precision share of the total, rounded to the nearest percent
fn percent_share(part_kg: f64, total_kg: f64) -> u8 {
    if total_kg > 0.0 {
        (part_kg / total_kg * 100.0).round() as u8
    } else {
        0
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round_to_hundredth(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
