//! Emission factor tables and trip category enums
//!
//! Factors are fixed constants derived from published per-passenger
//! averages (DEFRA / ICAO / EEA style datasets): kilograms of CO2 per
//! passenger-kilometre for transport, per night for accommodation, per
//! day for food and activities. Each enum is closed; unknown user tags
//! fall back to a documented default and the substitution is logged,
//! never surfaced as an error.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// One-way distance below which a flight counts as short-haul (km)
const FLIGHT_SHORT_MAX_KM: f64 = 1500.0;
/// One-way distance below which a flight counts as medium-haul (km)
const FLIGHT_MEDIUM_MAX_KM: f64 = 4000.0;

/// How the traveller covers the distance
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    /// Generic flight, resolved into a distance band during estimation
    Flight,
    /// Flight under 1500 km one-way
    FlightShort,
    /// Flight between 1500 and 4000 km one-way
    FlightMedium,
    /// Flight over 4000 km one-way
    FlightLong,
    Train,
    Bus,
    /// Car with a single occupant
    CarSolo,
    /// Car with two or more occupants sharing the footprint
    CarShared,
    ElectricCar,
    Ferry,
    Bicycle,
    Walking,
}

impl TransportMode {
    /// Classify a generic flight by its one-way distance
    #[must_use]
    pub fn flight_band(one_way_km: f64) -> Self {
        if one_way_km < FLIGHT_SHORT_MAX_KM {
            Self::FlightShort
        } else if one_way_km < FLIGHT_MEDIUM_MAX_KM {
            Self::FlightMedium
        } else {
            Self::FlightLong
        }
    }

    /// Resolve a bare `Flight` into its distance band; concrete modes
    /// pass through unchanged
    #[must_use]
    pub fn normalize(self, one_way_km: f64) -> Self {
        match self {
            Self::Flight => Self::flight_band(one_way_km),
            other => other,
        }
    }

    /// Emission factor in kg CO2 per passenger-kilometre
    ///
    /// A bare `Flight` reads as the medium band; the estimator always
    /// normalizes against the trip distance first, so that value is only
    /// seen by callers querying the table directly.
    #[must_use]
    pub fn factor_kg_per_km(self) -> f64 {
        match self {
            Self::FlightShort => 0.255,
            Self::Flight | Self::FlightMedium => 0.195,
            Self::FlightLong => 0.150,
            Self::Train => 0.041,
            Self::Bus => 0.089,
            Self::CarSolo => 0.171,
            Self::CarShared => 0.085,
            Self::ElectricCar => 0.053,
            Self::Ferry => 0.115,
            Self::Bicycle | Self::Walking => 0.0,
        }
    }

    /// Parse a user-supplied tag; unrecognized input falls back to
    /// `CarSolo` and logs the substitution
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "flight" => Self::Flight,
            "flight_short" => Self::FlightShort,
            "flight_medium" => Self::FlightMedium,
            "flight_long" => Self::FlightLong,
            "train" => Self::Train,
            "bus" => Self::Bus,
            "car_solo" => Self::CarSolo,
            "car_shared" => Self::CarShared,
            "electric_car" => Self::ElectricCar,
            "ferry" => Self::Ferry,
            "bicycle" => Self::Bicycle,
            "walking" => Self::Walking,
            other => {
                warn!("Unknown transport mode '{other}', assuming car_solo");
                Self::CarSolo
            }
        }
    }

    /// Canonical tag for this mode
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Flight => "flight",
            Self::FlightShort => "flight_short",
            Self::FlightMedium => "flight_medium",
            Self::FlightLong => "flight_long",
            Self::Train => "train",
            Self::Bus => "bus",
            Self::CarSolo => "car_solo",
            Self::CarShared => "car_shared",
            Self::ElectricCar => "electric_car",
            Self::Ferry => "ferry",
            Self::Bicycle => "bicycle",
            Self::Walking => "walking",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransportMode::Flight => "Flight",
            TransportMode::FlightShort => "Short-haul flight",
            TransportMode::FlightMedium => "Medium-haul flight",
            TransportMode::FlightLong => "Long-haul flight",
            TransportMode::Train => "Train",
            TransportMode::Bus => "Bus",
            TransportMode::CarSolo => "Car (solo)",
            TransportMode::CarShared => "Car (shared)",
            TransportMode::ElectricCar => "Electric car",
            TransportMode::Ferry => "Ferry",
            TransportMode::Bicycle => "Bicycle",
            TransportMode::Walking => "Walking",
        };
        write!(f, "{name}")
    }
}

/// Where the traveller sleeps
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AccommodationType {
    HotelLuxury,
    HotelStandard,
    HotelBudget,
    Hostel,
    Airbnb,
    Camping,
    EcoLodge,
}

impl AccommodationType {
    /// Emission factor in kg CO2 per night
    #[must_use]
    pub fn factor_kg_per_night(self) -> f64 {
        match self {
            Self::HotelLuxury => 30.2,
            Self::HotelStandard => 17.4,
            Self::HotelBudget => 10.2,
            Self::Hostel => 5.8,
            Self::Airbnb => 8.1,
            Self::Camping => 2.3,
            Self::EcoLodge => 4.5,
        }
    }

    /// Parse a user-supplied tag; unrecognized input falls back to the
    /// mid-table `HotelStandard`
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "hotel_luxury" => Self::HotelLuxury,
            "hotel_standard" => Self::HotelStandard,
            "hotel_budget" => Self::HotelBudget,
            "hostel" => Self::Hostel,
            "airbnb" => Self::Airbnb,
            "camping" => Self::Camping,
            "eco_lodge" => Self::EcoLodge,
            other => {
                warn!("Unknown accommodation type '{other}', assuming hotel_standard");
                Self::HotelStandard
            }
        }
    }

    /// Canonical tag for this accommodation type
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::HotelLuxury => "hotel_luxury",
            Self::HotelStandard => "hotel_standard",
            Self::HotelBudget => "hotel_budget",
            Self::Hostel => "hostel",
            Self::Airbnb => "airbnb",
            Self::Camping => "camping",
            Self::EcoLodge => "eco_lodge",
        }
    }
}

impl fmt::Display for AccommodationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AccommodationType::HotelLuxury => "Luxury hotel",
            AccommodationType::HotelStandard => "Standard hotel",
            AccommodationType::HotelBudget => "Budget hotel",
            AccommodationType::Hostel => "Hostel",
            AccommodationType::Airbnb => "Apartment rental",
            AccommodationType::Camping => "Camping",
            AccommodationType::EcoLodge => "Eco lodge",
        };
        write!(f, "{name}")
    }
}

/// How the traveller eats and spends the days
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityStyle {
    FoodLocal,
    FoodTourist,
    FoodVegan,
    /// Baseline added to every trip on top of the chosen style
    Sightseeing,
    AdventureSport,
    Shopping,
}

impl ActivityStyle {
    /// Emission factor in kg CO2 per day
    #[must_use]
    pub fn factor_kg_per_day(self) -> f64 {
        match self {
            Self::FoodLocal => 5.2,
            Self::FoodTourist => 8.7,
            Self::FoodVegan => 3.1,
            Self::Sightseeing => 2.0,
            Self::AdventureSport => 4.5,
            Self::Shopping => 3.2,
        }
    }

    /// Parse a user-supplied tag; unrecognized input falls back to
    /// `FoodLocal`
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "food_local" => Self::FoodLocal,
            "food_tourist" => Self::FoodTourist,
            "food_vegan" => Self::FoodVegan,
            "sightseeing" => Self::Sightseeing,
            "adventure_sport" => Self::AdventureSport,
            "shopping" => Self::Shopping,
            other => {
                warn!("Unknown activity style '{other}', assuming food_local");
                Self::FoodLocal
            }
        }
    }

    /// Canonical tag for this activity style
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::FoodLocal => "food_local",
            Self::FoodTourist => "food_tourist",
            Self::FoodVegan => "food_vegan",
            Self::Sightseeing => "sightseeing",
            Self::AdventureSport => "adventure_sport",
            Self::Shopping => "shopping",
        }
    }
}

impl fmt::Display for ActivityStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActivityStyle::FoodLocal => "Local food",
            ActivityStyle::FoodTourist => "Tourist dining",
            ActivityStyle::FoodVegan => "Vegan food",
            ActivityStyle::Sightseeing => "Sightseeing",
            ActivityStyle::AdventureSport => "Adventure sport",
            ActivityStyle::Shopping => "Shopping",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, TransportMode::FlightShort)]
    #[case(1499.9, TransportMode::FlightShort)]
    #[case(1500.0, TransportMode::FlightMedium)]
    #[case(3999.9, TransportMode::FlightMedium)]
    #[case(4000.0, TransportMode::FlightLong)]
    #[case(9714.0, TransportMode::FlightLong)]
    fn test_flight_band(#[case] one_way_km: f64, #[case] expected: TransportMode) {
        assert_eq!(TransportMode::flight_band(one_way_km), expected);
    }

    #[test]
    fn test_normalize_only_touches_bare_flight() {
        assert_eq!(
            TransportMode::Flight.normalize(9714.0),
            TransportMode::FlightLong
        );
        assert_eq!(
            TransportMode::FlightShort.normalize(9714.0),
            TransportMode::FlightShort
        );
        assert_eq!(TransportMode::Train.normalize(9714.0), TransportMode::Train);
    }

    #[test]
    fn test_zero_emission_modes() {
        assert_eq!(TransportMode::Bicycle.factor_kg_per_km(), 0.0);
        assert_eq!(TransportMode::Walking.factor_kg_per_km(), 0.0);
    }

    #[rstest]
    #[case("flight", TransportMode::Flight)]
    #[case("train", TransportMode::Train)]
    #[case(" FERRY ", TransportMode::Ferry)]
    #[case("hovercraft", TransportMode::CarSolo)]
    #[case("", TransportMode::CarSolo)]
    fn test_transport_from_tag(#[case] tag: &str, #[case] expected: TransportMode) {
        assert_eq!(TransportMode::from_tag(tag), expected);
    }

    #[rstest]
    #[case("hostel", AccommodationType::Hostel)]
    #[case("eco_lodge", AccommodationType::EcoLodge)]
    #[case("treehouse", AccommodationType::HotelStandard)]
    fn test_accommodation_from_tag(#[case] tag: &str, #[case] expected: AccommodationType) {
        assert_eq!(AccommodationType::from_tag(tag), expected);
    }

    #[rstest]
    #[case("food_vegan", ActivityStyle::FoodVegan)]
    #[case("shopping", ActivityStyle::Shopping)]
    #[case("clubbing", ActivityStyle::FoodLocal)]
    fn test_activity_from_tag(#[case] tag: &str, #[case] expected: ActivityStyle) {
        assert_eq!(ActivityStyle::from_tag(tag), expected);
    }

    #[test]
    fn test_tag_round_trips_for_known_tags() {
        for mode in [
            TransportMode::Flight,
            TransportMode::FlightLong,
            TransportMode::Train,
            TransportMode::Bicycle,
        ] {
            assert_eq!(TransportMode::from_tag(mode.tag()), mode);
        }
        for accommodation in [AccommodationType::Camping, AccommodationType::Airbnb] {
            assert_eq!(
                AccommodationType::from_tag(accommodation.tag()),
                accommodation
            );
        }
        for activity in [ActivityStyle::Sightseeing, ActivityStyle::AdventureSport] {
            assert_eq!(ActivityStyle::from_tag(activity.tag()), activity);
        }
    }

    #[test]
    fn test_flight_factors_fall_with_haul_length() {
        assert!(
            TransportMode::FlightShort.factor_kg_per_km()
                > TransportMode::FlightMedium.factor_kg_per_km()
        );
        assert!(
            TransportMode::FlightMedium.factor_kg_per_km()
                > TransportMode::FlightLong.factor_kg_per_km()
        );
    }

    #[test]
    fn test_shared_car_halves_solo_factor() {
        assert!(
            TransportMode::CarShared.factor_kg_per_km()
                < TransportMode::CarSolo.factor_kg_per_km()
        );
    }
}
