//! Trip request model for carbon estimation

use serde::{Deserialize, Serialize};

use crate::carbon::{AccommodationType, ActivityStyle, TransportMode};
use crate::config::DefaultsConfig;
use crate::error::WanderwiseError;
use crate::models::{Coordinate, Place};

/// Input to the trip carbon estimator
///
/// Distance is always derived from the two coordinates, never supplied
/// directly, so the estimate stays consistent with the geocoded endpoints.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TripRequest {
    /// Trip origin
    pub origin: Coordinate,
    /// Trip destination
    pub destination: Coordinate,
    /// Transport mode; a bare `Flight` is banded by distance during estimation
    pub transport_mode: TransportMode,
    /// Trip length in days, at least 1
    pub days: u32,
    /// Accommodation for the stay
    pub accommodation: AccommodationType,
    /// Food and activity style for the stay
    pub activity: ActivityStyle,
}

impl TripRequest {
    /// Create a request with the engine defaults: a 7-day trip by flight,
    /// standard hotel, local food
    #[must_use]
    pub fn new(origin: Coordinate, destination: Coordinate) -> Self {
        Self {
            origin,
            destination,
            transport_mode: TransportMode::Flight,
            days: 7,
            accommodation: AccommodationType::HotelStandard,
            activity: ActivityStyle::FoodLocal,
        }
    }

    /// Create a request between two geocoded places
    #[must_use]
    pub fn between(origin: &Place, destination: &Place) -> Self {
        Self::new(origin.coordinate, destination.coordinate)
    }

    /// Create a request using configured default choices
    ///
    /// Tags are parsed with the same fallback rules as user input, so a
    /// typo in the config file degrades to the documented defaults rather
    /// than failing the request.
    #[must_use]
    pub fn from_defaults(
        origin: Coordinate,
        destination: Coordinate,
        defaults: &DefaultsConfig,
    ) -> Self {
        Self {
            origin,
            destination,
            transport_mode: TransportMode::from_tag(&defaults.transport_mode),
            days: defaults.trip_days,
            accommodation: AccommodationType::from_tag(&defaults.accommodation),
            activity: ActivityStyle::from_tag(&defaults.activity),
        }
    }

    /// Check the request invariants: finite in-range coordinates and a
    /// trip length of at least one day
    pub fn validate(&self) -> crate::Result<()> {
        self.origin.validate()?;
        self.destination.validate()?;
        if self.days < 1 {
            return Err(WanderwiseError::invalid_duration(format!(
                "trip length must be at least 1 day, got {}",
                self.days
            )));
        }
        Ok(())
    }
}
