//! Transport modes and the commute profile
//!
//! Each mode carries only the parameters its cost formula needs, so a car
//! commute can never read an uninitialized transit fare.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// How the commute is made
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TransportMode {
    Car {
        mpg: f64,
        gas_price_per_gallon: f64,
        /// Maintenance and depreciation in dollars per mile
        #[serde(default)]
        maintenance_per_mile: f64,
    },
    ElectricVehicle {
        miles_per_kwh: f64,
        price_per_kwh: f64,
        #[serde(default)]
        maintenance_per_mile: f64,
    },
    PublicTransit {
        /// Daily fare, or the monthly pass price when `is_monthly_pass`
        fare: Money,
        is_monthly_pass: bool,
        /// Walking time to and from stops, one way
        #[serde(default)]
        walking_minutes: f64,
    },
    Biking,
    Walking,
}

impl TransportMode {
    /// A car without a maintenance estimate
    pub fn car(mpg: f64, gas_price_per_gallon: f64) -> Self {
        Self::Car {
            mpg,
            gas_price_per_gallon,
            maintenance_per_mile: 0.0,
        }
    }

    /// An electric vehicle without a maintenance estimate
    pub fn electric(miles_per_kwh: f64, price_per_kwh: f64) -> Self {
        Self::ElectricVehicle {
            miles_per_kwh,
            price_per_kwh,
            maintenance_per_mile: 0.0,
        }
    }

    /// Whether the mode's cost depends on distance travelled
    pub fn uses_distance(&self) -> bool {
        matches!(self, Self::Car { .. } | Self::ElectricVehicle { .. })
    }

    /// Label for the flat extra daily cost of this mode
    pub fn extra_cost_label(&self) -> &'static str {
        match self {
            Self::Biking | Self::Walking => "Gear/maintenance",
            _ => "Tolls/parking",
        }
    }

    /// Label for the mode's primary running cost
    pub fn energy_label(&self) -> &'static str {
        match self {
            Self::Car { .. } => "Fuel",
            Self::ElectricVehicle { .. } => "Electricity",
            Self::PublicTransit { .. } => "Fare",
            Self::Biking | Self::Walking => "Base",
        }
    }

    /// One-way walking minutes added to commute time (transit only)
    pub fn walking_minutes(&self) -> f64 {
        match self {
            Self::PublicTransit {
                walking_minutes, ..
            } => *walking_minutes,
            _ => 0.0,
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Car { .. } => write!(f, "Car"),
            Self::ElectricVehicle { .. } => write!(f, "Electric vehicle"),
            Self::PublicTransit { .. } => write!(f, "Public transit"),
            Self::Biking => write!(f, "Biking"),
            Self::Walking => write!(f, "Walking"),
        }
    }
}

/// Everything about the trip to work
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CommuteProfile {
    pub one_way_minutes: f64,
    /// One-way distance in miles; only car and EV costs use it
    #[serde(default)]
    pub one_way_distance: f64,
    pub mode: TransportMode,
    /// Flat daily extra (tolls/parking, or gear/maintenance for bikes and feet)
    #[serde(default)]
    pub extra_daily_cost: Money,
}

impl CommuteProfile {
    pub fn new(one_way_minutes: f64, one_way_distance: f64, mode: TransportMode) -> Self {
        Self {
            one_way_minutes,
            one_way_distance,
            mode,
            extra_daily_cost: Money::zero(),
        }
    }

    pub fn with_extra_daily_cost(mut self, extra: Money) -> Self {
        self.extra_daily_cost = extra;
        self
    }

    pub fn round_trip_distance(&self) -> f64 {
        self.one_way_distance * 2.0
    }
}
