use serde::{Deserialize, Serialize};

use crate::data::sample::RawSample;

pub const FEET_PER_METER: f64 = 3.2808399;
pub const MPS_TO_KMH: f64 = 3.6;
pub const MPS_TO_MPH: f64 = 2.23693629;

/// Which derived quantity a series plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplayMode {
    HorizontalSpeed,
    VerticalSpeed,
    GlideRatio,
    Altitude,
}

impl Default for DisplayMode {
    fn default() -> Self {
        DisplayMode::Altitude
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitSystem {
    Metric,
    Imperial,
}

impl Default for UnitSystem {
    fn default() -> Self {
        UnitSystem::Metric
    }
}

impl UnitSystem {
    /// Multiplier from m/s to km/h or mph.
    pub fn speed_factor(&self) -> f64 {
        match self {
            UnitSystem::Metric => MPS_TO_KMH,
            UnitSystem::Imperial => MPS_TO_MPH,
        }
    }

    /// Multiplier from meters to kilometers or thousands of feet.
    pub fn altitude_factor(&self) -> f64 {
        match self {
            UnitSystem::Metric => 1.0 / 1000.0,
            UnitSystem::Imperial => FEET_PER_METER / 1000.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "Metric",
            UnitSystem::Imperial => "Imperial",
        }
    }
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 4] = [
        DisplayMode::HorizontalSpeed,
        DisplayMode::VerticalSpeed,
        DisplayMode::GlideRatio,
        DisplayMode::Altitude,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DisplayMode::HorizontalSpeed => "Horizontal Speed",
            DisplayMode::VerticalSpeed => "Vertical Speed",
            DisplayMode::GlideRatio => "Glide Ratio",
            DisplayMode::Altitude => "Altitude",
        }
    }

    /// The plotted value for one sample. All unit scaling lives here.
    ///
    /// Glide ratio is 0 whenever the vertical speed is exactly 0.
    pub fn value_of(&self, sample: &RawSample, units: UnitSystem) -> f64 {
        let velocity = sample.velocity_or_zero();
        let speed = units.speed_factor();
        match self {
            DisplayMode::HorizontalSpeed => velocity.horizontal() * speed,
            DisplayMode::VerticalSpeed => velocity.down * speed,
            DisplayMode::GlideRatio => {
                let horizontal = velocity.horizontal() * speed;
                let vertical = velocity.down * speed;
                if vertical != 0.0 {
                    horizontal / vertical
                } else {
                    0.0
                }
            }
            DisplayMode::Altitude => sample.altitude * units.altitude_factor(),
        }
    }

    /// Readout text for a plotted value, e.g. `1234m` or `45.0Km/h`.
    pub fn format_value(&self, value: f64, units: UnitSystem) -> String {
        match self {
            DisplayMode::Altitude => {
                let unit = match units {
                    UnitSystem::Metric => "m",
                    UnitSystem::Imperial => "ft",
                };
                format!("{:.0}{unit}", value * 1000.0)
            }
            DisplayMode::GlideRatio => format!("{value:.2}"),
            DisplayMode::HorizontalSpeed | DisplayMode::VerticalSpeed => {
                let unit = match units {
                    UnitSystem::Metric => "Km/h",
                    UnitSystem::Imperial => "MPH",
                };
                format!("{value:.1}{unit}")
            }
        }
    }

    /// Caption for the unit selector, or `None` when the mode is unitless and
    /// the selector should be hidden.
    pub fn unit_caption(&self, units: UnitSystem) -> Option<&'static str> {
        match (self, units) {
            (DisplayMode::GlideRatio, _) => None,
            (DisplayMode::HorizontalSpeed | DisplayMode::VerticalSpeed, UnitSystem::Metric) => {
                Some("KMPH")
            }
            (DisplayMode::HorizontalSpeed | DisplayMode::VerticalSpeed, UnitSystem::Imperial) => {
                Some("MPH")
            }
            (DisplayMode::Altitude, UnitSystem::Metric) => Some("KM"),
            (DisplayMode::Altitude, UnitSystem::Imperial) => Some("ft (x1000)"),
        }
    }
}
