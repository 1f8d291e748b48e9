use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// North/east/down velocity in meters per second. Positive `down` means
/// descending.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Velocity {
    pub north: f64,
    pub east: f64,
    pub down: f64,
}

impl Velocity {
    pub fn new(north: f64, east: f64, down: f64) -> Self {
        Self { north, east, down }
    }

    /// Ground speed, the magnitude of the east/north components.
    pub fn horizontal(&self) -> f64 {
        self.east.hypot(self.north)
    }
}

/// One logged fix: when, where, how high, and optionally how fast.
///
/// Loggers that report velocity fill `velocity` directly. Track formats that
/// only carry positions leave it `None` until the velocity deriver runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSample {
    pub time: DateTime<Utc>,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
    /// Altitude in meters.
    pub altitude: f64,
    pub velocity: Option<Velocity>,
}

impl RawSample {
    pub fn new(time: DateTime<Utc>, lat: f64, lng: f64, altitude: f64) -> Self {
        Self {
            time,
            lat,
            lng,
            altitude,
            velocity: None,
        }
    }

    pub fn with_velocity(mut self, velocity: Velocity) -> Self {
        self.velocity = Some(velocity);
        self
    }

    pub fn has_velocity(&self) -> bool {
        self.velocity.is_some()
    }

    /// Velocity as used for display; samples without one read as at rest.
    pub fn velocity_or_zero(&self) -> Velocity {
        self.velocity.unwrap_or_default()
    }
}
