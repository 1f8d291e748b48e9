//! Velocity reconstruction for tracks that only log position and altitude.
//!
//! Horizontal displacement uses the haversine great-circle formula applied to
//! the latitude pair and the longitude pair independently. Longitude is not
//! scaled by the cosine of latitude, so east/west distance is overestimated
//! away from the equator. Acceptable for jump-sized tracks (minutes, a few
//! kilometers); do not reuse as a general geodesic distance.

use crate::data::datetime::seconds_between;
use crate::data::sample::{RawSample, Velocity};

const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance in meters covered by moving from `from_deg` to
/// `to_deg` along one angular axis. Positive when the angle increases.
pub fn signed_haversine(from_deg: f64, to_deg: f64) -> f64 {
    let delta = (to_deg - from_deg).to_radians();
    let a = (delta / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    let distance = EARTH_RADIUS_M * c;
    if delta > 0.0 {
        distance
    } else {
        -distance
    }
}

/// Velocity implied by moving from `prev` to `cur`.
///
/// A non-positive time step yields zero velocity instead of infinities.
pub fn derive(prev: &RawSample, cur: &RawSample) -> Velocity {
    let dt = seconds_between(prev.time, cur.time);
    if !(dt > 0.0) {
        return Velocity::default();
    }

    let lat_distance = signed_haversine(prev.lat, cur.lat);
    // Measured back towards the previous fix, so it is positive heading west.
    let lng_distance = signed_haversine(cur.lng, prev.lng);
    let altitude_diff = cur.altitude - prev.altitude;

    Velocity {
        north: lat_distance / dt,
        east: -lng_distance / dt,
        down: -altitude_diff / dt,
    }
}

/// Fill in velocity for every sample after the first that lacks one, from
/// the difference to its predecessor. The first sample is never back-filled.
///
/// Returns how many samples gained a velocity.
pub fn fill_missing(samples: &mut [RawSample]) -> usize {
    let mut filled = 0;
    for i in 1..samples.len() {
        if samples[i].has_velocity() {
            continue;
        }
        let velocity = derive(&samples[i - 1], &samples[i]);
        samples[i].velocity = Some(velocity);
        filled += 1;
    }
    if filled > 0 {
        tracing::debug!("Derived velocity for {filled} of {} samples", samples.len());
    }
    filled
}
