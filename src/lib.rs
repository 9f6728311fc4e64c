//! Worms - kinematics of a single worm in a 2D plane
//!
//! Core modules:
//! - `model`: The worm itself (state, actions, jump ballistics)
//! - `facade`: Adapter exposing the model behind a single error type
//! - `settings`: Demo configuration, loadable from JSON
//! - `error`: Error kinds raised by the model

pub mod error;
pub mod facade;
pub mod model;
pub mod settings;

pub use error::WormError;
pub use facade::{Facade, ModelError};
pub use model::{Worm, WormName};
pub use settings::{Settings, TrajectoryDetail};

use glam::DVec2;

/// Physical constants shared by every worm
pub mod consts {
    /// Density relating volume to mass (kg/m³)
    pub const DENSITY: f64 = 1062.0;
    /// Standard gravitational acceleration (m/s²)
    pub const STANDARD_ACCELERATION: f64 = 9.80665;
    /// Smallest radius any worm may have
    pub const MIN_RADIUS: f64 = 0.25;

    /// Action points spent on a full 2π turn
    pub const FULL_TURN_COST: f64 = 60.0;
    /// Weight of the vertical component of a step (climbing is expensive)
    pub const VERTICAL_STEP_COST: f64 = 4.0;
    /// Action points turned into launch force per point spent on a jump
    pub const JUMP_FORCE_PER_POINT: f64 = 5.0;
}

/// Normalize an angle to [0, 2π)
///
/// Uses the truncated remainder and adds 2π to negative results, so a
/// turn of -7 from 1 lands on 2π - 6.
#[inline]
pub fn normalize_orientation(angle: f64) -> f64 {
    use std::f64::consts::TAU;
    let mut wrapped = angle % TAU;
    if wrapped < 0.0 {
        wrapped += TAU;
    }
    // -ε + 2π can round up to exactly 2π
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f64, theta: f64) -> DVec2 {
    DVec2::new(r * theta.cos(), r * theta.sin())
}

/// Unit vector pointing along `theta`
#[inline]
pub fn direction(theta: f64) -> DVec2 {
    polar_to_cartesian(1.0, theta)
}
