//! Jump ballistics
//!
//! A jump is a projectile launched from the worm's position along its
//! orientation. The launch speed comes from the force the worm pushes off
//! with: five newtons per remaining action point plus its own weight,
//! applied for half a second.
//!
//! Only the landing distance on the launch height is modelled; terrain
//! does not exist here.

use glam::DVec2;
use std::f64::consts::{FRAC_PI_2, PI};

use crate::consts::{JUMP_FORCE_PER_POINT, STANDARD_ACCELERATION};
use crate::direction;

/// Whether a worm facing `orientation` looks into the lower half-plane
#[inline]
pub fn is_facing_down(orientation: f64) -> bool {
    orientation > PI
}

/// Launch speed for a worm of `mass` spending `action_points`
pub fn initial_velocity(action_points: u64, mass: f64) -> f64 {
    let force = JUMP_FORCE_PER_POINT * action_points as f64 + mass * STANDARD_ACCELERATION;
    force / (mass * 2.0)
}

/// Signed range of a projectile launched at `speed` along `orientation`
///
/// Negative for launches past the vertical (π/2 < θ < π).
pub fn jump_distance(speed: f64, orientation: f64) -> f64 {
    speed.powi(2) * (2.0 * orientation).sin() / STANDARD_ACCELERATION
}

/// A jump as it would happen from a given state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Launch {
    /// Launch point
    pub origin: DVec2,
    /// Launch angle (radians)
    pub orientation: f64,
    /// Launch speed
    pub speed: f64,
}

impl Launch {
    pub fn new(origin: DVec2, orientation: f64, action_points: u64, mass: f64) -> Self {
        Self {
            origin,
            orientation,
            speed: initial_velocity(action_points, mass),
        }
    }

    /// Initial velocity vector
    #[inline]
    pub fn velocity(&self) -> DVec2 {
        direction(self.orientation) * self.speed
    }

    /// Signed range of the jump (see [`jump_distance`])
    #[inline]
    pub fn distance(&self) -> f64 {
        jump_distance(self.speed, self.orientation)
    }

    /// Horizontal displacement on landing
    ///
    /// Points right for launches up to the vertical and left past it.
    pub fn displacement(&self) -> f64 {
        let distance = self.distance().abs();
        if self.orientation > FRAC_PI_2 {
            -distance
        } else {
            distance
        }
    }

    /// Time until the worm is back at launch height
    pub fn duration(&self) -> f64 {
        self.distance() / (self.speed * self.orientation.cos())
    }

    /// Landing point
    pub fn landing(&self) -> DVec2 {
        self.origin + DVec2::new(self.displacement(), 0.0)
    }

    /// Position `t` seconds after take-off
    pub fn position_at(&self, t: f64) -> DVec2 {
        let v = self.velocity();
        DVec2::new(
            self.origin.x + v.x * t,
            self.origin.y + v.y * t - 0.5 * STANDARD_ACCELERATION * t.powi(2),
        )
    }

    /// Sample `samples` evenly spaced positions over the whole flight
    pub fn sample_path(&self, samples: usize) -> Vec<DVec2> {
        let duration = self.duration();
        (0..samples)
            .map(|i| {
                let t = i as f64 / (samples - 1).max(1) as f64;
                self.position_at(t * duration)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::DENSITY;

    const EPS: f64 = 1e-4;

    fn unit_mass() -> f64 {
        DENSITY * 4.0 / 3.0 * PI
    }

    #[test]
    fn test_initial_velocity() {
        // Weight alone gives g/2
        let v = initial_velocity(0, unit_mass());
        assert!((v - STANDARD_ACCELERATION / 2.0).abs() < 1e-12);
        assert!(initial_velocity(4000, unit_mass()) > v);
    }

    #[test]
    fn test_launch_reference_values() {
        let launch = Launch::new(DVec2::ZERO, 1.0, 4000, unit_mass());
        assert!((launch.distance() - 4.741899957).abs() < EPS);
        assert!((launch.duration() - 1.227247104).abs() < EPS);
        assert!((launch.position_at(0.7).x - 2.704695705).abs() < EPS);
        assert!((launch.position_at(0.93).y - 1.355474214).abs() < EPS);
    }

    #[test]
    fn test_displacement_follows_horizontal_direction() {
        let right = Launch::new(DVec2::ZERO, 1.0, 100, unit_mass());
        assert!(right.displacement() > 0.0);

        let left = Launch::new(DVec2::ZERO, PI - 1.0, 100, unit_mass());
        assert!(left.displacement() < 0.0);
        assert!((left.displacement() + right.displacement()).abs() < 1e-9);
        // Flight time is the same either way
        assert!((left.duration() - right.duration()).abs() < 1e-9);
    }

    #[test]
    fn test_lands_at_launch_height() {
        let launch = Launch::new(DVec2::new(3.0, -2.0), 0.8, 250, unit_mass());
        let end = launch.position_at(launch.duration());
        assert!((end.y - launch.origin.y).abs() < 1e-9);
        assert!((end - launch.landing()).length() < 1e-9);
    }

    #[test]
    fn test_sample_path_endpoints() {
        let launch = Launch::new(DVec2::ZERO, 1.0, 4000, unit_mass());
        let path = launch.sample_path(5);
        assert_eq!(path.len(), 5);
        assert_eq!(path[0], DVec2::ZERO);
        assert!((path[4] - launch.landing()).length() < 1e-9);
        assert!(path[2].y > 0.0);

        assert_eq!(launch.sample_path(1), vec![DVec2::ZERO]);
        assert!(launch.sample_path(0).is_empty());
    }

    #[test]
    fn test_facing_down() {
        assert!(!is_facing_down(PI));
        assert!(is_facing_down(3.0 * PI / 2.0));
        assert!(!is_facing_down(0.0));
    }
}
