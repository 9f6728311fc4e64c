//! The worm: state and actions
//!
//! A worm has a position, an orientation in [0, 2π), a radius of at least
//! [`MIN_RADIUS`] and a budget of action points that pays for moving,
//! turning and jumping. Mass and the action point ceiling are derived from
//! the radius on every call and never stored.
//!
//! Every action validates first and only then writes, so an action that
//! returns an error leaves the worm untouched.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

use super::jump::{Launch, is_facing_down};
use super::name::WormName;
use crate::consts::*;
use crate::error::{Result, WormError};
use crate::{direction, normalize_orientation};

/// A single worm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WormSnapshot", into = "WormSnapshot")]
pub struct Worm {
    name: WormName,
    /// x = horizontal, y = vertical
    position: DVec2,
    /// Radians, always in [0, 2π)
    orientation: f64,
    radius: f64,
    action_points: u64,
}

impl Worm {
    /// Create a worm with as many action points as its radius allows
    pub fn new(
        name: impl Into<String>,
        position: DVec2,
        orientation: f64,
        radius: f64,
    ) -> Result<Self> {
        let mut worm = Self::with_action_points(name, position, orientation, radius, 0)?;
        worm.action_points = worm.maximal_action_points();
        Ok(worm)
    }

    /// Create a worm with an explicit number of action points
    ///
    /// A count above the maximum for `radius` leaves the worm with zero
    /// action points.
    pub fn with_action_points(
        name: impl Into<String>,
        position: DVec2,
        orientation: f64,
        radius: f64,
        action_points: u64,
    ) -> Result<Self> {
        let name = WormName::new(name)?;
        if !Self::is_valid_radius(radius) {
            return Err(WormError::invalid_argument(format!(
                "radius {radius} is below the minimum of {MIN_RADIUS}"
            )));
        }
        if !Self::is_valid_orientation(orientation) {
            return Err(WormError::invalid_argument(format!(
                "orientation {orientation} is outside [0, 2π)"
            )));
        }

        let mut worm = Self {
            name,
            position,
            orientation,
            radius,
            action_points: 0,
        };
        if action_points <= worm.maximal_action_points() {
            worm.action_points = action_points;
        } else {
            log::debug!(
                "{}: {} action points exceed the maximum of {}, starting empty",
                worm.name,
                action_points,
                worm.maximal_action_points()
            );
        }
        Ok(worm)
    }

    // === Queries ===

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn horizontal_position(&self) -> f64 {
        self.position.x
    }

    pub fn vertical_position(&self) -> f64 {
        self.position.y
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn orientation(&self) -> f64 {
        self.orientation
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Smallest radius this worm may be given
    pub fn minimal_radius(&self) -> f64 {
        MIN_RADIUS
    }

    /// Mass of a sphere of this radius at [`DENSITY`]
    pub fn mass(&self) -> f64 {
        DENSITY * (4.0 / 3.0) * PI * self.radius.powi(3)
    }

    pub fn action_points(&self) -> u64 {
        self.action_points
    }

    /// Most action points this worm can hold: its mass, rounded
    pub fn maximal_action_points(&self) -> u64 {
        // Saturates for absurd radii
        self.mass().round() as u64
    }

    // === Validity predicates ===

    /// Whether `orientation` lies in [0, 2π)
    pub fn is_valid_orientation(orientation: f64) -> bool {
        (0.0..TAU).contains(&orientation)
    }

    /// Whether any worm may have `radius`
    pub fn is_valid_radius(radius: f64) -> bool {
        radius >= MIN_RADIUS
    }

    // === Setters ===

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        self.name = WormName::new(name)?;
        Ok(())
    }

    /// Change the radius
    ///
    /// Action points are left alone, so shrinking a worm can leave it
    /// holding more points than its new maximum.
    pub fn set_radius(&mut self, radius: f64) -> Result<()> {
        if !Self::is_valid_radius(radius) {
            return Err(WormError::invalid_argument(format!(
                "radius {radius} is below the minimum of {MIN_RADIUS}"
            )));
        }
        self.radius = radius;
        Ok(())
    }

    // === Moving ===

    /// Action points needed to walk `steps` steps along the current orientation
    ///
    /// Vertical progress costs four times as much as horizontal progress.
    pub fn move_cost(&self, steps: i64) -> f64 {
        let per_step =
            self.orientation.cos().abs() + VERTICAL_STEP_COST * self.orientation.sin().abs();
        (steps as f64 * per_step).ceil()
    }

    /// Whether this worm can walk `steps` steps
    pub fn can_move(&self, steps: i64) -> bool {
        steps >= 0 && self.move_cost(steps) <= self.action_points as f64
    }

    /// Walk `steps` steps, each one radius long, along the current orientation
    pub fn move_steps(&mut self, steps: i64) -> Result<()> {
        if !self.can_move(steps) {
            log::debug!(
                "{}: cannot move {} steps with {} action points",
                self.name,
                steps,
                self.action_points
            );
            return Err(WormError::invalid_argument(format!(
                "cannot move {steps} steps with {} action points",
                self.action_points
            )));
        }

        let cost = self.move_cost(steps) as u64;
        self.action_points -= cost;
        self.position += direction(self.orientation) * self.radius * steps as f64;

        log::debug!(
            "{}: moved {} steps to ({:.4}, {:.4}), {} action points left",
            self.name,
            steps,
            self.position.x,
            self.position.y,
            self.action_points
        );
        Ok(())
    }

    // === Turning ===

    /// Action points needed to turn by `angle`
    ///
    /// A full turn costs [`FULL_TURN_COST`], partial turns round up.
    pub fn turn_cost(angle: f64) -> f64 {
        (angle.abs() * FULL_TURN_COST / TAU).ceil()
    }

    /// Whether this worm can afford to turn by `angle`
    pub fn is_valid_rotation_angle(&self, angle: f64) -> bool {
        Self::turn_cost(angle) <= self.action_points as f64
    }

    /// Turn by `angle` radians (counterclockwise when positive)
    ///
    /// # Errors
    ///
    /// Returns `WormError::PreconditionViolation` if the turn cannot be paid
    /// for (see [`Worm::is_valid_rotation_angle`]).
    pub fn turn(&mut self, angle: f64) -> Result<()> {
        if !self.is_valid_rotation_angle(angle) {
            log::debug!(
                "{}: cannot turn by {} with {} action points",
                self.name,
                angle,
                self.action_points
            );
            return Err(WormError::precondition(format!(
                "turning by {angle} rad needs more than {} action points",
                self.action_points
            )));
        }

        self.action_points -= Self::turn_cost(angle) as u64;
        self.orientation = normalize_orientation(self.orientation + angle);

        log::debug!(
            "{}: turned to {:.4} rad, {} action points left",
            self.name,
            self.orientation,
            self.action_points
        );
        Ok(())
    }

    // === Jumping ===

    /// The jump this worm would make right now
    fn launch(&self) -> Launch {
        Launch::new(self.position, self.orientation, self.action_points, self.mass())
    }

    fn check_facing_up(&self) -> Result<()> {
        if is_facing_down(self.orientation) {
            return Err(WormError::BadOrientation(self.orientation));
        }
        Ok(())
    }

    fn check_has_action_points(&self) -> Result<()> {
        if self.action_points == 0 {
            return Err(WormError::invalid_argument(format!(
                "{} has no action points left to jump",
                self.name
            )));
        }
        Ok(())
    }

    /// Jump, spending every remaining action point
    ///
    /// Only the horizontal position changes: the worm lands at the height it
    /// took off from.
    pub fn jump(&mut self) -> Result<()> {
        self.check_has_action_points()?;
        if let Err(err) = self.check_facing_up() {
            log::debug!("{}: refusing to jump, {}", self.name, err);
            return Err(err);
        }

        let launch = self.launch();
        self.action_points = 0;
        self.position = launch.landing();

        log::debug!(
            "{}: jumped {:.4} to x = {:.4}",
            self.name,
            launch.displacement(),
            self.position.x
        );
        Ok(())
    }

    /// Time a jump from the current state would take
    pub fn jump_time(&self) -> Result<f64> {
        self.check_facing_up()?;
        Ok(self.launch().duration())
    }

    /// Position `time` seconds into a jump from the current state
    ///
    /// A worm without action points, or one facing down, stays where it is.
    ///
    /// # Errors
    ///
    /// Returns `WormError::PreconditionViolation` if `time` lies outside
    /// `[0, jump_time()]`.
    pub fn jump_step(&self, time: f64) -> Result<DVec2> {
        if self.action_points == 0 || is_facing_down(self.orientation) {
            return Ok(self.position);
        }

        let launch = self.launch();
        let duration = launch.duration();
        if !(0.0..=duration).contains(&time) {
            return Err(WormError::precondition(format!(
                "time {time} lies outside the jump [0, {duration}]"
            )));
        }
        Ok(launch.position_at(time))
    }

    /// `samples` evenly spaced positions along the jump from the current
    /// state, take-off and landing included
    pub fn jump_trajectory(&self, samples: usize) -> Result<Vec<DVec2>> {
        self.check_has_action_points()?;
        self.check_facing_up()?;
        Ok(self.launch().sample_path(samples))
    }
}

/// Serialized form of a [`Worm`]; decoding runs every constructor check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WormSnapshot {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub orientation: f64,
    pub radius: f64,
    pub action_points: u64,
}

impl TryFrom<WormSnapshot> for Worm {
    type Error = WormError;

    fn try_from(s: WormSnapshot) -> Result<Self> {
        let worm = Worm::with_action_points(
            s.name,
            DVec2::new(s.x, s.y),
            s.orientation,
            s.radius,
            s.action_points,
        )?;
        if worm.action_points != s.action_points {
            return Err(WormError::invalid_argument(format!(
                "{} action points exceed the maximum of {}",
                s.action_points,
                worm.maximal_action_points()
            )));
        }
        Ok(worm)
    }
}

impl From<Worm> for WormSnapshot {
    fn from(worm: Worm) -> Self {
        Self {
            name: worm.name.into(),
            x: worm.position.x,
            y: worm.position.y,
            orientation: worm.orientation,
            radius: worm.radius,
            action_points: worm.action_points,
        }
    }
}
