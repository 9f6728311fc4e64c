//! Adapter in front of the worm model
//!
//! Callers on the far side see a single error type, [`ModelError`], and
//! plain `i32` action point counts. Nothing is validated here; every
//! check belongs to the model.

use glam::DVec2;
use thiserror::Error;

use crate::error::WormError;
use crate::model::Worm;

/// The only error that leaves the facade; the model's error is its source
#[derive(Debug, Error, Clone, PartialEq)]
#[error("Model error: {source}")]
pub struct ModelError {
    #[from]
    source: WormError,
}

impl ModelError {
    /// The model error this one wraps
    pub fn cause(&self) -> &WormError {
        &self.source
    }
}

/// Result alias for facade calls
pub type Result<T> = std::result::Result<T, ModelError>;

/// Stateless adapter over [`Worm`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Facade;

/// Narrow an action point count for callers that expect an `i32`
fn narrow(points: u64) -> i32 {
    i32::try_from(points).unwrap_or(i32::MAX)
}

impl Facade {
    pub fn new() -> Self {
        Self
    }

    /// Create a worm at (x, y) with as many action points as its radius allows
    pub fn create_worm(
        &self,
        x: f64,
        y: f64,
        direction: f64,
        radius: f64,
        name: &str,
    ) -> Result<Worm> {
        Ok(Worm::new(name, DVec2::new(x, y), direction, radius)?)
    }

    pub fn can_move(&self, worm: &Worm, steps: i32) -> bool {
        worm.can_move(i64::from(steps))
    }

    pub fn move_worm(&self, worm: &mut Worm, steps: i32) -> Result<()> {
        Ok(worm.move_steps(i64::from(steps))?)
    }

    pub fn can_turn(&self, worm: &Worm, angle: f64) -> bool {
        worm.is_valid_rotation_angle(angle)
    }

    pub fn turn(&self, worm: &mut Worm, angle: f64) -> Result<()> {
        Ok(worm.turn(angle)?)
    }

    pub fn jump(&self, worm: &mut Worm) -> Result<()> {
        Ok(worm.jump()?)
    }

    pub fn jump_time(&self, worm: &Worm) -> Result<f64> {
        Ok(worm.jump_time()?)
    }

    /// Position `t` seconds into the jump, as `[x, y]`
    pub fn jump_step(&self, worm: &Worm, t: f64) -> Result<[f64; 2]> {
        Ok(worm.jump_step(t)?.to_array())
    }

    pub fn x(&self, worm: &Worm) -> f64 {
        worm.horizontal_position()
    }

    pub fn y(&self, worm: &Worm) -> f64 {
        worm.vertical_position()
    }

    pub fn orientation(&self, worm: &Worm) -> f64 {
        worm.orientation()
    }

    pub fn radius(&self, worm: &Worm) -> f64 {
        worm.radius()
    }

    pub fn set_radius(&self, worm: &mut Worm, radius: f64) -> Result<()> {
        Ok(worm.set_radius(radius)?)
    }

    pub fn minimal_radius(&self, worm: &Worm) -> f64 {
        worm.minimal_radius()
    }

    /// Current action points, saturated to `i32::MAX`
    pub fn action_points(&self, worm: &Worm) -> i32 {
        narrow(worm.action_points())
    }

    /// Maximal action points, saturated to `i32::MAX`
    pub fn max_action_points(&self, worm: &Worm) -> i32 {
        narrow(worm.maximal_action_points())
    }

    pub fn name(&self, worm: &Worm) -> String {
        worm.name().to_string()
    }

    pub fn rename(&self, worm: &mut Worm, name: &str) -> Result<()> {
        Ok(worm.set_name(name)?)
    }

    pub fn mass(&self, worm: &Worm) -> f64 {
        worm.mass()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::f64::consts::PI;

    #[test]
    fn test_create_worm_starts_full() {
        let facade = Facade::new();
        let worm = facade.create_worm(1.0, 2.0, 1.0, 1.0, "Facade").unwrap();
        assert_eq!(facade.x(&worm), 1.0);
        assert_eq!(facade.y(&worm), 2.0);
        assert_eq!(facade.orientation(&worm), 1.0);
        assert_eq!(facade.radius(&worm), 1.0);
        assert_eq!(facade.minimal_radius(&worm), 0.25);
        assert_eq!(facade.name(&worm), "Facade");
        assert_eq!(facade.action_points(&worm), 4448);
        assert_eq!(facade.max_action_points(&worm), 4448);
        assert!((facade.mass(&worm) - 4448.49519748).abs() < 1e-4);
    }

    #[test]
    fn test_invalid_name_is_wrapped() {
        let err = Facade.create_worm(0.0, 0.0, 1.0, 1.0, "wormpje").unwrap_err();
        assert!(err.cause().is_invalid_argument());
        let source = err.source().unwrap();
        assert!(source.to_string().starts_with("Invalid argument"));
    }

    #[test]
    fn test_actions_delegate() {
        let facade = Facade::new();
        let mut worm = facade.create_worm(0.0, 0.0, 1.0, 1.0, "Mover").unwrap();

        assert!(facade.can_move(&worm, 10));
        facade.move_worm(&mut worm, 10).unwrap();
        assert_eq!(facade.action_points(&worm), 4448 - 40);

        assert!(facade.can_turn(&worm, -7.0));
        facade.turn(&mut worm, -7.0).unwrap();
        assert!((facade.orientation(&worm) - 0.283185307).abs() < 1e-4);

        let time = facade.jump_time(&worm).unwrap();
        let [x, y] = facade.jump_step(&worm, time).unwrap();
        assert!((y - facade.y(&worm)).abs() < 1e-9);
        facade.jump(&mut worm).unwrap();
        assert!((facade.x(&worm) - x).abs() < 1e-9);
        assert_eq!(facade.action_points(&worm), 0);
    }

    #[test]
    fn test_failures_are_wrapped() {
        let facade = Facade::new();
        let mut worm = facade.create_worm(0.0, 0.0, 3.0 * PI / 2.0, 1.0, "Stander").unwrap();

        assert!(facade.jump(&mut worm).unwrap_err().cause().is_bad_orientation());
        assert!(facade.jump_time(&worm).unwrap_err().cause().is_bad_orientation());
        assert!(facade.move_worm(&mut worm, -1).is_err());
        assert!(facade.turn(&mut worm, 1e9).is_err());
        assert!(facade.set_radius(&mut worm, 0.0).is_err());
        assert!(facade.rename(&mut worm, "G").is_err());

        facade.rename(&mut worm, "Renamed").unwrap();
        assert_eq!(facade.name(&worm), "Renamed");
    }

    #[test]
    fn test_action_points_saturate() {
        let worm = Worm::new("Huge", DVec2::ZERO, 0.0, 100.0).unwrap();
        assert!(worm.maximal_action_points() > i32::MAX as u64);
        assert_eq!(Facade.max_action_points(&worm), i32::MAX);
        assert_eq!(Facade.action_points(&worm), i32::MAX);
    }
}
