//! Demo settings
//!
//! Describes the worm the demo spawns and how finely it traces jumps.
//! Loaded from a JSON file named by `WORMS_SETTINGS`, defaults otherwise.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::error::WormError;
use crate::model::Worm;

/// Environment variable naming the settings file
pub const SETTINGS_ENV: &str = "WORMS_SETTINGS";

/// Failure while reading a settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    Json(#[from] serde_json::Error),
}

/// How many points a traced jump is sampled at
///
/// Accepted from JSON in any case, with `med` as an alias for `Medium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "String")]
pub enum TrajectoryDetail {
    Low,
    #[default]
    Medium,
    High,
}

impl TrajectoryDetail {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrajectoryDetail::Low => "Low",
            TrajectoryDetail::Medium => "Medium",
            TrajectoryDetail::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(TrajectoryDetail::Low),
            "medium" | "med" => Some(TrajectoryDetail::Medium),
            "high" => Some(TrajectoryDetail::High),
            _ => None,
        }
    }

    /// Points sampled along a jump, take-off and landing included
    pub fn samples(&self) -> usize {
        match self {
            TrajectoryDetail::Low => 8,
            TrajectoryDetail::Medium => 24,
            TrajectoryDetail::High => 64,
        }
    }
}

impl TryFrom<String> for TrajectoryDetail {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_str(&s).ok_or_else(|| {
            format!("unknown trajectory detail {s:?}, expected one of low, medium, high")
        })
    }
}

/// The worm the demo starts with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnSettings {
    pub name: String,
    pub x: f64,
    pub y: f64,
    /// Radians, [0, 2π)
    pub orientation: f64,
    pub radius: f64,
    /// Starting action points (maximal when absent)
    #[serde(default)]
    pub action_points: Option<u64>,
}

impl Default for SpawnSettings {
    fn default() -> Self {
        Self {
            name: "Mover".to_string(),
            x: 0.0,
            y: 0.0,
            orientation: 1.0,
            radius: 1.0,
            action_points: None,
        }
    }
}

impl SpawnSettings {
    /// Build the worm these settings describe
    pub fn spawn(&self) -> Result<Worm, WormError> {
        let position = DVec2::new(self.x, self.y);
        match self.action_points {
            Some(points) => Worm::with_action_points(
                self.name.clone(),
                position,
                self.orientation,
                self.radius,
                points,
            ),
            None => Worm::new(self.name.clone(), position, self.orientation, self.radius),
        }
    }
}

/// Demo settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Worm to spawn
    pub spawn: SpawnSettings,
    /// Sampling of traced jumps
    pub trajectory_detail: TrajectoryDetail,
    /// Log filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            spawn: SpawnSettings::default(),
            trajectory_detail: TrajectoryDetail::Medium,
            log_filter: "info".to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Read settings from `path` if one is given
    ///
    /// `Ok(None)` means no file was named and defaults apply.
    pub fn load_optional(path: Option<&Path>) -> Result<Option<Self>, SettingsError> {
        path.map(|p| Self::load_from(p)).transpose()
    }

    /// Read the file named by `WORMS_SETTINGS`, if set
    ///
    /// Does not log, so it can run before a logger is installed.
    pub fn from_env() -> (Option<PathBuf>, Result<Option<Self>, SettingsError>) {
        let path = std::env::var_os(SETTINGS_ENV).map(PathBuf::from);
        let loaded = Self::load_optional(path.as_deref());
        (path, loaded)
    }

    /// Settings to run with, logging where they came from
    ///
    /// A file that cannot be read or parsed is reported and replaced by
    /// the defaults.
    pub fn resolve(path: Option<&Path>, loaded: Result<Option<Self>, SettingsError>) -> Self {
        match (path, loaded) {
            (Some(path), Ok(Some(settings))) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            (Some(path), Err(e)) => {
                log::warn!("{}: {e}, using default settings", path.display());
                Self::default()
            }
            _ => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Load settings from the file named by `WORMS_SETTINGS`
    pub fn load() -> Self {
        let (path, loaded) = Self::from_env();
        Self::resolve(path.as_deref(), loaded)
    }
}
