//! Worm model
//!
//! Everything a worm can do lives here. This module must stay pure:
//! - No I/O
//! - No global mutable state (only the constants in `crate::consts`)
//! - Failed actions never leave partial writes behind

pub mod jump;
pub mod name;
pub mod worm;

pub use jump::{Launch, initial_velocity, is_facing_down, jump_distance};
pub use name::WormName;
pub use worm::{Worm, WormSnapshot};
