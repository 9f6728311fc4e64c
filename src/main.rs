//! Worms demo entry point
//!
//! Spawns the worm described by the settings, walks it through a move, a
//! turn and a jump, and logs what happens. `RUST_LOG=debug` shows every
//! action as the model sees it.

use worms::Settings;
use worms::facade::Facade;

fn main() {
    // Read quietly first: the file may carry the log filter
    let (path, loaded) = Settings::from_env();
    let log_filter = match &loaded {
        Ok(Some(settings)) => settings.log_filter.clone(),
        _ => Settings::default().log_filter,
    };
    let env = env_logger::Env::default().default_filter_or(log_filter);
    env_logger::Builder::from_env(env).init();
    log::info!("Worms demo starting...");

    let settings = Settings::resolve(path.as_deref(), loaded);
    log::info!(
        "Trajectory detail: {} ({} samples)",
        settings.trajectory_detail.as_str(),
        settings.trajectory_detail.samples()
    );

    let mut worm = match settings.spawn.spawn() {
        Ok(worm) => worm,
        Err(e) => {
            log::error!("Cannot spawn worm: {e}");
            std::process::exit(1);
        }
    };
    log::info!(
        "Spawned {} at ({:.3}, {:.3}) facing {:.3} rad, {} / {} action points",
        worm.name(),
        worm.horizontal_position(),
        worm.vertical_position(),
        worm.orientation(),
        worm.action_points(),
        worm.maximal_action_points()
    );

    let facade = Facade::new();
    let steps = 10;
    if facade.can_move(&worm, steps) {
        if let Err(e) = facade.move_worm(&mut worm, steps) {
            log::warn!("Move failed: {e}");
        }
    } else {
        log::warn!("{} cannot afford {} steps", worm.name(), steps);
    }

    let angle = -0.5;
    match facade.turn(&mut worm, angle) {
        Ok(()) => log::info!("Now facing {:.3} rad", worm.orientation()),
        Err(e) => log::warn!("Turn failed: {e}"),
    }

    match worm.jump_trajectory(settings.trajectory_detail.samples()) {
        Ok(path) => {
            for (i, point) in path.iter().enumerate() {
                log::info!("  jump[{i:02}] = ({:.3}, {:.3})", point.x, point.y);
            }
        }
        Err(e) => log::warn!("No trajectory: {e}"),
    }

    match facade.jump(&mut worm) {
        Ok(()) => log::info!(
            "Landed at ({:.3}, {:.3})",
            worm.horizontal_position(),
            worm.vertical_position()
        ),
        Err(e) => log::warn!("Jump failed: {e}"),
    }

    match serde_json::to_string_pretty(&worm) {
        Ok(json) => log::info!("Final state:\n{json}"),
        Err(e) => log::error!("Cannot serialize worm: {e}"),
    }
}
