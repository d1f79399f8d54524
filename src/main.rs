use quintic_drive::config::Config;
use quintic_drive::export::{write_trajectory_csv, write_waypoints_csv};
use quintic_drive::*;

/// Main function for the trajectory generator
fn main() -> Result<(), PlanningError> {
    env_logger::builder()
        .parse_env(env_logger::Env::default().default_filter_or("info"))
        .init();
    let mut config_str = "config/path.yaml";
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        log::warn!("Usage: {} <config.yaml>.", args[0]);
        log::warn!("Loading default configuration: {config_str}");
    } else {
        log::info!("Loading configuration: {}", args[1]);
        config_str = args[1].as_str();
    }
    let config = Config::from_yaml(config_str)?;
    let planner = QuinticPathPlanner::new(config.planner.clone());
    let path = Path::with_click_points(&planner, config.waypoints(), config.robot.track_width)?;
    log::info!(
        "Path through {} waypoints: {:.3} s, {:.3} ft, {} samples",
        path.click_points.len(),
        path.total_time(),
        path.total_distance(),
        path.path_points.len()
    );
    if let Some(output) = &config.output {
        if let Some(file) = &output.center_csv {
            write_trajectory_csv(file, path.trajectory())?;
            log::info!("Wrote center trajectory to {file}");
        }
        if let Some(file) = &output.left_csv {
            write_waypoints_csv(file, &path.left_points)?;
            log::info!("Wrote left wheel trajectory to {file}");
        }
        if let Some(file) = &output.right_csv {
            write_waypoints_csv(file, &path.right_points)?;
            log::info!("Wrote right wheel trajectory to {file}");
        }
    }
    Ok(())
}
