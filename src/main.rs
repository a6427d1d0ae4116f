//! scene3d - writes the demo scene document
//!
//! Output path, scene name, and log level come from configuration.

use std::process::ExitCode;

use scene3d::config::AppConfig;
use scene3d::{Color, SceneBuilder};
use scene3d_math::Vec3;

/// Ground slab, a blue cone, and four white lights around one camera
fn demo_scene() -> SceneBuilder {
    SceneBuilder::new()
        .add_camera(Vec3::new(0.0, 2.0, 0.0), 0.0)
        .add_light(Vec3::new(0.0, 100.0, 0.0), Color::WHITE)
        .add_light(Vec3::new(0.0, -100.0, 0.0), Color::WHITE)
        .add_light(Vec3::new(-100.0, 100.0, 0.0), Color::WHITE)
        .add_light(Vec3::new(100.0, -100.0, 0.0), Color::WHITE)
        .add_box(Vec3::new(0.0, -25.0, 0.0), 1000.0, 50.0, 1000.0, Color::GRAY)
        .add_cone(Vec3::new(4.0, 0.0, 0.0), 0.5, 6.0, Color::BLUE)
}

fn init_logging(level: &str) {
    let mut builder = env_logger::Builder::new();
    if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        builder.parse_filters(level);
    }
    builder.init();
}

fn main() -> ExitCode {
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_logging(&config.logging.level);
    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    let output = &config.output;
    match demo_scene().save_with(&output.path, &output.scene_name, output.pretty) {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
