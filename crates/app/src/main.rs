use std::env;
use std::path::Path;

use app::preview_loop::PreviewState;
use app::seed::{generate_runtime_seed, resolve_launch_options};
use macroquad::prelude::*;
use roomgrid::{LevelConfig, LevelSession};

mod frame_input;
mod grid_render;
mod window_config;

fn window_conf() -> Conf {
    window_config::build_window_conf()
}

fn load_level_config(path: Option<&Path>) -> LevelConfig {
    let Some(path) = path else {
        return LevelConfig::build_default();
    };
    match LevelConfig::load(path) {
        Ok(config) => config,
        Err(err) => {
            log::error!("failed to load {}: {err}; using the sample level", path.display());
            LevelConfig::build_default()
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let options = match resolve_launch_options(&args, generate_runtime_seed()) {
        Ok(options) => options,
        Err(err) => {
            log::error!("{err}");
            return;
        }
    };
    let config = load_level_config(options.config_path.as_deref());
    let mut session = LevelSession::new(config, options.seed.value());
    let mut state = PreviewState::new();
    state.start(&mut session);

    loop {
        let input = frame_input::capture_frame_input();
        if input.quit {
            break;
        }

        let status_height = state.status_lines(&session).len();
        let area = grid_render::grid_area(screen_width(), screen_height(), status_height);
        let layout = session.grid().map(|grid| grid_render::grid_layout(grid, area));
        state.hovered = layout.and_then(|layout| layout.cell_at(input.mouse.0, input.mouse.1));

        state.tick(&mut session, &input.keys_pressed, generate_runtime_seed);

        let lines = state.status_lines(&session);
        let layout = session.grid().map(|grid| grid_render::grid_layout(grid, area));
        grid_render::draw_frame(session.grid(), layout.as_ref(), &lines);

        next_frame().await
    }

    session.teardown();
}
