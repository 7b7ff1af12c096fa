mod frame_input;
mod game_layout;
mod ui_render;
mod ui_text;
mod window_config;

use std::env;
use std::io;
use std::time::Instant;

use macroquad::prelude::*;
use macroquad::window::Conf;
use maze_core::{Session, SessionConfig};
use maze_runner::app_loop::AppState;
use maze_runner::config::{GRID_SIZE_ENV, LaunchOptions};
use maze_runner::score_file::{FileScoringClient, ScoreFile};
use maze_runner::seed::generate_runtime_seed;
use maze_runner::{format_seed, last_run_file};
use taffy::TaffyTree;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::frame_input::capture_frame_input;
use crate::game_layout::{compute_frame_layout, setup_layout};
use crate::ui_render::draw_frame;
use crate::window_config::build_window_conf;

fn window_conf() -> Conf {
    build_window_conf()
}

fn open_score_client() -> FileScoringClient {
    let Some(path) = ScoreFile::get_default_path() else {
        warn!("no data directory; scores will not be saved");
        return FileScoringClient::in_memory();
    };
    match FileScoringClient::open(path.clone()) {
        Ok(client) => client,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "score file unreadable; starting empty");
            FileScoringClient::in_memory()
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();

    let args: Vec<String> = env::args().collect();
    let grid_size = env::var(GRID_SIZE_ENV).ok();
    let options =
        match LaunchOptions::resolve(&args, grid_size.as_deref(), generate_runtime_seed()) {
            Ok(options) => options,
            Err(message) => {
                error!(%message, "invalid arguments");
                eprintln!("maze-runner: {message}");
                return;
            }
        };
    info!(
        seed = %format_seed(options.seed.value()),
        grid = options.grid_side,
        "launching"
    );

    let config = SessionConfig { dimensions: options.dimensions(), ..SessionConfig::default() };
    let mut session = Session::new(config, open_score_client());
    let mut app = AppState::new(options.name.as_deref(), Some(options.seed.value()));
    let last_run_path = last_run_file::get_default_path();

    let mut taffy = TaffyTree::new();
    let nodes = match setup_layout(&mut taffy) {
        Ok(nodes) => nodes,
        Err(err) => {
            error!(error = %err, "layout setup failed");
            return;
        }
    };

    loop {
        let input = capture_frame_input();
        let now = Instant::now();
        let mut next_seed = generate_runtime_seed;
        app.tick(&mut session, &input.keys_pressed, &input.typed, now, &mut next_seed);

        if let (Some(journal), Some(path)) = (app.finished_journals.last(), &last_run_path)
            && let Err(err) = last_run_file::write_atomic(journal, path)
        {
            warn!(path = %path.display(), error = %err, "could not save last run");
        }

        clear_background(BLACK);
        match compute_frame_layout(&mut taffy, &nodes, screen_width(), screen_height()) {
            Ok(layout) => draw_frame(&app, &session, &layout, now),
            Err(err) => warn!(error = %err, "layout failed"),
        }
        next_frame().await
    }
}
