use std::env;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use mud_repl::{
    Controller, DEFAULT_WORLD, GameError, World, check_world, load_validated_world,
    load_world_from_file,
};

fn load_world(path: Option<&PathBuf>) -> mud_repl::Result<World> {
    match path {
        Some(path) => check_world(load_world_from_file(path)?),
        None => load_validated_world(DEFAULT_WORLD),
    }
}

fn main() -> ExitCode {
    // Logs go to stderr so they never interleave with the game on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let world_path: Option<PathBuf> = env::args().nth(1).map(PathBuf::from);

    let world = match load_world(world_path.as_ref()) {
        Ok(w) => w,
        Err(GameError::Validation(errors)) => {
            eprintln!("World failed validation:");
            for err in errors {
                eprintln!("  - {err}");
            }
            return ExitCode::FAILURE;
        }
        Err(e) => {
            let shown = world_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<built-in>".to_string());
            eprintln!("Failed to load world file '{shown}': {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut controller = Controller::from_world(world);
    let stdin = io::stdin();
    let stdout = io::stdout();

    if let Err(e) = controller.run_game_loop(stdin.lock(), stdout.lock()) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
