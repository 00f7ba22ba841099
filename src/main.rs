//! Magic Survival entry point
//!
//! Runs the game headless: the autopilot plays through the real screen
//! state machine and a JSON run summary is printed at the end.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use clap::Parser;
    use magic_survival::renderer::vertex::Vertex;
    use magic_survival::sim::{Bounds, RunStats};
    use magic_survival::ui::{Screen, UiEvent};
    use magic_survival::{ConfigError, Game, Settings, Tuning};
    use serde::Serialize;

    /// Default tick limit: five simulated minutes
    const DEFAULT_TICKS: u64 = 60 * 60 * 5;

    #[derive(Debug, Parser)]
    #[command(name = "magic-survival")]
    #[command(about = "Play a headless Magic Survival run and print its summary")]
    pub struct Cli {
        /// Base seed for the run's RNG
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Stop after this many simulation ticks
        #[arg(long, default_value_t = DEFAULT_TICKS)]
        ticks: u64,
        /// JSON file overriding gameplay tuning
        #[arg(long)]
        tuning: Option<PathBuf>,
        /// JSON file with display settings
        #[arg(long)]
        settings: Option<PathBuf>,
    }

    #[derive(Serialize)]
    struct Summary<'a> {
        seed: u64,
        ticks: u64,
        final_screen: &'static str,
        stats: &'a RunStats,
    }

    fn click_center(game: &mut Game, bounds: Bounds) {
        game.handle_event(UiEvent::Click(bounds.center()));
    }

    pub fn run(cli: Cli) -> Result<(), ConfigError> {
        let settings = match &cli.settings {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        let tuning = match &cli.tuning {
            Some(path) => Tuning::load(path)?,
            None => Tuning::default(),
        };
        tuning.validate()?;

        let mut game = Game::new(settings, tuning, cli.seed);
        let layout = game.layout();
        let frame_dt = game.frame_dt();
        click_center(&mut game, layout.start_button().rect);
        click_center(&mut game, layout.class_box());
        click_center(&mut game, layout.begin_button().rect);

        let mut ticks = 0;
        while game.is_running() && ticks < cli.ticks {
            match game.screen() {
                Screen::Running => ticks += game.update_autopilot(frame_dt) as u64,
                Screen::LevelUp { choices, .. } => {
                    // Take the first offer
                    let Some(cell) = layout.upgrade_grid(choices.len()).first().copied() else {
                        break;
                    };
                    click_center(&mut game, cell);
                }
                Screen::GameOver => {
                    click_center(&mut game, layout.details_button().rect);
                    break;
                }
                _ => break,
            }
        }

        let vertices = game.vertices();
        log::debug!(
            "Final {} screen: {} vertices ({} bytes)",
            game.screen().name(),
            vertices.len(),
            bytemuck::cast_slice::<Vertex, u8>(&vertices).len()
        );

        let summary = Summary {
            seed: cli.seed,
            ticks,
            final_screen: game.screen().name(),
            stats: game.stats(),
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
        Ok(())
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;

    let cli = native::Cli::parse();
    env_logger::init();
    log::info!("Magic Survival (native) starting...");

    if let Err(err) = native::run(cli) {
        log::error!("{}", err);
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser host; the library is usable from a wasm embedder directly
}
