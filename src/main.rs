use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};

use doodlepad::config::Config;
use doodlepad::export::ExportSettings;
use doodlepad::input::{InputState, ShapeMode};
use doodlepad::replay::{self, ReplayScript};
use doodlepad::{backend, util};

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("DOODLEPAD_GIT_HASH"), ")");

#[derive(Parser, Debug)]
#[command(name = "doodlepad")]
#[command(version = VERSION, about = "Pointer-driven drawing toy for Wayland")]
struct Cli {
    /// Show the drawing overlay immediately
    #[arg(long, short = 'a', action = ArgAction::SetTrue, conflicts_with = "replay")]
    active: bool,

    /// Replay a TOML event script headlessly and export the result
    #[arg(long, short = 'r', value_name = "SCRIPT")]
    replay: Option<PathBuf>,

    /// Directory exported images are written to (overrides config)
    #[arg(long, short = 'o', value_name = "DIR")]
    output: Option<PathBuf>,

    /// Starting shape: squares, circles, grid or text
    #[arg(long, value_name = "SHAPE", value_parser = parse_shape)]
    shape: Option<ShapeMode>,

    /// Starting fill color (#rrggbb or palette name)
    #[arg(long, value_name = "COLOR", value_parser = parse_color)]
    fill: Option<String>,

    /// Starting background color (#rrggbb or palette name)
    #[arg(long, value_name = "COLOR", value_parser = parse_color)]
    background: Option<String>,

    /// Seed the brushes' random choices for reproducible drawings
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// After a replay, also print the canvas as a data: URL
    #[arg(long, action = ArgAction::SetTrue, requires = "replay")]
    print_data_url: bool,
}

fn parse_shape(value: &str) -> Result<ShapeMode, String> {
    value
        .parse()
        .map_err(|()| format!("unknown shape '{value}' (expected squares, circles, grid or text)"))
}

fn parse_color(value: &str) -> Result<String, String> {
    util::resolve_color_spec(value).map_err(|err| err.to_string())
}

impl Cli {
    /// Layers command-line overrides on top of the loaded config.
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(shape) = self.shape {
            config.options.shape = shape;
        }
        if let Some(fill) = &self.fill {
            config.options.fill_color = fill.clone();
        }
        if let Some(background) = &self.background {
            config.options.background_color = background.clone();
        }
    }

    fn export_settings(&self, config: &Config) -> ExportSettings {
        let mut settings = ExportSettings::from_config(&config.export);
        if let Some(dir) = &self.output {
            settings.directory = dir.clone();
        }
        settings
    }
}

fn load_config() -> Config {
    match Config::load() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Failed to load config: {:#}. Using defaults.", e);
            Config::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // Check for Wayland environment
    if cli.active && std::env::var("WAYLAND_DISPLAY").is_err() {
        log::error!("WAYLAND_DISPLAY not set - this application requires Wayland.");
        log::error!("Use --replay to draw without a compositor.");
        return Err(anyhow::anyhow!("Wayland environment required"));
    }

    if let Some(script_path) = &cli.replay {
        let mut config = load_config();
        cli.apply_overrides(&mut config);
        let settings = cli.export_settings(&config);

        let script = ReplayScript::load(script_path)?;
        let outcome = replay::run(&script, config.sketch_state(), cli.seed, &settings)
            .with_context(|| format!("Replay of {} failed", script_path.display()))?;

        for path in &outcome.exports {
            println!("Saved {}", path.display());
        }
        if cli.print_data_url {
            let background = settings
                .include_background
                .then(|| outcome.sketch.options.background.color());
            println!("{}", outcome.canvas.to_data_url(background)?);
        }
    } else if cli.active {
        let mut config = load_config();
        cli.apply_overrides(&mut config);
        let settings = cli.export_settings(&config);

        log::info!("Starting drawing overlay...");
        log::info!("Controls:");
        log::info!("  - Drag to paint with the current shape");
        log::info!("  - Shapes: 1 squares, 2 circles, 3 grid, 4 text");
        log::info!("  - Fill: r g b y o p w k, background: same keys with Shift");
        log::info!("  - Clear: E, Save: S, Help: F10, Status bar: F12");
        log::info!("  - Exit: Escape");

        let input_state = InputState::new(config.sketch_state(), cli.seed, config.ui.show_status_bar);
        backend::run_wayland(config, input_state, settings)?;

        log::info!("Drawing overlay closed.");
    } else {
        // No flags: show usage
        println!("doodlepad: Pointer-driven drawing toy for Wayland");
        println!();
        println!("Usage:");
        println!("  doodlepad --active             Open the drawing overlay");
        println!("  doodlepad --replay <SCRIPT>    Replay an event script and save the image");
        println!("  doodlepad --help               Show all options");
        println!();
        println!("Requirements:");
        println!("  - Wayland compositor with wlr-layer-shell support (for --active)");
    }

    Ok(())
}
