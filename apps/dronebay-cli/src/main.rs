use clap::{Parser, Subcommand, ValueEnum};
use dronebay_input::ActionScript;
use dronebay_kernel::{ActorTuning, Scene};
use dronebay_render::{RecordingRenderer, render_scene};
use dronebay_tools::SceneInspector;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Fixed simulation step, matching the desktop frame rate.
const DT: f32 = 1.0 / 60.0;

#[derive(Parser)]
#[command(name = "dronebay-cli", about = "Headless driver for the drone scene")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and the initial scene
    Info,
    /// Tick the scene with a scripted action sequence and print the result
    Simulate {
        /// Number of ticks to simulate
        #[arg(short, long, default_value = "60")]
        ticks: usize,
        /// Comma-separated actions, one per tick (e.g. "increase-spin*3,roll,forward")
        #[arg(short, long, default_value = "")]
        script: String,
        /// Camera to report (1 = global, 2 = chopper, 3 = first-person)
        #[arg(short, long, default_value = "1")]
        camera: usize,
        /// YAML file overriding actor tuning
        #[arg(long)]
        tuning: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: Format,
        /// Also print the draw list of the final frame
        #[arg(long)]
        draws: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Info => {
            println!("dronebay-cli v{}", env!("CARGO_PKG_VERSION"));
            print!("{}", SceneInspector::summary(&Scene::new()));
        }
        Commands::Simulate {
            ticks,
            script,
            camera,
            tuning,
            format,
            draws,
        } => {
            let script: ActionScript = script.parse()?;
            let tuning = match tuning {
                Some(path) => ActorTuning::load(&path)?,
                None => ActorTuning::default(),
            };

            let mut scene = Scene::with_tuning(tuning, 4.0 / 3.0);
            scene.select_camera(camera.saturating_sub(1));
            tracing::info!(ticks, actions = script.len(), "simulating");
            script.run(&mut scene, ticks, DT);

            let summary = SceneInspector::summary(&scene);
            match format {
                Format::Text => print!("{summary}"),
                Format::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
            }

            if draws {
                let mut recorder = RecordingRenderer::new();
                render_scene(&scene, &mut recorder);
                print!("{recorder}");
            }
        }
    }

    Ok(())
}
