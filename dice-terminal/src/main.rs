/// Dice Terminal - Nine spinning polyhedral dice
///
/// Renders the d2 through d20 grid with true-color shading in the terminal.
/// The picture follows the terminal size; press Q, Esc or Ctrl-C to leave.
use anyhow::Context;
use clap::Parser;
use dice_core::{Scene, SceneConfig};
use dice_terminal::{logging, TerminalApp};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, Parser)]
#[command(name = "dice-terminal", about = "Spinning polyhedral dice in the terminal")]
struct Args {
    /// Target frames per second
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Seed for the dice colors; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// World units between neighbouring dice
    #[arg(long, default_value_t = 15.0)]
    spread: f32,

    /// Vertical field of view in degrees
    #[arg(long, default_value_t = 40.0)]
    fov: f32,

    /// Camera distance from the origin
    #[arg(long, default_value_t = 120.0)]
    distance: f32,

    /// Log filter in env_logger syntax, e.g. "debug" (logs go to stderr)
    #[arg(long)]
    log: Option<String>,
}

impl Args {
    fn scene_config(&self) -> SceneConfig {
        let mut config = SceneConfig {
            spread: self.spread,
            ..SceneConfig::default()
        };
        config.camera.fov_degrees = self.fov;
        config.camera.distance = self.distance;
        config
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_logging(args.log.as_deref());

    let config = args.scene_config();
    let scene = match args.seed {
        Some(seed) => Scene::assemble(&config, &mut StdRng::seed_from_u64(seed)),
        None => Scene::assemble(&config, &mut rand::thread_rng()),
    }
    .context("failed to build the dice scene")?;

    let mut app = TerminalApp::new(scene, args.fps).context("failed to query the terminal")?;
    app.run().context("terminal renderer failed")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_scene_config() {
        let args = Args::parse_from(["dice-terminal"]);
        assert_eq!(args.fps, 30);
        assert_eq!(args.scene_config(), SceneConfig::default());
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "dice-terminal",
            "--spread",
            "10",
            "--fov",
            "55",
            "--distance",
            "90",
            "--seed",
            "4",
        ]);
        let config = args.scene_config();
        assert_eq!(config.spread, 10.0);
        assert_eq!(config.camera.fov_degrees, 55.0);
        assert_eq!(config.camera.distance, 90.0);
        assert_eq!(args.seed, Some(4));
    }
}
