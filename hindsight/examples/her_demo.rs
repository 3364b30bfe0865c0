use anyhow::Result;
use clap::{Parser, ValueEnum};
use hindsight::{CsvVisualizer, SvgVisualizer};
use hindsight_core::{
    ClipConfig, EnvParams, EpisodeRunner, GoalEnv, Normalizer, NullVisualizer, PlotOptions,
    Policy, RandomPolicy, RunnerConfig, Visualizer,
};
use hindsight_kinematic_env::{ManipulatorEnv, ManipulatorEnvConfig};
use hindsight_policy_no_backend::{Actor, Checkpoint};
use log::info;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VisualizerKind {
    Svg,
    Csv,
    Off,
}

/// Run a trained actor in the manipulator and plot goal and achieved paths
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Checkpoint with normalization statistics and actor parameters
    #[arg(long)]
    checkpoint: PathBuf,

    /// YAML configuration of the environment, defaults if omitted
    #[arg(long)]
    env_config: Option<PathBuf>,

    /// Number of episodes
    #[arg(long, default_value_t = 10)]
    demo_length: usize,

    /// Clip bound of raw observations and goals
    #[arg(long, default_value_t = 200.0)]
    clip_obs: f32,

    /// Clip bound of normalized observations and goals
    #[arg(long, default_value_t = 5.0)]
    clip_range: f32,

    /// Random seed of the environment and its action space
    #[arg(long, default_value_t = 123)]
    seed: i64,

    /// Directory the plots are written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Output of the trajectories
    #[arg(long, value_enum, default_value_t = VisualizerKind::Svg)]
    visualizer: VisualizerKind,

    /// Render the environment at every step, overriding headless mode
    #[arg(long, default_value_t = false)]
    render: bool,

    /// Sample actions uniformly instead of running the actor
    #[arg(long, default_value_t = false)]
    random_policy: bool,
}

fn env_config(args: &Args) -> Result<ManipulatorEnvConfig> {
    let config = match &args.env_config {
        Some(path) => ManipulatorEnvConfig::load(path)?,
        None => ManipulatorEnvConfig::default(),
    };
    Ok(match args.render {
        true => config.headless_mode(false),
        false => config,
    })
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let checkpoint = Checkpoint::load(&args.checkpoint)?;
    let clip = ClipConfig::default()
        .clip_obs(args.clip_obs)
        .clip_range(args.clip_range);
    let normalizer = Normalizer::new(checkpoint.norm_stats()?, clip)?;

    let env_config = env_config(&args)?;
    let mut env = ManipulatorEnv::build(&env_config, args.seed)?;
    env.action_space_mut().seed(args.seed as u64);
    let obs = env.reset()?;
    let env_params = EnvParams::from_env(&env, &obs);
    info!("{:?}", env_params);

    let mut policy: Box<dyn Policy> = match args.random_policy {
        true => Box::new(RandomPolicy::new(env.action_space().clone())),
        false => Box::new(Actor::from_state_dict(&checkpoint.params, &env_params)?),
    };

    let runner = EpisodeRunner::new(RunnerConfig {
        demo_length: args.demo_length,
        max_episode_steps: env.max_episode_steps(),
        render: !env_config.headless_mode,
    });
    let rollout = runner.run(&mut env, policy.as_mut(), &normalizer)?;
    let n_success = rollout.episodes.iter().filter(|e| e.is_success).count();
    info!("{} of {} episodes successful", n_success, rollout.episodes.len());

    let mut visualizer: Box<dyn Visualizer> = match args.visualizer {
        VisualizerKind::Svg => Box::new(SvgVisualizer::new(&args.out_dir)),
        VisualizerKind::Csv => Box::new(CsvVisualizer::new(&args.out_dir)),
        VisualizerKind::Off => Box::new(NullVisualizer {}),
    };
    visualizer.show(&rollout.trajectory, &PlotOptions::default())?;

    Ok(())
}
