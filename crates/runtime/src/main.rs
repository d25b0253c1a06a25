#![deny(clippy::all, clippy::pedantic)]

use anyhow::Result;
use clap::Parser;
use rl::{Env, PocketCubeEnv};

/// Random-walk driver for the 2x2x2 cube environment.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Seed for the scrambler and the action draws; entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of episodes to play.
    #[arg(long, default_value_t = 1)]
    episodes: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let mut env = match args.seed {
        Some(seed) => PocketCubeEnv::with_seed(seed),
        None => PocketCubeEnv::new(),
    };
    let mut action_rng = match args.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };

    for episode in 0..args.episodes {
        env.reset();
        let num_actions = env.num_actions();
        let mut total_reward = 0.0_f32;
        let mut done = false;

        while !done {
            let action = action_rng.usize(..num_actions);
            let (_state, reward, finished, _info) = env.step(action)?;
            total_reward += reward;
            done = finished;
        }

        tracing::info!(
            "episode {} finished after {} steps, total reward = {}",
            episode,
            env.steps(),
            total_reward
        );
    }

    Ok(())
}
