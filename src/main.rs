use anyhow::{Context, Result};
use chrono::Local;

use gridworld::{
    Agent, ENV_ID, Environment, GridWorld, RandomAgent, RenderMode, default_registry, logging,
    render,
};

const DEFAULT_EPISODES: usize = 5;

// Runs a few episodes of the grid world with a random agent.
// Usage: gridworld [episodes] [render]
fn main() -> Result<()> {
    logging::init();

    let args = std::env::args().skip(1).collect::<Vec<String>>();
    let episodes = match args.first() {
        Some(raw) => raw
            .parse::<usize>()
            .with_context(|| format!("episodes must be a number, got {raw:?}"))?,
        None => DEFAULT_EPISODES,
    };
    let visualized = args.get(1).is_some_and(|flag| flag == "render");

    let run_id = Local::now().format("%Y%m%d-%H%M%S").to_string();
    tracing::info!(%run_id, episodes, visualized, "starting run");

    let mut env = default_registry().make(ENV_ID, visualized)?;
    let mut agent = RandomAgent::<GridWorld>::new();

    for episode in 0..episodes {
        let mut snapshot = env.reset();
        let mut total: f32 = snapshot.reward;
        let mut steps = 0;

        while !snapshot.done && steps < GridWorld::MAX_STEPS {
            let Some(action) = agent.react(&snapshot.state) else {
                break;
            };
            snapshot = env.step(action);
            total += snapshot.reward;
            steps += 1;

            if visualized {
                if let Some(frame) = env.render(RenderMode::Ansi)? {
                    let title = format!("episode {episode} step {steps}");
                    println!("{}", render::caption(&frame, &title));
                }
            }
        }

        tracing::info!(
            %run_id,
            episode,
            steps,
            total,
            reached_goal = snapshot.done,
            "episode finished at {}",
            snapshot.state
        );
    }

    env.close();
    Ok(())
}
