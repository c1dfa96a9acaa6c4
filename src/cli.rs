use anyhow::{anyhow, Result};

use crate::core::{GameSnapshot, LockEvent};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Fixed bag seed; `None` seeds from the OS
    pub seed: Option<u64>,
    pub help: bool,
}

pub const USAGE: &str = "usage: blockfall [--seed <u64>]";

pub fn parse_args(args: &[String]) -> Result<RunConfig> {
    let mut config = RunConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                let seed = v
                    .parse::<u64>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
                config.seed = Some(seed);
            }
            "-h" | "--help" => config.help = true,
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(config)
}

pub fn status_line(snapshot: &GameSnapshot) -> String {
    let state = if snapshot.game_over {
        "GAME_OVER"
    } else if snapshot.paused {
        "PAUSED"
    } else if snapshot.active.is_some() {
        "PLAY"
    } else {
        "IDLE"
    };
    let next = snapshot.next.map_or("-", |kind| kind.as_str());

    format!(
        "{} EP {} SCORE {} LEVEL {} LINES {} NEXT {}",
        state, snapshot.episode_id, snapshot.score, snapshot.level, snapshot.lines, next
    )
}

pub fn event_line(event: &LockEvent) -> String {
    let mut line = format!(
        "locked {}{}",
        event.kind.as_str(),
        if event.hard_drop { " (hard drop)" } else { "" }
    );
    if event.lines_cleared > 0 {
        line.push_str(&format!(
            ", cleared {} (+{})",
            event.lines_cleared, event.line_clear_score
        ));
    }
    if event.leveled_up {
        line.push_str(&format!(", level {}", event.level));
    }
    line
}
