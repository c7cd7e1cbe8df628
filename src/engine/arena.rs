//! Opponent-vs-opponent arena runner.
//!
//! Plays many games through the same `apply_move` path the presentation
//! layer uses and aggregates win/draw statistics. Useful for comparing
//! strategies and for exercising the whole engine end to end.

use std::collections::HashMap;
use std::time::Instant;

use crate::engine::board::Side;
use crate::engine::error::EngineError;
use crate::engine::opponent::Opponent;
use crate::engine::rules::Outcome;
use crate::engine::session::{GameSession, Mode, SessionConfig};

/// Aggregated results from an arena run.
pub struct ArenaResult {
    pub num_games: usize,
    pub wins: HashMap<String, usize>,
    pub draws: usize,
    pub game_durations_ms: Vec<f64>,
}

impl ArenaResult {
    pub fn win_rate(&self, name: &str) -> f64 {
        *self.wins.get(name).unwrap_or(&0) as f64 / self.num_games.max(1) as f64
    }

    /// Wilson score interval for the win rate.
    pub fn confidence_interval_95(&self, name: &str) -> (f64, f64) {
        let n = self.num_games;
        if n == 0 {
            return (0.0, 0.0);
        }
        let p = self.win_rate(name);
        let z = 1.96_f64;
        let denom = 1.0 + z * z / n as f64;
        let center = (p + z * z / (2.0 * n as f64)) / denom;
        let margin = z * ((p * (1.0 - p) + z * z / (4.0 * n as f64)) / n as f64).sqrt() / denom;
        ((center - margin).max(0.0), (center + margin).min(1.0))
    }

    pub fn summary(&self) -> String {
        let mut lines = vec![format!("Arena Results ({} games)", self.num_games)];
        lines.push("=".repeat(60));
        let mut names: Vec<&String> = self.wins.keys().collect();
        names.sort();
        for name in names {
            let wr = self.win_rate(name);
            let (ci_lo, ci_hi) = self.confidence_interval_95(name);
            lines.push(format!(
                "  {:>12}: {:3} wins ({:5.1}%)  [95% CI: {:.1}%-{:.1}%]",
                name,
                self.wins[name],
                wr * 100.0,
                ci_lo * 100.0,
                ci_hi * 100.0,
            ));
        }
        lines.push(format!("  {:>12}: {}", "Draws", self.draws));
        if !self.game_durations_ms.is_empty() {
            let avg_ms =
                self.game_durations_ms.iter().sum::<f64>() / self.game_durations_ms.len() as f64;
            let total_s = self.game_durations_ms.iter().sum::<f64>() / 1000.0;
            lines.push(format!("  Avg game: {:.2}ms  |  Total: {:.1}s", avg_ms, total_s));
        }
        lines.join("\n")
    }
}

/// Run `num_games` between two named opponents on a `size`x`size` board.
///
/// Circle always moves first; with `alternate_seats` the opponents swap
/// sides every game so the first-move advantage cancels out. Determinism
/// comes from the opponents themselves (construct them seeded).
pub fn run_arena(
    size: usize,
    num_games: usize,
    alternate_seats: bool,
    p1: (&str, &dyn Opponent),
    p2: (&str, &dyn Opponent),
    progress_callback: Option<&dyn Fn(usize, usize)>,
) -> Result<ArenaResult, EngineError> {
    let mut result = ArenaResult {
        num_games,
        wins: [(p1.0.to_string(), 0), (p2.0.to_string(), 0)]
            .into_iter()
            .collect(),
        draws: 0,
        game_durations_ms: Vec::new(),
    };

    let mut session = GameSession::new(SessionConfig {
        size,
        starting_side: Side::Circle,
        mode: Mode::HumanVsAi,
    })?;

    for game_idx in 0..num_games {
        let (circle, cross) = if alternate_seats && game_idx % 2 == 1 {
            (p2, p1)
        } else {
            (p1, p2)
        };

        let t0 = Instant::now();
        let outcome = play_one_game(&mut session, circle.1, cross.1)?;
        result
            .game_durations_ms
            .push(t0.elapsed().as_secs_f64() * 1000.0);

        match outcome {
            Outcome::Won(Side::Circle) => {
                *result.wins.get_mut(circle.0).ok_or_else(|| {
                    EngineError::InvalidArgument(format!("unknown player '{}'", circle.0))
                })? += 1;
            }
            Outcome::Won(Side::Cross) => {
                *result.wins.get_mut(cross.0).ok_or_else(|| {
                    EngineError::InvalidArgument(format!("unknown player '{}'", cross.0))
                })? += 1;
            }
            Outcome::Draw | Outcome::InProgress => result.draws += 1,
        }

        session.restart();

        if let Some(cb) = progress_callback {
            cb(game_idx + 1, num_games);
        }
    }

    Ok(result)
}

fn play_one_game(
    session: &mut GameSession,
    circle: &dyn Opponent,
    cross: &dyn Opponent,
) -> Result<Outcome, EngineError> {
    loop {
        if session.outcome().is_terminal() {
            return Ok(session.outcome());
        }
        let side = session.current_side();
        let opponent = match side {
            Side::Circle => circle,
            Side::Cross => cross,
        };
        let (row, col) = opponent.select_move(session.board(), side)?;
        session.apply_move(row, col)?;
    }
}
