use anyhow::{bail, Result};
use indicatif::*;
use log::{debug, info};
use rayon::prelude::*;

use std::time::{Duration, Instant};

use connect4_minimax::{
    search::search, terminal::Status, Agent, GameState, MinimaxAgent, Player, SearchConfig,
    SearchMode,
};

use crate::players::RandomPlayer;

/// What happened in one game of the engine against a random player
#[derive(Clone, Debug)]
pub struct GameRecord {
    pub status: Status,
    pub engine_moves: usize,
    pub engine_nodes: usize,
    pub engine_time: Duration,
    pub fallbacks: usize,
}

/// Plays the engine as player two against a seeded random player one
pub fn play_against_random(config: SearchConfig, seed: u64) -> Result<GameRecord> {
    let mut engine = MinimaxAgent::new(config);
    let mut random = RandomPlayer::new(seed);
    let mut state = GameState::new();
    let mut record = GameRecord {
        status: Status::Playing,
        engine_moves: 0,
        engine_nodes: 0,
        engine_time: Duration::default(),
        fallbacks: 0,
    };

    loop {
        let column = match state.current_player() {
            Player::PlayerOne => random.pick(&state)?,
            Player::PlayerTwo => match engine.get_move(&state) {
                Ok(column) => {
                    if let Some((result, elapsed)) = engine.last_search() {
                        record.engine_moves += 1;
                        record.engine_nodes += result.node_count;
                        record.engine_time += elapsed;
                    }
                    column
                }
                Err(err) => {
                    debug!("engine failed to move ({}), falling back to random", err);
                    record.fallbacks += 1;
                    random.pick(&state)?
                }
            },
        };

        let status = state.play_checked(column)?;
        if status.is_over() {
            record.status = status;
            return Ok(record);
        }
    }
}

/// Plays `games` independent games in parallel and prints the results
pub fn simulate(config: SearchConfig, games: usize, seed: u64) -> Result<()> {
    let start = Instant::now();

    let progress = ProgressBar::new(games as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Simulating games: {bar:40.cyan/blue} {pos}/{len} ~{eta} remaining")
            .progress_chars("█▓▒░  "),
    );

    let records = (0..games)
        .into_par_iter()
        .map(|game| {
            let record = play_against_random(config, seed.wrapping_add(game as u64));
            progress.inc(1);
            record
        })
        .collect::<Result<Vec<_>>>()?;
    progress.finish();

    let count = |status: Status| records.iter().filter(|r| r.status == status).count();
    let engine_moves: usize = records.iter().map(|r| r.engine_moves).sum();
    let engine_nodes: usize = records.iter().map(|r| r.engine_nodes).sum();
    let engine_time: Duration = records.iter().map(|r| r.engine_time).sum();
    let fallbacks: usize = records.iter().map(|r| r.fallbacks).sum();

    let mode = match config.mode {
        SearchMode::Minimax => "minimax",
        SearchMode::AlphaBeta => "alpha-beta",
    };
    println!(
        "{} AI (depth {}) win rate over {} games: {} / {}",
        mode,
        config.max_depth,
        games,
        count(Status::PlayerTwoWin),
        games
    );
    println!(
        "Random wins: {}, draws: {}, random fallbacks: {}",
        count(Status::PlayerOneWin),
        count(Status::Draw),
        fallbacks
    );
    if engine_moves > 0 {
        println!(
            "Mean nodes per AI move: {:.1}, mean time per AI move: {:.4}s",
            engine_nodes as f64 / engine_moves as f64,
            engine_time.as_secs_f64() / engine_moves as f64
        );
    }
    info!("simulation finished in {}", HumanDuration(start.elapsed()));
    Ok(())
}

/// Replays one game against a random player and searches every position with
/// both modes, checking that they agree and reporting the nodes each visited
pub fn compare(max_depth: usize, seed: u64) -> Result<()> {
    let mut random = RandomPlayer::new(seed);
    let mut state = GameState::new();

    println!("Move  Minimax nodes  Time(s)   Alpha-Beta nodes  Time(s)");
    while !state.is_terminal() {
        let start_time = Instant::now();
        let plain = search(&mut state, max_depth, SearchMode::Minimax);
        let plain_time = start_time.elapsed();

        let start_time = Instant::now();
        let pruned = search(&mut state, max_depth, SearchMode::AlphaBeta);
        let pruned_time = start_time.elapsed();

        if (plain.score, plain.best_move) != (pruned.score, pruned.best_move) {
            bail!(
                "search modes disagree after {} moves: minimax {:?}, alpha-beta {:?}\n{}",
                state.board().num_moves(),
                plain,
                pruned,
                state.board()
            );
        }

        println!(
            "{:>4}  {:>13}  {:>7.4}   {:>16}  {:>7.4}",
            state.board().num_moves() + 1,
            plain.node_count,
            plain_time.as_secs_f64(),
            pruned.node_count,
            pruned_time.as_secs_f64()
        );

        // the engine plays its own choice, the random player keeps the games varied
        let column = match (state.current_player(), plain.best_move) {
            (Player::PlayerTwo, Some(column)) => column,
            _ => random.pick(&state)?,
        };
        state.play_checked(column)?;
    }

    println!("Final position ({:?}):\n{}", state.status(), state.board());
    Ok(())
}
