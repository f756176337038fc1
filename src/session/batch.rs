//! Batch simulation.

use crate::error::{ConfigError, SessionError};
use crate::event::EventSink;
use crate::options::GameOptions;
use crate::strategy::StrategyLadder;

use super::{BatchSummary, Session, SessionOptions};

/// Runs one session of `rounds` iterations and summarizes it.
///
/// # Errors
///
/// Returns [`SessionError::Config`] for zero rounds or invalid options, and
/// [`SessionError::Round`] if a round aborts.
///
/// # Example
///
/// ```
/// use bjcount::{GameOptions, NullSink, SessionOptions, StrategyLadder, simulate};
///
/// let ladder = StrategyLadder::illustrious();
/// let summary = simulate(
///     &GameOptions::default(),
///     &SessionOptions::default().with_base_bet(10),
///     &ladder,
///     200,
///     42,
///     &NullSink,
/// )
/// .unwrap();
/// assert_eq!(summary.wins + summary.losses + summary.pushes, summary.total_hands);
/// ```
pub fn simulate(
    options: &GameOptions,
    betting: &SessionOptions,
    ladder: &StrategyLadder,
    rounds: usize,
    seed: u64,
    sink: &dyn EventSink,
) -> Result<BatchSummary, SessionError> {
    if rounds == 0 {
        return Err(ConfigError::ZeroRounds.into());
    }
    let mut session = Session::new(options.clone(), betting.clone(), ladder, sink, seed)?;
    let summary = session.run(rounds)?.summary();
    tracing::info!(
        hands = summary.total_hands,
        win_rate = summary.win_rate,
        house_edge = summary.house_edge,
        "simulation finished"
    );
    Ok(summary)
}

/// Splits `rounds` across `workers` independent sessions and merges them.
///
/// Worker `i` plays its own shoe seeded with `seed + i`, starting from the
/// full bankroll, so `final_bankroll` in the summary is the sum over workers.
///
/// # Errors
///
/// Same as [`simulate`]; the first failing worker's error is returned.
#[cfg(feature = "parallel")]
pub fn simulate_parallel(
    options: &GameOptions,
    betting: &SessionOptions,
    ladder: &StrategyLadder,
    rounds: usize,
    seed: u64,
    workers: usize,
    sink: &dyn EventSink,
) -> Result<BatchSummary, SessionError> {
    use alloc::vec::Vec;

    use rayon::prelude::*;

    use super::Tally;

    if rounds == 0 {
        return Err(ConfigError::ZeroRounds.into());
    }
    options.validate()?;
    let workers = workers.clamp(1, rounds);

    let tallies = (0..workers)
        .into_par_iter()
        .map(|worker| {
            let share = rounds / workers + usize::from(worker < rounds % workers);
            let mut session = Session::new(
                options.clone(),
                betting.clone(),
                ladder,
                sink,
                seed.wrapping_add(worker as u64),
            )?;
            session.run(share)
        })
        .collect::<Result<Vec<Tally>, SessionError>>()?;

    let mut total = Tally::default();
    for tally in &tallies {
        total.merge(tally);
    }
    let summary = total.summary();
    tracing::info!(
        workers,
        hands = summary.total_hands,
        win_rate = summary.win_rate,
        house_edge = summary.house_edge,
        "parallel simulation finished"
    );
    Ok(summary)
}
