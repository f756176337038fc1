//! Session loop and batch simulation tests.

use bjcount::{
    ACE, AuditLog, BetRamp, Card, ConfigError, DECK_SIZE, Event, GameOptions, JACK, KING,
    NullSink, RecordingSink, RoundReport, Session, SessionError, SessionOptions, Shoe,
    StrategyLadder, Suit, simulate,
};
use proptest::prelude::*;

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn flat_betting(base_bet: usize, bankroll: usize) -> SessionOptions {
    SessionOptions::default()
        .with_base_bet(base_bet)
        .with_bankroll(bankroll)
        .with_bet_ramp(BetRamp::flat(1))
}

#[test]
fn session_options_defaults() {
    let options = SessionOptions::default();
    assert_eq!(options.base_bet, 1);
    assert_eq!(options.bankroll, 1000);
    assert_eq!(options.bet_ramp, BetRamp::default());
}

#[test]
fn round_settles_into_bankroll_and_count() {
    let draws = [
        card(Suit::Spades, 10),
        card(Suit::Hearts, 7),
        card(Suit::Clubs, 6),
        card(Suit::Diamonds, 10),
        card(Suit::Hearts, KING),
    ];
    let shoe = Shoe::stacked(1, &draws, 5).unwrap();
    let ladder = StrategyLadder::illustrious();
    let sink = RecordingSink::new();
    let mut session = Session::with_shoe(
        GameOptions::default().with_decks(1),
        SessionOptions::default().with_base_bet(10),
        &ladder,
        &sink,
        shoe,
    )
    .unwrap();

    let report = session.play_next().unwrap();

    let RoundReport::Played {
        round,
        audit,
        reshuffled,
    } = report
    else {
        panic!("expected a played round");
    };
    assert_eq!(round.net(), -10.0);
    assert_eq!(audit.hand_index, 0);
    assert_eq!(audit.balance, 990.0);
    assert_eq!(audit.running_count, -2);
    assert_eq!(audit.true_count, 0.0);
    assert!(reshuffled);

    assert_eq!(session.bankroll(), 990.0);
    assert_eq!(session.running_count(), 0);
    assert_eq!(session.shoe_profit(), 0.0);
    assert_eq!(session.shoe().remaining(), DECK_SIZE);

    let events = sink.events();
    assert!(events.contains(&Event::RoundStarted {
        bet: 10,
        true_count: 0.0,
    }));
    assert!(events.contains(&Event::Reshuffled { shoe_profit: -10.0 }));
}

#[test]
fn natural_pays_three_to_two_on_one_unit() {
    let draws = [
        card(Suit::Spades, ACE),
        card(Suit::Hearts, 9),
        card(Suit::Clubs, KING),
        card(Suit::Diamonds, 7),
    ];
    let shoe = Shoe::stacked(1, &draws, 3).unwrap();
    let ladder = StrategyLadder::illustrious();
    let mut session = Session::with_shoe(
        GameOptions::default().with_decks(1),
        SessionOptions::default(),
        &ladder,
        &NullSink,
        shoe,
    )
    .unwrap();

    let RoundReport::Played { round, audit, .. } = session.play_next().unwrap() else {
        panic!("expected a played round");
    };
    assert_eq!(round.net(), 1.5);
    assert_eq!(audit.balance, 1001.5);
    assert_eq!(session.bankroll(), 1001.5);
    assert_eq!(session.shoe_profit(), 1.5);
}

#[test]
fn low_count_sits_out_and_resets() {
    // Four tens push and leave the count at -4 with 48 cards left.
    let draws = [
        card(Suit::Spades, 10),
        card(Suit::Hearts, 10),
        card(Suit::Clubs, JACK),
        card(Suit::Diamonds, KING),
    ];
    let shoe = Shoe::stacked(1, &draws, 9).unwrap();
    let ladder = StrategyLadder::illustrious();
    let sink = RecordingSink::new();
    let betting = SessionOptions::default()
        .with_base_bet(5)
        .with_bet_ramp(BetRamp::flat(0).with_step(-1.0, 1));
    let mut session = Session::with_shoe(
        GameOptions::default().with_decks(1),
        betting,
        &ladder,
        &sink,
        shoe,
    )
    .unwrap();

    let RoundReport::Played { round, .. } = session.play_next().unwrap() else {
        panic!("expected a played round");
    };
    assert_eq!(round.net(), 0.0);
    assert_eq!(session.running_count(), -4);

    let report = session.play_next().unwrap();
    assert!(matches!(report, RoundReport::SatOut { true_count } if true_count < -4.0));
    assert_eq!(session.running_count(), 0);
    assert_eq!(session.shoe().remaining(), DECK_SIZE);
    assert_eq!(session.bankroll(), 1000.0);
    assert!(
        sink.events()
            .iter()
            .any(|event| matches!(event, Event::SatOut { .. }))
    );

    assert!(matches!(
        session.play_next().unwrap(),
        RoundReport::Played { .. }
    ));
}

#[test]
fn ramp_that_never_bets_is_rejected() {
    let ladder = StrategyLadder::illustrious();
    let never = SessionOptions::default()
        .with_base_bet(5)
        .with_bet_ramp(BetRamp::flat(0));
    assert_eq!(never.validate(), Err(ConfigError::RampNeverBets));
    let session = Session::new(GameOptions::default(), never, &ladder, &NullSink, 9);
    assert_eq!(session.err(), Some(ConfigError::RampNeverBets));

    let free = SessionOptions::default()
        .with_base_bet(0)
        .with_bet_ramp(BetRamp::flat(0));
    assert_eq!(free.validate(), Ok(()));
}

#[test]
fn sit_outs_do_not_count_towards_the_batch() {
    let ladder = StrategyLadder::illustrious();
    let summary = simulate(
        &GameOptions::default().with_decks(1),
        &flat_betting(1, 1_000_000).with_bet_ramp(BetRamp::default()),
        &ladder,
        5_000,
        0,
        &NullSink,
    )
    .unwrap();

    assert!(summary.rounds_skipped > 0);
    assert_eq!(summary.total_hands, 5_000);
    assert_eq!(summary.wins + summary.losses + summary.pushes, 5_000);
}

#[test]
fn zero_base_bet_still_plays() {
    let ladder = StrategyLadder::illustrious();
    let betting = SessionOptions::default().with_base_bet(0);
    let mut session =
        Session::new(GameOptions::default(), betting, &ladder, &NullSink, 4).unwrap();

    let tally = session.run(30).unwrap();
    assert_eq!(tally.rounds, 30);
    assert_eq!(tally.net_profit, 0.0);
    assert_eq!(tally.final_bankroll, 1000.0);
}

#[test]
fn empty_bankroll_is_bankrupt() {
    let ladder = StrategyLadder::illustrious();
    let sink = RecordingSink::new();
    let mut session = Session::new(
        GameOptions::default(),
        flat_betting(10, 0),
        &ladder,
        &sink,
        1,
    )
    .unwrap();

    assert_eq!(session.play_next().unwrap(), RoundReport::Bankrupt);
    assert_eq!(sink.events(), vec![Event::Bankrupt]);
    let tally = session.run(10).unwrap();
    assert_eq!(tally.rounds, 0);
    assert_eq!(tally.final_bankroll, 0.0);
}

#[test]
fn small_bankroll_runs_out() {
    let ladder = StrategyLadder::illustrious();
    let mut session = Session::new(
        GameOptions::default(),
        flat_betting(50, 100),
        &ladder,
        &NullSink,
        2,
    )
    .unwrap();

    let tally = session.run(100_000).unwrap();
    assert!(tally.rounds < 100_000);
    assert!(session.bankroll() < 1.0);
    assert_eq!(tally.final_bankroll, session.bankroll());
}

#[test]
fn invalid_configuration_is_rejected() {
    let ladder = StrategyLadder::illustrious();
    let betting = SessionOptions::default();

    assert_eq!(
        simulate(&GameOptions::default(), &betting, &ladder, 0, 1, &NullSink),
        Err(SessionError::Config(ConfigError::ZeroRounds))
    );
    assert_eq!(
        simulate(&GameOptions::default().with_decks(0), &betting, &ladder, 10, 1, &NullSink),
        Err(SessionError::Config(ConfigError::ZeroDecks))
    );
    assert_eq!(
        simulate(&GameOptions::default().with_penetration(1.0), &betting, &ladder, 10, 1, &NullSink),
        Err(SessionError::Config(ConfigError::InvalidPenetration))
    );
    assert_eq!(
        simulate(&GameOptions::default().with_blackjack_pays(-1.0), &betting, &ladder, 10, 1, &NullSink),
        Err(SessionError::Config(ConfigError::InvalidPayout))
    );
}

#[test]
fn simulation_is_reproducible() {
    let ladder = StrategyLadder::illustrious();
    let options = GameOptions::default().with_decks(6);
    let betting = SessionOptions::default().with_base_bet(10).with_bankroll(100_000);

    let first = simulate(&options, &betting, &ladder, 2_000, 77, &NullSink).unwrap();
    let second = simulate(&options, &betting, &ladder, 2_000, 77, &NullSink).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.total_hands, 2_000);
}

#[test]
fn summary_fields_are_consistent() {
    let ladder = StrategyLadder::illustrious();
    let summary = simulate(
        &GameOptions::default(),
        &flat_betting(10, 1_000_000),
        &ladder,
        5_000,
        123,
        &NullSink,
    )
    .unwrap();

    assert_eq!(summary.total_hands, 5_000);
    assert_eq!(summary.rounds_skipped, 0);
    assert_eq!(summary.wins + summary.losses + summary.pushes, 5_000);
    assert!(summary.total_wagered >= 50_000);
    assert!(summary.player_blackjacks > 0);
    assert!(summary.dealer_busts > 0);
    assert!(summary.player_busts > 0);
    let expected_edge = -summary.net_profit / summary.total_wagered as f64 * 100.0;
    assert_eq!(summary.house_edge, expected_edge);
    assert_eq!(summary.final_bankroll, 1_000_000.0 + summary.net_profit);
    assert!(summary.to_string().contains("Total hands:       5000"));
}

#[test]
fn audit_log_writes_one_line_per_round() {
    let ladder = StrategyLadder::illustrious();
    let log = AuditLog::new(Vec::new());
    let mut session = Session::new(
        GameOptions::default(),
        flat_betting(1, 1000),
        &ladder,
        &log,
        31,
    )
    .unwrap();
    session.run(3).unwrap();
    drop(session);

    let text = String::from_utf8(log.into_inner()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    for (index, line) in lines.iter().enumerate() {
        assert!(line.starts_with(&format!("hand={index} balance=")));
        assert!(line.contains(" running_count="));
        assert!(line.contains(" true_count="));
    }
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_simulation_covers_every_round() {
    let ladder = StrategyLadder::illustrious();
    let betting = flat_betting(1, 1_000_000);
    let options = GameOptions::default();

    let summary =
        bjcount::simulate_parallel(&options, &betting, &ladder, 1_001, 8, 4, &NullSink).unwrap();
    assert_eq!(summary.total_hands, 1_001);
    assert_eq!(summary.wins + summary.losses + summary.pushes, 1_001);
    assert_eq!(summary.final_bankroll, 4_000_000.0 + summary.net_profit);

    let again =
        bjcount::simulate_parallel(&options, &betting, &ladder, 1_001, 8, 4, &NullSink).unwrap();
    assert_eq!(summary, again);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn every_requested_round_is_settled(seed in any::<u64>(), rounds in 1usize..300) {
        let ladder = StrategyLadder::illustrious();
        let summary = simulate(
            &GameOptions::default(),
            &SessionOptions::default().with_base_bet(5).with_bankroll(1_000_000),
            &ladder,
            rounds,
            seed,
            &NullSink,
        )
        .unwrap();

        prop_assert_eq!(summary.wins + summary.losses + summary.pushes, rounds);
        prop_assert_eq!(summary.total_hands, rounds);
        prop_assert!((0.0..=100.0).contains(&summary.win_rate));
    }
}
