//! Strategy table and ladder tests.

use bjcount::{
    ACE, Action, Card, Cell, DEFAULT_THRESHOLDS, Hand, INDEX_PLAYS, KING, LegalActions,
    LookupError, Matrix, StrategyLadder, StrategyProvider, StrategyTable, Suit,
};

fn hand(ranks: &[u8]) -> Hand {
    let cards: Vec<Card> = ranks.iter().map(|&rank| Card::new(Suit::Clubs, rank)).collect();
    Hand::from_cards(&cards)
}

const ALL: LegalActions = LegalActions {
    double: true,
    split: true,
    surrender: true,
};

#[test]
fn basic_table_lookups() {
    let table = StrategyTable::basic();
    assert_eq!(table.get_action(&hand(&[10, 6]), 7, true), Ok(Action::Hit));
    assert_eq!(table.get_action(&hand(&[10, 7]), 10, true), Ok(Action::Stand));
    assert_eq!(table.get_action(&hand(&[6, 5]), 1, true).ok(), None);
    assert_eq!(table.get_action(&hand(&[6, 5]), 11, true), Ok(Action::Double));
    assert_eq!(table.get_action(&hand(&[ACE, 7]), 4, true), Ok(Action::Double));
    assert_eq!(table.get_action(&hand(&[ACE, 7]), 9, true), Ok(Action::Hit));
}

#[test]
fn pairs_split_only_when_allowed() {
    let table = StrategyTable::basic();
    let eights = hand(&[8, 8]);
    assert_eq!(table.get_action(&eights, 10, true), Ok(Action::Split));
    // Hard 16 against a ten: surrender is unavailable through get_action.
    assert_eq!(table.get_action(&eights, 10, false), Ok(Action::Hit));

    let tens = hand(&[10, 10]);
    assert_eq!(table.get_action(&tens, 6, true), Ok(Action::Stand));
    let aces = hand(&[ACE, ACE]);
    assert_eq!(table.get_action(&aces, 6, false), Ok(Action::Hit));
}

#[test]
fn compound_cells_downgrade() {
    let table = StrategyTable::basic();

    // D with three cards hits.
    assert_eq!(table.get_action(&hand(&[2, 4, 5]), 6, true), Ok(Action::Hit));
    // DS with three cards stands.
    assert_eq!(table.get_action(&hand(&[ACE, 3, 4]), 4, true), Ok(Action::Stand));
    // D when doubling is unaffordable hits.
    let broke = LegalActions {
        double: false,
        ..ALL
    };
    assert_eq!(table.action(&hand(&[6, 5]), 6, broke), Ok(Action::Hit));

    assert!(ALL.permits(Action::Surrender));
    assert!(!broke.permits(Action::Double));
    assert!(broke.permits(Action::Hit));

    // R surrenders only when surrender is legal.
    assert_eq!(table.action(&hand(&[10, 6]), 10, ALL), Ok(Action::Surrender));
    assert_eq!(table.action(&hand(&[10, 4, 2]), 10, ALL), Ok(Action::Hit));

    let mut custom = StrategyTable::basic();
    custom
        .set(Matrix::Hard, 17, 11, Cell::SurrenderOrStand)
        .unwrap();
    assert_eq!(custom.action(&hand(&[10, 7]), 11, ALL), Ok(Action::Surrender));
    assert_eq!(
        custom.action(&hand(&[10, 7]), 11, LegalActions::default()),
        Ok(Action::Stand)
    );
}

#[test]
fn out_of_domain_lookups_fail() {
    let table = StrategyTable::basic();
    assert_eq!(
        table.get_action(&hand(&[10, 6]), 1, true),
        Err(LookupError {
            matrix: Matrix::Hard,
            total: 16,
            upcard: 1,
        })
    );
    assert!(table.get_action(&hand(&[10, 6]), 12, true).is_err());
    assert!(table.get_action(&hand(&[2]), 5, true).is_err());
    assert!(table.cell(Matrix::Soft, 11, 5).is_err());
    assert!(table.cell(Matrix::Pair, 12, 5).is_err());
    assert_eq!(table.cell(Matrix::Pair, 11, 5), Ok(Cell::Split));
}

#[test]
fn cell_codes() {
    assert_eq!(Cell::DoubleOrStand.to_string(), "DS");
    assert_eq!(Cell::SurrenderOrHit.code(), "R");
    assert_eq!(Cell::NoSplit.code(), "N");
}

#[test]
fn action_parses_console_input() {
    assert_eq!("h".parse::<Action>(), Ok(Action::Hit));
    assert_eq!(" s\n".parse::<Action>(), Ok(Action::Stand));
    assert_eq!("D".parse::<Action>(), Ok(Action::Double));
    assert_eq!("v".parse::<Action>(), Ok(Action::Split));
    assert_eq!("p".parse::<Action>(), Ok(Action::Split));
    assert_eq!("u".parse::<Action>(), Ok(Action::Surrender));
    assert!("x".parse::<Action>().is_err());
    assert!("".parse::<Action>().is_err());
}

#[test]
fn ladder_selects_bucket_by_true_count() {
    let ladder = StrategyLadder::illustrious();
    assert_eq!(ladder.len(), DEFAULT_THRESHOLDS.len() + 1);
    assert!(!ladder.is_empty());

    assert_eq!(ladder.bucket_for(9.5), Some(8.0));
    assert_eq!(ladder.bucket_for(8.0), Some(8.0));
    assert_eq!(ladder.bucket_for(7.99), Some(7.0));
    assert_eq!(ladder.bucket_for(1.0), Some(0.0));
    assert_eq!(ladder.bucket_for(-1.5), Some(-2.0));
    assert_eq!(ladder.bucket_for(-2.5), None);
    assert_eq!(ladder.bucket_for(f64::NAN), None);
}

#[test]
fn built_in_index_plays_fit_the_table() {
    let ladder =
        StrategyLadder::from_index_plays(&StrategyTable::basic(), &INDEX_PLAYS, &DEFAULT_THRESHOLDS);
    assert_eq!(ladder, Ok(StrategyLadder::illustrious()));
    assert_ne!(
        StrategyLadder::illustrious(),
        StrategyLadder::new(StrategyTable::basic())
    );
}

#[test]
fn ladder_applies_index_plays() {
    let ladder = StrategyLadder::illustrious();
    let twelve = hand(&[10, 2]);

    // 12 against a 2 stands from +3.
    assert_eq!(ladder.select_table(3.0).get_action(&twelve, 2, true), Ok(Action::Stand));
    assert_eq!(ladder.select_table(2.5).get_action(&twelve, 2, true), Ok(Action::Hit));

    // Tens split against a 5 from +6.
    let tens = hand(&[10, 10]);
    assert_eq!(ladder.select_table(6.0).get_action(&tens, 5, true), Ok(Action::Split));
    assert_eq!(ladder.select_table(5.0).get_action(&tens, 5, true), Ok(Action::Stand));

    // 12 against a 4 hits below zero.
    assert_eq!(ladder.select_table(0.5).get_action(&twelve, 4, true), Ok(Action::Stand));
    assert_eq!(ladder.select_table(-3.0).get_action(&twelve, 4, true), Ok(Action::Hit));
}

#[test]
fn custom_ladder_rungs() {
    let mut aggressive = StrategyTable::basic();
    aggressive.set(Matrix::Hard, 16, 10, Cell::Stand).unwrap();
    let ladder = StrategyLadder::new(StrategyTable::basic())
        .with_rung(1.0, aggressive.clone())
        .with_rung(1.0, aggressive);
    assert_eq!(ladder.len(), 2);

    let sixteen = hand(&[KING, 6]);
    assert_eq!(ladder.select_table(1.0).get_action(&sixteen, 10, true), Ok(Action::Stand));
    assert_eq!(ladder.select_table(0.0).get_action(&sixteen, 10, true), Ok(Action::Hit));
}
