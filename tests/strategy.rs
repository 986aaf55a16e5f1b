//! Strategy and rule tests.

use rbrs::rules::{
    RankOrder, Span, SpanPosition, judge_color, judge_higher, judge_inside, judge_suit,
};
use rbrs::{
    Card, Color, Deck, GameOptions, OptimisedStrategy, ParseStrategyError, RANKS,
    RandomStrategy, SensibleStrategy, Strategy, StrategyKind, Suit,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn deck(cards: &[Card]) -> Deck {
    Deck::from_cards(cards.to_vec())
}

#[test]
fn span_classification_is_symmetric() {
    for a in RANKS {
        for b in RANKS {
            for rank in RANKS {
                assert_eq!(
                    Span::new(a, b).classify(rank),
                    Span::new(b, a).classify(rank)
                );
            }
        }
    }
}

#[test]
fn degenerate_span_is_all_edge() {
    for reference in RANKS {
        let span = Span::new(reference, reference);
        assert!(span.is_degenerate());
        for rank in RANKS {
            assert_eq!(span.classify(rank), SpanPosition::Edge);
            assert!(!span.contains_open(rank));
        }
    }
}

#[test]
fn span_positions() {
    let span = Span::new(10, 4);
    assert_eq!(span, Span { lo: 4, hi: 10 });
    assert_eq!(span.classify(4), SpanPosition::Edge);
    assert_eq!(span.classify(10), SpanPosition::Edge);
    assert_eq!(span.classify(5), SpanPosition::Inside);
    assert_eq!(span.classify(9), SpanPosition::Inside);
    assert_eq!(span.classify(3), SpanPosition::Outside);
    assert_eq!(span.classify(11), SpanPosition::Outside);

    // Adjacent ranks have an empty inside but real outside.
    let narrow = Span::new(6, 7);
    assert!(
        RANKS
            .iter()
            .all(|&rank| narrow.classify(rank) != SpanPosition::Inside)
    );
    assert_eq!(narrow.classify(1), SpanPosition::Outside);
}

#[test]
fn judges_follow_stage_rules() {
    assert_eq!(RankOrder::of(5, 9), RankOrder::Higher);
    assert_eq!(RankOrder::of(5, 2), RankOrder::Lower);
    assert_eq!(RankOrder::of(5, 5), RankOrder::Tie);

    assert!(judge_color(Color::Red, card(Suit::Diamonds, 4)));
    assert!(!judge_color(Color::Red, card(Suit::Spades, 4)));

    let first = card(Suit::Hearts, 8);
    assert!(judge_higher(true, first, card(Suit::Clubs, 9)));
    assert!(judge_higher(false, first, card(Suit::Clubs, 2)));
    assert!(!judge_higher(true, first, card(Suit::Clubs, 8)));
    assert!(judge_higher(false, first, card(Suit::Clubs, 8)));

    let second = card(Suit::Spades, 2);
    assert!(judge_inside(true, first, second, card(Suit::Clubs, 5)));
    assert!(judge_inside(false, first, second, card(Suit::Clubs, 1)));
    assert!(!judge_inside(true, first, second, card(Suit::Clubs, 2)));
    assert!(!judge_inside(false, first, second, card(Suit::Clubs, 8)));

    assert!(judge_suit(Suit::Clubs, card(Suit::Clubs, 13)));
    assert!(!judge_suit(Suit::Spades, card(Suit::Clubs, 13)));
}

#[test]
fn suit_colors() {
    assert_eq!(Suit::Hearts.color(), Color::Red);
    assert_eq!(Suit::Diamonds.color(), Color::Red);
    assert_eq!(Suit::Spades.color(), Color::Black);
    assert_eq!(Suit::Clubs.color(), Color::Black);
}

#[test]
fn sensible_stage_two_guesses_away_from_seven() {
    let mut strategy = SensibleStrategy::new(1);
    let remaining = Deck::new();

    for rank in 1..7 {
        assert!(strategy.guess_higher(card(Suit::Hearts, rank), &remaining));
    }
    for rank in 8..=13 {
        assert!(!strategy.guess_higher(card(Suit::Hearts, rank), &remaining));
    }

    let sevens: Vec<bool> = (0..200)
        .map(|_| strategy.guess_higher(card(Suit::Hearts, 7), &remaining))
        .collect();
    assert!(sevens.contains(&true));
    assert!(sevens.contains(&false));
}

#[test]
fn sensible_stage_three_needs_a_wide_span() {
    let mut strategy = SensibleStrategy::new(2);
    let remaining = Deck::new();

    assert!(strategy.guess_inside(card(Suit::Hearts, 1), card(Suit::Spades, 8), &remaining));
    assert!(strategy.guess_inside(card(Suit::Hearts, 13), card(Suit::Spades, 2), &remaining));
    assert!(!strategy.guess_inside(card(Suit::Hearts, 2), card(Suit::Spades, 8), &remaining));
    assert!(!strategy.guess_inside(card(Suit::Hearts, 5), card(Suit::Spades, 5), &remaining));
}

#[test]
fn sensible_defaults_match_game_options() {
    let defaults = GameOptions::default();
    let mut plain = SensibleStrategy::new(1);
    let mut built = StrategyKind::Sensible.build(1, &defaults);
    let remaining = Deck::new();

    for a in RANKS {
        for b in RANKS {
            let first = card(Suit::Hearts, a);
            let second = card(Suit::Spades, b);
            assert_eq!(
                plain.guess_inside(first, second, &remaining),
                built.guess_inside(first, second, &remaining)
            );
        }
        if a != defaults.sensible_pivot {
            let first = card(Suit::Hearts, a);
            assert_eq!(
                plain.guess_higher(first, &remaining),
                built.guess_higher(first, &remaining)
            );
        }
    }
}

#[test]
fn sensible_thresholds_come_from_options() {
    let options = GameOptions::default()
        .with_sensible_pivot(4)
        .with_sensible_spread(2);
    let mut strategy = StrategyKind::Sensible.build(9, &options);
    let remaining = Deck::new();

    assert!(!strategy.guess_higher(card(Suit::Hearts, 5), &remaining));
    assert!(strategy.guess_higher(card(Suit::Hearts, 3), &remaining));
    assert!(strategy.guess_inside(card(Suit::Hearts, 2), card(Suit::Spades, 5), &remaining));
}

#[test]
fn optimised_follows_the_majority() {
    let mut strategy = OptimisedStrategy::new(3);

    let reds = deck(&[card(Suit::Hearts, 1), card(Suit::Diamonds, 2), card(Suit::Spades, 3)]);
    assert_eq!(strategy.guess_color(&reds), Color::Red);
    let blacks = deck(&[card(Suit::Spades, 1), card(Suit::Clubs, 2), card(Suit::Hearts, 3)]);
    assert_eq!(strategy.guess_color(&blacks), Color::Black);

    let first = card(Suit::Hearts, 10);
    let low = deck(&[card(Suit::Clubs, 2), card(Suit::Clubs, 3), card(Suit::Clubs, 12)]);
    assert!(!strategy.guess_higher(first, &low));
    let high = deck(&[card(Suit::Clubs, 11), card(Suit::Clubs, 12), card(Suit::Clubs, 3)]);
    assert!(strategy.guess_higher(first, &high));

    let second = card(Suit::Spades, 2);
    let inside = deck(&[card(Suit::Clubs, 5), card(Suit::Clubs, 6), card(Suit::Clubs, 12)]);
    assert!(strategy.guess_inside(first, second, &inside));
    // Edge ranks count for neither side.
    let outside = deck(&[
        card(Suit::Clubs, 5),
        card(Suit::Clubs, 1),
        card(Suit::Clubs, 13),
        card(Suit::Diamonds, 2),
        card(Suit::Diamonds, 10),
        card(Suit::Hearts, 2),
    ]);
    assert!(!strategy.guess_inside(first, second, &outside));
}

#[test]
fn optimised_suit_ties_go_to_the_first_suit() {
    let mut strategy = OptimisedStrategy::new(4);

    let spades = deck(&[card(Suit::Spades, 1), card(Suit::Spades, 2), card(Suit::Clubs, 3)]);
    assert_eq!(strategy.guess_suit(&spades), Suit::Spades);

    let tied = deck(&[card(Suit::Clubs, 1), card(Suit::Spades, 2)]);
    assert_eq!(strategy.guess_suit(&tied), Suit::Spades);

    assert_eq!(strategy.guess_suit(&Deck::new()), Suit::Hearts);
    assert_eq!(strategy.guess_suit(&deck(&[])), Suit::Hearts);

    let clubs = deck(&[card(Suit::Clubs, 1)]);
    assert_eq!(strategy.guess_suit(&clubs), Suit::Clubs);
}

#[test]
fn optimised_ties_are_broken_evenly() {
    const TRIALS: usize = 2000;
    let mut strategy = OptimisedStrategy::new(5);

    let colors = deck(&[card(Suit::Hearts, 1), card(Suit::Spades, 1)]);
    let red = (0..TRIALS)
        .filter(|_| strategy.guess_color(&colors) == Color::Red)
        .count();
    assert!((850..=1150).contains(&red), "red chosen {red} times");

    let first = card(Suit::Hearts, 7);
    let ranks = deck(&[card(Suit::Clubs, 3), card(Suit::Clubs, 11), card(Suit::Clubs, 7)]);
    let higher = (0..TRIALS)
        .filter(|_| strategy.guess_higher(first, &ranks))
        .count();
    assert!((850..=1150).contains(&higher), "higher chosen {higher} times");

    let second = card(Suit::Spades, 11);
    let span = deck(&[card(Suit::Clubs, 9), card(Suit::Clubs, 12), card(Suit::Clubs, 11)]);
    let inside = (0..TRIALS)
        .filter(|_| strategy.guess_inside(first, second, &span))
        .count();
    assert!((850..=1150).contains(&inside), "inside chosen {inside} times");
}

#[test]
fn random_suit_guesses_are_uniform() {
    let mut strategy = RandomStrategy::new(6);
    let remaining = Deck::new();
    let mut counts = [0_usize; 4];
    for _ in 0..4000 {
        counts[strategy.guess_suit(&remaining).index()] += 1;
    }
    for count in counts {
        assert!((800..=1200).contains(&count), "suit counts {counts:?}");
    }
}

#[test]
fn strategy_kind_parsing() {
    assert_eq!("random".parse::<StrategyKind>(), Ok(StrategyKind::Random));
    assert_eq!("Sensible".parse::<StrategyKind>(), Ok(StrategyKind::Sensible));
    assert_eq!(" optimized ".parse::<StrategyKind>(), Ok(StrategyKind::Optimised));
    assert_eq!("greedy".parse::<StrategyKind>(), Err(ParseStrategyError));

    for kind in StrategyKind::ALL {
        assert_eq!(kind.to_string().parse::<StrategyKind>(), Ok(kind));
    }
}

#[test]
fn built_strategies_are_usable() {
    let options = GameOptions::default();
    let remaining = deck(&[card(Suit::Diamonds, 4)]);
    for kind in StrategyKind::ALL {
        let mut strategy = kind.build(11, &options);
        let suit = strategy.guess_suit(&remaining);
        assert!(Suit::ALL.contains(&suit));
    }

    let mut optimised = StrategyKind::Optimised.build(11, &options);
    assert_eq!(optimised.guess_suit(&remaining), Suit::Diamonds);
    assert_eq!(optimised.guess_color(&remaining), Color::Red);
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_strategy(StrategyKind::Random)
        .with_sensible_pivot(9)
        .with_sensible_spread(3);

    assert_eq!(options.strategy, StrategyKind::Random);
    assert_eq!(options.sensible_pivot, 9);
    assert_eq!(options.sensible_spread, 3);

    let defaults = GameOptions::default();
    assert_eq!(defaults.strategy, StrategyKind::Sensible);
    assert_eq!(defaults.sensible_pivot, 7);
    assert_eq!(defaults.sensible_spread, 6);
}
