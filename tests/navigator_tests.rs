use flashdeck::core::action::{Action, Effect, update};
use flashdeck::core::card::{Card, Status};
use flashdeck::core::deck::{Deck, builtin_deck, parse_deck};
use flashdeck::core::navigator::{CardNavigator, InvalidDeckError, NavigationState};
use flashdeck::core::state::App;
use proptest::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn cards(n: usize) -> Vec<Card> {
    (0..n)
        .map(|i| {
            Card::new(
                format!("card {i}"),
                Status::Current,
                "description",
                "example",
                "note",
            )
        })
        .collect()
}

fn state(index: usize, flipped: bool) -> NavigationState {
    NavigationState {
        current_index: index,
        is_flipped: flipped,
    }
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Next,
    Previous,
    GoTo(usize),
    Flip,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Next),
        Just(Op::Previous),
        (0usize..20).prop_map(Op::GoTo),
        Just(Op::Flip),
    ]
}

fn apply(nav: &mut CardNavigator, op: Op) {
    match op {
        Op::Next => {
            nav.next();
        }
        Op::Previous => {
            nav.previous();
        }
        Op::GoTo(index) => {
            nav.go_to(index);
        }
        Op::Flip => {
            nav.toggle_flip();
        }
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn index_stays_in_bounds(len in 1usize..12, moves in prop::collection::vec(any::<bool>(), 0..60)) {
        let mut nav = CardNavigator::new(cards(len)).unwrap();
        for forward in moves {
            let view = if forward { nav.next() } else { nav.previous() };
            prop_assert!(view.position >= 1 && view.position <= len);
            prop_assert!(nav.state().current_index < len);
        }
    }

    #[test]
    fn next_then_previous_returns(len in 3usize..12, start in 1usize..11, flipped in any::<bool>()) {
        prop_assume!(start < len - 1);
        let mut nav = CardNavigator::new(cards(len)).unwrap();
        nav.go_to(start);
        if flipped {
            nav.toggle_flip();
        }
        nav.next();
        nav.previous();
        prop_assert_eq!(nav.state(), state(start, false));
    }

    #[test]
    fn double_flip_is_identity(len in 1usize..12, ops in prop::collection::vec(op(), 0..30)) {
        let mut nav = CardNavigator::new(cards(len)).unwrap();
        for op in ops {
            apply(&mut nav, op);
        }
        let before = nav.state();
        nav.toggle_flip();
        nav.toggle_flip();
        prop_assert_eq!(nav.state(), before);
    }

    #[test]
    fn navigation_always_unflips(len in 1usize..12, ops in prop::collection::vec(op(), 0..30), last in op()) {
        let mut nav = CardNavigator::new(cards(len)).unwrap();
        for op in ops {
            apply(&mut nav, op);
        }
        nav.toggle_flip();
        let before = nav.state();
        apply(&mut nav, last);
        if nav.state().current_index != before.current_index {
            prop_assert!(!nav.state().is_flipped);
        } else if !matches!(last, Op::Flip) {
            // Boundary moves leave the flip alone
            prop_assert_eq!(nav.state(), before);
        }
    }

    #[test]
    fn go_to_current_is_noop(len in 1usize..12, ops in prop::collection::vec(op(), 0..30)) {
        let mut nav = CardNavigator::new(cards(len)).unwrap();
        for op in ops {
            apply(&mut nav, op);
        }
        let before = nav.state();
        let before_card = nav.view_state().card.clone();
        let view = nav.go_to(before.current_index);
        prop_assert_eq!(view.card, &before_card);
        prop_assert_eq!(view.is_flipped, before.is_flipped);
        prop_assert_eq!(nav.state(), before);
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_eight_card_scenario() {
    let mut nav = CardNavigator::new(cards(8)).unwrap();
    assert_eq!(nav.state(), state(0, false));

    nav.next();
    assert_eq!(nav.state(), state(1, false));

    nav.toggle_flip();
    assert_eq!(nav.state(), state(1, true));

    nav.next();
    assert_eq!(nav.state(), state(2, false));

    for _ in 0..5 {
        nav.previous();
    }
    assert_eq!(nav.state(), state(0, false));

    assert!(nav.go_to(7).is_last);
    assert_eq!(nav.state(), state(7, false));

    nav.next();
    assert_eq!(nav.state(), state(7, false));
}

#[test]
fn test_initialize_empty_deck_fails() {
    let err = CardNavigator::new(Vec::new()).unwrap_err();
    assert_eq!(err, InvalidDeckError);
    assert_eq!(err.to_string(), "invalid deck: a deck needs at least one card");
}

#[test]
fn test_initialize_single_card() {
    let nav = CardNavigator::new(cards(1)).unwrap();
    let view = nav.view_state();
    assert_eq!(nav.state(), state(0, false));
    assert!(view.is_first && view.is_last);
    assert_eq!((view.position, view.total), (1, 1));
}

#[test]
fn test_empty_deck_file_is_rejected_by_app() {
    let deck = parse_deck(r#"{"title": "Nothing", "cards": []}"#, "x").unwrap();
    assert!(matches!(App::new(deck), Err(InvalidDeckError)));
}

#[test]
fn test_builtin_deck_session() {
    let mut app = App::new(builtin_deck()).unwrap();
    assert_eq!(app.navigator.view_state().card.front, "<marquee>");

    assert_eq!(update(&mut app, Action::ToggleFlip), Effect::Flipped);
    assert_eq!(update(&mut app, Action::Last), Effect::CardChanged);

    let view = app.navigator.view_state();
    assert_eq!(view.card.front, "<ruby>, <rt>, <rp>");
    assert!(!view.is_flipped);
    assert_eq!((view.position, view.total), (8, 8));

    assert_eq!(update(&mut app, Action::Next), Effect::None);
}

#[test]
fn test_app_keeps_deck_title() {
    let app = App::new(Deck {
        title: "Custom".to_string(),
        cards: cards(2),
    })
    .unwrap();
    assert_eq!(app.title, "Custom");
    assert_eq!(app.navigator.len(), 2);
}
