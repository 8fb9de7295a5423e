//! Turn machine integration tests.
//!
//! These tests drive whole turns through the public command surface and
//! check draws, turn events, P-item timing, buff decay, reserved and
//! recurring effects, and end-of-session behavior.

use idol_stage::catalog::{cards, characters, drinks, items, Catalog};
use idol_stage::cards::{Card, CardCategory, Cost};
use idol_stage::core::{GameState, GenreWeights, Phase, SessionConfig, MAX_TURNS};
use idol_stage::effects::Effect;
use idol_stage::triggers::PItem;
use idol_stage::Drink;

fn filler(count: usize) -> Vec<Card> {
    (0..count)
        .map(|i| {
            Card::new(
                format!("Filler {i}"),
                Cost::resource(0),
                CardCategory::Mental,
                Effect::Nothing,
            )
        })
        .collect()
}

/// A Love Kotone session with unscaled genre weights.
fn session(deck: Vec<Card>, p_items: Vec<PItem>, drinks: Vec<Drink>) -> GameState {
    let catalog = Catalog::standard();
    let character = catalog.character(characters::LOVE_KOTONE).unwrap();
    let config = SessionConfig::default()
        .with_seed(7)
        .with_genre_weights(GenreWeights::neutral());
    GameState::new(character, deck, p_items, drinks, config)
}

fn card(name: &str) -> Card {
    Catalog::standard().card(name).unwrap().clone()
}

fn item(name: &str) -> PItem {
    Catalog::standard().item(name).unwrap().clone()
}

fn drink(name: &str) -> Drink {
    Catalog::standard().drink(name).unwrap().clone()
}

fn set_hand(state: &mut GameState, hand: Vec<Card>) {
    state.piles.hand = hand.into_iter().collect();
}

#[test]
fn test_start_turn_draws_base_hand() {
    let mut state = session(filler(10), vec![], vec![]);

    state.start_turn();

    assert_eq!(state.hand().len(), 3);
    assert_eq!(state.piles.deck.len(), 7);
    assert_eq!(state.actions_remaining, 1);
    assert_eq!(state.phase(), Phase::AwaitingAction);
}

#[test]
fn test_start_turn_tops_up_existing_hand() {
    let mut state = session(filler(10), vec![], vec![]);
    set_hand(&mut state, filler(2));

    state.start_turn();

    assert_eq!(state.hand().len(), 3);
}

#[test]
fn test_start_turn_clears_log() {
    let mut state = session(filler(10), vec![], vec![]);
    state.log.push("old line");

    state.start_turn();

    assert!(state.log.is_empty());
}

#[test]
fn test_turn_event_fires_on_its_turn() {
    let mut state = session(filler(10), vec![], vec![]);
    state.turn = 5;
    state.start_turn();
    assert_eq!(state.resources.concentration, 8);

    let mut state = session(filler(10), vec![], vec![]);
    state.turn = 9;
    state.buffs.conc_boost = 1;
    state.start_turn();
    assert_eq!(state.resources.concentration, 20);
}

#[test]
fn test_turn_start_item_on_matching_genre() {
    // Turn 1 is pinned to the first preference (dance).
    let mut state = session(filler(10), vec![item(items::BIG_LUGGAGE)], vec![]);

    state.start_turn();

    assert_eq!(state.actions_remaining, 2);
    assert!(state.p_items[0].used);
    assert_eq!(state.log.count_matching("P-item 'Big Luggage' triggered"), 1);
}

#[test]
fn test_turn_start_item_is_single_use() {
    let mut state = session(filler(30), vec![item(items::BIG_LUGGAGE)], vec![]);

    state.start_turn();
    state.end_turn();
    state.turn = MAX_TURNS; // also pinned to dance
    state.start_turn();

    assert_eq!(state.actions_remaining, 1);
}

#[test]
fn test_t_shirt_in_good_condition() {
    let mut state = session(filler(10), vec![item(items::T_SHIRT)], vec![]);
    state.buffs.good_condition = 1;

    state.start_turn();

    assert_eq!(state.actions_remaining, 2);
    assert_eq!(state.buffs.good_condition, 7);
    assert!(!state.buff_protection.good_condition);

    state.end_turn();
    assert_eq!(state.buffs.good_condition, 6);
}

#[test]
fn test_buff_raised_from_zero_skips_this_turns_decay() {
    let mut state = session(filler(20), vec![], vec![]);
    state.start_turn();
    set_hand(&mut state, vec![card(cards::STARTING_SIGNAL)]);

    assert!(state.play_card(0));
    assert_eq!(state.buffs.good_condition, 7);

    state.end_turn();
    assert_eq!(state.buffs.good_condition, 7);

    state.start_turn();
    state.end_turn();
    assert_eq!(state.buffs.good_condition, 6);
}

#[test]
fn test_spotlight_reserves_draws() {
    let mut state = session(filler(20), vec![], vec![]);
    set_hand(&mut state, vec![card(cards::SPOTLIGHT)]);

    assert!(state.play_card(0));
    assert_eq!(state.buffs.good_condition, 9);
    state.end_turn();

    state.start_turn();
    assert_eq!(state.turn, 2);
    assert_eq!(state.hand().len(), 5);
    state.end_turn();

    state.start_turn();
    assert_eq!(state.hand().len(), 4);
    assert_eq!(state.schedule.reserved_draws(3), 0);
}

#[test]
fn test_reserved_scores_land_on_later_turns() {
    let mut state = session(filler(20), vec![], vec![]);
    set_hand(&mut state, vec![card(cards::CAPTIVATING_PERFORMANCE)]);

    assert!(state.play_card(0));
    assert_eq!(state.resources.hp, 94);
    assert_eq!(state.buffs.super_good, 4);
    assert_eq!(state.resources.score, 0);

    state.end_turn();
    assert_eq!(state.resources.score, 47);
    assert_eq!(state.log.iter().last(), Some("Score +47"));

    state.start_turn();
    state.end_turn();
    assert_eq!(state.resources.score, 68);
    assert!(state.schedule.is_empty());
}

#[test]
fn test_turn_end_concentration() {
    let mut state = session(filler(10), vec![], vec![]);
    set_hand(&mut state, vec![card(cards::CAREFREE)]);

    assert!(state.play_card(0));
    state.end_turn();
    assert_eq!(state.resources.concentration, 2);

    state.buffs.conc_boost = 2;
    state.end_turn();
    assert_eq!(state.resources.concentration, 5);
}

#[test]
fn test_end_turn_discards_hand() {
    let mut state = session(filler(10), vec![], vec![]);
    state.start_turn();

    state.end_turn();

    assert_eq!(state.turn, 2);
    assert!(state.hand().is_empty());
    assert_eq!(state.piles.discard.len(), 3);
}

#[test]
fn test_deck_recycles_discard() {
    let mut state = session(filler(4), vec![], vec![]);

    state.start_turn();
    state.end_turn();
    state.start_turn();

    assert_eq!(state.hand().len(), 3);
    assert_eq!(state.piles.total(), 4);
}

#[test]
fn test_senburi_soda_recurring_draw() {
    let mut state = session(filler(30), vec![], vec![drink(drinks::SENBURI_SODA)]);
    state.start_turn();

    assert!(state.use_drink(0));
    assert_eq!(state.actions_remaining, 1);
    assert_eq!(state.hand().len(), 5);
    assert_eq!(state.buffs.param_boost, 5);
    assert!(state.drinks.is_empty());
    assert_eq!(state.log.count_matching("Used Senburi Soda"), 1);

    state.end_turn();
    state.start_turn();
    assert_eq!(state.hand().len(), 4);
    assert_eq!(state.recurring_effects[0].remaining_turns, 4);

    for _ in 3..=5 {
        state.end_turn();
        state.start_turn();
    }
    assert_eq!(state.recurring_effects.len(), 1);

    state.end_turn();
    state.start_turn();
    assert_eq!(state.turn, 6);
    assert!(state.recurring_effects.is_empty());
}

#[test]
fn test_boost_extract() {
    let mut state = session(filler(10), vec![], vec![drink(drinks::BOOST_EXTRACT)]);

    assert!(state.use_drink(0));

    assert_eq!(state.resources.hp, 98);
    assert_eq!(state.buffs.param_boost_30, 3);
    assert!(!state.use_drink(0));
}

#[test]
fn test_play_resets_gain_display() {
    let mut state = session(filler(10), vec![], vec![]);
    state.resources.score_gain_display = 12;
    set_hand(&mut state, filler(1));

    assert!(state.play_card(0));
    assert_eq!(state.resources.score_gain_display, 0);
}

#[test]
fn test_failed_play_changes_nothing() {
    let mut state = session(filler(10), vec![], vec![]);
    state.start_turn();
    state.resources.score_gain_display = 5;
    let before = serde_json::to_value(&state).unwrap();

    assert!(!state.play_card(7));
    assert_eq!(serde_json::to_value(&state).unwrap(), before);

    state.actions_remaining = 0;
    let before = serde_json::to_value(&state).unwrap();
    assert!(!state.play_card(0));
    assert_eq!(state.phase(), Phase::TurnOver);
    assert_eq!(serde_json::to_value(&state).unwrap(), before);
}

#[test]
fn test_finished_session_ignores_commands() {
    let mut state = session(filler(10), vec![], vec![drink(drinks::BOOST_EXTRACT)]);
    set_hand(&mut state, filler(1));
    state.turn = MAX_TURNS + 1;
    let before = serde_json::to_value(&state).unwrap();

    state.start_turn();
    assert!(!state.play_card(0));
    assert!(!state.use_drink(0));
    state.end_turn();

    assert!(state.is_game_over());
    assert_eq!(state.phase(), Phase::Finished);
    assert_eq!(serde_json::to_value(&state).unwrap(), before);
}

#[test]
fn test_twelve_turns_then_game_over() {
    let mut state = session(vec![], vec![], vec![]);

    for turn in 1..=MAX_TURNS {
        assert_eq!(state.turn, turn);
        assert!(!state.is_game_over());
        state.start_turn();
        state.end_turn();
    }

    assert!(state.is_game_over());
    assert_eq!(state.turn, MAX_TURNS + 1);
    assert!(state.hand().is_empty());
    assert_eq!(state.summary().turns_played, MAX_TURNS);
}
