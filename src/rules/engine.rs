//! The turn machine.
//!
//! A turn is `start_turn`, any number of `play_card` / `use_drink` calls,
//! then `end_turn`. Invalid commands are not errors: they return `false`
//! and leave the state untouched.
//!
//! ## Play resolution order
//!
//! 1. Remove the card from hand and record it
//! 2. Pay the cost
//! 3. Permanent per-category concentration gain
//! 4. Decide the repeat count (double charge, else mental encore, else 1)
//! 5. Resolve the effect once per repeat, cashing banked fixed score first
//!    for active cards
//! 6. Exile or discard the card
//! 7. Summer memory counter
//! 8. After-action P-items
//! 9. Spend one action

use crate::cards::{Card, CardCategory};
use crate::core::{Action, GameState, PlayRecord, MAX_TURNS};
use crate::triggers::TriggerPoint;

impl GameState {
    /// Check if every turn has been played.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.turn > MAX_TURNS
    }

    /// Begin the current turn.
    ///
    /// Clears the log, fires the character's turn event, resets the action
    /// budget, checks turn-start P-items, snapshots buff protection, draws
    /// up to the base hand size plus reservations, and ticks recurring
    /// effects. Does nothing once the session is finished.
    pub fn start_turn(&mut self) {
        if self.is_game_over() {
            return;
        }
        self.log.clear();
        self.resources.score_gain_display = 0;
        tracing::debug!(turn = self.turn, "turn start");

        if let Some(event) = self.turn_events.get(&self.turn).cloned() {
            event.apply(self);
        }

        self.actions_remaining = 1;
        self.fire_items(TriggerPoint::TurnStart);
        self.buff_protection = self.buffs.protection_snapshot();

        let reserved = self.schedule.take_draws(self.turn) + std::mem::take(&mut self.next_turn_draw_bonus);
        let wanted = i64::from(self.config.base_draw) + i64::from(reserved);
        let missing = wanted - self.piles.hand.len() as i64;
        if missing > 0 {
            let drawn = self.draw_cards(missing as u32);
            tracing::trace!(wanted = missing, drawn, "turn draw");
        }

        self.tick_recurring();
    }

    /// Play the card at `index` in hand.
    ///
    /// Returns false without changing anything when the session is over,
    /// no actions remain, the index is out of range, or the card cannot be
    /// used.
    pub fn play_card(&mut self, index: usize) -> bool {
        if self.is_game_over() || self.actions_remaining == 0 {
            return false;
        }
        match self.piles.hand.get(index) {
            Some(card) if card.can_use(self) => {}
            _ => return false,
        }
        let Some(card) = self.piles.take_from_hand(index) else {
            return false;
        };

        self.resources.score_gain_display = 0;
        tracing::debug!(card = %card.name, turn = self.turn, "play card");

        self.history
            .push_back(PlayRecord::new(self.turn, card.name.clone(), card.category));
        self.last_card_category = Some(card.category);

        self.resources.pay(card.cost);
        self.gain_category_concentration(card.category);

        let repeats = self.take_repeats(&card);
        for _ in 0..repeats {
            self.resolve_card(&card);
        }

        if card.once {
            self.piles.exile.push(card);
        } else {
            self.piles.discard.push(card);
        }

        self.count_summer_memory();
        self.fire_items(TriggerPoint::AfterAction);
        self.actions_remaining = self.actions_remaining.saturating_sub(1);
        true
    }

    /// Drink the drink in slot `index`.
    ///
    /// Drinks are free and do not spend an action. Returns false when the
    /// slot is empty or the session is over.
    pub fn use_drink(&mut self, index: usize) -> bool {
        if self.is_game_over() || index >= self.drinks.len() {
            return false;
        }
        self.resources.score_gain_display = 0;
        let drink = self.drinks.remove(index);
        tracing::debug!(drink = %drink.name, turn = self.turn, "use drink");
        self.log.push(format!("Used {}", drink.name));
        drink.effect.apply(self);
        true
    }

    /// Close the current turn.
    ///
    /// Applies turn-end concentration, decays unprotected buffs, discards
    /// the hand, advances the turn, and runs the effects reserved for the
    /// new turn in registration order. Does nothing once the session is
    /// finished.
    pub fn end_turn(&mut self) {
        if self.is_game_over() {
            return;
        }
        self.resources.score_gain_display = 0;

        let turn_end = self.permanent_buffs.turn_end_conc;
        if turn_end > 0 {
            self.add_concentration(turn_end);
        }

        self.buffs.decay(&self.buff_protection);
        let discarded = self.piles.discard_hand();
        self.turn += 1;
        tracing::debug!(turn = self.turn, discarded, "turn end");

        for effect in self.schedule.take_effects(self.turn) {
            effect.apply(self);
        }
    }

    /// Dispatch a command. Returns whether it did anything.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::StartTurn | Action::EndTurn if self.is_game_over() => false,
            Action::StartTurn => {
                self.start_turn();
                true
            }
            Action::PlayCard(index) => self.play_card(index),
            Action::UseDrink(index) => self.use_drink(index),
            Action::EndTurn => {
                self.end_turn();
                true
            }
        }
    }

    // === Internals ===

    fn fire_items(&mut self, point: TriggerPoint) {
        let mut items = std::mem::take(&mut self.p_items);
        for item in items.iter_mut().filter(|item| item.trigger == point) {
            item.check(self);
        }
        items.append(&mut self.p_items);
        self.p_items = items;
    }

    fn tick_recurring(&mut self) {
        let pending = std::mem::take(&mut self.recurring_effects);
        let mut remaining = Vec::with_capacity(pending.len());
        for mut recurring in pending {
            tracing::trace!(effect = %recurring.description, left = recurring.remaining_turns, "recurring");
            recurring.effect.apply(self);
            if recurring.tick() {
                remaining.push(recurring);
            }
        }
        // Registered while ticking: first tick is next turn.
        remaining.append(&mut self.recurring_effects);
        self.recurring_effects = remaining;
    }

    fn gain_category_concentration(&mut self, category: CardCategory) {
        let gain = match category {
            CardCategory::Mental => self.permanent_buffs.mental_conc,
            CardCategory::Active => self.permanent_buffs.active_conc,
        };
        if gain > 0 {
            self.add_concentration(gain);
        }
    }

    fn take_repeats(&mut self, card: &Card) -> u32 {
        if self.double_charges > 0 {
            self.double_charges -= 1;
            self.log.push(format!("'{}' resolves twice", card.name));
            2
        } else if self.double_next_mental_only && card.category == CardCategory::Mental {
            self.double_next_mental_only = false;
            self.log
                .push(format!("Mental encore: '{}' resolves twice", card.name));
            2
        } else {
            1
        }
    }

    /// One resolution of a played card.
    ///
    /// Active cards other than the banking card first cash every complete
    /// unit of banked fixed score as its own scoring call. The bank is not
    /// drawn down.
    fn resolve_card(&mut self, card: &Card) {
        if card.category == CardCategory::Active && !card.ultimate {
            let unit = self.config.fixed_score_unit;
            let banked = self.permanent_buffs.active_score_fixed;
            if unit > 0 && banked > 0 {
                for _ in 0..banked / unit {
                    self.calculate_score(unit, 1.0);
                }
            }
        }
        card.effect.apply(self);
    }

    fn count_summer_memory(&mut self) {
        if !self.summer_memory_active {
            return;
        }
        self.skill_use_count += 1;
        let interval = self.config.encore_interval;
        if interval > 0 && self.skill_use_count % interval == 0 {
            self.calculate_score(self.config.encore_bonus, 1.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Cost;
    use crate::effects::Effect;
    use crate::testing::{blank_state, filler_cards};

    fn hand_of(state: &mut GameState, cards: Vec<Card>) {
        state.piles.hand = cards.into_iter().collect();
    }

    #[test]
    fn test_play_card_spends_action() {
        let mut state = blank_state();
        hand_of(&mut state, filler_cards(2));

        assert!(state.play_card(0));
        assert_eq!(state.actions_remaining, 0);
        assert_eq!(state.hand().len(), 1);
        assert_eq!(state.piles.discard.len(), 1);

        assert!(!state.play_card(0));
        assert_eq!(state.hand().len(), 1);
    }

    #[test]
    fn test_play_card_out_of_range() {
        let mut state = blank_state();
        hand_of(&mut state, filler_cards(1));

        assert!(!state.play_card(1));
        assert_eq!(state.actions_remaining, 1);
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_unaffordable_card_is_rejected() {
        let mut state = blank_state();
        state.resources.score_gain_display = 7;
        hand_of(
            &mut state,
            vec![Card::new(
                "Gaze",
                Cost::concentration(3),
                CardCategory::Mental,
                Effect::Nothing,
            )],
        );

        assert!(!state.play_card(0));
        assert_eq!(state.resources.score_gain_display, 7);
        assert_eq!(state.hand().len(), 1);
    }

    #[test]
    fn test_once_card_goes_to_exile() {
        let mut state = blank_state();
        hand_of(
            &mut state,
            vec![Card::new("Signal", Cost::resource(3), CardCategory::Mental, Effect::Nothing).once()],
        );

        assert!(state.play_card(0));
        assert_eq!(state.piles.exile.len(), 1);
        assert!(state.piles.discard.is_empty());
        assert_eq!(state.resources.hp, 97);
    }

    #[test]
    fn test_double_charge_logs_once() {
        let mut state = blank_state();
        state.double_charges = 1;
        hand_of(
            &mut state,
            vec![Card::new("Call", Cost::resource(0), CardCategory::Active, Effect::score(10))],
        );

        assert!(state.play_card(0));
        assert_eq!(state.resources.score, 20);
        assert_eq!(state.double_charges, 0);
        assert_eq!(state.log.count_matching("resolves twice"), 1);
    }

    #[test]
    fn test_mental_encore_skips_active_cards() {
        let mut state = blank_state();
        state.actions_remaining = 2;
        state.double_next_mental_only = true;
        hand_of(
            &mut state,
            vec![
                Card::new("Call", Cost::resource(0), CardCategory::Active, Effect::score(10)),
                Card::new("Presence", Cost::resource(0), CardCategory::Mental, Effect::AddConcentration(5)),
            ],
        );

        assert!(state.play_card(0));
        assert!(state.double_next_mental_only);
        assert_eq!(state.resources.score, 10);

        assert!(state.play_card(0));
        assert!(!state.double_next_mental_only);
        assert_eq!(state.resources.concentration, 10);
    }

    #[test]
    fn test_banked_score_is_cashed_per_unit() {
        let mut state = blank_state();
        state.permanent_buffs.active_score_fixed = 7;
        hand_of(
            &mut state,
            vec![Card::new("Call", Cost::resource(0), CardCategory::Active, Effect::Nothing)],
        );

        assert!(state.play_card(0));
        assert_eq!(state.resources.score, 6);
        assert_eq!(state.log.count_matching("Score +3"), 2);
        assert_eq!(state.permanent_buffs.active_score_fixed, 7);
    }

    #[test]
    fn test_end_turn_advances_and_discards() {
        let mut state = blank_state();
        hand_of(&mut state, filler_cards(3));
        state.buffs.good_condition = 2;

        state.end_turn();

        assert_eq!(state.turn, 2);
        assert!(state.hand().is_empty());
        assert_eq!(state.piles.discard.len(), 3);
        assert_eq!(state.buffs.good_condition, 1);
    }

    #[test]
    fn test_apply_dispatches() {
        let mut state = blank_state();
        state.piles.deck = filler_cards(6);

        assert!(state.apply(Action::StartTurn));
        assert_eq!(state.hand().len(), 3);
        assert!(state.apply(Action::PlayCard(0)));
        assert!(!state.apply(Action::UseDrink(0)));
        assert!(state.apply(Action::EndTurn));
        assert_eq!(state.turn, 2);

        state.turn = MAX_TURNS + 1;
        assert!(!state.apply(Action::StartTurn));
        assert!(!state.apply(Action::EndTurn));
    }
}
