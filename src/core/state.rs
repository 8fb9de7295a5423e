//! Game state for one playthrough.
//!
//! ## GameState
//!
//! Everything a session owns:
//! - Turn counter, resources, temporary and permanent buffs
//! - Tempo flags (double charges, mental encore, summer memory counter)
//! - Card piles, P-items, drinks
//! - Turn schedule, reserved draws and effects, recurring effects
//! - Play history and the player-facing log
//! - Configuration and RNG
//!
//! The turn machine (`start_turn`, `play_card`, `use_drink`, `end_turn`)
//! lives in [`rules`](crate::rules); this module holds the state and the
//! primitive mutators effects are resolved through.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::Serialize;

use super::action::PlayRecord;
use super::config::{SessionConfig, MAX_TURNS};
use super::log::GameLog;
use super::rng::{GameRng, GameRngState};
use crate::cards::{Card, CardCategory, Character, Drink};
use crate::effects::Effect;
use crate::resources::{
    boosted_concentration, BuffProtection, Buffs, PermanentBuffs, Resources, TempBuff,
};
use crate::schedule::{DeferredSchedule, RecurringEffect, TurnInfo, TurnSchedule};
use crate::triggers::PItem;
use crate::zones::Piles;

/// Where the turn machine currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Phase {
    /// Cards can be played this turn.
    AwaitingAction,
    /// The action budget is spent; only drinks and `end_turn` remain.
    TurnOver,
    /// Every turn has been played.
    Finished,
}

/// Full state of one playthrough.
///
/// Serializes for renderers; the RNG is omitted (see [`GameState::rng_state`]).
#[derive(Clone, Debug, Serialize)]
pub struct GameState {
    /// Name of the character being played.
    pub character: String,

    /// Current turn, starting at 1. The session is finished past [`MAX_TURNS`].
    pub turn: u32,

    pub resources: Resources,

    /// Temporary buff turn counters.
    pub buffs: Buffs,

    /// Buffs that skip this turn's decay.
    pub buff_protection: BuffProtection,

    pub permanent_buffs: PermanentBuffs,

    /// Remaining card resolutions that repeat twice.
    pub double_charges: u32,

    /// The next mental card resolves twice.
    pub double_next_mental_only: bool,

    /// Whether the summer memory bonus is counting plays.
    pub summer_memory_active: bool,

    /// Card plays counted since summer memory was activated.
    pub skill_use_count: u32,

    /// Category of the most recently played card.
    pub last_card_category: Option<CardCategory>,

    pub piles: Piles,

    /// Draws and effects reserved for later turns.
    pub schedule: DeferredSchedule,

    pub recurring_effects: Vec<RecurringEffect>,

    /// Genre, weight, and color for each turn.
    pub turn_info: TurnSchedule,

    /// P-items in check order.
    pub p_items: Vec<PItem>,

    /// Unused drinks.
    pub drinks: Vec<Drink>,

    /// Card plays left this turn.
    pub actions_remaining: u32,

    /// Extra draws at the next turn start.
    pub next_turn_draw_bonus: u32,

    /// Every card played this session, in order.
    pub history: Vector<PlayRecord>,

    /// Player-facing log of the current turn.
    pub log: GameLog,

    /// Character turn events keyed by turn.
    pub turn_events: FxHashMap<u32, Effect>,

    pub config: SessionConfig,

    #[serde(skip)]
    pub(crate) rng: GameRng,
}

impl GameState {
    /// Create a session.
    ///
    /// The deck is shuffled and the turn schedule generated from the
    /// character's genre preferences, both with the session RNG.
    #[must_use]
    pub fn new(
        character: &Character,
        deck: Vec<Card>,
        p_items: Vec<PItem>,
        drinks: Vec<Drink>,
        config: SessionConfig,
    ) -> Self {
        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);

        let mut piles = Piles::new(deck);
        rng.shuffle(&mut piles.deck);
        let turn_info = TurnSchedule::generate(&character.genres, &config.genre_weights, &mut rng);

        tracing::debug!(
            character = %character.name,
            deck = piles.deck.len(),
            items = p_items.len(),
            drinks = drinks.len(),
            seed = rng.seed(),
            "session created"
        );

        Self {
            character: character.name.clone(),
            turn: 1,
            resources: Resources::new(config.max_hp, config.initial_energy),
            buffs: Buffs::default(),
            buff_protection: BuffProtection::default(),
            permanent_buffs: PermanentBuffs::default(),
            double_charges: 0,
            double_next_mental_only: false,
            summer_memory_active: false,
            skill_use_count: 0,
            last_card_category: None,
            piles,
            schedule: DeferredSchedule::new(),
            recurring_effects: Vec::new(),
            turn_info,
            p_items,
            drinks,
            actions_remaining: 1,
            next_turn_draw_bonus: 0,
            history: Vector::new(),
            log: GameLog::new(),
            turn_events: character.turn_events.clone(),
            config,
            rng,
        }
    }

    // === Queries ===

    /// Current phase of the turn machine.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.turn > MAX_TURNS {
            Phase::Finished
        } else if self.actions_remaining == 0 {
            Phase::TurnOver
        } else {
            Phase::AwaitingAction
        }
    }

    /// Cards in hand, in hand order.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.piles.hand
    }

    /// Schedule slot of the current turn, if the session is still running.
    #[must_use]
    pub fn current_turn_info(&self) -> Option<&TurnInfo> {
        self.turn_info.get(self.turn)
    }

    /// Seed the session was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// RNG position, for checkpointing alongside the serialized state.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Rewind the RNG to a checkpoint taken with [`GameState::rng_state`].
    ///
    /// The serialized state omits the RNG; restoring it makes later
    /// reshuffles replay exactly as they would have from the checkpoint.
    pub fn restore_rng(&mut self, checkpoint: &GameRngState) {
        self.rng = GameRng::from_state(checkpoint);
    }

    // === Mutators used by effects ===

    /// Add turns to a temporary buff.
    ///
    /// A buff raised from exactly zero is protected from this turn's decay.
    pub fn add_buff(&mut self, buff: TempBuff, turns: i32) {
        if self.buffs.get(buff) == 0 {
            *self.buff_protection.get_mut(buff) = true;
        }
        *self.buffs.get_mut(buff) += turns;
    }

    /// Gain concentration, ×1.5 rounded up under the concentration boost.
    pub fn add_concentration(&mut self, amount: i64) {
        let boost = self.buffs.is_active(TempBuff::ConcBoost);
        self.resources.concentration += boosted_concentration(amount, boost);
    }

    /// Reserve extra draws for the turn `turns_later` from now.
    ///
    /// Ignored when that turn is past the end of the session.
    pub fn reserve_draw(&mut self, turns_later: u32, amount: u32) {
        let turn = self.turn + turns_later;
        if turn <= MAX_TURNS {
            self.schedule.reserve_draw(turn, amount);
        }
    }

    /// Reserve an effect for the turn `turns_later` from now.
    ///
    /// Ignored when that turn is past the end of the session.
    pub fn reserve_effect(&mut self, turns_later: u32, effect: Effect) {
        let turn = self.turn + turns_later;
        if turn <= MAX_TURNS {
            self.schedule.reserve_effect(turn, effect);
        }
    }

    /// Register an effect for each of the next `turns` turn starts.
    pub fn add_recurring_effect(&mut self, turns: u32, effect: Effect, description: String) {
        if turns == 0 {
            return;
        }
        self.recurring_effects
            .push(RecurringEffect::new(turns, effect, description));
    }

    /// Draw up to `count` cards. Returns how many were drawn.
    pub fn draw_cards(&mut self, count: u32) -> u32 {
        self.piles
            .draw(count, self.config.hand_capacity, &mut self.rng)
    }

    /// Discard the whole hand and draw its size plus `extra`.
    pub fn cycle_hand(&mut self, extra: u32) {
        let discarded = self.piles.discard_hand() as u32;
        self.draw_cards(discarded + extra);
    }
}
