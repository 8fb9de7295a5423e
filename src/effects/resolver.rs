//! Effect resolution - executing effects on game state.
//!
//! The resolver is the only place that interprets [`Effect`] variants. Each
//! variant maps onto one `GameState` mutator, so the rules for scaling,
//! clamping, and scheduling live with the state they touch.

use crate::core::GameState;

use super::Effect;

/// Resolves effects on game state.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve one effect.
    pub fn resolve(state: &mut GameState, effect: &Effect) {
        match effect {
            Effect::Nothing => {}

            Effect::Score {
                base,
                concentration_rate,
            } => {
                state.calculate_score(*base, *concentration_rate);
            }

            Effect::AddConcentration(amount) => state.add_concentration(*amount),

            Effect::GainEnergy(amount) => state.resources.energy += amount,

            Effect::LoseHp(amount) => state.resources.lose_hp(*amount),

            Effect::GainActions(n) => state.actions_remaining += n,

            Effect::AddBuff { buff, turns } => state.add_buff(*buff, *turns),

            Effect::AddPermanentBuff { buff, amount } => {
                state.permanent_buffs.add(*buff, *amount);
            }

            Effect::DoubleCharges(n) => state.double_charges += n,

            Effect::DoubleNextMental => state.double_next_mental_only = true,

            Effect::ActivateSummerMemory => state.summer_memory_active = true,

            Effect::Draw(n) => {
                state.draw_cards(*n);
            }

            Effect::CycleHand { extra } => state.cycle_hand(*extra),

            Effect::NextTurnDrawBonus(n) => state.next_turn_draw_bonus += n,

            Effect::ReserveDraw {
                turns_later,
                amount,
            } => state.reserve_draw(*turns_later, *amount),

            Effect::ReserveEffect {
                turns_later,
                effect,
            } => state.reserve_effect(*turns_later, (**effect).clone()),

            Effect::Recurring {
                turns,
                effect,
                description,
            } => state.add_recurring_effect(*turns, (**effect).clone(), description.clone()),

            Effect::Batch(effects) => {
                for sub_effect in effects {
                    Self::resolve(state, sub_effect);
                }
            }
        }
    }
}

impl Effect {
    /// Resolve this effect against the state.
    pub fn apply(&self, state: &mut GameState) {
        EffectResolver::resolve(state, self);
    }
}
