//! Card definitions.
//!
//! A [`Card`] couples declarative metadata (cost, category, rarity, whether it
//! is consumed on use) with an executable [`Effect`]. Catalog templates are
//! cloned into each session, so a `Card` value doubles as the per-run
//! instance that moves between deck, hand, discard, and exile.

use serde::{Deserialize, Serialize};

use crate::core::GameState;
use crate::effects::{Condition, Effect};

/// Asset reference used when a definition has no art of its own.
pub const PLACEHOLDER_ART: &str = "placeholder.png";

/// What a card's cost is paid with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CostKind {
    /// Paid from concentration.
    Concentration,
    /// Paid from energy first, with any shortfall taken from HP.
    Resource,
}

/// A card's cost.
///
/// Amounts are non-negative except the refund variant: a `Resource` cost of
/// −1 pays the player back one energy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cost {
    pub kind: CostKind,
    pub amount: i64,
}

impl Cost {
    /// A cost paid from concentration.
    #[must_use]
    pub const fn concentration(amount: i64) -> Self {
        Self {
            kind: CostKind::Concentration,
            amount,
        }
    }

    /// A cost paid from energy, then HP.
    #[must_use]
    pub const fn resource(amount: i64) -> Self {
        Self {
            kind: CostKind::Resource,
            amount,
        }
    }

    /// Check if this is the energy refund variant.
    #[must_use]
    pub fn is_refund(&self) -> bool {
        self.kind == CostKind::Resource && self.amount < 0
    }
}

/// Card category. Drives permanent concentration gains, the mental-only
/// double resolution, and fixed-score banking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardCategory {
    Mental,
    Active,
}

impl std::fmt::Display for CardCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardCategory::Mental => write!(f, "mental"),
            CardCategory::Active => write!(f, "active"),
        }
    }
}

/// Rarity tier (display only).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    #[default]
    N,
    R,
    SR,
    SSR,
}

/// A playable card.
///
/// ## Example
///
/// ```
/// use idol_stage::cards::{Card, CardCategory, Cost, Rarity};
/// use idol_stage::effects::Effect;
///
/// let presence = Card::new(
///     "Presence",
///     Cost::resource(0),
///     CardCategory::Mental,
///     Effect::batch([Effect::AddConcentration(5), Effect::GainActions(1)]),
/// )
/// .rarity(Rarity::SR);
///
/// assert!(!presence.once);
/// assert_eq!(presence.rarity, Rarity::SR);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Unique name; the catalog key.
    pub name: String,

    /// Cost paid when the card is played.
    pub cost: Cost,

    /// Mental or active.
    pub category: CardCategory,

    /// What the card does, resolved once per repeat.
    pub effect: Effect,

    /// Extra requirement beyond affording the cost.
    pub requirement: Option<Condition>,

    /// Consumed after use (goes to exile instead of discard).
    pub once: bool,

    /// Banks fixed score for other active cards instead of cashing it.
    pub ultimate: bool,

    pub rarity: Rarity,
    pub description: String,

    /// Opaque asset reference for renderers.
    pub art: String,
}

impl Card {
    /// Create a reusable card with no requirement.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        cost: Cost,
        category: CardCategory,
        effect: Effect,
    ) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "card name must not be empty");
        debug_assert!(cost.amount >= -1, "only the -1 refund cost may be negative");
        Self {
            name,
            cost,
            category,
            effect,
            requirement: None,
            once: false,
            ultimate: false,
            rarity: Rarity::default(),
            description: String::new(),
            art: PLACEHOLDER_ART.to_string(),
        }
    }

    /// Mark the card as consumed after use.
    #[must_use]
    pub fn once(mut self) -> Self {
        self.once = true;
        self
    }

    /// Mark the card as the fixed-score banking card.
    #[must_use]
    pub fn ultimate(mut self) -> Self {
        self.ultimate = true;
        self
    }

    /// Add a usability requirement.
    #[must_use]
    pub fn requires(mut self, condition: Condition) -> Self {
        self.requirement = Some(condition);
        self
    }

    #[must_use]
    pub fn rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    #[must_use]
    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_art(mut self, art: impl Into<String>) -> Self {
        self.art = art.into();
        self
    }

    /// Check whether the card can be played right now.
    ///
    /// A concentration cost needs that much concentration; a resource cost
    /// needs that much HP (energy is not counted). The requirement, if any,
    /// must also hold.
    #[must_use]
    pub fn can_use(&self, state: &GameState) -> bool {
        let affordable = match self.cost.kind {
            CostKind::Concentration => state.resources.concentration >= self.cost.amount,
            CostKind::Resource => state.resources.hp >= self.cost.amount,
        };
        affordable
            && self
                .requirement
                .as_ref()
                .is_none_or(|condition| condition.evaluate(state))
    }
}
