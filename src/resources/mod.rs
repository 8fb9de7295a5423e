//! Resource and buff model.
//!
//! ## Key Types
//!
//! - `Resources`: HP, energy, concentration, score
//! - `Buffs` / `BuffProtection`: temporary buff counters and decay flags
//! - `PermanentBuffs`: modifiers that last the whole session

mod buffs;
mod permanent;
mod pool;

pub use buffs::{BuffProtection, BuffTable, Buffs, TempBuff};
pub use permanent::{PermanentBuff, PermanentBuffs};
pub use pool::{boosted_concentration, Resources, CONC_BOOST_MULTIPLIER};
