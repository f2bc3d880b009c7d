//! Per-cell instance state
//!
//! A `Cell` is the unit stored in every grid position. It carries a
//! copy of the archetype attributes so that freezing can override them
//! per instance and restore them exactly later.

use serde::{Deserialize, Serialize};

use crate::kinds::{BehaviorClass, MaterialKind};
use crate::materials::{FROZEN_COLOR, FROZEN_DURABILITY, FROZEN_WEIGHT};

/// Attributes snapshotted when a cell freezes, restored verbatim when
/// it unfreezes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrozenState {
    pub weight: i32,
    pub durability: i32,
    pub color: [u8; 3],
}

/// One material instance. Every grid cell holds exactly one at all
/// times; air is a cell like any other.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Cell {
    pub kind: MaterialKind,
    pub behavior: BehaviorClass,
    /// Displacement ordering; higher sinks below lower.
    pub weight: i32,
    /// Resistance to dissolution and explosion destruction.
    pub durability: i32,
    pub soluble: bool,
    pub burning: bool,
    /// Denominator of the per-tick self-extinguish chance (0 = never).
    pub extinct_chance: u32,
    pub can_freeze: bool,
    pub frozen: bool,
    pub saved: Option<FrozenState>,
    /// Fire decay counter.
    pub temperature: i32,
    /// Explosion wave persistence counter.
    pub life_tick: i32,
    pub power: i32,
    pub range: i32,
    /// Wick trigger flag.
    pub activated: bool,
    /// Display color; never read by any simulation rule.
    pub color: [u8; 3],
    /// Jittered base color, restored when burning stops.
    pub base_color: [u8; 3],
    pub burning_color: Option<[u8; 3]>,
}

impl Cell {
    /// Snapshot the physical attributes and switch to the inert frozen
    /// overrides. Burning is extinguished. No-op if already frozen.
    pub fn freeze(&mut self) {
        if self.frozen {
            return;
        }
        self.saved = Some(FrozenState {
            weight: self.weight,
            durability: self.durability,
            color: self.color,
        });
        self.frozen = true;
        self.burning = false;
        self.weight = FROZEN_WEIGHT;
        self.durability = FROZEN_DURABILITY;
        self.color = approximate_color(FROZEN_COLOR, 8);
    }

    /// Restore the pre-freeze attributes exactly.
    pub fn unfreeze(&mut self) {
        if let Some(saved) = self.saved.take() {
            self.weight = saved.weight;
            self.durability = saved.durability;
            self.color = saved.color;
        }
        self.frozen = false;
    }

    /// Re-jitter the burning palette; called each tick while burning.
    pub fn refresh_burning_color(&mut self) {
        if let Some(base) = self.burning_color {
            self.color = approximate_color(base, 20);
        }
    }

    /// Drop the burning flag and revert to the instance's base color.
    pub fn stop_burning(&mut self) {
        self.burning = false;
        self.color = self.base_color;
    }
}

/// Jitter a base RGB color by a single random offset applied to all
/// three channels, clamped to the valid range. Display-only, so this
/// draws from the thread RNG rather than the injected simulation RNG.
pub fn approximate_color(base: [u8; 3], spread: i32) -> [u8; 3] {
    if spread == 0 {
        return base;
    }
    let offset = rand::Rng::gen_range(&mut rand::thread_rng(), -spread..=spread);
    let mut out = [0u8; 3];
    for (o, b) in out.iter_mut().zip(base) {
        *o = (b as i32 + offset).clamp(0, 255) as u8;
    }
    out
}
