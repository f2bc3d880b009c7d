//! Material catalog data for the Hibana falling-particle simulator
//!
//! This crate provides the foundational data types for the simulation:
//! - Material kinds and behavior classes (`MaterialKind`, `BehaviorClass`)
//! - Immutable archetypes and the registry (`MaterialDef`, `Materials`)
//! - Per-cell instance state (`Cell`, `FrozenState`)

mod cell;
mod kinds;
mod materials;

pub use cell::{approximate_color, Cell, FrozenState};
pub use kinds::{BehaviorClass, MaterialKind};
pub use materials::{
    fire_fade_color, strong_fire_fade_color, MaterialDef, Materials, FIRE_START_TEMPERATURE,
    FROZEN_COLOR, FROZEN_DURABILITY, FROZEN_WEIGHT, WAVE_START_POWER, WAVE_START_RANGE,
};
