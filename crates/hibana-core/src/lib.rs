//! Grid and tick engine for the Hibana falling-particle simulator
//!
//! One tick is a single bounded pass over the grid: a randomized
//! column scan evaluates reactions and movement against a
//! snapshot-consistent view, then the collected effects are applied in
//! a fixed priority order. External collaborators (renderer, brush,
//! UI toggles) touch the simulation only through `Grid`, `Brush` and
//! the `TickEngine` flags.

pub mod brush;
pub mod config;
pub mod effects;
pub mod engine;
pub mod grid;
mod reactions;
pub mod rng_trait;
pub mod stats;

pub use brush::Brush;
pub use config::{ConfigError, SimConfig};
pub use effects::{EffectQueues, SetFire, WaveStep};
pub use engine::TickEngine;
pub use grid::{Grid, NEIGHBOR_OFFSETS};
pub use rng_trait::SimRng;
pub use stats::{NoopStats, SimStats};

// Re-export the material data types for convenience
pub use hibana_materials::{BehaviorClass, Cell, MaterialKind, Materials};
