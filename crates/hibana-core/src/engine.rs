//! The tick engine
//!
//! One `tick` advances the whole grid by a single bounded step:
//!
//! 1. Snapshot the grid and shuffle the column order.
//! 2. Walk every cell (shuffled columns, rows top to bottom),
//!    evaluating reactions and movement against the snapshot.
//!    Transitions of the evaluated cell itself land directly in the
//!    live grid; everything that touches a neighbor is queued.
//! 3. Drain the effect queues in a fixed priority order, each queue
//!    fully before the next, re-checking preconditions against the
//!    live grid as effects apply.

use hibana_materials::Cell;

use crate::effects::EffectQueues;
use crate::grid::Grid;
use crate::reactions::{self, FireStrength};
use crate::rng_trait::SimRng;
use crate::stats::SimStats;
use crate::SimConfig;

pub struct TickEngine {
    pub paused: bool,
    /// Gates movement evaluation.
    pub physics_enabled: bool,
    /// Gates reaction evaluation.
    pub features_enabled: bool,
    queues: EffectQueues,
    columns: Vec<usize>,
}

impl TickEngine {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            paused: config.paused,
            physics_enabled: config.physics_enabled,
            features_enabled: config.features_enabled,
            queues: EffectQueues::default(),
            columns: Vec::new(),
        }
    }

    /// Advance the simulation by one tick. A paused engine leaves the
    /// grid untouched.
    pub fn tick<R: SimRng>(&mut self, grid: &mut Grid, rng: &mut R, stats: &mut dyn SimStats) {
        if self.paused {
            return;
        }
        self.queues.clear();

        let snap = grid.snapshot();
        let width = grid.width();
        let height = grid.height();

        self.columns.clear();
        self.columns.extend(0..width);
        rng.shuffle(&mut self.columns);

        for ci in 0..self.columns.len() {
            let col = self.columns[ci];
            for row in 0..height {
                let cell = snap[row * width + col];
                if cell.frozen {
                    // Frozen cells are inert but still nucleate ice on
                    // adjacent water, exactly like an ice cell
                    if self.features_enabled
                        && grid
                            .neighbors8(row, col)
                            .iter()
                            .any(|&(r, c)| snap[r * width + c].kind == crate::MaterialKind::Water)
                    {
                        self.queues.ice.extend(grid.neighbors8(row, col));
                    }
                    continue;
                }
                if self.features_enabled {
                    reactions::evaluate_spontaneous(
                        &mut self.queues,
                        grid,
                        &snap,
                        row,
                        col,
                        cell,
                        rng,
                        stats,
                    );
                }
                if self.physics_enabled {
                    evaluate_movement(&mut self.queues, &snap, width, height, row, col, cell, rng);
                }
            }
        }

        log::trace!(
            "tick: {} effects queued on {}x{} grid",
            self.queues.len(),
            width,
            height
        );

        self.apply_effects(grid, rng, stats);
    }

    /// Phase 2: drain each queue fully before the next. Later queues
    /// deliberately see the board as mutated by the earlier ones.
    fn apply_effects<R: SimRng>(&mut self, grid: &mut Grid, rng: &mut R, stats: &mut dyn SimStats) {
        for &(from, to) in &self.queues.moves {
            // Re-check against the live grid: an earlier move may have
            // filled the destination this tick
            if grid.get(to.0, to.1).weight < grid.get(from.0, from.1).weight {
                grid.swap(from, to);
                stats.record_cell_moved();
            }
        }
        for &(row, col) in &self.queues.fire {
            reactions::fire_contact(grid, row, col, FireStrength::Ordinary, rng, stats);
        }
        for &(row, col) in &self.queues.strong_fire {
            reactions::fire_contact(grid, row, col, FireStrength::Strong, rng, stats);
        }
        for &(row, col) in &self.queues.lava_seed {
            reactions::fire_contact(grid, row, col, FireStrength::Strong, rng, stats);
        }
        for &step in &self.queues.wave_steps {
            reactions::wave_step(grid, step, stats);
        }
        for &effect in &self.queues.set_fire {
            reactions::set_fire(grid, effect, rng, stats);
        }
        for &(row, col) in &self.queues.fade {
            reactions::fade(grid, row, col);
        }
        for &(row, col) in &self.queues.salt {
            reactions::salt_contact(grid, row, col, stats);
        }
        for &(row, col) in &self.queues.ice {
            reactions::ice_contact(grid, row, col, rng, stats);
        }
        for &(row, col) in &self.queues.freeze {
            reactions::freeze_contact(grid, row, col, stats);
        }
    }
}

/// Weight-ordered displacement against the snapshot. Falling solids
/// only drop straight down; liquids and gases also try the two lower
/// diagonals and then sideways. Rigid solids and specials never move.
#[allow(clippy::too_many_arguments)]
fn evaluate_movement<R: SimRng>(
    queues: &mut EffectQueues,
    snap: &[Cell],
    width: usize,
    height: usize,
    row: usize,
    col: usize,
    cell: Cell,
    rng: &mut R,
) {
    let lighter = |r: usize, c: usize| snap[r * width + c].weight < cell.weight;

    if cell.behavior.falls() {
        if row + 1 < height && lighter(row + 1, col) {
            queues.moves.push(((row, col), (row + 1, col)));
        }
        return;
    }
    if !cell.behavior.flows() {
        return;
    }

    // On the bottom row nothing below exists and the cell rests
    if row + 1 >= height {
        return;
    }
    if lighter(row + 1, col) {
        queues.moves.push(((row, col), (row + 1, col)));
        return;
    }

    let mut candidates: smallvec::SmallVec<[(usize, usize); 2]> = smallvec::SmallVec::new();
    if col > 0 && lighter(row + 1, col - 1) {
        candidates.push((row + 1, col - 1));
    }
    if col + 1 < width && lighter(row + 1, col + 1) {
        candidates.push((row + 1, col + 1));
    }
    if candidates.is_empty() {
        if col > 0 && lighter(row, col - 1) {
            candidates.push((row, col - 1));
        }
        if col + 1 < width && lighter(row, col + 1) {
            candidates.push((row, col + 1));
        }
    }
    if let Some(&to) = rng.choose(&candidates) {
        queues.moves.push(((row, col), to));
    }
}
