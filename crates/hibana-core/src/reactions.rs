//! Material reaction rules
//!
//! Phase 1 (`evaluate_spontaneous`) applies a cell's own transitions
//! directly and queues everything that touches a neighbor. Phase 2
//! handlers (`fire_contact`, `wave_step`, ...) are invoked by the
//! engine while draining the queues in priority order.

use hibana_materials::{fire_fade_color, strong_fire_fade_color, Cell, MaterialKind};

use crate::effects::{EffectQueues, SetFire, WaveStep};
use crate::grid::Grid;
use crate::rng_trait::SimRng;
use crate::stats::SimStats;

// Per-tick chance denominators of the spontaneous rules.
const VAPOR_CONDENSE_CHANCE: u32 = 51;
const ACID_VAPOR_CONDENSE_CHANCE: u32 = 36;
const DISSOLVE_CHANCE: u32 = 36;
const SALT_CONSUME_CHANCE: u32 = 3;
const LIQUID_NITROGEN_BOIL_CHANCE: u32 = 111;
const NITROGEN_DISSIPATE_CHANCE: u32 = 11;
const WAX_SET_CHANCE: u32 = 51;

// Contact chances.
const ICE_FREEZE_CHANCE: u32 = 50;
const SNOW_FORM_CHANCE: u32 = 15;
const STONE_MELT_CHANCE: u32 = 46;
const BURNING_IGNITE_CHANCE: u32 = 20;
const LAVA_IGNITE_CHANCE: u32 = 120;

/// Ordinary fire versus strong fire / lava contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FireStrength {
    Ordinary,
    Strong,
}

/// Neighbor materials that suppress ignition and put burning out.
fn is_quencher(kind: MaterialKind) -> bool {
    matches!(
        kind,
        MaterialKind::Water
            | MaterialKind::Vapor
            | MaterialKind::SaltWater
            | MaterialKind::LiquidNitrogen
    )
}

/// Kind-specific Phase 1 evaluation for one (non-frozen) cell.
///
/// `cell` is the tick-start snapshot of the evaluated position;
/// neighbor attributes are read from `snap` as well. Transitions of
/// the cell itself land in the live grid immediately; neighbor effects
/// go through `queues`. Acid dissolution is the one exception: it
/// removes the dissolved neighbor inline.
#[allow(clippy::too_many_arguments)]
pub(crate) fn evaluate_spontaneous<R: SimRng>(
    queues: &mut EffectQueues,
    grid: &mut Grid,
    snap: &[Cell],
    row: usize,
    col: usize,
    cell: Cell,
    rng: &mut R,
    stats: &mut dyn SimStats,
) {
    let width = grid.width();
    let neighbors = grid.neighbors8(row, col);
    let snap_at = |r: usize, c: usize| &snap[r * width + c];

    match cell.kind {
        MaterialKind::Vapor => {
            if rng.one_in(VAPOR_CONDENSE_CHANCE) {
                grid.replace(row, col, MaterialKind::Water);
                stats.record_state_change();
            }
        }
        MaterialKind::AcidVapor => {
            if rng.one_in(ACID_VAPOR_CONDENSE_CHANCE) {
                grid.replace(row, col, MaterialKind::Acid);
                stats.record_state_change();
            } else {
                dissolve_neighbors(grid, snap, &neighbors, row, col, rng, stats);
            }
        }
        MaterialKind::Fire => {
            if cell.temperature <= 1 {
                grid.replace(row, col, MaterialKind::Air);
                stats.record_state_change();
            } else {
                let next = cell.temperature - 1;
                let live = grid.cell_mut(row, col);
                live.temperature = next;
                if let Some(color) = fire_fade_color(next) {
                    live.color = color;
                }
            }
            queues.fire.extend(neighbors.iter().copied());
        }
        MaterialKind::StrongFire => {
            if cell.temperature <= 1 {
                grid.replace(row, col, MaterialKind::Air);
                stats.record_state_change();
            } else {
                let next = cell.temperature - 1;
                let live = grid.cell_mut(row, col);
                live.temperature = next;
                if let Some(color) = strong_fire_fade_color(next) {
                    live.color = color;
                }
            }
            queues.strong_fire.extend(neighbors.iter().copied());
        }
        MaterialKind::Acid => {
            dissolve_neighbors(grid, snap, &neighbors, row, col, rng, stats);
        }
        MaterialKind::Salt => {
            if neighbors
                .iter()
                .any(|&(r, c)| snap_at(r, c).kind == MaterialKind::Water)
            {
                queues.salt.extend(neighbors.iter().copied());
                if rng.one_in(SALT_CONSUME_CHANCE) {
                    grid.replace(row, col, MaterialKind::Air);
                    stats.record_state_change();
                }
            }
        }
        MaterialKind::Ice => {
            if neighbors
                .iter()
                .any(|&(r, c)| snap_at(r, c).kind == MaterialKind::Water)
            {
                queues.ice.extend(neighbors.iter().copied());
            }
        }
        MaterialKind::Snow => {
            if neighbors
                .iter()
                .any(|&(r, c)| snap_at(r, c).kind == MaterialKind::Vapor)
            {
                queues.ice.extend(neighbors.iter().copied());
            }
        }
        MaterialKind::ExplosionWave => {
            if cell.life_tick <= 0 || cell.range <= 0 {
                grid.replace(row, col, MaterialKind::Air);
            } else {
                grid.cell_mut(row, col).life_tick = cell.life_tick - 1;
                queues.wave_steps.push(WaveStep {
                    row,
                    col,
                    power: cell.power,
                    range: cell.range,
                });
                queues.fire.extend(neighbors.iter().copied());
            }
        }
        MaterialKind::Wick => {
            if cell.activated {
                queues.fire.extend(neighbors.iter().copied());
                grid.replace(row, col, MaterialKind::Air);
                stats.record_state_change();
            }
        }
        MaterialKind::LiquidNitrogen => {
            queues.freeze.extend(neighbors.iter().copied());
            if rng.one_in(LIQUID_NITROGEN_BOIL_CHANCE) {
                grid.replace(row, col, MaterialKind::Nitrogen);
                stats.record_state_change();
            }
        }
        MaterialKind::Nitrogen => {
            if rng.one_in(NITROGEN_DISSIPATE_CHANCE) {
                grid.replace(row, col, MaterialKind::Air);
                stats.record_state_change();
            }
        }
        MaterialKind::LiquidWax => {
            // Sets only once it can no longer fall
            let settled =
                row + 1 == grid.height() || snap_at(row + 1, col).weight >= cell.weight;
            if settled && rng.one_in(WAX_SET_CHANCE) {
                grid.replace(row, col, MaterialKind::Wax);
                stats.record_state_change();
            }
        }
        MaterialKind::Lava => {
            if neighbors
                .iter()
                .any(|&(r, c)| snap_at(r, c).kind != MaterialKind::Lava)
            {
                for &(r, c) in &neighbors {
                    queues.strong_fire.push((r, c));
                    queues.lava_seed.push((r, c));
                    queues.set_fire.push(SetFire {
                        row: r,
                        col: c,
                        chance: LAVA_IGNITE_CHANCE,
                    });
                }
            }
        }
        _ => {}
    }

    // Burning upkeep is class-wide, not per kind
    if cell.behavior.is_ignitable() && cell.burning {
        for &(r, c) in &neighbors {
            queues.fire.push((r, c));
            queues.set_fire.push(SetFire {
                row: r,
                col: c,
                chance: BURNING_IGNITE_CHANCE,
            });
        }
        queues.fade.push((row, col));
        if cell.extinct_chance > 0 && rng.one_in(cell.extinct_chance) {
            grid.replace(row, col, MaterialKind::Air);
            stats.record_state_change();
        }
    }
}

/// Acid eats each soluble neighbor with an independent roll; the acid
/// itself is spent the moment it dissolves anything.
fn dissolve_neighbors<R: SimRng>(
    grid: &mut Grid,
    snap: &[Cell],
    neighbors: &[(usize, usize)],
    row: usize,
    col: usize,
    rng: &mut R,
    stats: &mut dyn SimStats,
) {
    let width = grid.width();
    let mut dissolved = false;
    for &(r, c) in neighbors {
        let target = &snap[r * width + c];
        if target.soluble && !target.frozen && rng.one_in(DISSOLVE_CHANCE) {
            grid.replace(r, c, MaterialKind::Air);
            dissolved = true;
            stats.record_reaction();
        }
    }
    if dissolved {
        grid.replace(row, col, MaterialKind::Air);
    }
}

/// Apply fire (or strong fire) contact to one target cell.
///
/// A frozen target unfreezes and absorbs the contact with no further
/// effect.
pub(crate) fn fire_contact<R: SimRng>(
    grid: &mut Grid,
    row: usize,
    col: usize,
    strength: FireStrength,
    rng: &mut R,
    stats: &mut dyn SimStats,
) {
    let cell = *grid.get(row, col);
    if cell.frozen {
        grid.cell_mut(row, col).unfreeze();
        stats.record_reaction();
        return;
    }
    match cell.kind {
        MaterialKind::Water => {
            grid.replace(row, col, MaterialKind::Vapor);
            stats.record_reaction();
        }
        MaterialKind::Acid => {
            grid.replace(row, col, MaterialKind::AcidVapor);
            stats.record_reaction();
        }
        MaterialKind::SaltWater => {
            if rng.gen_index(4) < 3 {
                grid.replace(row, col, MaterialKind::Vapor);
            } else {
                // Boils off: the vapor escapes into a random air
                // neighbor and the salt is left behind
                let airs: Vec<(usize, usize)> = grid
                    .neighbors8(row, col)
                    .into_iter()
                    .filter(|&(r, c)| grid.get(r, c).kind == MaterialKind::Air)
                    .collect();
                if let Some(&(r, c)) = rng.choose(&airs) {
                    grid.replace(r, c, MaterialKind::Vapor);
                }
                grid.replace(row, col, MaterialKind::Salt);
            }
            stats.record_reaction();
        }
        MaterialKind::Ice | MaterialKind::Snow => {
            grid.replace(row, col, MaterialKind::Water);
            stats.record_reaction();
        }
        MaterialKind::Gunpowder => {
            grid.replace(row, col, MaterialKind::ExplosionWave);
            stats.record_reaction();
        }
        MaterialKind::Methane => {
            grid.replace(row, col, MaterialKind::Fire);
            stats.record_reaction();
        }
        MaterialKind::Wick => {
            grid.cell_mut(row, col).activated = true;
            stats.record_reaction();
        }
        MaterialKind::Wax => {
            grid.replace(row, col, MaterialKind::LiquidWax);
            stats.record_reaction();
        }
        MaterialKind::Stone if strength == FireStrength::Strong => {
            if rng.one_in(STONE_MELT_CHANCE) {
                grid.replace(row, col, MaterialKind::Lava);
                stats.record_reaction();
            }
        }
        _ => {
            if cell.behavior.is_ignitable() && !cell.burning {
                let mut has_air = false;
                let mut quenched = false;
                for (r, c) in grid.neighbors8(row, col) {
                    let kind = grid.get(r, c).kind;
                    has_air |= kind == MaterialKind::Air;
                    quenched |= is_quencher(kind);
                }
                if has_air && !quenched {
                    let live = grid.cell_mut(row, col);
                    live.burning = true;
                    live.refresh_burning_color();
                    stats.record_reaction();
                }
            }
        }
    }
}

/// Expand one ring of an explosion wave: every neighbor weak enough is
/// consumed by a wave one step weaker.
pub(crate) fn wave_step(grid: &mut Grid, step: WaveStep, stats: &mut dyn SimStats) {
    for (r, c) in grid.neighbors8(step.row, step.col) {
        let target = grid.get(r, c);
        if target.kind == MaterialKind::ExplosionWave || target.durability > step.power {
            continue;
        }
        let mut wave = grid.materials().create(MaterialKind::ExplosionWave);
        wave.power = step.power - 1;
        wave.range = step.range - 1;
        grid.set_cell(r, c, wave);
        stats.record_reaction();
    }
}

/// Chance for an air cell to catch fire next to burning fuel or lava.
pub(crate) fn set_fire<R: SimRng>(
    grid: &mut Grid,
    effect: SetFire,
    rng: &mut R,
    stats: &mut dyn SimStats,
) {
    if grid.get(effect.row, effect.col).kind == MaterialKind::Air && rng.one_in(effect.chance) {
        grid.replace(effect.row, effect.col, MaterialKind::Fire);
        stats.record_reaction();
    }
}

/// Burning upkeep: put the fire out if quenched or starved of air and
/// flame, otherwise flicker the burning color.
pub(crate) fn fade(grid: &mut Grid, row: usize, col: usize) {
    let cell = *grid.get(row, col);
    if !cell.behavior.is_ignitable() || !cell.burning {
        return;
    }
    let mut sustained = false;
    let mut quenched = false;
    for (r, c) in grid.neighbors8(row, col) {
        let kind = grid.get(r, c).kind;
        sustained |= matches!(
            kind,
            MaterialKind::Air | MaterialKind::Fire | MaterialKind::StrongFire
        );
        quenched |= is_quencher(kind);
    }
    let live = grid.cell_mut(row, col);
    if quenched || !sustained {
        live.stop_burning();
    } else {
        live.refresh_burning_color();
    }
}

/// Water next to salt turns briny.
pub(crate) fn salt_contact(grid: &mut Grid, row: usize, col: usize, stats: &mut dyn SimStats) {
    if grid.get(row, col).kind == MaterialKind::Water {
        grid.replace(row, col, MaterialKind::SaltWater);
        stats.record_reaction();
    }
}

/// Cold accretion: water may freeze solid next to ice, vapor may
/// settle as snow.
pub(crate) fn ice_contact<R: SimRng>(
    grid: &mut Grid,
    row: usize,
    col: usize,
    rng: &mut R,
    stats: &mut dyn SimStats,
) {
    match grid.get(row, col).kind {
        MaterialKind::Water => {
            if rng.one_in(ICE_FREEZE_CHANCE) {
                grid.replace(row, col, MaterialKind::Ice);
                stats.record_reaction();
            }
        }
        MaterialKind::Vapor => {
            if rng.one_in(SNOW_FORM_CHANCE) {
                grid.replace(row, col, MaterialKind::Snow);
                stats.record_reaction();
            }
        }
        _ => {}
    }
}

/// Liquid-nitrogen contact forces a freeze transition on the target.
pub(crate) fn freeze_contact(grid: &mut Grid, row: usize, col: usize, stats: &mut dyn SimStats) {
    let cell = *grid.get(row, col);
    if cell.frozen {
        return;
    }
    match cell.kind {
        MaterialKind::Water | MaterialKind::SaltWater => {
            grid.replace(row, col, MaterialKind::Ice);
            stats.record_reaction();
        }
        MaterialKind::Fire | MaterialKind::StrongFire => {
            grid.replace(row, col, MaterialKind::Air);
            stats.record_reaction();
        }
        MaterialKind::LiquidWax => {
            grid.replace(row, col, MaterialKind::Wax);
            stats.record_reaction();
        }
        MaterialKind::Lava => {
            grid.replace(row, col, MaterialKind::Stone);
            stats.record_reaction();
        }
        _ => {
            let live = grid.cell_mut(row, col);
            if live.burning {
                live.stop_burning();
            }
            if live.can_freeze {
                live.freeze();
                stats.record_reaction();
            }
        }
    }
}
