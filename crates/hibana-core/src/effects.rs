//! Deferred effect queues
//!
//! Phase 1 never mutates a neighbor directly; it records the intent
//! here. Phase 2 drains the queues in a fixed priority order, each
//! queue fully before the next, so that a later queue deliberately
//! sees the board as mutated by the earlier ones. This batching is
//! what prevents order-dependent double-application within a tick.

/// One pending explosion-ring expansion, with the blast parameters
/// captured at evaluation time.
#[derive(Clone, Copy, Debug)]
pub struct WaveStep {
    pub row: usize,
    pub col: usize,
    pub power: i32,
    pub range: i32,
}

/// A chance for an air cell to ignite next to a burning cell (1/20)
/// or next to lava (1/120).
#[derive(Clone, Copy, Debug)]
pub struct SetFire {
    pub row: usize,
    pub col: usize,
    pub chance: u32,
}

/// All effect queues for one tick, in application order. Reused
/// across ticks to keep allocations warm.
#[derive(Default)]
pub struct EffectQueues {
    /// 1. queued cell swaps
    pub moves: Vec<((usize, usize), (usize, usize))>,
    /// 2. ordinary fire contact
    pub fire: Vec<(usize, usize)>,
    /// 3. strong fire contact (can also melt stone)
    pub strong_fire: Vec<(usize, usize)>,
    /// 4. lava adjacency re-seeding (applied as strong fire contact)
    pub lava_seed: Vec<(usize, usize)>,
    /// 5. explosion wave expansion
    pub wave_steps: Vec<WaveStep>,
    /// 6. ignition chances on air cells
    pub set_fire: Vec<SetFire>,
    /// 7. burning upkeep: quench, starve or re-color
    pub fade: Vec<(usize, usize)>,
    /// 8. salt dissolving into adjacent water
    pub salt: Vec<(usize, usize)>,
    /// 9. ice/snow accretion on adjacent water/vapor
    pub ice: Vec<(usize, usize)>,
    /// 10. liquid-nitrogen freeze transitions
    pub freeze: Vec<(usize, usize)>,
}

impl EffectQueues {
    pub fn clear(&mut self) {
        self.moves.clear();
        self.fire.clear();
        self.strong_fire.clear();
        self.lava_seed.clear();
        self.wave_steps.clear();
        self.set_fire.clear();
        self.fade.clear();
        self.salt.clear();
        self.ice.clear();
        self.freeze.clear();
    }

    pub fn len(&self) -> usize {
        self.moves.len()
            + self.fire.len()
            + self.strong_fire.len()
            + self.lava_seed.len()
            + self.wave_steps.len()
            + self.set_fire.len()
            + self.fade.len()
            + self.salt.len()
            + self.ice.len()
            + self.freeze.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
