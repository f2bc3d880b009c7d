//! Material archetypes and registry

use serde::{Deserialize, Serialize};

use crate::cell::{approximate_color, Cell};
use crate::kinds::{BehaviorClass, MaterialKind};

/// Weight and durability forced onto a frozen cell, regardless of kind.
pub const FROZEN_WEIGHT: i32 = 16;
pub const FROZEN_DURABILITY: i32 = 5;
pub const FROZEN_COLOR: [u8; 3] = [205, 228, 255];

/// Decay counter a fresh fire (and strong fire) starts with.
pub const FIRE_START_TEMPERATURE: i32 = 5;

/// Blast parameters of a freshly triggered explosion wave.
pub const WAVE_START_POWER: i32 = 4;
pub const WAVE_START_RANGE: i32 = 4;

/// Fire color by remaining temperature (4 down to 1); out of range
/// means the cell is about to revert to air.
pub fn fire_fade_color(temperature: i32) -> Option<[u8; 3]> {
    match temperature {
        4 => Some([194, 56, 6]),
        3 => Some([161, 41, 8]),
        2 => Some([135, 31, 12]),
        1 => Some([102, 9, 9]),
        _ => None,
    }
}

/// Strong fire burns brighter through the same decay steps.
pub fn strong_fire_fade_color(temperature: i32) -> Option<[u8; 3]> {
    match temperature {
        4 => Some([235, 140, 20]),
        3 => Some([210, 105, 15]),
        2 => Some([180, 70, 12]),
        1 => Some([140, 35, 9]),
        _ => None,
    }
}

/// Immutable archetype for one material kind.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MaterialDef {
    pub kind: MaterialKind,
    pub behavior: BehaviorClass,
    pub weight: i32,
    pub durability: i32,
    /// Removed by acid contact.
    pub soluble: bool,
    /// Self-extinguish denominator while burning (0 = never).
    pub extinct_chance: u32,
    /// Liquid-nitrogen contact can freeze this kind.
    pub can_freeze: bool,
    pub color: [u8; 3],
    /// Per-instantiation color jitter.
    pub color_spread: i32,
    pub burning_color: Option<[u8; 3]>,
}

impl Default for MaterialDef {
    fn default() -> Self {
        Self {
            kind: MaterialKind::Air,
            behavior: BehaviorClass::Solid,
            weight: 0,
            durability: 1,
            soluble: false,
            extinct_chance: 0,
            can_freeze: false,
            color: [255, 0, 255], // magenta for missing materials
            color_spread: 0,
            burning_color: None,
        }
    }
}

/// Registry of all material archetypes, indexed by kind.
///
/// Built once at startup; the kind enum is closed, so lookup can never
/// miss once `new()` has run.
pub struct Materials {
    defs: Vec<MaterialDef>,
}

impl Materials {
    pub fn new() -> Self {
        let mut materials = Self {
            defs: vec![MaterialDef::default(); MaterialKind::ALL.len()],
        };
        materials.register_defaults();
        for kind in MaterialKind::ALL {
            debug_assert_eq!(materials.get(kind).kind, kind, "unregistered material kind");
        }
        log::debug!("registered {} materials", materials.defs.len());
        materials
    }

    fn register_defaults(&mut self) {
        // Gases. Air is the universal displaceable baseline; everything
        // below it in weight rises through it.
        self.register(MaterialDef {
            kind: MaterialKind::Air,
            behavior: BehaviorClass::Gas,
            weight: -10,
            color: [0, 0, 0],
            ..Default::default()
        });
        self.register(MaterialDef {
            kind: MaterialKind::Vapor,
            behavior: BehaviorClass::Gas,
            weight: -11,
            color: [222, 222, 222],
            color_spread: 3,
            ..Default::default()
        });
        self.register(MaterialDef {
            kind: MaterialKind::AcidVapor,
            behavior: BehaviorClass::Gas,
            weight: -12,
            color: [170, 222, 160],
            color_spread: 5,
            ..Default::default()
        });
        self.register(MaterialDef {
            kind: MaterialKind::Methane,
            behavior: BehaviorClass::Gas,
            weight: -12,
            color: [150, 150, 110],
            color_spread: 6,
            ..Default::default()
        });
        self.register(MaterialDef {
            kind: MaterialKind::Nitrogen,
            behavior: BehaviorClass::Gas,
            weight: -13,
            color: [200, 210, 230],
            color_spread: 4,
            ..Default::default()
        });

        // Liquids
        self.register(MaterialDef {
            kind: MaterialKind::Water,
            behavior: BehaviorClass::Liquid,
            weight: 7,
            durability: 10,
            can_freeze: true,
            color: [30, 30, 200],
            color_spread: 10,
            ..Default::default()
        });
        self.register(MaterialDef {
            kind: MaterialKind::SaltWater,
            behavior: BehaviorClass::Liquid,
            weight: 8, // sinks below fresh water
            durability: 10,
            can_freeze: true,
            color: [60, 80, 210],
            color_spread: 10,
            ..Default::default()
        });
        self.register(MaterialDef {
            kind: MaterialKind::Acid,
            behavior: BehaviorClass::Liquid,
            weight: 9,
            durability: 5,
            color: [80, 220, 40],
            color_spread: 10,
            ..Default::default()
        });
        self.register(MaterialDef {
            kind: MaterialKind::LiquidNitrogen,
            behavior: BehaviorClass::Liquid,
            weight: 5,
            durability: 3,
            color: [170, 200, 255],
            color_spread: 8,
            ..Default::default()
        });
        self.register(MaterialDef {
            kind: MaterialKind::LiquidWax,
            behavior: BehaviorClass::Liquid,
            weight: 9,
            durability: 3,
            soluble: true,
            can_freeze: true,
            color: [235, 220, 180],
            color_spread: 6,
            ..Default::default()
        });
        self.register(MaterialDef {
            kind: MaterialKind::Lava,
            behavior: BehaviorClass::Liquid,
            weight: 19, // below every ordinary liquid, above iron is only air
            durability: 8,
            color: [255, 80, 0],
            color_spread: 12,
            ..Default::default()
        });
        self.register(MaterialDef {
            kind: MaterialKind::Oil,
            behavior: BehaviorClass::IgnitableLiquid,
            weight: 6, // floats on water
            durability: 2,
            extinct_chance: 20,
            can_freeze: true,
            color: [50, 40, 30],
            color_spread: 6,
            burning_color: Some([222, 120, 30]),
            ..Default::default()
        });

        // Falling solids
        self.register(MaterialDef {
            kind: MaterialKind::Sand,
            behavior: BehaviorClass::Falling,
            weight: 10,
            can_freeze: true,
            color: [200, 200, 100],
            color_spread: 10,
            ..Default::default()
        });
        self.register(MaterialDef {
            kind: MaterialKind::Dirt,
            behavior: BehaviorClass::Falling,
            weight: 11,
            durability: 2,
            soluble: true,
            can_freeze: true,
            color: [101, 67, 33],
            color_spread: 8,
            ..Default::default()
        });
        self.register(MaterialDef {
            kind: MaterialKind::Salt,
            behavior: BehaviorClass::Falling,
            weight: 10,
            soluble: true,
            color: [235, 235, 235],
            color_spread: 6,
            ..Default::default()
        });
        self.register(MaterialDef {
            kind: MaterialKind::Snow,
            behavior: BehaviorClass::Falling,
            weight: 5, // floats on water
            soluble: true,
            color: [245, 245, 250],
            color_spread: 4,
            ..Default::default()
        });
        self.register(MaterialDef {
            kind: MaterialKind::Gunpowder,
            behavior: BehaviorClass::Falling,
            weight: 10,
            soluble: true,
            can_freeze: true,
            color: [64, 64, 64],
            color_spread: 6,
            ..Default::default()
        });
        self.register(MaterialDef {
            kind: MaterialKind::Sawdust,
            behavior: BehaviorClass::IgnitableFalling,
            weight: 6,
            soluble: true,
            extinct_chance: 10,
            can_freeze: true,
            color: [170, 130, 80],
            color_spread: 10,
            burning_color: Some([210, 110, 40]),
            ..Default::default()
        });

        // Rigid solids
        self.register(MaterialDef {
            kind: MaterialKind::Iron,
            behavior: BehaviorClass::Solid,
            weight: 20,
            durability: 7,
            color: [173, 173, 173],
            color_spread: 2,
            ..Default::default()
        });
        self.register(MaterialDef {
            kind: MaterialKind::Stone,
            behavior: BehaviorClass::Solid,
            weight: 20,
            durability: 8,
            color: [128, 128, 128],
            color_spread: 6,
            ..Default::default()
        });
        self.register(MaterialDef {
            kind: MaterialKind::Ice,
            behavior: BehaviorClass::Solid,
            weight: FROZEN_WEIGHT,
            durability: FROZEN_DURABILITY,
            color: [200, 230, 255],
            color_spread: 6,
            ..Default::default()
        });
        self.register(MaterialDef {
            kind: MaterialKind::Wax,
            behavior: BehaviorClass::Solid,
            weight: 15,
            durability: 3,
            soluble: true,
            can_freeze: true,
            color: [235, 220, 180],
            color_spread: 4,
            ..Default::default()
        });
        self.register(MaterialDef {
            kind: MaterialKind::Wick,
            behavior: BehaviorClass::Solid,
            weight: 15,
            durability: 2,
            soluble: true,
            color: [200, 180, 140],
            color_spread: 6,
            ..Default::default()
        });
        self.register(MaterialDef {
            kind: MaterialKind::Wood,
            behavior: BehaviorClass::IgnitableSolid,
            weight: 15,
            durability: 3,
            soluble: true,
            extinct_chance: 40,
            can_freeze: true,
            color: [139, 90, 43],
            color_spread: 8,
            burning_color: Some([222, 89, 22]),
            ..Default::default()
        });
        self.register(MaterialDef {
            kind: MaterialKind::Coal,
            behavior: BehaviorClass::IgnitableSolid,
            weight: 14,
            durability: 4,
            extinct_chance: 80, // embers linger
            can_freeze: true,
            color: [25, 25, 25],
            color_spread: 4,
            burning_color: Some([200, 60, 20]),
            ..Default::default()
        });

        // Specials
        self.register(MaterialDef {
            kind: MaterialKind::Fire,
            behavior: BehaviorClass::Special,
            weight: -100, // everything falls through flame
            color: [222, 89, 22],
            ..Default::default()
        });
        self.register(MaterialDef {
            kind: MaterialKind::StrongFire,
            behavior: BehaviorClass::Special,
            weight: -100,
            color: [255, 140, 30],
            ..Default::default()
        });
        self.register(MaterialDef {
            kind: MaterialKind::ExplosionWave,
            behavior: BehaviorClass::Special,
            weight: -100,
            durability: 100, // a wave never destroys another wave
            color: [255, 200, 60],
            color_spread: 20,
            ..Default::default()
        });
    }

    fn register(&mut self, def: MaterialDef) {
        let index = def.kind as usize;
        self.defs[index] = def;
    }

    /// Archetype lookup; infallible for any `MaterialKind`.
    pub fn get(&self, kind: MaterialKind) -> &MaterialDef {
        &self.defs[kind as usize]
    }

    /// Pure factory: a fresh default instance of `kind` with its own
    /// randomized color.
    pub fn create(&self, kind: MaterialKind) -> Cell {
        let def = self.get(kind);
        let color = approximate_color(def.color, def.color_spread);
        let mut cell = Cell {
            kind,
            behavior: def.behavior,
            weight: def.weight,
            durability: def.durability,
            soluble: def.soluble,
            burning: false,
            extinct_chance: def.extinct_chance,
            can_freeze: def.can_freeze,
            frozen: false,
            saved: None,
            temperature: 0,
            life_tick: 0,
            power: 0,
            range: 0,
            activated: false,
            color,
            base_color: color,
            burning_color: def.burning_color,
        };
        match kind {
            MaterialKind::Fire | MaterialKind::StrongFire => {
                cell.temperature = FIRE_START_TEMPERATURE;
            }
            MaterialKind::ExplosionWave => {
                cell.power = WAVE_START_POWER;
                cell.range = WAVE_START_RANGE;
                cell.life_tick = 1;
            }
            _ => {}
        }
        cell
    }
}

impl Default for Materials {
    fn default() -> Self {
        Self::new()
    }
}
