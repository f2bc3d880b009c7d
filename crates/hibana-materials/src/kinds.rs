//! Material kinds and behavior classes

use serde::{Deserialize, Serialize};

/// The closed set of material kinds.
///
/// Dispatch on kind is exhaustiveness-checked; an unknown kind cannot
/// exist at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum MaterialKind {
    Air = 0,
    Sand,
    Water,
    Iron,
    Vapor,
    Fire,
    Acid,
    AcidVapor,
    Dirt,
    Oil,
    Wood,
    Coal,
    Salt,
    SaltWater,
    Ice,
    Snow,
    Gunpowder,
    ExplosionWave,
    Sawdust,
    Methane,
    Wick,
    LiquidNitrogen,
    Nitrogen,
    Wax,
    LiquidWax,
    Stone,
    StrongFire,
    Lava,
}

impl MaterialKind {
    /// Every kind, in registry order. Used to build the catalog and to
    /// iterate exhaustively in tests.
    pub const ALL: [MaterialKind; 28] = [
        MaterialKind::Air,
        MaterialKind::Sand,
        MaterialKind::Water,
        MaterialKind::Iron,
        MaterialKind::Vapor,
        MaterialKind::Fire,
        MaterialKind::Acid,
        MaterialKind::AcidVapor,
        MaterialKind::Dirt,
        MaterialKind::Oil,
        MaterialKind::Wood,
        MaterialKind::Coal,
        MaterialKind::Salt,
        MaterialKind::SaltWater,
        MaterialKind::Ice,
        MaterialKind::Snow,
        MaterialKind::Gunpowder,
        MaterialKind::ExplosionWave,
        MaterialKind::Sawdust,
        MaterialKind::Methane,
        MaterialKind::Wick,
        MaterialKind::LiquidNitrogen,
        MaterialKind::Nitrogen,
        MaterialKind::Wax,
        MaterialKind::LiquidWax,
        MaterialKind::Stone,
        MaterialKind::StrongFire,
        MaterialKind::Lava,
    ];

    /// Stable lowercase identifier for the UI boundary.
    pub fn name(self) -> &'static str {
        match self {
            MaterialKind::Air => "air",
            MaterialKind::Sand => "sand",
            MaterialKind::Water => "water",
            MaterialKind::Iron => "iron",
            MaterialKind::Vapor => "vapor",
            MaterialKind::Fire => "fire",
            MaterialKind::Acid => "acid",
            MaterialKind::AcidVapor => "acid_vapor",
            MaterialKind::Dirt => "dirt",
            MaterialKind::Oil => "oil",
            MaterialKind::Wood => "wood",
            MaterialKind::Coal => "coal",
            MaterialKind::Salt => "salt",
            MaterialKind::SaltWater => "salt_water",
            MaterialKind::Ice => "ice",
            MaterialKind::Snow => "snow",
            MaterialKind::Gunpowder => "gunpowder",
            MaterialKind::ExplosionWave => "explosion_wave",
            MaterialKind::Sawdust => "sawdust",
            MaterialKind::Methane => "methane",
            MaterialKind::Wick => "wick",
            MaterialKind::LiquidNitrogen => "liquid_nitrogen",
            MaterialKind::Nitrogen => "nitrogen",
            MaterialKind::Wax => "wax",
            MaterialKind::LiquidWax => "liquid_wax",
            MaterialKind::Stone => "stone",
            MaterialKind::StrongFire => "strong_fire",
            MaterialKind::Lava => "lava",
        }
    }

    /// Reverse lookup for the UI boundary (material picker buttons).
    pub fn from_name(name: &str) -> Option<MaterialKind> {
        MaterialKind::ALL.iter().copied().find(|k| k.name() == name)
    }
}

/// How a material moves. Orthogonal to `MaterialKind`: the movement
/// rule is picked by class, reactions by kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BehaviorClass {
    /// Displaced by anything heavier; rises through heavier gases
    Gas,
    /// Falls, then spreads diagonally and sideways to find level
    Liquid,
    /// Falls straight down, piles up
    Falling,
    /// Never moves
    Solid,
    /// Never moves; transient (fire, explosion wave)
    Special,
    /// Liquid that can carry a burning flag
    IgnitableLiquid,
    /// Solid that can carry a burning flag
    IgnitableSolid,
    /// Falling material that can carry a burning flag
    IgnitableFalling,
}

impl BehaviorClass {
    /// Falls straight down only.
    pub fn falls(self) -> bool {
        matches!(
            self,
            BehaviorClass::Falling | BehaviorClass::IgnitableFalling
        )
    }

    /// Flows: vertical, then diagonal-down, then horizontal spread.
    pub fn flows(self) -> bool {
        matches!(
            self,
            BehaviorClass::Gas | BehaviorClass::Liquid | BehaviorClass::IgnitableLiquid
        )
    }

    pub fn is_ignitable(self) -> bool {
        matches!(
            self,
            BehaviorClass::IgnitableLiquid
                | BehaviorClass::IgnitableSolid
                | BehaviorClass::IgnitableFalling
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_kinds_have_unique_names() {
        for (i, a) in MaterialKind::ALL.iter().enumerate() {
            for b in &MaterialKind::ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn test_from_name_round_trip() {
        for kind in MaterialKind::ALL {
            assert_eq!(MaterialKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(MaterialKind::from_name("plutonium"), None);
    }

    #[test]
    fn test_behavior_class_predicates() {
        assert!(BehaviorClass::Falling.falls());
        assert!(BehaviorClass::IgnitableFalling.falls());
        assert!(!BehaviorClass::Liquid.falls());

        assert!(BehaviorClass::Gas.flows());
        assert!(BehaviorClass::Liquid.flows());
        assert!(BehaviorClass::IgnitableLiquid.flows());
        assert!(!BehaviorClass::Solid.flows());

        assert!(BehaviorClass::IgnitableSolid.is_ignitable());
        assert!(!BehaviorClass::Special.is_ignitable());
    }
}
