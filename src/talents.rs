//! Talent tree
//!
//! Persistent upgrades bought with fragments. Levels are capped per talent and
//! an upgrade either fully applies (cost deducted, level raised) or not at all.

use serde::{Deserialize, Serialize};

/// Talent identifiers, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TalentId {
    FireRate,
    BulletCount,
    MagnetRange,
    DoubleFrag,
    OrbitSpeed,
    FragMagnetStr,
}

impl TalentId {
    /// All talents in display order
    pub const ALL: [TalentId; 6] = [
        TalentId::FireRate,
        TalentId::BulletCount,
        TalentId::MagnetRange,
        TalentId::DoubleFrag,
        TalentId::OrbitSpeed,
        TalentId::FragMagnetStr,
    ];

    pub fn as_str(&self) -> &'static str {
        self.def().key
    }

    /// Static definition for this talent
    pub fn def(&self) -> &'static TalentDef {
        &TALENT_DEFS[self.index()]
    }

    fn index(&self) -> usize {
        match self {
            TalentId::FireRate => 0,
            TalentId::BulletCount => 1,
            TalentId::MagnetRange => 2,
            TalentId::DoubleFrag => 3,
            TalentId::OrbitSpeed => 4,
            TalentId::FragMagnetStr => 5,
        }
    }
}

/// Static talent configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TalentDef {
    pub key: &'static str,
    pub name: &'static str,
    pub max_level: u32,
    /// Magnitude gained per level (fraction or flat count, depending on talent)
    pub per_level: f32,
    pub description: &'static str,
}

/// Talent catalog, indexed in `TalentId::ALL` order
pub const TALENT_DEFS: [TalentDef; 6] = [
    TalentDef {
        key: "fire_rate",
        name: "Rapid Fire",
        max_level: 5,
        per_level: 0.10,
        description: "-10% shot interval",
    },
    TalentDef {
        key: "bullet_count",
        name: "Multi Shot",
        max_level: 5,
        per_level: 1.0,
        description: "+1 bullet per shot",
    },
    TalentDef {
        key: "magnet_range",
        name: "Magnetic Pull",
        max_level: 5,
        per_level: 0.20,
        description: "+20% magnet radius",
    },
    TalentDef {
        key: "double_frag",
        name: "Double Fragment",
        max_level: 5,
        per_level: 0.08,
        description: "+8% double chance",
    },
    TalentDef {
        key: "orbit_speed",
        name: "Thruster Boost",
        max_level: 5,
        per_level: 0.10,
        description: "+10% orbit speed",
    },
    TalentDef {
        key: "frag_magnet_str",
        name: "Tractor Beam",
        max_level: 3,
        per_level: 0.30,
        description: "+30% magnet strength",
    },
];

/// Fragments charged per level step
const COST_PER_LEVEL: u32 = 5;

/// Player's talent levels and fragment wallet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalentTree {
    levels: [u32; 6],
    fragments: u32,
}

impl TalentTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self, id: TalentId) -> u32 {
        self.levels[id.index()]
    }

    pub fn fragments(&self) -> u32 {
        self.fragments
    }

    /// Credit fragments (mission completion, abort payout)
    pub fn add_fragments(&mut self, amount: u32) {
        self.fragments = self.fragments.saturating_add(amount);
    }

    /// Price of the next level
    pub fn cost(&self, id: TalentId) -> u32 {
        (self.level(id) + 1) * COST_PER_LEVEL
    }

    pub fn is_maxed(&self, id: TalentId) -> bool {
        self.level(id) >= id.def().max_level
    }

    pub fn can_upgrade(&self, id: TalentId) -> bool {
        !self.is_maxed(id) && self.fragments >= self.cost(id)
    }

    /// Buy the next level. Returns false and changes nothing if capped or unaffordable.
    pub fn upgrade(&mut self, id: TalentId) -> bool {
        if !self.can_upgrade(id) {
            return false;
        }
        let cost = self.cost(id);
        self.fragments -= cost;
        self.levels[id.index()] += 1;
        log::info!(
            "Upgraded {} to level {} for {} fragments",
            id.as_str(),
            self.level(id),
            cost
        );
        true
    }

    /// Multiplicative bonus, e.g. 1.2 for +20% at level 1
    pub fn multiplier(&self, id: TalentId) -> f32 {
        1.0 + id.def().per_level * self.level(id) as f32
    }

    /// Raw bonus, used as a probability or a flat add-on
    pub fn chance(&self, id: TalentId) -> f32 {
        id.def().per_level * self.level(id) as f32
    }
}
