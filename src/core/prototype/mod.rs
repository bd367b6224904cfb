use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::core::error::CoreError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreatureKind {
    Monster,
    Eyeball,
}

impl Display for CreatureKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CreatureKind::Monster => write!(f, "monster"),
            CreatureKind::Eyeball => write!(f, "eyeball monster"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    pub health: u32,
    pub level: u32,
}

impl Monster {
    pub fn new(health: u32, level: u32) -> Self {
        Self { health, level }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EyeballMonster {
    pub health: u32,
    pub level: u32,
    pub redness: u32,
}

impl EyeballMonster {
    pub fn new(health: u32, level: u32, redness: u32) -> Self {
        Self { health, level, redness }
    }
}

/// A prototype that can be copied without knowing its concrete variant
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Creature {
    Monster(Monster),
    Eyeball(EyeballMonster),
}

impl Creature {
    pub fn kind(&self) -> CreatureKind {
        match self {
            Creature::Monster(_) => CreatureKind::Monster,
            Creature::Eyeball(_) => CreatureKind::Eyeball,
        }
    }

    /// Copy the prototype, keeping its variant
    pub fn copy(&self) -> Self {
        self.clone()
    }

    pub fn health(&self) -> u32 {
        match self {
            Creature::Monster(m) => m.health,
            Creature::Eyeball(e) => e.health,
        }
    }

    pub fn level(&self) -> u32 {
        match self {
            Creature::Monster(m) => m.level,
            Creature::Eyeball(e) => e.level,
        }
    }
}

impl From<Monster> for Creature {
    fn from(monster: Monster) -> Self {
        Creature::Monster(monster)
    }
}

impl From<EyeballMonster> for Creature {
    fn from(eyeball: EyeballMonster) -> Self {
        Creature::Eyeball(eyeball)
    }
}

/// Every creature can be copied as a plain monster; extra fields are dropped.
impl From<&Creature> for Monster {
    fn from(prototype: &Creature) -> Self {
        Monster::new(prototype.health(), prototype.level())
    }
}

impl TryFrom<&Creature> for EyeballMonster {
    type Error = CoreError;

    fn try_from(prototype: &Creature) -> Result<Self, Self::Error> {
        match prototype {
            Creature::Eyeball(eyeball) => Ok(eyeball.clone()),
            other => Err(CoreError::prototype_mismatch(CreatureKind::Eyeball, other.kind())),
        }
    }
}
