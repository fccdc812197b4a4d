//! Particles and the factory that builds them by name.

use std::fmt;

use crate::material::{Color, Material};
use crate::rng::SimRng;
use crate::rules::Rules;

/// A tick counter running up to a fixed maximum chosen at construction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Counter {
    pub ticks: u16,
    pub max: u16,
}

impl Counter {
    #[must_use]
    pub const fn new(max: u16) -> Self {
        Self { ticks: 0, max }
    }

    /// Advance one tick and report whether the maximum has been reached.
    pub fn advance(&mut self) -> bool {
        self.ticks = self.ticks.saturating_add(1);
        self.is_done()
    }

    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.ticks >= self.max
    }
}

/// Material plus whatever mutable state that material carries.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum State {
    Sand,
    Water,
    Stone,
    Dirt { growth: Counter },
    Grass,
    Fire { duration: Counter },
    Wood,
    Steam { duration: Counter },
    Oil,
    Explosive,
    Lava,
    Basalt,
    Eraser,
}

impl State {
    fn fresh(material: Material, rules: &Rules) -> Self {
        match material {
            Material::Sand => Self::Sand,
            Material::Water => Self::Water,
            Material::Stone => Self::Stone,
            Material::Dirt => Self::Dirt {
                growth: Counter::new(rules.dirt_max_growth),
            },
            Material::Grass => Self::Grass,
            Material::Fire => Self::Fire {
                duration: Counter::new(rules.fire_max_duration),
            },
            Material::Wood => Self::Wood,
            Material::Steam => Self::Steam {
                duration: Counter::new(rules.steam_max_duration),
            },
            Material::Oil => Self::Oil,
            Material::Explosive => Self::Explosive,
            Material::Lava => Self::Lava,
            Material::Basalt => Self::Basalt,
            Material::Eraser => Self::Eraser,
        }
    }

    #[must_use]
    pub const fn material(&self) -> Material {
        match self {
            Self::Sand => Material::Sand,
            Self::Water => Material::Water,
            Self::Stone => Material::Stone,
            Self::Dirt { .. } => Material::Dirt,
            Self::Grass => Material::Grass,
            Self::Fire { .. } => Material::Fire,
            Self::Wood => Material::Wood,
            Self::Steam { .. } => Material::Steam,
            Self::Oil => Material::Oil,
            Self::Explosive => Material::Explosive,
            Self::Lava => Material::Lava,
            Self::Basalt => Material::Basalt,
            Self::Eraser => Material::Eraser,
        }
    }
}

/// One particle. Its material and colour are fixed for its lifetime; only
/// the counters inside [`State`] change.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Particle {
    state: State,
    color: Color,
}

impl Particle {
    /// Build a fresh particle with zeroed counters and a colour drawn from
    /// the material's palette.
    pub fn new(material: Material, rules: &Rules, rng: &mut dyn SimRng) -> Self {
        let palette = material.palette();
        Self {
            state: State::fresh(material, rules),
            color: palette[rng.index(palette.len())],
        }
    }

    /// Fresh particle with the first palette colour, no randomness involved.
    #[must_use]
    pub fn plain(material: Material, rules: &Rules) -> Self {
        Self {
            state: State::fresh(material, rules),
            color: material.palette()[0],
        }
    }

    #[must_use]
    pub const fn material(&self) -> Material {
        self.state.material()
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub const fn state(&self) -> &State {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    /// Should this particle, moving into `other`'s cell, trade places with it?
    #[must_use]
    pub const fn swap(&self, other: &Particle) -> bool {
        self.material().swaps_with(other.material())
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.material())
    }
}

/// Build a particle from a material name as shown to users.
///
/// Unknown names, and names of materials that are never placed directly,
/// give `None`.
pub fn create_particle(name: &str, rules: &Rules, rng: &mut dyn SimRng) -> Option<Particle> {
    let material = name.parse::<Material>().ok()?;
    if !material.is_placeable() {
        return None;
    }
    Some(Particle::new(material, rules, rng))
}
