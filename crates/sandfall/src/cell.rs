//! Grid cell: an optional occupant plus the scan clock.

use std::fmt;

use crate::material::Material;
use crate::particle::Particle;

/// One grid position. `clock` holds the generation of the last write so the
/// tick loop can skip particles that already acted this generation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Cell {
    pub occupant: Option<Particle>,
    pub clock: u8,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.occupant {
            Some(p) => write!(f, "{p}"),
            None => write!(f, "Empty"),
        }
    }
}

impl Cell {
    #[must_use]
    pub fn new(particle: Particle) -> Self {
        Self {
            occupant: Some(particle),
            clock: 0,
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    #[must_use]
    pub fn material(&self) -> Option<Material> {
        self.occupant.as_ref().map(Particle::material)
    }
}
