//! Relative-offset API for element update functions.

use std::fmt;

use log::trace;

use crate::cell::Cell;
use crate::material::Material;
use crate::particle::Particle;
use crate::rng::SimRng;
use crate::rules::Rules;
use crate::Grid;

/// The eight neighbours as `(d_row, d_col)`.
pub const NEIGHBOURS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A particle's view of the grid during its update.
///
/// Offsets are relative to the acting particle; a successful move re-centres
/// the view on the particle's new cell. Every write is stamped with the
/// current generation.
pub struct ParticleApi<'a> {
    pub grid: &'a mut Grid,
    pub rng: &'a mut dyn SimRng,
    pub row: i32,
    pub col: i32,
    pub generation: u8,
}

impl fmt::Debug for ParticleApi<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParticleApi")
            .field("row", &self.row)
            .field("col", &self.col)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

impl<'a> ParticleApi<'a> {
    pub fn new(
        grid: &'a mut Grid,
        rng: &'a mut dyn SimRng,
        row: i32,
        col: i32,
        generation: u8,
    ) -> Self {
        Self {
            grid,
            rng,
            row,
            col,
            generation,
        }
    }

    #[must_use]
    pub fn rules(&self) -> &Rules {
        &self.grid.rules
    }

    #[must_use]
    pub fn in_bounds(&self, dr: i32, dc: i32) -> bool {
        self.grid.check_bounds(self.row + dr, self.col + dc)
    }

    #[must_use]
    pub fn cell(&self, dr: i32, dc: i32) -> Cell {
        self.grid.cell(self.row + dr, self.col + dc)
    }

    #[must_use]
    pub fn get(&self, dr: i32, dc: i32) -> Option<&Particle> {
        self.grid.get(self.row + dr, self.col + dc)
    }

    #[must_use]
    pub fn material(&self, dr: i32, dc: i32) -> Option<Material> {
        self.grid.material(self.row + dr, self.col + dc)
    }

    /// Unoccupied, or off the grid.
    #[must_use]
    pub fn is_empty(&self, dr: i32, dc: i32) -> bool {
        self.get(dr, dc).is_none()
    }

    /// The acting particle itself.
    pub fn me_mut(&mut self) -> Option<&mut Particle> {
        self.grid.get_mut(self.row, self.col)
    }

    pub fn set(&mut self, dr: i32, dc: i32, occupant: Option<Particle>) {
        self.grid
            .write(self.row + dr, self.col + dc, occupant, self.generation);
    }

    pub fn clear(&mut self, dr: i32, dc: i32) {
        self.set(dr, dc, None);
    }

    /// A fresh particle of `material`.
    pub fn spawn(&mut self, material: Material) -> Particle {
        Particle::new(material, &self.grid.rules, &mut *self.rng)
    }

    /// Destroy whatever is at the offset and put a fresh `material` there.
    pub fn replace(&mut self, dr: i32, dc: i32, material: Material) {
        if !self.in_bounds(dr, dc) {
            return;
        }
        if let Some(old) = self.material(dr, dc) {
            trace!(
                "{old} at ({}, {}) became {material}",
                self.row + dr,
                self.col + dc
            );
        }
        let particle = self.spawn(material);
        self.set(dr, dc, Some(particle));
    }

    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.chance(p)
    }

    pub fn coin(&mut self) -> bool {
        self.rng.coin()
    }

    pub fn int_in(&mut self, low: i32, high: i32) -> i32 {
        self.rng.int_in(low, high)
    }

    /// Move into the offset cell, trading places with its occupant if this
    /// particle's swap rule allows it.
    pub fn try_move(&mut self, dr: i32, dc: i32) -> bool {
        let Some(me) = self.grid.get(self.row, self.col).copied() else {
            return false;
        };
        self.relocate(dr, dc, |other| me.swap(other))
    }

    /// Trade places with the offset cell regardless of the swap rule.
    pub fn force_swap(&mut self, dr: i32, dc: i32) -> bool {
        self.relocate(dr, dc, |_| true)
    }

    fn relocate<F>(&mut self, dr: i32, dc: i32, swap: F) -> bool
    where
        F: FnOnce(&Particle) -> bool,
    {
        let (to_row, to_col) = (self.row + dr, self.col + dc);
        if !self
            .grid
            .move_particle(self.row, self.col, to_row, to_col, swap)
        {
            return false;
        }
        self.grid.stamp(self.row, self.col, self.generation);
        self.grid.stamp(to_row, to_col, self.generation);
        self.row = to_row;
        self.col = to_col;
        true
    }
}
