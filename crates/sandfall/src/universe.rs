//! Browser-facing handle around a [`Grid`].

use log::warn;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use wasm_bindgen::prelude::*;

use crate::material::Material;
use crate::particle::create_particle;
use crate::rules::{ConfigError, Rules};
use crate::Grid;

/// A grid plus the seeded generator that drives it.
#[wasm_bindgen]
#[derive(Debug)]
pub struct Universe {
    grid: Grid,
    rng: Xoshiro256StarStar,
}

#[wasm_bindgen]
impl Universe {
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(rows: usize, cols: usize, seed: u64) -> Self {
        Self {
            grid: Grid::new(rows, cols),
            rng: Xoshiro256StarStar::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.grid.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.grid.cols
    }

    pub fn tick(&mut self) {
        self.grid.tick(&mut self.rng);
    }

    /// Place a new particle by material name. Unknown names and
    /// out-of-range positions leave the grid alone and return false.
    pub fn place(&mut self, row: i32, col: i32, name: &str) -> bool {
        if !self.grid.check_bounds(row, col) {
            return false;
        }
        let Some(particle) = create_particle(name, &self.grid.rules, &mut self.rng) else {
            warn!("ignoring unknown material `{name}`");
            return false;
        };
        self.grid.set(row, col, Some(particle));
        true
    }

    pub fn clear(&mut self, row: i32, col: i32) {
        self.grid.set(row, col, None);
    }

    #[must_use]
    pub fn material_at(&self, row: i32, col: i32) -> Option<String> {
        self.grid
            .material(row, col)
            .map(|m| m.name().to_owned())
    }

    /// Packed `0xRRGGBBAA`, or 0 for an empty cell.
    #[must_use]
    pub fn color_at(&self, row: i32, col: i32) -> u32 {
        self.grid
            .get(row, col)
            .map_or(0, |p| p.color().to_u32())
    }

    /// Number of particles of the named material; 0 for unknown names.
    #[must_use]
    pub fn count(&self, name: &str) -> usize {
        name.parse::<Material>()
            .map_or(0, |m| self.grid.count(m))
    }

    /// Replace the rules from RON text. Existing particles keep the counter
    /// maxima they were built with.
    pub fn set_rules(&mut self, ron: &str) -> Result<(), JsValue> {
        self.load_rules(ron)
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }

    pub fn rules(&self) -> Result<String, JsValue> {
        self.grid
            .rules
            .to_ron()
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }
}

impl Universe {
    pub fn load_rules(&mut self, ron: &str) -> Result<(), ConfigError> {
        match Rules::from_ron(ron) {
            Ok(rules) => {
                self.grid.rules = rules;
                Ok(())
            }
            Err(err) => {
                warn!("rejected rules: {err}");
                Err(err)
            }
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}
