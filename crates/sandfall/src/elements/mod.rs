//! Per-material update functions dispatched from the tick loop.
//!
//! Shared motion lives here: [`fall_like_sand`] for powders (Sand, Dirt,
//! Grass) and [`flow_like_water`] for liquids (Water, Oil, Lava).

mod dirt;
mod eraser;
mod explosive;
mod fire;
mod grass;
mod lava;
mod oil;
mod sand;
mod steam;
mod water;


use crate::api::ParticleApi;
use crate::material::Material;

/// Dispatch to the acting particle's update function.
///
/// Stone, Wood and Basalt never act on their own.
pub fn update_particle(api: &mut ParticleApi) {
    let Some(material) = api.material(0, 0) else {
        return;
    };
    match material {
        Material::Sand => sand::update_sand(api),
        Material::Water => water::update_water(api),
        Material::Dirt => dirt::update_dirt(api),
        Material::Grass => grass::update_grass(api),
        Material::Fire => fire::update_fire(api),
        Material::Steam => steam::update_steam(api),
        Material::Oil => oil::update_oil(api),
        Material::Explosive => explosive::update_explosive(api),
        Material::Lava => lava::update_lava(api),
        Material::Eraser => eraser::update_eraser(api),
        Material::Stone | Material::Wood | Material::Basalt => {}
    }
}

/// Down, then down-left, then down-right. First success wins.
pub(crate) fn fall_like_sand(api: &mut ParticleApi) -> bool {
    api.try_move(1, 0) || api.try_move(1, -1) || api.try_move(1, 1)
}

/// Liquid motion, in fixed priority order:
///
/// 1. Steam directly below: swap into it.
/// 2. Empty below: fall.
/// 3. One sideways attempt, right or left by coin.
/// 4. Down-right, then down-left.
/// 5. Occasionally, straight up.
///
/// The first successful move ends the update.
pub(crate) fn flow_like_water(api: &mut ParticleApi) -> bool {
    if api.material(1, 0) == Some(Material::Steam) && api.force_swap(1, 0) {
        return true;
    }
    if api.is_empty(1, 0) && api.try_move(1, 0) {
        return true;
    }

    let right = api.rules().liquid_right_chance;
    let side = if api.chance(right) { 1 } else { -1 };
    if api.try_move(0, side) {
        return true;
    }

    if api.try_move(1, 1) || api.try_move(1, -1) {
        return true;
    }

    let rise = api.rules().liquid_rise_chance;
    api.chance(rise) && api.try_move(-1, 0)
}

#[cfg(test)]
pub(crate) mod testing {
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    use crate::material::Material;
    use crate::particle::Particle;
    use crate::rules::Rules;
    use crate::Grid;

    pub fn rng(seed: u64) -> Xoshiro256StarStar {
        Xoshiro256StarStar::seed_from_u64(seed)
    }

    pub fn put(grid: &mut Grid, row: i32, col: i32, material: Material) {
        let particle = Particle::plain(material, &grid.rules);
        grid.set(row, col, Some(particle));
    }

    /// Build a grid from rows of glyphs. `.` is empty; see [`glyph`].
    pub fn parse(rules: Rules, rows: &[&str]) -> Grid {
        let mut grid = Grid::with_rules(rows.len(), rows[0].len(), rules);
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                if let Some(m) = material_of(ch) {
                    put(&mut grid, r as i32, c as i32, m);
                }
            }
        }
        grid
    }

    pub fn glyph(material: Option<Material>) -> char {
        match material {
            None => '.',
            Some(Material::Sand) => 's',
            Some(Material::Water) => '~',
            Some(Material::Stone) => '#',
            Some(Material::Dirt) => 'd',
            Some(Material::Grass) => 'g',
            Some(Material::Fire) => 'f',
            Some(Material::Wood) => 'w',
            Some(Material::Steam) => '^',
            Some(Material::Oil) => 'o',
            Some(Material::Explosive) => 'x',
            Some(Material::Lava) => 'l',
            Some(Material::Basalt) => 'b',
            Some(Material::Eraser) => 'e',
        }
    }

    fn material_of(ch: char) -> Option<Material> {
        Material::ALL
            .into_iter()
            .find(|&m| glyph(Some(m)) == ch)
    }

    /// Render the grid back to glyph rows.
    pub fn dump(grid: &Grid) -> Vec<String> {
        (0..grid.rows as i32)
            .map(|r| {
                (0..grid.cols as i32)
                    .map(|c| glyph(grid.material(r, c)))
                    .collect::<String>()
            })
            .collect()
    }

    pub fn tick(grid: &mut Grid, rng: &mut Xoshiro256StarStar) {
        grid.tick(rng);
    }
}
