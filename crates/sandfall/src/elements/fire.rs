//! Fire element: burns out after a fixed number of ticks, ignites Wood and
//! Oil around it, boils adjacent Water and drifts upward.

use crate::api::{ParticleApi, NEIGHBOURS};
use crate::material::Material;
use crate::particle::State;

pub fn update_fire(api: &mut ParticleApi) {
    let burnt_out = match api.me_mut().map(|p| p.state_mut()) {
        Some(State::Fire { duration }) => duration.advance(),
        _ => false,
    };
    if burnt_out {
        api.clear(0, 0);
        return;
    }

    let ignite = api.rules().wood_ignite_chance;
    for (dr, dc) in NEIGHBOURS {
        if !api.in_bounds(dr, dc) {
            continue;
        }
        match api.material(dr, dc) {
            Some(Material::Wood) if api.chance(ignite) => api.replace(dr, dc, Material::Fire),
            Some(Material::Oil) => api.replace(dr, dc, Material::Fire),
            Some(Material::Water) => api.replace(dr, dc, Material::Steam),
            _ => {}
        }
    }

    if api.is_empty(-1, 0) {
        api.try_move(-1, 0);
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{dump, parse, rng, tick};
    use crate::material::Material;
    use crate::rules::Rules;

    #[test]
    fn fire_ignites_oil_and_boils_water() {
        let rules = Rules {
            wood_ignite_chance: 0.0,
            ..Rules::default()
        };
        let mut grid = parse(rules, &["#####", "#o#~#", "#wf~#", "#####"]);
        tick(&mut grid, &mut rng(4));
        assert_eq!(dump(&grid), ["#####", "#f#^#", "#wf^#", "#####"]);
    }

    #[test]
    fn wood_ignites_with_certainty_when_configured() {
        let rules = Rules {
            wood_ignite_chance: 1.0,
            ..Rules::default()
        };
        let mut grid = parse(rules, &["www", "wfw", "www"]);
        tick(&mut grid, &mut rng(4));
        assert_eq!(grid.count(Material::Fire), 9);
    }

    #[test]
    fn fire_leaves_stone_alone() {
        let mut grid = parse(Rules::default(), &["###", "#f#", "###"]);
        tick(&mut grid, &mut rng(4));
        assert_eq!(dump(&grid), ["###", "#f#", "###"]);
    }

    #[test]
    fn fire_rises_into_open_air() {
        let mut grid = parse(Rules::default(), &["...", "...", ".f.", "###"]);
        tick(&mut grid, &mut rng(4));
        assert_eq!(dump(&grid), ["...", ".f.", "...", "###"]);
    }
}
