//! Dirt element: falls like sand and grows into Grass under water.

use log::trace;

use super::fall_like_sand;
use crate::api::ParticleApi;
use crate::material::Material;
use crate::particle::State;

pub fn update_dirt(api: &mut ParticleApi) {
    if api.material(-1, 0) == Some(Material::Water) {
        let grown = match api.me_mut().map(|p| p.state_mut()) {
            Some(State::Dirt { growth }) => growth.advance(),
            _ => false,
        };
        if grown {
            trace!("dirt at ({}, {}) grew grass", api.row, api.col);
            api.replace(0, 0, Material::Grass);
            return;
        }
    }
    fall_like_sand(api);
}
