//! Grass element: falls like sand, reverts to Dirt once buried under
//! anything that is not a liquid.

use log::trace;

use super::fall_like_sand;
use crate::api::ParticleApi;
use crate::material::Material;

pub fn update_grass(api: &mut ParticleApi) {
    if let Some(above) = api.material(-1, 0) {
        if !above.is_liquid() {
            trace!("grass at ({}, {}) buried by {above}", api.row, api.col);
            api.replace(0, 0, Material::Dirt);
            return;
        }
    }
    fall_like_sand(api);
}
