//! Lava element: flows like water and scorches its surroundings.
//!
//! Wood, Oil and Explosive next to lava become Fire. Water next to lava
//! solidifies into Basalt, or flashes into Steam when nothing lies
//! beneath it. Off the bottom edge counts as nothing.

use log::trace;

use super::flow_like_water;
use crate::api::{ParticleApi, NEIGHBOURS};
use crate::material::Material;

pub fn update_lava(api: &mut ParticleApi) {
    for (dr, dc) in NEIGHBOURS {
        if !api.in_bounds(dr, dc) {
            continue;
        }
        match api.material(dr, dc) {
            Some(Material::Wood | Material::Oil | Material::Explosive) => {
                api.replace(dr, dc, Material::Fire);
            }
            Some(Material::Water) => {
                let product = if api.is_empty(dr + 1, dc) {
                    Material::Steam
                } else {
                    Material::Basalt
                };
                trace!(
                    "lava at ({}, {}) turned water into {product}",
                    api.row,
                    api.col
                );
                api.replace(dr, dc, product);
            }
            _ => {}
        }
    }

    flow_like_water(api);
}
