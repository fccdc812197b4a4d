//! Oil element: a liquid that floats. Water above or beside it trades
//! places with it, otherwise it flows like water.
//!
//! Oil never ignites by itself; Fire and Lava turn it into Fire.

use super::flow_like_water;
use crate::api::ParticleApi;
use crate::material::Material;

pub fn update_oil(api: &mut ParticleApi) {
    if api.material(-1, 0) == Some(Material::Water) && api.force_swap(-1, 0) {
        return;
    }

    let side = if api.coin() { 1 } else { -1 };
    for dc in [side, -side] {
        if api.material(0, dc) == Some(Material::Water) && api.force_swap(0, dc) {
            return;
        }
    }

    flow_like_water(api);
}
