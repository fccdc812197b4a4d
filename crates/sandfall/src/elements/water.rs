//! Water element: sinks into steam, falls, spreads sideways, slides
//! diagonally and now and then climbs.
//!
//! Dirt beneath water reads it to grow grass; water itself is never
//! consumed by that.

use super::flow_like_water;
use crate::api::ParticleApi;

pub fn update_water(api: &mut ParticleApi) {
    flow_like_water(api);
}
