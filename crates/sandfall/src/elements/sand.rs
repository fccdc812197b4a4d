//! Sand element: falls down, then diagonally; sinks through Water and Oil.

use super::fall_like_sand;
use crate::api::ParticleApi;

pub fn update_sand(api: &mut ParticleApi) {
    fall_like_sand(api);
}
