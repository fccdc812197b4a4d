//! Eraser: a brush pseudo-material that removes itself on its first update.

use crate::api::ParticleApi;

pub fn update_eraser(api: &mut ParticleApi) {
    api.clear(0, 0);
}
