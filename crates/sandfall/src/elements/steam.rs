//! Steam element: bubbles up through water, drifts upward at random and
//! eventually condenses back into Water.

use log::trace;

use crate::api::ParticleApi;
use crate::material::Material;
use crate::particle::State;

const UPWARD: [i32; 3] = [0, -1, 1];

pub fn update_steam(api: &mut ParticleApi) {
    let expired = match api.me_mut().map(|p| p.state_mut()) {
        Some(State::Steam { duration }) => duration.advance(),
        _ => false,
    };
    let condense = api.rules().steam_condense_chance;
    if expired && api.chance(condense) {
        trace!("steam at ({}, {}) condensed", api.row, api.col);
        api.replace(0, 0, Material::Water);
        return;
    }

    for dc in UPWARD {
        if api.material(-1, dc) == Some(Material::Water) && api.force_swap(-1, dc) {
            return;
        }
    }

    // Independent attempts; the view follows the particle after each move.
    let rise = api.rules().steam_rise_chance;
    for dc in UPWARD {
        if api.chance(rise) {
            api.try_move(-1, dc);
        }
    }
    let drift = api.rules().steam_drift_chance;
    for dc in [-1, 1] {
        if api.chance(drift) {
            api.try_move(0, dc);
        }
    }
}
