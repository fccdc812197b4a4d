//! Explosive element: inert until touching Fire, then turns everything in
//! a ragged disc around it into Fire and removes itself.
//!
//! Other Explosives and Basalt inside the blast survive. Explosives set
//! burning by the new Fire go off on a later tick, which is what makes
//! chains propagate.

use log::debug;

use crate::api::{ParticleApi, NEIGHBOURS};
use crate::material::Material;
use crate::particle::State;

pub fn update_explosive(api: &mut ParticleApi) {
    let touching_fire = NEIGHBOURS
        .iter()
        .any(|&(dr, dc)| api.in_bounds(dr, dc) && is_lit(&*api, dr, dc));
    if !touching_fire {
        return;
    }

    let radius = api.rules().blast_radius;
    let jitter = api.rules().blast_jitter;
    let reach = radius.saturating_add(jitter);
    let last_row = api.grid.rows as i32 - 1 - api.row;
    let last_col = api.grid.cols as i32 - 1 - api.col;
    let mut ignited = 0usize;

    for dr in (-reach).max(-api.row)..=reach.min(last_row) {
        for dc in (-reach).max(-api.col)..=reach.min(last_col) {
            if (dr, dc) == (0, 0) {
                continue;
            }
            let shift = api.int_in(-jitter, jitter.saturating_add(1));
            if !within(dr, dc, radius.saturating_add(shift)) {
                continue;
            }
            if matches!(
                api.material(dr, dc),
                Some(Material::Explosive | Material::Basalt)
            ) {
                continue;
            }
            let fire = api.spawn(Material::Fire);
            api.set(dr, dc, Some(fire));
            ignited += 1;
        }
    }

    api.clear(0, 0);
    debug!(
        "explosive at ({}, {}) detonated, {ignited} cells ignited",
        api.row, api.col
    );
}

/// Whether `(dr, dc)` lies inside a disc of radius `edge`.
fn within(dr: i32, dc: i32, edge: i32) -> bool {
    let edge = i64::from(edge.max(0));
    let (dr, dc) = (i64::from(dr), i64::from(dc));
    dr * dr + dc * dc <= edge * edge
}

/// Fire that was already burning when this tick began, or that has acted in
/// it. Fire written by a blast earlier in the same sweep does not count yet.
fn is_lit(api: &ParticleApi, dr: i32, dc: i32) -> bool {
    let cell = api.cell(dr, dc);
    match cell.occupant.map(|p| *p.state()) {
        Some(State::Fire { duration }) => cell.clock != api.generation || duration.ticks > 0,
        _ => false,
    }
}
