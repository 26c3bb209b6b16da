//! Fixed-step velocity-Verlet integration for a single point
//!
//! Two force evaluations per step: one at the current position, one at
//! the freshly written position. Second-order accurate and
//! time-reversible for velocity-independent forces; velocity-dependent
//! terms (wind, friction, viscous drag) introduce a first-order error
//! the model accepts.

use super::forces::ForceSet;
use super::params::Parameters;
use super::states::{Body, Vec3};

/// Net acceleration of `body.points()[idx]`:
/// (sum of global forces + sum of per-body forces) scaled by the
/// point's inverse mass. Reads state, mutates nothing.
pub fn compute_acceleration(
    params: &Parameters,
    global: &ForceSet,
    body: &Body,
    idx: usize,
) -> Vec3 {
    let point = &body.points[idx];
    let total = global.sum(params, body, point) + body.forces.sum(params, body, point);
    total * point.w()
}

/// Advance one point by one velocity-Verlet step of size `h`:
///
/// 1. a0 at the current position
/// 2. x += h v + (h^2 / 2) a0, written through the history channel
/// 3. a1 at the new position
/// 4. v += (h / 2) (a0 + a1), and a1 becomes the stored acceleration
pub fn verlet_step(params: &Parameters, global: &ForceSet, body: &mut Body, idx: usize, h: f64) {
    let a0 = compute_acceleration(params, global, body, idx);

    let point = &body.points[idx];
    let new_pos = point.pos() + point.vel * h + a0 * (h * h / 2.0);
    body.points[idx].set_pos(new_pos);

    let a1 = compute_acceleration(params, global, body, idx);

    let point = &mut body.points[idx];
    point.vel += (a0 + a1) * (h / 2.0);
    point.acc = a1;
}
