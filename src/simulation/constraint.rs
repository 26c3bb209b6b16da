//! Edge-constraint satisfaction seam
//!
//! The world invokes a [`ConstraintSolver`] for every edge after the
//! collision pass, handing it the edge and mutable access to its two
//! endpoints. Contract: the correction is symmetric (mass-weighted when
//! the inverse masses differ) and convergent under repeated application,
//! so it composes with iterative solving across edges and steps.

use super::states::{Edge, Point};

pub trait ConstraintSolver {
    fn satisfy(&self, edge: &Edge, p1: &mut Point, p2: &mut Point);
}

/// Default solver: edges carry no constraint
pub struct NoConstraint;

impl ConstraintSolver for NoConstraint {
    fn satisfy(&self, _edge: &Edge, _p1: &mut Point, _p2: &mut Point) {}
}

/// Position-based distance projection.
///
/// Moves both endpoints along their connecting line toward the rest
/// length, splitting the correction by inverse mass so the lighter point
/// moves further. `stiffness` in (0, 1] scales the per-call correction;
/// 1.0 removes the full deviation in one application.
///
/// Corrects positions directly rather than injecting forces, which keeps
/// stiff constraints stable at the fixed timestep.
pub struct DistanceProjection {
    pub stiffness: f64,
}

impl Default for DistanceProjection {
    fn default() -> Self {
        DistanceProjection { stiffness: 1.0 }
    }
}

impl ConstraintSolver for DistanceProjection {
    fn satisfy(&self, edge: &Edge, p1: &mut Point, p2: &mut Point) {
        let delta = p2.pos() - p1.pos();
        let dist = delta.norm();
        // Coincident endpoints give no correction direction.
        if dist == 0.0 {
            return;
        }
        let deviation = dist - edge.rest_length();
        if deviation == 0.0 {
            return;
        }
        let w_sum = p1.w() + p2.w();
        let correction = delta * (self.stiffness * deviation / (dist * w_sum));
        p1.set_pos(p1.pos() + correction * p1.w());
        p2.set_pos(p2.pos() - correction * p2.w());
    }
}
