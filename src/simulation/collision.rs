//! Collision response seam
//!
//! The world invokes a [`CollisionResponse`] for every point after the
//! integration pass. The strategy sees post-integration state and may
//! correct position and velocity in place. Contract:
//! - write the position only when actually correcting, so the position
//!   history stays one append per real write,
//! - calling with no penetration is a no-op (idempotent).

use nalgebra::UnitVector3;

use super::states::Point;

pub trait CollisionResponse {
    fn resolve(&self, point: &mut Point);
}

/// Default response: no environment, nothing to collide with
pub struct NoCollision;

impl CollisionResponse for NoCollision {
    fn resolve(&self, _point: &mut Point) {}
}

/// Solid half-space the points may not penetrate.
///
/// A point is inside the allowed region when `pos . normal >= offset`.
/// Penetrating points are projected back to the surface and the inward
/// normal velocity component is reflected, scaled by the restitution.
pub struct HalfSpace {
    pub normal: UnitVector3<f64>, // outward surface normal
    pub offset: f64,              // plane offset along the normal
    pub restitution: f64,         // 0 = fully inelastic, 1 = elastic
}

impl CollisionResponse for HalfSpace {
    fn resolve(&self, point: &mut Point) {
        let n = self.normal.into_inner();
        let depth = self.offset - point.pos().dot(&n);
        if depth <= 0.0 {
            return;
        }
        point.set_pos(point.pos() + n * depth);
        let v_n = point.vel.dot(&n);
        if v_n < 0.0 {
            point.vel -= n * ((1.0 + self.restitution) * v_n);
        }
    }
}
