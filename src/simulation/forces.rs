//! Force contributors for the point-mass kernel
//!
//! Defines the [`Force`] trait and [`ForceSet`] accumulator, plus the
//! reference forces: constant gravity, quadratic wind drag, kinetic
//! friction against a contact surface, and linear viscous drag.
//!
//! Forces are pure: deterministic in the current state, never mutating
//! it, and returning the zero vector instead of failing when a velocity
//! or relative velocity is zero (the normalization guard).

use super::params::Parameters;
use super::states::{Body, Point, Vec3};

/// Collection of force terms applying to a set of points
/// Each term implements [`Force`] and their contributions are summed
/// into a single force vector per point
pub struct ForceSet {
    terms: Vec<Box<dyn Force + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Force + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Sum every term's contribution at `point`
    pub fn sum(&self, params: &Parameters, body: &Body, point: &Point) -> Vec3 {
        let mut total = Vec3::zeros();
        for term in &self.terms {
            total += term.force(params, body, point);
        }
        total
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for force sources evaluated per point
///
/// Implementations read world-level constants from `params` and
/// capabilities (such as a contact normal) from `body`; they must not
/// hold state beyond parameters fixed at construction.
pub trait Force {
    fn force(&self, params: &Parameters, body: &Body, point: &Point) -> Vec3;
}

/// Constant gravity.
///
/// Returns the weight `mass * g`, a force. The acceleration accumulator
/// later scales the force sum by the inverse mass, so free fall comes
/// out at exactly `g` regardless of the point's mass.
pub struct Gravity;

impl Force for Gravity {
    fn force(&self, params: &Parameters, _body: &Body, point: &Point) -> Vec3 {
        params.gravity * point.mass()
    }
}

/// Quadratic drag against the wind-relative velocity
///
/// F = 0.5 * rho * cd * area * |v_rel|^2, directed against `v_rel`,
/// where `v_rel = point.vel - params.wind_velocity`.
pub struct Wind {
    pub air_density: f64, // rho, kg/m^3
    pub drag_coeff: f64,  // cd, dimensionless
    pub area: f64,        // reference cross-section, m^2
}

impl Force for Wind {
    fn force(&self, params: &Parameters, _body: &Body, point: &Point) -> Vec3 {
        let rel = point.vel - params.wind_velocity;
        // No relative motion, no drag; also guards the normalization.
        match rel.try_normalize(0.0) {
            Some(dir) => {
                let magnitude =
                    0.5 * self.air_density * self.drag_coeff * self.area * rel.norm_squared();
                -dir * magnitude
            }
            None => Vec3::zeros(),
        }
    }
}

/// Kinetic friction against the body's contact surface
///
/// Needs a contact normal on the body; without one there is no contact
/// and the force is zero. The normal force magnitude is `mass * |g . n|`
/// and the friction acts against the tangential velocity component.
pub struct Friction {
    pub mu_k: f64, // kinetic friction coefficient
}

impl Force for Friction {
    fn force(&self, params: &Parameters, body: &Body, point: &Point) -> Vec3 {
        let Some(normal) = body.contact_normal else {
            return Vec3::zeros();
        };
        let n = normal.into_inner();
        let v_t = point.vel - n * point.vel.dot(&n);
        match v_t.try_normalize(0.0) {
            Some(dir) => {
                let normal_force = point.mass() * params.gravity.dot(&n).abs();
                -dir * (self.mu_k * normal_force)
            }
            None => Vec3::zeros(),
        }
    }
}

/// Linear viscous damping, `F = -alpha * v`
pub struct ViscousDrag {
    pub alpha: f64, // damping coefficient
}

impl Force for ViscousDrag {
    fn force(&self, _params: &Parameters, _body: &Body, point: &Point) -> Vec3 {
        -point.vel * self.alpha
    }
}
