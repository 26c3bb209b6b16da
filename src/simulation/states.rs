//! Core state types for the point-mass simulation.
//!
//! Defines the kinematic data model:
//! - `Point` — a single mass-point with position/velocity/acceleration and
//!   an append-only position history
//! - `Edge`  — a rest-length relation between two points of the same body
//! - `Body`  — an aggregate of points and edges with shared flags, a
//!   per-body force list and an optional contact normal
//!
//! Position writes go through [`Point::set_pos`] so the history records
//! every value the position has ever held, including the initial one.

use nalgebra::{UnitVector3, Vector3};

use super::error::ModelError;
use super::forces::ForceSet;

pub type Vec3 = Vector3<f64>;

/// A single mass-point.
///
/// The position and inverse mass are private: the position so every write
/// lands in the history log, the inverse mass so the finite-and-positive
/// precondition checked at construction cannot be broken afterwards.
#[derive(Debug)]
pub struct Point {
    pos: Vec3,              // current position
    pub vel: Vec3,          // velocity
    pub acc: Vec3,          // acceleration as of the last integration step
    w: f64,                 // inverse mass, > 0
    pos_history: Vec<Vec3>, // every position ever held, in write order
}

impl Point {
    /// Create a point from initial position, velocity and inverse mass.
    ///
    /// Fails with [`ModelError::InvalidMass`] unless `w` is finite and
    /// strictly positive. `w == 0` (infinite mass) is not supported.
    pub fn new(pos: Vec3, vel: Vec3, w: f64) -> Result<Self, ModelError> {
        if !w.is_finite() || w <= 0.0 {
            return Err(ModelError::InvalidMass(w));
        }
        Ok(Point {
            pos,
            vel,
            acc: Vec3::zeros(),
            w,
            pos_history: vec![pos],
        })
    }

    pub fn pos(&self) -> Vec3 {
        self.pos
    }

    /// Write the position and append it to the history.
    ///
    /// This is the only position-update channel; callers that do not move
    /// the point must not call it, so the history grows exactly once per
    /// actual write.
    pub fn set_pos(&mut self, pos: Vec3) {
        self.pos = pos;
        self.pos_history.push(pos);
    }

    /// Inverse mass.
    pub fn w(&self) -> f64 {
        self.w
    }

    pub fn mass(&self) -> f64 {
        1.0 / self.w
    }

    /// Every value the position has held, oldest first.
    pub fn pos_history(&self) -> &[Vec3] {
        &self.pos_history
    }
}

/// A target-distance relation between two points of the owning body.
///
/// Endpoints are indices into the body's point list; membership is
/// validated when the body is built. Immutable afterwards — constraint
/// solving acts on the referenced points, not on the edge itself.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    points: (usize, usize), // endpoint indices into the owning body's points
    rest_length: f64,       // distance the constraint tries to maintain
}

impl Edge {
    pub fn new(i: usize, j: usize, rest_length: f64) -> Self {
        Edge {
            points: (i, j),
            rest_length,
        }
    }

    pub fn endpoints(&self) -> (usize, usize) {
        self.points
    }

    pub fn rest_length(&self) -> f64 {
        self.rest_length
    }
}

/// An aggregate of points and edges sharing behavior flags.
pub struct Body {
    pub(crate) points: Vec<Point>,
    pub(crate) edges: Vec<Edge>,
    pub wireframe: bool,  // rendering hint only, no physics effect
    pub freeze: bool,     // frozen bodies are skipped by every step pass
    pub forces: ForceSet, // forces applying only to this body's points
    // Contact normal against the supporting surface, if any. Forces that
    // need a contact (kinetic friction) read this instead of probing for
    // ad hoc attributes; `None` is the no-contact case.
    pub contact_normal: Option<UnitVector3<f64>>,
}

impl Body {
    /// Build a body, validating that every edge joins two distinct points
    /// of this body's point list.
    pub fn new(points: Vec<Point>, edges: Vec<Edge>) -> Result<Self, ModelError> {
        for (idx, edge) in edges.iter().enumerate() {
            let (i, j) = edge.points;
            for point in [i, j] {
                if point >= points.len() {
                    return Err(ModelError::InvalidEdge {
                        edge: idx,
                        point,
                        len: points.len(),
                    });
                }
            }
            if i == j {
                return Err(ModelError::SelfEdge(idx));
            }
        }
        Ok(Body {
            points,
            edges,
            wireframe: false,
            freeze: false,
            forces: ForceSet::new(),
            contact_normal: None,
        })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}
