//! Construction-time validation errors.
//!
//! All of these abort simulation setup; the steady-state step loop raises
//! no errors once construction has succeeded.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    /// Inverse mass must be finite and strictly positive.
    #[error("inverse mass must be finite and > 0, got {0}")]
    InvalidMass(f64),

    /// An edge referenced a point outside its body's point list.
    #[error("edge {edge} references point {point}, but the body has {len} points")]
    InvalidEdge { edge: usize, point: usize, len: usize },

    /// An edge joined a point to itself.
    #[error("edge {0} joins a point to itself")]
    SelfEdge(usize),

    /// The integration step size must be finite and strictly positive.
    #[error("time step must be finite and > 0, got {0}")]
    InvalidTimestep(f64),

    /// A configured direction vector had zero length.
    #[error("{0} must have nonzero length")]
    DegenerateNormal(&'static str),
}
