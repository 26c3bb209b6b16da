//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – step size, stop time and world-level constants
//! - [`ForceConfig`]      – one entry per force, tagged by kind
//! - [`BodyConfig`]       – flags, per-body forces, points and edges
//! - [`CollisionConfig`] / [`ConstraintConfig`] – optional strategies for
//!   the two extension seams
//! - [`ScenarioConfig`]   – top-level wrapper used to load from YAML
//!
//! # YAML format
//! An example scenario matching these types:
//!
//! ```yaml
//! parameters:
//!   h: 0.1                  # integration step size
//!   t_end: 10.0             # optional; omit to run indefinitely
//!   gravity: [0.0, -9.81, 0.0]
//!   wind_velocity: [0.0, 0.0, 0.0]
//!
//! forces:                   # global, applied to every point
//!   - type: gravity
//!   - type: viscous
//!     alpha: 0.05
//!
//! bodies:
//!   - wireframe: false
//!     freeze: false
//!     forces:               # per-body, optional
//!       - type: wind
//!         air_density: 1.2
//!         drag_coeff: 0.47
//!         area: 0.01
//!     points:
//!       - pos: [0.0, 10.0, 0.0]
//!         vel: [0.0, 5.0, 0.0]
//!         w: 1.0            # inverse mass
//!     edges:
//!       - points: [0, 1]
//!         rest_length: 1.0
//!
//! collision:                # optional; default is no collision
//!   type: half_space
//!   normal: [0.0, 1.0, 0.0]
//!   offset: 0.0
//!   restitution: 0.5
//!
//! constraint:               # optional; default leaves edges alone
//!   type: distance_projection
//!   stiffness: 1.0
//! ```
//!
//! The engine maps this configuration into its runtime representation;
//! see `simulation::scenario`.

use serde::Deserialize;

/// Global numerical parameters and world-level constants
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub h: f64,                      // step size, must be finite and > 0
    pub t_end: Option<f64>,          // stop time; omitted -> run indefinitely
    #[serde(default = "default_gravity")]
    pub gravity: [f64; 3],           // gravitational acceleration g
    #[serde(default)]
    pub wind_velocity: [f64; 3],     // ambient wind velocity
}

fn default_gravity() -> [f64; 3] {
    [0.0, -9.81, 0.0]
}

/// One force term, tagged by kind with the parameters that kind needs
#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ForceConfig {
    Gravity,
    Wind {
        air_density: f64,
        drag_coeff: f64,
        area: f64,
    },
    Friction {
        mu_k: f64,
    },
    Viscous {
        alpha: f64,
    },
}

/// Initial state for a single point
#[derive(Deserialize, Debug, Clone)]
pub struct PointConfig {
    pub pos: [f64; 3], // initial position
    pub vel: [f64; 3], // initial velocity
    pub w: f64,        // inverse mass, > 0
}

/// A rest-length edge between two point indices of the same body
#[derive(Deserialize, Debug, Clone)]
pub struct EdgeConfig {
    pub points: [usize; 2], // endpoint indices into the body's point list
    pub rest_length: f64,
}

/// Configuration for a single body
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub points: Vec<PointConfig>,
    #[serde(default)]
    pub edges: Vec<EdgeConfig>,
    #[serde(default)]
    pub wireframe: bool,
    #[serde(default)]
    pub freeze: bool,
    #[serde(default)]
    pub forces: Vec<ForceConfig>, // applied to this body's points only
    pub contact_normal: Option<[f64; 3]>, // enables friction against a surface
}

/// Collision response strategy for the post-integration pass
#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CollisionConfig {
    HalfSpace {
        normal: [f64; 3],
        offset: f64,
        restitution: f64,
    },
}

/// Constraint solver strategy for the edge pass
#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConstraintConfig {
    DistanceProjection {
        #[serde(default = "default_stiffness")]
        stiffness: f64,
    },
}

fn default_stiffness() -> f64 {
    1.0
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub forces: Vec<ForceConfig>, // global forces, applied to every point
    pub bodies: Vec<BodyConfig>,
    pub collision: Option<CollisionConfig>,
    pub constraint: Option<ConstraintConfig>,
}
