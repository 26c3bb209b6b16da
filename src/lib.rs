pub mod configuration;
pub mod simulation;

pub use simulation::states::{Body, Edge, Point, Vec3};
pub use simulation::forces::{Force, ForceSet, Friction, Gravity, ViscousDrag, Wind};
pub use simulation::integrator::{compute_acceleration, verlet_step};
pub use simulation::collision::{CollisionResponse, HalfSpace, NoCollision};
pub use simulation::constraint::{ConstraintSolver, DistanceProjection, NoConstraint};
pub use simulation::error::ModelError;
pub use simulation::params::Parameters;
pub use simulation::scenario::build_world;
pub use simulation::world::{run, World};

pub use configuration::config::{
    BodyConfig, CollisionConfig, ConstraintConfig, EdgeConfig, ForceConfig, ParametersConfig,
    PointConfig, ScenarioConfig,
};
