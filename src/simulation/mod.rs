pub mod collision;
pub mod constraint;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod params;
pub mod scenario;
pub mod states;
pub mod world;
