//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - integration step size and optional end time,
//! - world-level constant vectors read by the force model
//!   (gravitational acceleration, ambient wind velocity)

use super::states::Vec3;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub h: f64,                // fixed integration step size, > 0
    pub t_end: Option<f64>,    // stop time; None means run indefinitely
    pub gravity: Vec3,         // gravitational acceleration g
    pub wind_velocity: Vec3,   // ambient wind velocity
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            h: 0.1,
            t_end: None,
            gravity: Vec3::new(0.0, -9.81, 0.0),
            wind_velocity: Vec3::zeros(),
        }
    }
}
