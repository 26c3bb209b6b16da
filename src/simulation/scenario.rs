//! Build a fully-initialized runtime world from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a [`World`]
//! containing:
//! - numerical parameters and world-level constants ([`Parameters`])
//! - bodies with validated points and edges at t = 0
//! - the active global and per-body force sets ([`ForceSet`])
//! - the configured collision and constraint strategies
//!
//! All data-model preconditions are checked here: inverse masses, edge
//! membership, step size, configured direction vectors. A failure aborts
//! setup before the first step.

use nalgebra::Unit;

use crate::configuration::config::{
    BodyConfig, CollisionConfig, ConstraintConfig, ForceConfig, ScenarioConfig,
};
use crate::simulation::collision::HalfSpace;
use crate::simulation::constraint::DistanceProjection;
use crate::simulation::error::ModelError;
use crate::simulation::forces::{ForceSet, Friction, Gravity, ViscousDrag, Wind};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, Edge, Point, Vec3};
use crate::simulation::world::World;

/// Map one tagged force entry to its runtime term
fn build_force_set(configs: &[ForceConfig]) -> ForceSet {
    configs.iter().fold(ForceSet::new(), |set, cfg| match *cfg {
        ForceConfig::Gravity => set.with(Gravity),
        ForceConfig::Wind {
            air_density,
            drag_coeff,
            area,
        } => set.with(Wind {
            air_density,
            drag_coeff,
            area,
        }),
        ForceConfig::Friction { mu_k } => set.with(Friction { mu_k }),
        ForceConfig::Viscous { alpha } => set.with(ViscousDrag { alpha }),
    })
}

fn build_body(cfg: &BodyConfig) -> Result<Body, ModelError> {
    let points = cfg
        .points
        .iter()
        .map(|pc| Point::new(Vec3::from(pc.pos), Vec3::from(pc.vel), pc.w))
        .collect::<Result<Vec<_>, _>>()?;

    let edges = cfg
        .edges
        .iter()
        .map(|ec| Edge::new(ec.points[0], ec.points[1], ec.rest_length))
        .collect();

    let mut body = Body::new(points, edges)?;
    body.wireframe = cfg.wireframe;
    body.freeze = cfg.freeze;
    body.forces = build_force_set(&cfg.forces);
    body.contact_normal = cfg
        .contact_normal
        .map(|n| {
            Unit::try_new(Vec3::from(n), 0.0)
                .ok_or(ModelError::DegenerateNormal("contact normal"))
        })
        .transpose()?;
    Ok(body)
}

/// Build the runtime world from a loaded scenario configuration.
pub fn build_world(cfg: &ScenarioConfig) -> Result<World, ModelError> {
    let p = &cfg.parameters;
    if !p.h.is_finite() || p.h <= 0.0 {
        return Err(ModelError::InvalidTimestep(p.h));
    }
    let params = Parameters {
        h: p.h,
        t_end: p.t_end,
        gravity: Vec3::from(p.gravity),
        wind_velocity: Vec3::from(p.wind_velocity),
    };

    let bodies = cfg
        .bodies
        .iter()
        .map(build_body)
        .collect::<Result<Vec<_>, _>>()?;

    let mut world = World::new(params, build_force_set(&cfg.forces), bodies);

    if let Some(CollisionConfig::HalfSpace {
        normal,
        offset,
        restitution,
    }) = cfg.collision
    {
        let normal = Unit::try_new(Vec3::from(normal), 0.0)
            .ok_or(ModelError::DegenerateNormal("half-space normal"))?;
        world = world.with_collision(HalfSpace {
            normal,
            offset,
            restitution,
        });
    }

    if let Some(ConstraintConfig::DistanceProjection { stiffness }) = cfg.constraint {
        world = world.with_constraint(DistanceProjection { stiffness });
    }

    Ok(world)
}
