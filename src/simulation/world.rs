//! World state and the step loop
//!
//! The `World` owns every body, the global force set, the simulation
//! clock and the two extension strategies (collision response and edge
//! constraint satisfaction). `step` advances the whole simulation by one
//! fixed timestep; `run` repeats it until the configured end time.
//!
//! Pass ordering inside a step is load-bearing: every point of every
//! body is integrated before any collision or constraint pass runs, so
//! resolution always sees post-integration positions for the whole
//! world within the same step.
//!
//! Single-threaded by design; one `step` call completes before the next
//! begins and the caller owns any stop condition beyond `t_end`.

use log::info;

use super::collision::{CollisionResponse, NoCollision};
use super::constraint::{ConstraintSolver, NoConstraint};
use super::forces::ForceSet;
use super::integrator;
use super::params::Parameters;
use super::states::Body;

pub struct World {
    pub params: Parameters,
    pub global_forces: ForceSet, // applied to every point of every body
    pub bodies: Vec<Body>,
    t: f64,                // current simulation time
    time_history: Vec<f64>, // one entry per completed step
    collision: Box<dyn CollisionResponse + Send + Sync>,
    constraint: Box<dyn ConstraintSolver + Send + Sync>,
}

impl World {
    /// Create a world with the no-op collision and constraint defaults.
    pub fn new(params: Parameters, global_forces: ForceSet, bodies: Vec<Body>) -> Self {
        World {
            params,
            global_forces,
            bodies,
            t: 0.0,
            time_history: Vec::new(),
            collision: Box::new(NoCollision),
            constraint: Box::new(NoConstraint),
        }
    }

    /// Replace the collision response strategy
    pub fn with_collision<C>(mut self, collision: C) -> Self
    where
        C: CollisionResponse + Send + Sync + 'static,
    {
        self.collision = Box::new(collision);
        self
    }

    /// Replace the constraint solver strategy
    pub fn with_constraint<S>(mut self, constraint: S) -> Self
    where
        S: ConstraintSolver + Send + Sync + 'static,
    {
        self.constraint = Box::new(constraint);
        self
    }

    pub fn t(&self) -> f64 {
        self.t
    }

    /// Completed-step times, oldest first.
    pub fn time_history(&self) -> &[f64] {
        &self.time_history
    }

    /// True once `t` has reached the configured end time.
    /// Without an end time the world never finishes on its own.
    pub fn finished(&self) -> bool {
        match self.params.t_end {
            Some(t_end) => self.t >= t_end,
            None => false,
        }
    }

    /// Advance the simulation by the configured step size.
    pub fn step(&mut self) {
        self.step_by(self.params.h);
    }

    /// Advance the simulation by one step of size `h`.
    ///
    /// Frozen bodies are skipped by every pass: their points are not
    /// integrated, collided or constrained, and their histories do not
    /// grow. Time advances globally regardless.
    pub fn step_by(&mut self, h: f64) {
        for body in self.bodies.iter_mut().filter(|b| !b.freeze) {
            for idx in 0..body.points.len() {
                integrator::verlet_step(&self.params, &self.global_forces, body, idx, h);
            }
        }

        for body in self.bodies.iter_mut().filter(|b| !b.freeze) {
            for point in body.points.iter_mut() {
                self.collision.resolve(point);
            }
        }

        for body in self.bodies.iter_mut().filter(|b| !b.freeze) {
            for edge in body.edges.iter() {
                let (i, j) = edge.endpoints();
                let (p1, p2) = pair_mut(&mut body.points, i, j);
                self.constraint.satisfy(edge, p1, p2);
            }
        }

        self.t += h;
        self.time_history.push(self.t);
    }
}

/// Disjoint mutable references to two slice elements.
/// Edge endpoints are validated distinct at body construction.
fn pair_mut<T>(xs: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    debug_assert!(i != j);
    if i < j {
        let (left, right) = xs.split_at_mut(j);
        (&mut left[i], &mut right[0])
    } else {
        let (left, right) = xs.split_at_mut(i);
        (&mut right[0], &mut left[j])
    }
}

/// Drive `step` until the world reports finished, logging a checkpoint
/// every `dstep_log` steps (0 disables checkpoints). Returns the number
/// of steps taken. Callers must ensure `t_end` is set, otherwise this
/// loops forever.
pub fn run(world: &mut World, dstep_log: usize) -> usize {
    let mut steps = 0;
    while !world.finished() {
        world.step();
        steps += 1;
        if dstep_log > 0 && steps % dstep_log == 0 {
            info!("checkpoint: step={}, t={:.6}", steps, world.t());
        }
    }
    steps
}
