//! Core state types for the planar n-body simulation
//!
//! `Body` carries the full mutable physical state of one point mass:
//! mass, position, velocity, the two acceleration slots used by the
//! integrators, and a bounded FIFO trail of past positions kept for display.
//!
//! Units are astronomical: AU for length, solar masses for mass, years for
//! time, so the matching gravitational constant is `4 pi^2` (see `forces::G`).

use std::collections::VecDeque;

use nalgebra::Vector2;
use thiserror::Error;

pub type Vec2 = Vector2<f64>;

/// Display color, RGB. Carried on the body for the renderer's convenience;
/// the physics never reads it.
pub type Color = [u8; 3];

/// Default bound on the trail history
pub const DEFAULT_TRAIL_CAPACITY: usize = 1000;

/// Construction-time configuration errors for a [`Body`]
#[derive(Debug, Error)]
pub enum BodyError {
    #[error("body {name:?}: mass must be a positive finite number of solar masses, got {mass}")]
    InvalidMass { name: String, mass: f64 },
}

#[derive(Debug, Clone)]
pub struct Body {
    pub name: String, // display only
    pub mass: f64,    // solar masses, always > 0
    pub position: Vec2, // AU
    pub velocity: Vec2, // AU / year
    pub acceleration: Vec2,
    pub previous_acceleration: Vec2, // written by Verlet pass 1, read by pass 4
    pub radius: f64,  // display only
    pub color: Color, // display only
    trail: VecDeque<Vec2>,
    trail_capacity: usize,
}

impl Body {
    /// Create a fully-initialized body with zeroed accelerations and an
    /// empty trail. Rejects non-positive or non-finite mass; the softened
    /// force law tolerates any finite positions, so mass is the single
    /// value worth validating here.
    pub fn new(
        name: impl Into<String>,
        mass: f64,
        position: Vec2,
        velocity: Vec2,
        radius: f64,
        color: Color,
    ) -> Result<Self, BodyError> {
        let name = name.into();
        if !mass.is_finite() || mass <= 0.0 {
            return Err(BodyError::InvalidMass { name, mass });
        }
        Ok(Self {
            name,
            mass,
            position,
            velocity,
            acceleration: Vec2::zeros(),
            previous_acceleration: Vec2::zeros(),
            radius,
            color,
            trail: VecDeque::new(),
            trail_capacity: DEFAULT_TRAIL_CAPACITY,
        })
    }

    /// Append the current position to the trail, evicting the oldest entries
    /// first so `trail().len() <= trail_capacity()` holds after every call.
    /// Insertion order is preserved; the renderer fades older points.
    pub fn record_trail(&mut self) {
        if self.trail_capacity == 0 {
            return;
        }
        while self.trail.len() >= self.trail_capacity {
            self.trail.pop_front();
        }
        self.trail.push_back(self.position);
    }

    pub fn trail(&self) -> &VecDeque<Vec2> {
        &self.trail
    }

    pub fn trail_capacity(&self) -> usize {
        self.trail_capacity
    }

    /// Re-bound the trail; excess history is dropped oldest-first
    pub fn set_trail_capacity(&mut self, capacity: usize) {
        self.trail_capacity = capacity;
        while self.trail.len() > capacity {
            self.trail.pop_front();
        }
    }
}
