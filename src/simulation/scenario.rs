//! Built-in initial-condition catalog
//!
//! Each scenario builds a fresh, fully-initialized body list in
//! AU / solar-mass / year units (G = 4 pi^2). The catalog is indexed and
//! wrapping: any index selects a valid scenario, out-of-range falls back
//! to the first entry.
//!
//! The three-body entries are classical periodic or free-fall
//! configurations: Burrau's Pythagorean problem (Meissel 1893), the
//! Lagrange equilateral triangle, Moore's figure-eight choreography (1993),
//! and the "BHH" configuration of Liao, Li and Yang (2022).

use std::f64::consts::PI;

use crate::simulation::forces::G;
use crate::simulation::states::{Body, BodyError, Color, Vec2};

const YELLOW: Color = [255, 255, 0];
const ORANGE_RED: Color = [255, 69, 0];
const AZURE: Color = [240, 255, 255];
const LIME_GREEN: Color = [50, 205, 50];
const LIGHT_STEEL_BLUE: Color = [176, 196, 222];
const YELLOW_GREEN: Color = [154, 205, 50];

const STAR_RADIUS: f64 = 0.05; // display size, AU

/// A named entry of the initial-condition catalog
pub struct Scenario {
    pub name: &'static str,
    pub build: fn() -> Result<Vec<Body>, BodyError>,
}

pub const CATALOG: &[Scenario] = &[
    Scenario {
        name: "Two-body orbit",
        build: two_bodies,
    },
    Scenario {
        name: "Pythagorean three-body",
        build: pythagorean,
    },
    Scenario {
        name: "Lagrange equilateral triangle",
        build: equilateral_triangle,
    },
    Scenario {
        name: "Figure eight",
        build: figure_eight,
    },
    Scenario {
        name: "BHH configuration",
        build: bhh_configuration,
    },
];

/// Resolve an arbitrary index against the catalog. Out-of-range indices
/// silently wrap to entry 0; this is the documented fallback, not an error.
pub fn lookup(index: usize) -> (usize, &'static Scenario) {
    let index = if index < CATALOG.len() { index } else { 0 };
    (index, &CATALOG[index])
}

/// A single sun-like star at the origin, used by the engine's
/// `add_sunlike_body`
pub fn sunlike() -> Result<Body, BodyError> {
    Body::new("Sun", 1.0, Vec2::zeros(), Vec2::zeros(), STAR_RADIUS, YELLOW)
}

/// Two equal solar masses on a circular mutual orbit, 1 AU apart
fn two_bodies() -> Result<Vec<Body>, BodyError> {
    // Each star circles the barycentre at radius d/2; for equal masses m
    // at separation d the circular speed is sqrt(G m / (2 d))
    let d = 1.0;
    let v = (G / (2.0 * d)).sqrt();

    Ok(vec![
        Body::new(
            "Star 1",
            1.0,
            Vec2::new(-d / 2.0, 0.0),
            Vec2::new(0.0, v),
            STAR_RADIUS,
            YELLOW,
        )?,
        Body::new(
            "Star 2",
            1.0,
            Vec2::new(d / 2.0, 0.0),
            Vec2::new(0.0, -v),
            STAR_RADIUS,
            ORANGE_RED,
        )?,
    ])
}

/// Burrau's problem: masses 3, 4, 5 at rest at the matching vertices of a
/// 3:4:5 right triangle
fn pythagorean() -> Result<Vec<Body>, BodyError> {
    Ok(vec![
        Body::new(
            "Star 1",
            3.0,
            Vec2::new(1.0, 3.0),
            Vec2::zeros(),
            STAR_RADIUS,
            ORANGE_RED,
        )?,
        Body::new(
            "Star 2",
            4.0,
            Vec2::new(-2.0, -1.0),
            Vec2::zeros(),
            STAR_RADIUS,
            YELLOW_GREEN,
        )?,
        Body::new(
            "Star 3",
            5.0,
            Vec2::new(1.0, -1.0),
            Vec2::zeros(),
            STAR_RADIUS,
            LIGHT_STEEL_BLUE,
        )?,
    ])
}

/// Three equal masses on the vertices of an equilateral triangle, rotating
/// rigidly about the barycentre
fn equilateral_triangle() -> Result<Vec<Body>, BodyError> {
    let r = 2.0; // circumradius, AU
    let m = 1.0;

    // Rigid-rotation rate for the equal-mass Lagrange triangle:
    // omega^2 = G m / (sqrt(3) r^3)
    let omega = (G * m / (3.0_f64.sqrt() * r * r * r)).sqrt();

    let positions = [
        Vec2::new(r, 0.0),
        Vec2::new(-r / 2.0, 3.0_f64.sqrt() * r / 2.0),
        Vec2::new(-r / 2.0, -3.0_f64.sqrt() * r / 2.0),
    ];
    let colors = [ORANGE_RED, AZURE, LIME_GREEN];

    let mut bodies = Vec::with_capacity(3);
    for (i, (pos, color)) in positions.iter().zip(colors).enumerate() {
        // Tangential circular velocity omega x r
        let vel = Vec2::new(-pos.y, pos.x) * omega;
        bodies.push(Body::new(
            format!("Star {}", i + 1),
            m,
            *pos,
            vel,
            STAR_RADIUS,
            color,
        )?);
    }
    Ok(bodies)
}

/// Moore's figure-eight choreography: three equal masses chasing each other
/// along a single figure-eight curve
fn figure_eight() -> Result<Vec<Body>, BodyError> {
    // Standard initial data for G = 1; velocities rescale by 2 pi when
    // switching to G = 4 pi^2 at unit length
    let k = 2.0 * PI;
    let x1 = Vec2::new(0.97000436, -0.24308753);
    let v3 = Vec2::new(-0.93240737, -0.86473146) * k;

    Ok(vec![
        Body::new("Star 1", 1.0, x1, -v3 / 2.0, STAR_RADIUS, ORANGE_RED)?,
        Body::new("Star 2", 1.0, -x1, -v3 / 2.0, STAR_RADIUS, AZURE)?,
        Body::new("Star 3", 1.0, Vec2::zeros(), v3, STAR_RADIUS, LIME_GREEN)?,
    ])
}

/// The near-equal-mass periodic configuration of Liao, Li and Yang (2022)
fn bhh_configuration() -> Result<Vec<Body>, BodyError> {
    let k = 2.0 * PI;

    Ok(vec![
        Body::new(
            "Star 1",
            1.0283,
            Vec2::new(-1.62064, 0.0),
            Vec2::new(0.0, -0.65955 * k),
            STAR_RADIUS,
            ORANGE_RED,
        )?,
        Body::new(
            "Star 2",
            0.9879,
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, -0.14784 * k),
            STAR_RADIUS,
            AZURE,
        )?,
        Body::new(
            "Star 3",
            1.0,
            Vec2::zeros(),
            Vec2::new(0.0, 0.8222 * k),
            STAR_RADIUS,
            LIME_GREEN,
        )?,
    ])
}
