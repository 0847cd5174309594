use num_complex::Complex64;
use serde::ser::Serializer;
use serde::Serialize;
use std::f64::consts::TAU;

use crate::gamma::impedance_to_gamma;

/// Sentinel magnitude standing in for an infinite reactance or resistance
/// bound. Large enough that the endpoint error of a "full" arc stays far
/// below pixel resolution at any plausible output size; callers pass it
/// explicitly so precision can be tuned against a particular surface.
pub const BOUNDARY_REACTANCE: f64 = 1e6;

/// Round a float to N decimal places.
fn round_f64(v: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (v * factor).round() / factor
}

/// Rounds f64 to 6 decimal places on serialization.
fn serialize_f64_rounded<S: Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(round_f64(*v, 6))
}

/// One constant-resistance or constant-reactance circle segment in
/// gamma-plane coordinates.
///
/// Angles are radians in `[0, 2π)`, in the order the bounds produced them;
/// the rendering layer decides sweep direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArcSegment {
    #[serde(serialize_with = "serialize_f64_rounded")]
    pub cx: f64,
    #[serde(serialize_with = "serialize_f64_rounded")]
    pub cy: f64,
    #[serde(serialize_with = "serialize_f64_rounded")]
    pub radius: f64,
    #[serde(serialize_with = "serialize_f64_rounded")]
    pub angle1: f64,
    #[serde(serialize_with = "serialize_f64_rounded")]
    pub angle2: f64,
}

impl ArcSegment {
    pub fn is_finite(&self) -> bool {
        self.cx.is_finite()
            && self.cy.is_finite()
            && self.radius.is_finite()
            && self.angle1.is_finite()
            && self.angle2.is_finite()
    }
}

fn positive_angle(a: f64) -> f64 {
    if a < 0.0 {
        a + TAU
    } else {
        a
    }
}

/// Angle of `gamma` around `center`, normalized into `[0, 2π)`.
fn bound_angle(gamma: Complex64, center: Complex64) -> f64 {
    positive_angle((gamma - center).arg())
}

/// Arc of the constant-resistance circle `r` between reactance bounds
/// `x_start` and `x_end`.
///
/// For fixed resistance the locus of gamma is a circle of radius `1/(1+r)`
/// centered at `(r/(1+r), 0)`. Callers pass `±BOUNDARY_REACTANCE` to span
/// the whole chart.
pub fn resistance_arc(r: f64, x_start: f64, x_end: f64) -> ArcSegment {
    let radius = 1.0 / (1.0 + r);
    let center = Complex64::new(r / (1.0 + r), 0.0);

    let gamma1 = impedance_to_gamma(Complex64::new(r, x_start));
    let gamma2 = impedance_to_gamma(Complex64::new(r, x_end));

    ArcSegment {
        cx: center.re,
        cy: center.im,
        radius,
        angle1: bound_angle(gamma1, center),
        angle2: bound_angle(gamma2, center),
    }
}

/// Arc of the constant-reactance circle `x` between resistance bounds
/// `r_start` and `r_end`.
///
/// For fixed reactance the locus is a circle of radius `|1/x|` centered at
/// `(1, 1/x)`, tangent to the chart boundary at `(1, 0)`. The negative
/// family is obtained by negating `x` at the call site; there is no
/// separate formula.
pub fn reactance_arc(x: f64, r_start: f64, r_end: f64) -> ArcSegment {
    let radius = (1.0 / x).abs();
    let center = Complex64::new(1.0, 1.0 / x);

    let gamma1 = impedance_to_gamma(Complex64::new(r_start, x));
    let gamma2 = impedance_to_gamma(Complex64::new(r_end, x));

    ArcSegment {
        cx: center.re,
        cy: center.im,
        radius,
        angle1: bound_angle(gamma1, center),
        angle2: bound_angle(gamma2, center),
    }
}
