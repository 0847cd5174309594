use std::f64::consts::TAU;

/// Linear mapping from a numeric domain onto a range.
///
/// Values outside the domain extrapolate linearly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn map(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        r0 + (v - d0) / (d1 - d0) * (r1 - r0)
    }
}

/// The four gamma-plane to surface mappings, fixed for the lifetime of a
/// chart: x and y axes, arc radius, and arc angle.
#[derive(Debug, Clone, Copy)]
pub struct ChartScales {
    pub x: LinearScale,
    pub y: LinearScale,
    pub radius: LinearScale,
    pub angle: LinearScale,
}

impl Default for ChartScales {
    fn default() -> Self {
        Self {
            x: LinearScale::new((-1.0, 1.0), (0.0, 1.0)),
            // Surface y grows downward, so the gamma y axis flips.
            y: LinearScale::new((-1.0, 1.0), (1.0, 0.0)),
            radius: LinearScale::new((0.0, 1.0), (0.0, 0.5)),
            // Angles sweep the opposite way on the surface.
            angle: LinearScale::new((0.0, TAU), (0.0, -TAU)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_endpoints_and_midpoint() {
        let s = LinearScale::new((-1.0, 1.0), (0.0, 1.0));
        assert_relative_eq!(s.map(-1.0), 0.0);
        assert_relative_eq!(s.map(0.0), 0.5);
        assert_relative_eq!(s.map(1.0), 1.0);
    }

    #[test]
    fn test_reversed_range() {
        let s = LinearScale::new((-1.0, 1.0), (1.0, 0.0));
        assert_relative_eq!(s.map(-1.0), 1.0);
        assert_relative_eq!(s.map(1.0), 0.0);
    }

    #[test]
    fn test_extrapolation() {
        let s = LinearScale::new((0.0, 1.0), (0.0, 0.5));
        assert_relative_eq!(s.map(2.0), 1.0);
        assert_relative_eq!(s.map(-1.0), -0.5);
    }

    #[test]
    fn test_chart_scales_fixed_mappings() {
        let scales = ChartScales::default();
        assert_relative_eq!(scales.x.map(0.0), 0.5);
        assert_relative_eq!(scales.y.map(0.0), 0.5);
        assert_relative_eq!(scales.y.map(1.0), 0.0);
        assert_relative_eq!(scales.radius.map(1.0), 0.5);
        assert_relative_eq!(scales.angle.map(TAU), -TAU);
    }
}
