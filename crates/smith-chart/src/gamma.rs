use num_complex::Complex64;

/// Reflection coefficient of a normalized load impedance, `(z - 1) / (z + 1)`.
///
/// Passive loads (re(z) >= 0) map into the closed unit disk. The map is
/// singular at z = -1; the result is non-finite there and not guarded.
pub fn impedance_to_gamma(z: Complex64) -> Complex64 {
    (z - 1.0) / (z + 1.0)
}

/// Inverse of [`impedance_to_gamma`], `(1 + gamma) / (1 - gamma)`.
///
/// Undefined at gamma = 1 (an open circuit reflects everything).
pub fn gamma_to_impedance(gamma: Complex64) -> Complex64 {
    (1.0 + gamma) / (1.0 - gamma)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_matched_load_is_origin() {
        let gamma = impedance_to_gamma(Complex64::new(1.0, 0.0));
        assert_relative_eq!(gamma.norm(), 0.0);
    }

    #[test]
    fn test_short_circuit() {
        // z = 0 reflects with gamma = -1
        let gamma = impedance_to_gamma(Complex64::new(0.0, 0.0));
        assert_relative_eq!(gamma.re, -1.0);
        assert_relative_eq!(gamma.im, 0.0);
    }

    #[test]
    fn test_pure_reactance_on_unit_circle() {
        for x in [0.2, 0.5, 1.0, 2.0, 5.0, 10.0] {
            let gamma = impedance_to_gamma(Complex64::new(0.0, x));
            assert_relative_eq!(gamma.norm(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_passive_loads_inside_disk() {
        for r in [0.1, 0.5, 1.0, 3.0, 10.0] {
            for x in [-5.0, -1.0, 0.0, 0.3, 2.0] {
                let gamma = impedance_to_gamma(Complex64::new(r, x));
                assert!(gamma.norm() < 1.0, "gamma {gamma} for z = {r} + {x}j");
            }
        }
    }

    #[test]
    fn test_round_trip() {
        let samples = [
            Complex64::new(0.5, 0.7),
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, -2.0),
            Complex64::new(10.0, 3.5),
            Complex64::new(0.01, 0.01),
        ];
        for z in samples {
            let back = gamma_to_impedance(impedance_to_gamma(z));
            assert_relative_eq!(back.re, z.re, epsilon = 1e-12);
            assert_relative_eq!(back.im, z.im, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_singular_at_minus_one() {
        let gamma = impedance_to_gamma(Complex64::new(-1.0, 0.0));
        assert!(!gamma.re.is_finite() || !gamma.im.is_finite());
    }
}
