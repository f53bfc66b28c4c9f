use std::fmt;
use std::ops::{Add, Mul};

use crate::fourier::Amplitude;

/// A complex number with 64-bit float components.
///
/// Kept self-contained because [`Complex::from_polar`] takes an
/// [`Amplitude`] as its magnitude, letting the transform accumulate real and
/// already-complex sample values through one code path.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex {
    pub real: f64,
    pub imaginary: f64,
}

impl Complex {
    pub const ZERO: Complex = Complex {
        real: 0.0,
        imaginary: 0.0,
    };

    pub fn new(real: f64, imaginary: f64) -> Self {
        Complex { real, imaginary }
    }

    /// Converts polar coordinates to a complex number.
    ///
    /// A real magnitude scales the unit vector at `angle`; a complex
    /// magnitude is instead multiplied by that unit vector, i.e. rotated by
    /// `angle`.
    pub fn from_polar(angle: f64, magnitude: Amplitude) -> Complex {
        match magnitude {
            Amplitude::Real(m) => Complex::new(angle.cos() * m, angle.sin() * m),
            Amplitude::Complex(c) => Complex::new(angle.cos(), angle.sin()) * c,
        }
    }

    /// The magnitude `sqrt(real² + imaginary²)`.
    ///
    /// Total over all f64 inputs; NaN and infinity pass through with plain
    /// IEEE-754 semantics.
    pub fn magnitude(&self) -> f64 {
        (self.real * self.real + self.imaginary * self.imaginary).sqrt()
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, other: Complex) -> Complex {
        Complex::new(self.real + other.real, self.imaginary + other.imaginary)
    }
}

impl Mul for Complex {
    type Output = Complex;

    // Standard complex product: (a+bi)(c+di) = (ac - bd) + (ad + bc)i.
    fn mul(self, other: Complex) -> Complex {
        Complex::new(
            self.real * other.real - self.imaginary * other.imaginary,
            self.real * other.imaginary + self.imaginary * other.real,
        )
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.imaginary < 0.0 {
            write!(f, "{} - {}i", self.real, -self.imaginary)
        } else {
            write!(f, "{} + {}i", self.real, self.imaginary)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f64::consts::FRAC_PI_2;

    const TOL: f64 = 1e-12;

    fn random_complex(rng: &mut StdRng) -> Complex {
        Complex::new(rng.random_range(-10.0..10.0), rng.random_range(-10.0..10.0))
    }

    #[test]
    fn test_add_componentwise() {
        let sum = Complex::new(1.0, 2.0) + Complex::new(3.0, -4.0);
        assert!((sum.real - 4.0).abs() < TOL);
        assert!((sum.imaginary + 2.0).abs() < TOL);
    }

    #[test]
    fn test_add_commutative_and_associative() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let (a, b, c) = (
                random_complex(&mut rng),
                random_complex(&mut rng),
                random_complex(&mut rng),
            );
            let ab = a + b;
            let ba = b + a;
            assert!((ab.real - ba.real).abs() < TOL);
            assert!((ab.imaginary - ba.imaginary).abs() < TOL);

            let left = (a + b) + c;
            let right = a + (b + c);
            assert!((left.real - right.real).abs() < TOL);
            assert!((left.imaginary - right.imaginary).abs() < TOL);
        }
    }

    #[test]
    fn test_mul_commutative() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let (a, b) = (random_complex(&mut rng), random_complex(&mut rng));
            let ab = a * b;
            let ba = b * a;
            assert!((ab.real - ba.real).abs() < TOL);
            assert!((ab.imaginary - ba.imaginary).abs() < TOL);
        }
    }

    #[test]
    fn test_mul_by_one_is_identity() {
        let z = Complex::new(-2.5, 3.25);
        let product = z * Complex::new(1.0, 0.0);
        assert_eq!(product, z);
    }

    #[test]
    fn test_mul_known_product() {
        // (1 + 2i)(3 + 4i) = -5 + 10i
        let product = Complex::new(1.0, 2.0) * Complex::new(3.0, 4.0);
        assert!((product.real + 5.0).abs() < TOL);
        assert!((product.imaginary - 10.0).abs() < TOL);
    }

    #[test]
    fn test_magnitude_three_four_five() {
        assert!((Complex::new(3.0, 4.0).magnitude() - 5.0).abs() < TOL);
    }

    #[test]
    fn test_from_polar_zero_angle() {
        let c = Complex::from_polar(0.0, Amplitude::Real(5.0));
        assert!((c.real - 5.0).abs() < TOL);
        assert!(c.imaginary.abs() < TOL);
    }

    #[test]
    fn test_from_polar_right_angle() {
        let c = Complex::from_polar(FRAC_PI_2, Amplitude::Real(5.0));
        assert!(c.real.abs() < TOL);
        assert!((c.imaginary - 5.0).abs() < TOL);
    }

    #[test]
    fn test_from_polar_complex_magnitude_rotates() {
        // Rotating 1 + 0i by a quarter turn lands on the imaginary axis.
        let c = Complex::from_polar(FRAC_PI_2, Amplitude::Complex(Complex::new(1.0, 0.0)));
        assert!(c.real.abs() < TOL);
        assert!((c.imaginary - 1.0).abs() < TOL);
    }

    #[test]
    fn test_product_matches_num_complex() {
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..50 {
            let (a, b) = (random_complex(&mut rng), random_complex(&mut rng));
            let ours = a * b;
            let reference =
                Complex64::new(a.real, a.imaginary) * Complex64::new(b.real, b.imaginary);
            assert!((ours.real - reference.re).abs() < TOL);
            assert!((ours.imaginary - reference.im).abs() < TOL);
        }
    }

    #[test]
    fn test_from_polar_matches_num_complex() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..50 {
            let angle = rng.random_range(-7.0..7.0);
            let magnitude = rng.random_range(0.0..10.0);
            let ours = Complex::from_polar(angle, Amplitude::Real(magnitude));
            let reference = Complex64::from_polar(magnitude, angle);
            assert!((ours.real - reference.re).abs() < TOL);
            assert!((ours.imaginary - reference.im).abs() < TOL);
        }
    }

    #[test]
    fn test_display_sign_handling() {
        assert_eq!(Complex::new(1.5, 2.0).to_string(), "1.5 + 2i");
        assert_eq!(Complex::new(1.5, -2.0).to_string(), "1.5 - 2i");
    }
}
