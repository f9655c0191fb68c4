use std::ops::{Add, Mul};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Complex = Complex {
        real: 0.0,
        imag: 0.0,
    };

    #[must_use]
    pub fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_has_zero_magnitude() {
        assert_eq!(Complex::ZERO.magnitude_squared(), 0.0);
    }

    #[test]
    fn magnitude_squared_ignores_sign() {
        assert_eq!(Complex::new(3.0, 4.0).magnitude_squared(), 25.0);
        assert_eq!(Complex::new(-3.0, 4.0).magnitude_squared(), 25.0);
        assert_eq!(Complex::new(3.0, -4.0).magnitude_squared(), 25.0);
        assert_eq!(Complex::new(-3.0, -4.0).magnitude_squared(), 25.0);
    }

    #[test]
    fn addition_is_componentwise() {
        let sum = Complex::new(1.0, 2.0) + Complex::new(-3.0, 0.5);

        assert_eq!(sum, Complex::new(-2.0, 2.5));
    }

    #[test]
    fn multiplication_follows_i_squared_is_minus_one() {
        // (1 + 2i)(3 + 4i) = 3 + 4i + 6i - 8 = -5 + 10i
        let product = Complex::new(1.0, 2.0) * Complex::new(3.0, 4.0);

        assert_eq!(product, Complex::new(-5.0, 10.0));
    }

    #[test]
    fn squaring_expands_to_the_quadratic_map_form() {
        // (a + bi)^2 = a^2 - b^2 + 2abi
        let z = Complex::new(2.0, 3.0);
        let squared = z * z;

        assert_eq!(squared.real, 2.0 * 2.0 - 3.0 * 3.0);
        assert_eq!(squared.imag, 2.0 * 2.0 * 3.0);
    }

    #[test]
    fn multiplying_by_zero_yields_zero() {
        assert_eq!(Complex::new(5.0, -3.0) * Complex::ZERO, Complex::ZERO);
    }
}
