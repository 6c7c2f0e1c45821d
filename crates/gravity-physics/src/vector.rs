//! 2D vector type used by the whole simulation
//!
//! All physics runs in double precision. `DVec2` already provides the
//! arithmetic the integrator needs (add, subtract, scale, divide, negate,
//! `length`, `normalize`) with value semantics and in-place `+=`, `-=`,
//! `*=`, `/=`.
//!
//! `normalize` on a zero vector yields NaN components rather than panicking;
//! callers that can meet a zero separation must check for it first.

/// Double precision 2D vector
pub type Vector2 = glam::DVec2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_and_normalize() {
        let v = Vector2::new(3.0, 4.0);
        assert_eq!(v.length(), 5.0);

        let n = v.normalize();
        assert!((n.x - 0.6).abs() < 1e-12);
        assert!((n.y - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_operators_produce_new_values() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(0.5, -1.0);

        assert_eq!(a + b, Vector2::new(1.5, 1.0));
        assert_eq!(a - b, Vector2::new(0.5, 3.0));
        assert_eq!(a * 2.0, Vector2::new(2.0, 4.0));
        assert_eq!(a / 2.0, Vector2::new(0.5, 1.0));
        assert_eq!(-a, Vector2::new(-1.0, -2.0));
        // Operands untouched
        assert_eq!(a, Vector2::new(1.0, 2.0));
    }

    #[test]
    fn test_in_place_operators() {
        let mut v = Vector2::new(1.0, 1.0);
        v += Vector2::new(1.0, 2.0);
        v -= Vector2::new(0.5, 0.5);
        v *= 2.0;
        assert_eq!(v, Vector2::new(3.0, 5.0));
    }

    #[test]
    fn test_normalize_zero_is_nan() {
        let n = Vector2::ZERO.normalize();
        assert!(n.x.is_nan() && n.y.is_nan());
    }
}
