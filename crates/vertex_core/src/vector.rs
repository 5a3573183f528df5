/* 📖 # How do vector operations choose between copies and references?

Every operation declares exactly one way of receiving its vector:

- `magnitude` borrows (`&self`) and `magnitude_of` takes a copy. Both only read
  the fields, so they always agree.
- `scale` and `scale_external` need `&mut` access to the caller's storage, so the
  mutation is still visible after the call returns.
- `scaled` consumes a copy and hands back a new vector. The caller's original is
  left as it was.

Callers pass exactly what the signature asks for. No access mode is converted
into another behind the scenes.
*/

use std::fmt;

use serde::Deserialize;

/// A two dimensional vector with `f64` components.
///
/// # Examples
///
/// ```
/// use vertex_core::Vector2D;
///
/// let mut v = Vector2D::new(3.0, 4.0);
/// assert_eq!(v.magnitude(), 5.0);
///
/// v.scale(5.0);
/// assert_eq!(v, Vector2D::new(15.0, 20.0));
/// assert_eq!(v.to_string(), "{X:15 Y:20}");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean norm, `sqrt(x*x + y*y)`.
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Multiplies both components by `factor` in place.
    pub fn scale(&mut self, factor: f64) {
        self.x *= factor;
        self.y *= factor;
    }

    /// Returns a scaled copy; `self` is received by value so the caller's vector is untouched.
    pub fn scaled(mut self, factor: f64) -> Self {
        self.scale(factor);
        self
    }
}

/// Free-function form of [`Vector2D::scale`] taking an explicit mutable reference.
pub fn scale_external(vector: &mut Vector2D, factor: f64) {
    vector.x *= factor;
    vector.y *= factor;
}

/// Free-function form of [`Vector2D::magnitude`] operating on a copy.
pub fn magnitude_of(vector: Vector2D) -> f64 {
    (vector.x * vector.x + vector.y * vector.y).sqrt()
}

/// Renders `{X:3 Y:4}`.
///
/// Components use `f64`'s `Display`, which never switches to exponent notation:
/// `1e22` prints as `10000000000000000000000` and `1e-5` as `0.00001`.
impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{X:{} Y:{}}}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [f64; 7] = [0.0, 1.0, -2.5, 3.0, 4.0, 1e-3, 12345.678];

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = 1e-9 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_magnitude_of_three_four() {
        let v = Vector2D::new(3.0, 4.0);
        assert_eq!(v.magnitude(), 5.0);
    }

    #[test]
    fn test_magnitude_matches_formula() {
        for x in SAMPLES {
            for y in SAMPLES {
                let v = Vector2D::new(x, y);
                assert_eq!(v.magnitude(), (x * x + y * y).sqrt());
            }
        }
    }

    #[test]
    fn test_magnitude_by_copy_matches_borrow() {
        for x in SAMPLES {
            for y in SAMPLES {
                let v = Vector2D::new(x, y);
                assert_eq!(magnitude_of(v), v.magnitude());
            }
        }
    }

    #[test]
    fn test_scale_multiplies_components() {
        for f in SAMPLES {
            let mut v = Vector2D::new(3.0, -4.0);
            v.scale(f);
            assert_eq!(v, Vector2D::new(3.0 * f, -4.0 * f));
        }
    }

    #[test]
    fn test_scale_three_four_by_five() {
        let mut v = Vector2D::new(3.0, 4.0);
        v.scale(5.0);
        assert_eq!(v, Vector2D::new(15.0, 20.0));
        assert_eq!(v.magnitude(), 25.0);
    }

    #[test]
    fn test_scale_is_linear_in_magnitude() {
        for f in SAMPLES.iter().map(|f| -f).chain(SAMPLES) {
            let v = Vector2D::new(-2.5, 12345.678);
            assert_close(v.scaled(f).magnitude(), f.abs() * v.magnitude());
        }
    }

    #[test]
    fn test_scale_by_one_is_identity() {
        for x in SAMPLES {
            for y in SAMPLES {
                let mut v = Vector2D::new(x, y);
                v.scale(1.0);
                assert_eq!(v, Vector2D::new(x, y));
            }
        }
    }

    #[test]
    fn test_scale_composes() {
        for a in SAMPLES {
            for b in SAMPLES {
                let mut twice = Vector2D::new(3.0, 4.0);
                twice.scale(a);
                twice.scale(b);
                let once = Vector2D::new(3.0, 4.0).scaled(a * b);
                assert_close(twice.x, once.x);
                assert_close(twice.y, once.y);
            }
        }
    }

    #[test]
    fn test_scale_external_matches_method() {
        let mut by_method = Vector2D::new(1.5, -7.0);
        let mut by_function = by_method;
        by_method.scale(2.5);
        scale_external(&mut by_function, 2.5);
        assert_eq!(by_method, by_function);
    }

    #[test]
    fn test_method_then_external_scale() {
        let mut v = Vector2D::new(4.0, 3.0);
        v.scale(3.0);
        assert_eq!(v, Vector2D::new(12.0, 9.0));
        scale_external(&mut v, 8.0);
        assert_eq!(v, Vector2D::new(96.0, 72.0));
    }

    #[test]
    fn test_mutation_through_reference_is_visible() {
        let mut v = Vector2D::new(3.0, 4.0);
        {
            let r = &mut v;
            r.scale(2.0);
            scale_external(r, 10.0);
        }
        assert_eq!(v, Vector2D::new(60.0, 80.0));
    }

    #[test]
    fn test_mutating_a_copy_leaves_original() {
        let original = Vector2D::new(3.0, 4.0);
        let mut copy = original;
        copy.scale(5.0);
        assert_eq!(copy, Vector2D::new(15.0, 20.0));
        assert_eq!(original, Vector2D::new(3.0, 4.0));
    }

    #[test]
    fn test_scaled_leaves_original() {
        let original = Vector2D::new(3.0, 4.0);
        let result = original.scaled(5.0);
        assert_eq!(result, Vector2D::new(15.0, 20.0));
        assert_eq!(original, Vector2D::new(3.0, 4.0));
    }

    #[test]
    fn test_display_format() {
        assert_eq!(Vector2D::new(3.0, 4.0).to_string(), "{X:3 Y:4}");
        assert_eq!(Vector2D::new(1.5, -0.25).to_string(), "{X:1.5 Y:-0.25}");
    }

    #[test]
    fn test_display_extreme_magnitudes_stay_positional() {
        let mut v = Vector2D::new(1e20, 0.0);
        v.scale(100.0);
        assert_eq!(v.to_string(), "{X:10000000000000000000000 Y:0}");
        assert_eq!(Vector2D::new(0.0, 1e-5).to_string(), "{X:0 Y:0.00001}");
    }
}
