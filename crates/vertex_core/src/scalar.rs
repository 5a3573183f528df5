/// A named floating point type with its own methods.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Scalar(f64);

impl Scalar {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Absolute value; negative inputs are negated, everything else passes through.
    pub fn abs(self) -> f64 {
        if self.0 < 0.0 { -self.0 } else { self.0 }
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self(value)
    }
}
