use tracing::{debug, instrument};

use crate::config::DemoConfig;
use crate::shared::VectorHandle;
use crate::vector::{Vector2D, scale_external};

/// State of the vector before and after one in-place scaling step.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalingReport {
    pub before: Vector2D,
    pub before_magnitude: f64,
    pub after: Vector2D,
    pub after_magnitude: f64,
}

impl ScalingReport {
    /// Output lines, e.g. `Before scaling: {X:3 Y:4}, Abs: 5`.
    pub fn lines(&self) -> [String; 2] {
        [
            format!(
                "Before scaling: {}, Abs: {}",
                self.before, self.before_magnitude
            ),
            format!(
                "After scaling: {}, Abs: {}",
                self.after, self.after_magnitude
            ),
        ]
    }
}

/// Scale the configured vector in place and record what the caller observes.
#[instrument(skip(config), fields(factor = config.factor))]
pub fn run_scaling(config: &DemoConfig) -> ScalingReport {
    let mut vector = config.vector;
    let before = vector;
    let before_magnitude = vector.magnitude();
    debug!(x = vector.x, y = vector.y, "scaling vector");

    vector.scale(config.factor);

    debug!(x = vector.x, y = vector.y, "vector scaled");
    ScalingReport {
        before,
        before_magnitude,
        after: vector,
        after_magnitude: vector.magnitude(),
    }
}

/// Results of mixing method and free-function scaling on an owned and a shared vector.
#[derive(Debug, Clone, PartialEq)]
pub struct IndirectionReport {
    pub owned: Vector2D,
    pub shared: Vector2D,
}

impl IndirectionReport {
    pub fn line(&self) -> String {
        format!("{} {}", self.owned, self.shared)
    }
}

/// `{3,4}` scaled by 2 then externally by 10, and a shared `{4,3}` scaled by 3 then externally by 8.
#[instrument]
pub fn run_indirection() -> IndirectionReport {
    let mut owned = Vector2D::new(3.0, 4.0);
    owned.scale(2.0);
    scale_external(&mut owned, 10.0);

    let shared = VectorHandle::new(Vector2D::new(4.0, 3.0));
    shared.scale(3.0);
    shared.update(|vector| scale_external(vector, 8.0));

    let report = IndirectionReport {
        owned,
        shared: shared.snapshot(),
    };
    debug!(owned = %report.owned, shared = %report.shared, "indirection complete");
    report
}
