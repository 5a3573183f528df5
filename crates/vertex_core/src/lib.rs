pub mod config;
pub mod demo;
pub mod scalar;
pub mod shared;
pub mod vector;

pub use config::{DemoConfig, load_config, parse_config};
pub use demo::{IndirectionReport, ScalingReport, run_indirection, run_scaling};
pub use scalar::Scalar;
pub use shared::VectorHandle;
pub use vector::{Vector2D, magnitude_of, scale_external};
