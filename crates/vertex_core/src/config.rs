use std::path::Path;

use serde::Deserialize;
use tracing::{debug, instrument};

use vertex_base::{ErrorKind, ResultExt, VertexError, VertexResult};

use crate::vector::Vector2D;

/// Starting values for the scaling demo.
///
/// Both keys are optional in TOML:
///
/// ```toml
/// factor = 5.0
///
/// [vector]
/// x = 3.0
/// y = 4.0
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Vector that gets scaled.
    pub vector: Vector2D,
    /// Factor applied by the scaling step.
    pub factor: f64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            vector: Vector2D::new(3.0, 4.0),
            factor: 5.0,
        }
    }
}

impl DemoConfig {
    /// Rejects non-finite components and factors.
    pub fn validate(&self) -> VertexResult<()> {
        let fields = [
            ("vector.x", self.vector.x),
            ("vector.y", self.vector.y),
            ("factor", self.factor),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(Box::new(VertexError::invalid_value(field, value)));
            }
        }
        Ok(())
    }
}

/// Parse and validate a demo configuration from TOML text.
#[instrument(skip(text), fields(length = text.len()))]
pub fn parse_config(text: &str) -> VertexResult<DemoConfig> {
    let config: DemoConfig = toml::from_str(text).map_err(|err| {
        Box::new(VertexError::message(err.to_string()).context("invalid TOML"))
    })?;
    config.validate()?;
    debug!(x = config.vector.x, y = config.vector.y, factor = config.factor, "parsed demo config");
    Ok(config)
}

/// Read and parse a demo configuration file.
#[instrument]
pub fn load_config(path: &Path) -> VertexResult<DemoConfig> {
    let text = std::fs::read_to_string(path).map_err(|source| {
        Box::new(VertexError::new(ErrorKind::FileError {
            path: path.to_path_buf(),
            source,
        }))
    })?;
    parse_config(&text).with_context(|| format!("failed to load {}", path.display()))
}
