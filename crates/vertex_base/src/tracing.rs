use crate::error::{VertexError, VertexResult};
pub use tracing::instrument;
pub use tracing::{debug, error, info, trace, warn};
use tracing_error::ErrorLayer;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

/// Default filter when `RUST_LOG` is unset; stdout carries the demo output, logs go to stderr.
const DEFAULT_FILTER: &str = "warn";

pub fn init_tracing() -> VertexResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .with(ErrorLayer::default())
        .try_init()
        .map_err(|err| Box::new(VertexError::message(format!("failed to initialize tracing: {}", err))))
}
