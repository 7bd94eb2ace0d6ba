pub mod config;
pub mod error;
pub mod ingestion;
pub mod output;
pub mod pipeline;
pub mod placement;
pub mod transform;
pub mod types;

pub use config::{PipelineConfig, PlannerConfig, ScaleConfig};
pub use error::{HouseLightsError, Result};
pub use pipeline::{Pipeline, light_house};
