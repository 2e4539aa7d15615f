pub mod builder;
pub mod datasets;
pub mod engine;
pub mod error;
pub mod mesh;

pub use datasets::DATASETS;
pub use engine::{ChartEngine, ChartResult};
