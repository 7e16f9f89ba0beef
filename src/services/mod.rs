pub mod dye_pipeline;

pub use dye_pipeline::{ApplyReport, DyePipeline, DyeSource, PipelineError};
