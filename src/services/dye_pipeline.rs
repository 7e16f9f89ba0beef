use std::path::Path;

use dye_engine::{
    resolve_dyes, ArgbImage, DescriptorError, Dye, DyeError, RecolorCache, ResolvedDye,
};

use crate::error::{CodecError, ConfigError};
use crate::models::AppConfig;
use crate::rendering::{read_png, write_png};

/// Where the second palette string for an `apply` comes from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DyeSource {
    /// A literal channel-map descriptor
    Descriptor(String),
    /// A named preset from the configuration
    Preset(String),
    /// Only the image's own channel spec
    #[default]
    None,
}

/// Summary of a completed `apply`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyReport {
    /// Image path with any channel spec removed
    pub name: String,
    /// The dye that was applied
    pub dye: Dye,
    /// Output dimensions after scaling
    pub width: usize,
    pub height: usize,
}

/// Error from the dye pipeline
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Dye error: {0}")]
    Dye(#[from] DyeError),

    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl From<DescriptorError> for PipelineError {
    fn from(e: DescriptorError) -> Self {
        PipelineError::Dye(e.into())
    }
}

/// Pipeline that orchestrates resolve → decode → recolor → encode
pub struct DyePipeline {
    config: AppConfig,
}

impl DyePipeline {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Split `image_spec` into a file name and a dye, using `source` as the
    /// palette string for its queued channels
    pub fn resolve(&self, image_spec: &str, source: &DyeSource) -> Result<ResolvedDye, PipelineError> {
        let palette_string = match source {
            DyeSource::Descriptor(desc) => desc.as_str(),
            DyeSource::Preset(name) => self.config.preset(name)?,
            DyeSource::None => "",
        };
        Ok(resolve_dyes(image_spec, palette_string)?)
    }

    /// Recolor `source` with `dye`, then upscale by `scale`
    pub fn recolor(&self, source: ArgbImage, dye: Dye, scale: usize) -> Result<ArgbImage, PipelineError> {
        let mut cache = RecolorCache::with_dye(dye, source);
        let output = cache
            .output()
            .scale_nearest(scale)
            .map_err(DyeError::from)?;
        Ok(output)
    }

    /// Recolor the PNG named by `image_spec` and write the result to `output`
    pub fn apply_file(
        &self,
        image_spec: &str,
        source: &DyeSource,
        output: &Path,
        scale: usize,
    ) -> Result<ApplyReport, PipelineError> {
        let ResolvedDye { name, dye } = self.resolve(image_spec, source)?;
        tracing::info!(image = %name, channels = dye.palettes().len(), "Applying dye");

        let image = read_png(Path::new(&name))?;
        let recolored = self.recolor(image, dye.clone(), scale)?;
        write_png(output, &recolored, self.config.compression)?;

        Ok(ApplyReport {
            name,
            dye,
            width: recolored.width(),
            height: recolored.height(),
        })
    }
}
