use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::info;

use mesh_builder::{build_mesh, BuildError, WallGrid};
use polar_sampler::{resample_polar, sample_occupancy, SampleError};
use shade_types::{BinaryField, GeometryParams, Mesh, SamplerConfig};
use stl_format::{write_ascii, write_binary, StlArtifact, StlError};

use crate::messages::{MeshStats, StlFormat};

/// The engine state owned by the web worker.
///
/// Regeneration is single-flight: each run bumps `generation` and replaces
/// the stored result wholesale. Earlier results are discarded, never
/// merged, and responses carry the generation so the UI can drop stale
/// messages.
pub struct EngineState {
    /// Occupancy field of the loaded silhouette, if any.
    pub field: Option<BinaryField>,
    /// Current sampling configuration.
    pub sampler: SamplerConfig,
    /// Current lampshade geometry.
    pub geometry: GeometryParams,
    generation: u64,
    latest: Option<Generated>,
}

/// A completed pipeline run.
struct Generated {
    generation: u64,
    mesh: Mesh,
    stats: MeshStats,
}

impl EngineState {
    pub fn new() -> Self {
        Self {
            field: None,
            sampler: SamplerConfig::default(),
            geometry: GeometryParams::default(),
            generation: 0,
            latest: None,
        }
    }

    /// Decode and occupancy-sample a base64 RGBA image.
    pub fn set_image(
        &mut self,
        width: usize,
        height: usize,
        pixels_base64: &str,
    ) -> Result<(), BridgeError> {
        let pixels = STANDARD
            .decode(pixels_base64)
            .map_err(|e| BridgeError::BadImageData {
                detail: e.to_string(),
            })?;
        self.field = Some(sample_occupancy(
            &pixels,
            width,
            height,
            self.sampler.threshold,
        )?);
        Ok(())
    }

    /// Run the full pipeline: field → polar mask → mesh.
    ///
    /// The previous result is superseded whole; nothing of it survives.
    pub fn regenerate(&mut self) -> Result<(u64, MeshStats), BridgeError> {
        let field = self.field.as_ref().ok_or(BridgeError::NoImage)?;
        let mask = resample_polar(field, &self.sampler)?;
        let solid_cells = WallGrid::new(&mask, &self.geometry).solid_count();
        let mesh = build_mesh(&mask, &self.geometry)?;

        let stats = MeshStats {
            triangle_count: mesh.triangle_count(),
            mask_columns: mask.columns,
            mask_rows: mask.rows,
            solid_cells,
        };
        self.generation += 1;
        self.latest = Some(Generated {
            generation: self.generation,
            mesh,
            stats: stats.clone(),
        });
        info!(
            generation = self.generation,
            triangles = stats.triangle_count,
            "mesh regenerated"
        );
        Ok((self.generation, stats))
    }

    /// Serialize the latest mesh into a downloadable artifact.
    pub fn export(&self, format: StlFormat, name: &str) -> Result<StlArtifact, BridgeError> {
        let latest = self.latest.as_ref().ok_or(BridgeError::NoMesh)?;
        let data = match format {
            StlFormat::Binary => write_binary(&latest.mesh, name)?,
            StlFormat::Ascii => write_ascii(&latest.mesh, name)?.into_bytes(),
        };
        info!(bytes = data.len(), ?format, "STL export ready");
        Ok(StlArtifact::new(name, data))
    }

    /// Generation number of the result currently held, if any.
    pub fn latest_generation(&self) -> Option<u64> {
        self.latest.as_ref().map(|g| g.generation)
    }

    /// The latest mesh, if a generation has completed.
    pub fn mesh(&self) -> Option<&Mesh> {
        self.latest.as_ref().map(|g| &g.mesh)
    }

    pub fn stats(&self) -> Option<&MeshStats> {
        self.latest.as_ref().map(|g| &g.stats)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors from the bridge layer.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BridgeError {
    #[error("no image loaded; load a silhouette before generating")]
    NoImage,

    #[error("no mesh generated yet; generate before exporting")]
    NoMesh,

    #[error("image data is not valid base64: {detail}")]
    BadImageData { detail: String },

    #[error("sampling failed: {0}")]
    Sample(#[from] SampleError),

    #[error("mesh construction failed: {0}")]
    Build(#[from] BuildError),

    #[error("STL serialization failed: {0}")]
    Stl(#[from] StlError),
}
